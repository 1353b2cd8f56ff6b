use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info, warn};

use super::lexicon::Lexicon;
use super::pos::PartOfSpeech;
use super::source::WordSource;
use crate::scoring::{Difficulty, DistanceProfile, RecordError, ScoringEngine, WordRecord};

/// One row of the finished dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyEntry {
    pub english: String,
    pub part_of_speech: PartOfSpeech,
    /// Target-language translations, primary first
    pub chinese: Vec<String>,
    pub definition: String,
    pub example: String,
    pub level: String,
    #[serde(flatten)]
    pub profile: DistanceProfile,
    pub difficulty_label: String,
    pub source: WordSource,
}

impl VocabularyEntry {
    pub fn difficulty(&self) -> Difficulty {
        self.profile.difficulty
    }
}

/// A word that could not be scored, and why.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub word: String,
    pub source: WordSource,
    pub error: RecordError,
}

#[derive(Debug, Default)]
pub struct BuildReport {
    pub entries: Vec<VocabularyEntry>,
    pub rejected: Vec<Rejection>,
    /// Words skipped because an earlier list already produced them
    pub duplicates: usize,
}

impl BuildReport {
    pub fn count(&self, difficulty: Difficulty) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.difficulty() == difficulty)
            .count()
    }
}

/// Turns headwords into scored dataset entries.
///
/// The lexicon and engine are injected, so the builder owns no state of its
/// own and the same inputs always produce the same dataset.
pub struct DatasetBuilder<'a> {
    engine: &'a ScoringEngine,
    lexicon: &'a Lexicon,
    placeholder: bool,
}

impl<'a> DatasetBuilder<'a> {
    pub fn new(engine: &'a ScoringEngine, lexicon: &'a Lexicon) -> Self {
        Self {
            engine,
            lexicon,
            placeholder: false,
        }
    }

    /// Use the headword itself as translation for words missing from the
    /// lexicon instead of rejecting them.
    pub fn with_placeholder(mut self, placeholder: bool) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Assemble and score one entry.
    ///
    /// Fails with an InvalidRecord error when the word is empty or has no
    /// translations.
    pub fn build_entry(&self, word: &str, source: &WordSource) -> Result<VocabularyEntry, RecordError> {
        let word = word.trim().to_lowercase();
        let curated = self.lexicon.get(&word);

        let translations = match curated {
            Some(entry) => entry.translations.clone(),
            None if self.placeholder && !word.is_empty() => vec![word.clone()],
            None => Vec::new(),
        };

        let part_of_speech = curated
            .and_then(|entry| entry.part_of_speech.as_deref())
            .map(PartOfSpeech::from_tag)
            .unwrap_or_else(|| PartOfSpeech::detect(&word));

        let level = curated
            .and_then(|entry| entry.level.clone())
            .unwrap_or_else(|| source.estimate_level(&word).to_string());

        let record = WordRecord::new(&word, translations, &level);
        let profile = self.engine.score(&record)?;

        let template = part_of_speech.template();
        let definition = curated
            .and_then(|entry| entry.definition.clone())
            .unwrap_or_else(|| template.definition_for(&word));
        let example = curated
            .and_then(|entry| entry.example.clone())
            .unwrap_or_else(|| template.example_for(&word));

        Ok(VocabularyEntry {
            english: record.surface_form,
            part_of_speech,
            chinese: record.translations,
            definition,
            example,
            level: record.level,
            difficulty_label: profile.difficulty.label().to_string(),
            profile,
            source: source.clone(),
        })
    }

    /// Build entries for every list in order. Invalid records are collected
    /// as rejections and the batch carries on.
    pub fn build(&self, lists: &[(WordSource, Vec<String>)]) -> BuildReport {
        let mut report = BuildReport::default();
        let mut seen = HashSet::new();

        for (source, words) in lists {
            let before = report.entries.len();
            for word in words {
                if !seen.insert(word.trim().to_lowercase()) {
                    debug!(word = word.as_str(), source = source.name(), "duplicate word skipped");
                    report.duplicates += 1;
                    continue;
                }
                match self.build_entry(word, source) {
                    Ok(entry) => report.entries.push(entry),
                    Err(error) => {
                        warn!(word = word.as_str(), source = source.name(), %error, "rejected record");
                        report.rejected.push(Rejection {
                            word: word.clone(),
                            source: source.clone(),
                            error,
                        });
                    }
                }
            }
            info!(
                source = source.name(),
                words = words.len(),
                entries = report.entries.len() - before,
                "processed word list"
            );
        }

        report
    }
}
