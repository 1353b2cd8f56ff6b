use serde::{Serialize, Serializer};
use std::fmt;

/// Suffix patterns checked in order; the first matching group wins.
const SUFFIX_PATTERNS: [(PartOfSpeech, &[&str]); 4] = [
    (
        PartOfSpeech::Adjective,
        &["ful", "less", "ous", "ive", "able", "ible", "al", "ic", "ical"],
    ),
    (PartOfSpeech::Adverb, &["ly"]),
    (
        PartOfSpeech::Noun,
        &["tion", "sion", "ment", "ness", "ity", "er", "or", "ist", "ism"],
    ),
    (PartOfSpeech::Verb, &["ate", "ify", "ize", "ise", "en"]),
];

/// Part of speech of a headword, as tagged by the lexicon or guessed from its
/// suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    /// Any other lexicon tag, kept verbatim (e.g. "prep./adv.").
    Other(String),
}

/// Fallback text for words the lexicon knows nothing about. `{word}` is
/// replaced with the headword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub definition: &'static str,
    pub example: &'static str,
}

impl Template {
    pub fn definition_for(&self, word: &str) -> String {
        self.definition.replace("{word}", word)
    }

    pub fn example_for(&self, word: &str) -> String {
        self.example.replace("{word}", word)
    }
}

impl PartOfSpeech {
    /// Guess from suffix patterns. Words matching nothing are treated as nouns.
    pub fn detect(word: &str) -> Self {
        let word = word.to_lowercase();
        SUFFIX_PATTERNS
            .iter()
            .find(|(_, suffixes)| suffixes.iter().any(|suffix| word.ends_with(suffix)))
            .map(|(pos, _)| pos.clone())
            .unwrap_or(PartOfSpeech::Noun)
    }

    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "n." | "n" | "noun" => PartOfSpeech::Noun,
            "v." | "v" | "verb" => PartOfSpeech::Verb,
            "adj." | "adj" | "adjective" => PartOfSpeech::Adjective,
            "adv." | "adv" | "adverb" => PartOfSpeech::Adverb,
            other => PartOfSpeech::Other(other.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            PartOfSpeech::Noun => "n.",
            PartOfSpeech::Verb => "v.",
            PartOfSpeech::Adjective => "adj.",
            PartOfSpeech::Adverb => "adv.",
            PartOfSpeech::Other(tag) => tag,
        }
    }

    pub fn template(&self) -> Template {
        match self {
            PartOfSpeech::Noun => Template {
                definition: "A thing or concept related to {word}",
                example: "The {word} is important",
            },
            PartOfSpeech::Verb => Template {
                definition: "To perform an action related to {word}",
                example: "We need to {word} this",
            },
            PartOfSpeech::Adjective => Template {
                definition: "Having the quality of being {word}",
                example: "It is very {word}",
            },
            PartOfSpeech::Adverb => Template {
                definition: "In a manner that is {word}",
                example: "He did it {word}",
            },
            PartOfSpeech::Other(_) => Template {
                definition: "Related to {word}",
                example: "This involves {word}",
            },
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Serialize for PartOfSpeech {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}
