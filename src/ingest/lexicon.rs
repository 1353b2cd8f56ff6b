use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Curated data for one headword.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LexiconEntry {
    /// Lexicon tag such as "n.", "v." or "prep./adv."
    #[serde(default, alias = "pos")]
    pub part_of_speech: Option<String>,
    pub translations: Vec<String>,
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub example: Option<String>,
    /// Overrides the source level heuristic
    #[serde(default)]
    pub level: Option<String>,
}

/// Read-only word -> entry mapping, loaded once at startup and handed to the
/// dataset builder.
///
/// Example YAML:
/// ```yaml
/// ask:
///   part_of_speech: v.
///   translations: [问, 询问]
///   definition: To say a question to someone
///   example: Ask me anything
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lexicon {
    entries: BTreeMap<String, LexiconEntry>,
}

impl Lexicon {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Keys are normalized to lowercase. Two keys that normalize to the same
    /// word (`Ask` and `ask`) are an error.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let raw: BTreeMap<String, LexiconEntry> = serde_saphyr::from_str(content)?;
        let mut entries = BTreeMap::new();
        for (key, entry) in raw {
            let word = key.trim().to_lowercase();
            if entries.contains_key(&word) {
                bail!("Duplicate lexicon entry '{}' (as '{}')", word, key);
            }
            entries.insert(word, entry);
        }
        Ok(Self { entries })
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon at {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse lexicon: invalid YAML in {}", path.display()))
    }

    /// Load and combine several lexicons. Earlier files win on conflicts.
    pub fn from_paths(paths: &[impl AsRef<Path>]) -> Result<Self> {
        paths.iter().try_fold(Self::empty(), |lexicon, path| {
            Ok(lexicon.merge(Self::from_path(path.as_ref())?))
        })
    }

    /// Add entries from `other` for words not already present.
    pub fn merge(mut self, other: Lexicon) -> Self {
        for (word, entry) in other.entries {
            self.entries.entry(word).or_insert(entry);
        }
        self
    }

    pub fn get(&self, word: &str) -> Option<&LexiconEntry> {
        self.entries.get(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
