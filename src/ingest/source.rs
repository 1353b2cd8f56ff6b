use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::scoring::ProficiencyLevel;

/// Word list a headword came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WordSource {
    Oxford3000,
    /// Academic Word List
    Awl,
    Gre357,
    Custom(String),
}

impl WordSource {
    pub fn name(&self) -> &str {
        match self {
            WordSource::Oxford3000 => "oxford_3000",
            WordSource::Awl => "awl",
            WordSource::Gre357 => "gre_357",
            WordSource::Custom(name) => name,
        }
    }

    /// Level heuristic for words the lexicon does not tag.
    ///
    /// Oxford 3000 spans A1-B2 and is split by word length; AWL is academic
    /// (B2); GRE is advanced (C1).
    pub fn estimate_level(&self, word: &str) -> ProficiencyLevel {
        match self {
            WordSource::Oxford3000 => match word.chars().count() {
                0..=4 => ProficiencyLevel::A1,
                5..=6 => ProficiencyLevel::A2,
                7..=8 => ProficiencyLevel::B1,
                _ => ProficiencyLevel::B2,
            },
            WordSource::Awl => ProficiencyLevel::B2,
            WordSource::Gre357 => ProficiencyLevel::C1,
            WordSource::Custom(_) => ProficiencyLevel::B1,
        }
    }
}

impl FromStr for WordSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("source name is empty".to_string());
        }
        Ok(match s.to_ascii_lowercase().as_str() {
            "oxford_3000" | "oxford3000" | "oxford" => WordSource::Oxford3000,
            "awl" => WordSource::Awl,
            "gre_357" | "gre357" | "gre" => WordSource::Gre357,
            _ => WordSource::Custom(s.to_string()),
        })
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for WordSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sources() {
        assert_eq!("oxford_3000".parse::<WordSource>(), Ok(WordSource::Oxford3000));
        assert_eq!("AWL".parse::<WordSource>(), Ok(WordSource::Awl));
        assert_eq!("gre".parse::<WordSource>(), Ok(WordSource::Gre357));
        assert_eq!(
            "travel".parse::<WordSource>(),
            Ok(WordSource::Custom("travel".to_string()))
        );
        assert!("  ".parse::<WordSource>().is_err());
    }

    #[test]
    fn test_oxford_level_by_length() {
        let source = WordSource::Oxford3000;
        assert_eq!(source.estimate_level("ask"), ProficiencyLevel::A1);
        assert_eq!(source.estimate_level("able"), ProficiencyLevel::A1);
        assert_eq!(source.estimate_level("abroad"), ProficiencyLevel::A2);
        assert_eq!(source.estimate_level("absolute"), ProficiencyLevel::B1);
        assert_eq!(source.estimate_level("advantage"), ProficiencyLevel::B2);
    }

    #[test]
    fn test_fixed_levels() {
        assert_eq!(WordSource::Awl.estimate_level("a"), ProficiencyLevel::B2);
        assert_eq!(WordSource::Gre357.estimate_level("abate"), ProficiencyLevel::C1);
        assert_eq!(
            WordSource::Custom("x".into()).estimate_level("abate"),
            ProficiencyLevel::B1
        );
    }

    #[test]
    fn test_serializes_as_name() {
        assert_eq!(
            serde_json::to_string(&WordSource::Gre357).unwrap(),
            "\"gre_357\""
        );
    }
}
