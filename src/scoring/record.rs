use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Total distance at which a word stops being easy.
pub const MEDIUM_THRESHOLD: f64 = 0.4;
/// Total distance at which a word becomes hard.
pub const HARD_THRESHOLD: f64 = 0.7;

/// Input to the scoring engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordRecord {
    pub surface_form: String,
    /// Target-language translations; the first one is the primary translation.
    pub translations: Vec<String>,
    /// Raw level tag. Tags outside A1..C2 are scored with the unknown-level default.
    pub level: String,
}

impl WordRecord {
    pub fn new(surface_form: &str, translations: Vec<String>, level: &str) -> Self {
        Self {
            surface_form: surface_form.trim().to_lowercase(),
            translations,
            level: level.trim().to_string(),
        }
    }

    pub fn primary_translation(&self) -> Option<&str> {
        self.translations.first().map(String::as_str)
    }

    /// Precondition for scoring. The ingestion boundary turns a failure into a
    /// rejected record.
    pub fn check(&self) -> Result<(), RecordError> {
        if self.surface_form.trim().is_empty() {
            return Err(RecordError::EmptySurfaceForm);
        }
        if self.translations.is_empty() {
            return Err(RecordError::NoTranslations {
                word: self.surface_form.clone(),
            });
        }
        Ok(())
    }
}

/// InvalidRecord: the record violates the scoring precondition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("invalid record: surface form is empty")]
    EmptySurfaceForm,
    #[error("invalid record '{word}': no translations")]
    NoTranslations { word: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Threshold ladder, first match wins. Lower bounds are closed, so 0.4 is
    /// medium and 0.7 is hard.
    pub fn classify(total_distance: f64) -> Self {
        if total_distance < MEDIUM_THRESHOLD {
            Difficulty::Easy
        } else if total_distance < HARD_THRESHOLD {
            Difficulty::Medium
        } else {
            Difficulty::Hard
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Capitalized label for display ("Easy", "Medium", "Hard").
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of the scoring engine. Recompute instead of mutating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceProfile {
    pub meaning_distance: f64,
    pub visual_distance: f64,
    pub pronunciation_distance: f64,
    pub total_distance: f64,
    pub difficulty: Difficulty,
}
