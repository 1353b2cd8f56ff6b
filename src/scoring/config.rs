use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::factors::DEFAULT_SATURATION;
use super::level::ProficiencyLevel;

/// Bumped whenever a default constant below changes, so datasets built with
/// different formulas can be told apart.
pub const FORMULA_VERSION: u32 = 1;

/// Meaning distance per level. Lower levels are clearer concepts.
pub const DEFAULT_LEVEL_DISTANCES: [(ProficiencyLevel, f64); 6] = [
    (ProficiencyLevel::A1, 0.15),
    (ProficiencyLevel::A2, 0.20),
    (ProficiencyLevel::B1, 0.30),
    (ProficiencyLevel::B2, 0.40),
    (ProficiencyLevel::C1, 0.55),
    (ProficiencyLevel::C2, 0.65),
];
/// Meaning distance for level tags outside A1..C2.
pub const UNKNOWN_LEVEL_DISTANCE: f64 = 0.30;
pub const MULTI_SENSE_THRESHOLD: usize = 2;
pub const MULTI_SENSE_PENALTY: f64 = 0.10;

/// Estimated strokes per non-ASCII script unit.
pub const DEFAULT_STROKE_WEIGHT: f64 = 8.0;

pub const SYLLABLE_LETTERS: usize = 3;
pub const SYLLABLE_STEP: f64 = 0.15;
pub const SYLLABLE_BASE: f64 = 0.5;

pub const DEFAULT_WEIGHTS: Weights = Weights {
    meaning: 0.4,
    visual: 0.3,
    pronunciation: 0.3,
};

/// Scoring configuration.
///
/// Every section is optional; anything left out falls back to the canonical
/// constants of [`FORMULA_VERSION`].
///
/// Example YAML:
/// ```yaml
/// scoring:
///   meaning:
///     levels: { A1: 0.15, C2: 0.65 }
///     unknown_level: 0.3
///   visual:
///     stroke_weight: 8
///   pronunciation:
///     model: step
///     buckets:
///       - { range: "<=5", distance: 0.75 }
///       - { range: "6-8", distance: 0.85 }
///       - { range: ">8", distance: 0.92 }
///   weights: { meaning: 0.4, visual: 0.3, pronunciation: 0.3 }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    #[serde(default)]
    pub meaning: Option<MeaningConfig>,

    #[serde(default)]
    pub visual: Option<VisualConfig>,

    #[serde(default)]
    pub pronunciation: Option<PronunciationConfig>,

    #[serde(default)]
    pub weights: Option<Weights>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            meaning: Some(MeaningConfig::default()),
            visual: Some(VisualConfig::default()),
            pronunciation: Some(PronunciationConfig::default()),
            weights: Some(DEFAULT_WEIGHTS),
        }
    }
}

/// Meaning distance: level lookup plus a penalty for multi-sense words.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MeaningConfig {
    /// Per-level base distance keyed by level tag ("A1".."C2").
    /// Levels left out keep their default.
    #[serde(default)]
    pub levels: Option<BTreeMap<String, f64>>,

    /// Distance for levels outside the table (default: 0.30)
    #[serde(default)]
    pub unknown_level: Option<f64>,

    /// Penalty applies when translation count exceeds this (default: 2)
    #[serde(default)]
    pub multi_sense_threshold: Option<usize>,

    /// Added for multi-sense words (default: 0.10)
    #[serde(default)]
    pub multi_sense_penalty: Option<f64>,
}

impl Default for MeaningConfig {
    fn default() -> Self {
        Self {
            levels: Some(
                DEFAULT_LEVEL_DISTANCES
                    .iter()
                    .map(|(level, distance)| (level.to_string(), *distance))
                    .collect(),
            ),
            unknown_level: Some(UNKNOWN_LEVEL_DISTANCE),
            multi_sense_threshold: Some(MULTI_SENSE_THRESHOLD),
            multi_sense_penalty: Some(MULTI_SENSE_PENALTY),
        }
    }
}

/// Visual distance: headword length against estimated strokes of the primary translation.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct VisualConfig {
    /// Strokes per non-ASCII character (default: 8)
    #[serde(default)]
    pub stroke_weight: Option<f64>,

    /// Divisor inside the exponential (default: 10)
    #[serde(default)]
    pub saturation: Option<f64>,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            stroke_weight: Some(DEFAULT_STROKE_WEIGHT),
            saturation: Some(DEFAULT_SATURATION),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PronunciationModel {
    /// Letter-count buckets, first match wins.
    #[default]
    Step,
    /// `min(1, max(1, letters / syllable_letters) * syllable_step + syllable_base)`
    Syllable,
}

impl fmt::Display for PronunciationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PronunciationModel::Step => f.write_str("step"),
            PronunciationModel::Syllable => f.write_str("syllable"),
        }
    }
}

/// Pronunciation distance. Exactly one model is active per configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PronunciationConfig {
    #[serde(default)]
    pub model: Option<PronunciationModel>,

    /// Buckets for the step model. Must be monotone and cover every length.
    #[serde(default)]
    pub buckets: Option<Vec<PronunciationBucket>>,

    #[serde(default)]
    pub syllable_letters: Option<usize>,

    #[serde(default)]
    pub syllable_step: Option<f64>,

    #[serde(default)]
    pub syllable_base: Option<f64>,
}

impl Default for PronunciationConfig {
    fn default() -> Self {
        Self {
            model: Some(PronunciationModel::Step),
            buckets: Some(default_buckets()),
            syllable_letters: Some(SYLLABLE_LETTERS),
            syllable_step: Some(SYLLABLE_STEP),
            syllable_base: Some(SYLLABLE_BASE),
        }
    }
}

/// Maps a letter-count range to a pronunciation distance.
/// Range format: "<N", "<=N", ">N", ">=N", "N-M" (inclusive), "N"
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PronunciationBucket {
    pub range: String,
    pub distance: f64,
}

pub fn default_buckets() -> Vec<PronunciationBucket> {
    vec![
        PronunciationBucket {
            range: "<=5".to_string(),
            distance: 0.75,
        },
        PronunciationBucket {
            range: "6-8".to_string(),
            distance: 0.85,
        },
        PronunciationBucket {
            range: ">8".to_string(),
            distance: 0.92,
        },
    ]
}

/// Aggregation weights. Must sum to 1.0.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Weights {
    pub meaning: f64,
    pub visual: f64,
    pub pronunciation: f64,
}

impl Default for Weights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.meaning + self.visual + self.pronunciation
    }
}
