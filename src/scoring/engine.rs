use tracing::debug;

use super::config::{
    default_buckets, PronunciationModel, ScoringConfig, Weights, DEFAULT_LEVEL_DISTANCES,
    DEFAULT_STROKE_WEIGHT, DEFAULT_WEIGHTS, MULTI_SENSE_PENALTY, MULTI_SENSE_THRESHOLD,
    SYLLABLE_BASE, SYLLABLE_LETTERS, SYLLABLE_STEP, UNKNOWN_LEVEL_DISTANCE,
};
use super::factors::{
    clamp_unit, count_script_units, letter_count, round2, syllable_distance,
    visual_distance_from_counts, RangeOp, DEFAULT_SATURATION,
};
use super::level::ProficiencyLevel;
use super::record::{Difficulty, DistanceProfile, RecordError, WordRecord};
use super::validation::validate_scoring;

/// Weighted share of one component in the total distance.
#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    pub label: &'static str, // "Meaning", "Visual", "Pronunciation"
    pub distance: f64,
    pub weight: f64,
    pub weighted: f64,
}

#[derive(Debug, Clone)]
enum Pronunciation {
    Step(Vec<(RangeOp, f64)>),
    Syllable {
        letters_per_syllable: usize,
        step: f64,
        base: f64,
    },
}

/// Resolved scoring constants.
///
/// Built once from a validated [`ScoringConfig`] and never mutated, so a
/// single engine can be shared across any number of threads.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    level_distances: [f64; 6],
    unknown_level_distance: f64,
    multi_sense_threshold: usize,
    multi_sense_penalty: f64,
    stroke_weight: f64,
    saturation: f64,
    pronunciation: Pronunciation,
    weights: Weights,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self {
            level_distances: DEFAULT_LEVEL_DISTANCES.map(|(_, distance)| distance),
            unknown_level_distance: UNKNOWN_LEVEL_DISTANCE,
            multi_sense_threshold: MULTI_SENSE_THRESHOLD,
            multi_sense_penalty: MULTI_SENSE_PENALTY,
            stroke_weight: DEFAULT_STROKE_WEIGHT,
            saturation: DEFAULT_SATURATION,
            pronunciation: Pronunciation::Step(parse_buckets(
                default_buckets().iter().map(|b| (b.range.as_str(), b.distance)),
            )),
            weights: DEFAULT_WEIGHTS,
        }
    }
}

impl ScoringEngine {
    /// Validate `config` and resolve it against the canonical defaults.
    pub fn new(config: &ScoringConfig) -> Result<Self, Vec<String>> {
        validate_scoring(config)?;
        let mut engine = Self::default();

        if let Some(ref meaning) = config.meaning {
            if let Some(ref levels) = meaning.levels {
                for (tag, distance) in levels {
                    if let Ok(level) = tag.parse::<ProficiencyLevel>() {
                        engine.level_distances[level.index()] = *distance;
                    }
                }
            }
            if let Some(unknown) = meaning.unknown_level {
                engine.unknown_level_distance = unknown;
            }
            if let Some(threshold) = meaning.multi_sense_threshold {
                engine.multi_sense_threshold = threshold;
            }
            if let Some(penalty) = meaning.multi_sense_penalty {
                engine.multi_sense_penalty = penalty;
            }
        }

        if let Some(ref visual) = config.visual {
            if let Some(weight) = visual.stroke_weight {
                engine.stroke_weight = weight;
            }
            if let Some(saturation) = visual.saturation {
                engine.saturation = saturation;
            }
        }

        if let Some(ref pronunciation) = config.pronunciation {
            match pronunciation.model.unwrap_or_default() {
                PronunciationModel::Step => {
                    if let Some(ref buckets) = pronunciation.buckets {
                        engine.pronunciation = Pronunciation::Step(parse_buckets(
                            buckets.iter().map(|b| (b.range.as_str(), b.distance)),
                        ));
                    }
                }
                PronunciationModel::Syllable => {
                    engine.pronunciation = Pronunciation::Syllable {
                        letters_per_syllable: pronunciation
                            .syllable_letters
                            .unwrap_or(SYLLABLE_LETTERS),
                        step: pronunciation.syllable_step.unwrap_or(SYLLABLE_STEP),
                        base: pronunciation.syllable_base.unwrap_or(SYLLABLE_BASE),
                    };
                }
            }
        }

        if let Some(weights) = config.weights {
            engine.weights = weights;
        }

        Ok(engine)
    }

    pub fn stroke_weight(&self) -> f64 {
        self.stroke_weight
    }

    pub fn pronunciation_model(&self) -> PronunciationModel {
        match self.pronunciation {
            Pronunciation::Step(_) => PronunciationModel::Step,
            Pronunciation::Syllable { .. } => PronunciationModel::Syllable,
        }
    }

    pub fn weights(&self) -> Weights {
        self.weights
    }

    /// Level lookup plus the multi-sense penalty, clamped to [0, 1].
    ///
    /// Level tags outside A1..C2 do not fail: they take the unknown-level
    /// distance so that one badly tagged word never stops a batch.
    pub fn meaning_distance(&self, level: &str, translation_count: usize) -> f64 {
        let base = match level.parse::<ProficiencyLevel>() {
            Ok(level) => self.level_distances[level.index()],
            Err(_) => {
                debug!(tag = level, "unknown proficiency level, using default meaning distance");
                self.unknown_level_distance
            }
        };
        let penalty = if translation_count > self.multi_sense_threshold {
            self.multi_sense_penalty
        } else {
            0.0
        };
        round2(clamp_unit(base + penalty))
    }

    /// Headword letters against the stroke estimate of the primary translation.
    pub fn visual_distance(&self, surface_form: &str, primary_translation: &str) -> f64 {
        let stroke_estimate = count_script_units(primary_translation) as f64 * self.stroke_weight;
        let letters = letter_count(surface_form) as f64;
        visual_distance_from_counts(stroke_estimate, letters, self.saturation)
    }

    /// Monotone in headword length under either model.
    pub fn pronunciation_distance(&self, surface_form: &str) -> f64 {
        let letters = letter_count(surface_form);
        match self.pronunciation {
            // Buckets are validated to cover every length.
            Pronunciation::Step(ref buckets) => buckets
                .iter()
                .find(|(range, _)| range.matches(letters))
                .map_or(0.0, |(_, distance)| *distance),
            Pronunciation::Syllable {
                letters_per_syllable,
                step,
                base,
            } => syllable_distance(letters, letters_per_syllable, step, base),
        }
    }

    /// Weighted total rounded to two decimals, and the difficulty it falls into.
    pub fn aggregate(&self, meaning: f64, visual: f64, pronunciation: f64) -> (f64, Difficulty) {
        let total = self.weights.meaning * meaning
            + self.weights.visual * visual
            + self.weights.pronunciation * pronunciation;
        let total = round2(clamp_unit(total));
        (total, Difficulty::classify(total))
    }

    /// Score one record. Fails only when the record breaks the precondition,
    /// before any distance is computed.
    pub fn score(&self, record: &WordRecord) -> Result<DistanceProfile, RecordError> {
        record.check()?;
        let primary = record.primary_translation().unwrap_or_default();

        let meaning_distance = self.meaning_distance(&record.level, record.translations.len());
        let visual_distance = self.visual_distance(&record.surface_form, primary);
        let pronunciation_distance = self.pronunciation_distance(&record.surface_form);
        let (total_distance, difficulty) =
            self.aggregate(meaning_distance, visual_distance, pronunciation_distance);

        Ok(DistanceProfile {
            meaning_distance,
            visual_distance,
            pronunciation_distance,
            total_distance,
            difficulty,
        })
    }

    /// Breakdown of a profile into weighted components.
    pub fn explain(&self, profile: &DistanceProfile) -> Vec<Contribution> {
        [
            ("Meaning", profile.meaning_distance, self.weights.meaning),
            ("Visual", profile.visual_distance, self.weights.visual),
            (
                "Pronunciation",
                profile.pronunciation_distance,
                self.weights.pronunciation,
            ),
        ]
        .into_iter()
        .map(|(label, distance, weight)| Contribution {
            label,
            distance,
            weight,
            weighted: distance * weight,
        })
        .collect()
    }
}

fn parse_buckets<'a>(buckets: impl Iterator<Item = (&'a str, f64)>) -> Vec<(RangeOp, f64)> {
    buckets
        .filter_map(|(range, distance)| RangeOp::parse(range).ok().map(|r| (r, distance)))
        .collect()
}
