use super::config::{PronunciationModel, ScoringConfig, DEFAULT_LEVEL_DISTANCES};
use super::factors::RangeOp;
use super::level::ProficiencyLevel;
use std::collections::BTreeMap;

const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref meaning) = config.meaning {
        if let Some(ref levels) = meaning.levels {
            for (tag, distance) in levels {
                if tag.parse::<ProficiencyLevel>().is_err() {
                    errors.push(format!(
                        "scoring.meaning.levels.{}: not a level (expected A1..C2)",
                        tag
                    ));
                }
                check_unit(&mut errors, &format!("scoring.meaning.levels.{}", tag), *distance);
            }
            check_level_order(&mut errors, levels);
        }
        if let Some(unknown) = meaning.unknown_level {
            check_unit(&mut errors, "scoring.meaning.unknown_level", unknown);
        }
        if let Some(penalty) = meaning.multi_sense_penalty {
            check_unit(&mut errors, "scoring.meaning.multi_sense_penalty", penalty);
        }
    }

    if let Some(ref visual) = config.visual {
        if let Some(weight) = visual.stroke_weight {
            if !weight.is_finite() || weight <= 0.0 {
                errors.push(format!(
                    "scoring.visual.stroke_weight: must be positive, got {}",
                    weight
                ));
            }
        }
        if let Some(saturation) = visual.saturation {
            if !saturation.is_finite() || saturation <= 0.0 {
                errors.push(format!(
                    "scoring.visual.saturation: must be positive, got {}",
                    saturation
                ));
            }
        }
    }

    if let Some(ref pronunciation) = config.pronunciation {
        let model = pronunciation.model.unwrap_or_default();

        if let Some(ref buckets) = pronunciation.buckets {
            let mut parsed = Vec::new();
            for (i, bucket) in buckets.iter().enumerate() {
                match RangeOp::parse(&bucket.range) {
                    Ok(range) => parsed.push((range, bucket.distance)),
                    Err(e) => errors.push(format!(
                        "scoring.pronunciation.buckets[{}].range: invalid '{}' - {}",
                        i, bucket.range, e
                    )),
                }
                check_unit(
                    &mut errors,
                    &format!("scoring.pronunciation.buckets[{}].distance", i),
                    bucket.distance,
                );
            }

            if buckets.is_empty() && model == PronunciationModel::Step {
                errors.push("scoring.pronunciation.buckets: step model needs at least one bucket".to_string());
            } else if parsed.len() == buckets.len() {
                check_bucket_coverage(&mut errors, &parsed);
            }
        }

        if let Some(letters) = pronunciation.syllable_letters {
            if letters == 0 {
                errors.push("scoring.pronunciation.syllable_letters: must be at least 1".to_string());
            }
        }
        if let Some(step) = pronunciation.syllable_step {
            check_unit(&mut errors, "scoring.pronunciation.syllable_step", step);
        }
        if let Some(base) = pronunciation.syllable_base {
            check_unit(&mut errors, "scoring.pronunciation.syllable_base", base);
        }
    }

    if let Some(ref weights) = config.weights {
        check_unit(&mut errors, "scoring.weights.meaning", weights.meaning);
        check_unit(&mut errors, "scoring.weights.visual", weights.visual);
        check_unit(&mut errors, "scoring.weights.pronunciation", weights.pronunciation);
        if (weights.sum() - 1.0).abs() > WEIGHT_TOLERANCE {
            errors.push(format!(
                "scoring.weights: must sum to 1.0, got {}",
                weights.sum()
            ));
        }
        if weights.meaning <= weights.visual {
            errors.push(format!(
                "scoring.weights.meaning: must be greater than visual, got {} <= {}",
                weights.meaning, weights.visual
            ));
        }
        if (weights.visual - weights.pronunciation).abs() > WEIGHT_TOLERANCE {
            errors.push(format!(
                "scoring.weights.pronunciation: must equal visual, got {} != {}",
                weights.pronunciation, weights.visual
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_unit(errors: &mut Vec<String>, path: &str, value: f64) {
    if !(0.0..=1.0).contains(&value) {
        errors.push(format!("{}: must be within [0, 1], got {}", path, value));
    }
}

/// Overrides are merged onto the default table, which must stay ordered from
/// A1 (lowest) to C2 (highest).
fn check_level_order(errors: &mut Vec<String>, levels: &BTreeMap<String, f64>) {
    let mut table = DEFAULT_LEVEL_DISTANCES;
    for (tag, distance) in levels {
        if let Ok(level) = tag.parse::<ProficiencyLevel>() {
            table[level.index()].1 = *distance;
        }
    }
    for pair in table.windows(2) {
        let (lower, lower_distance) = pair[0];
        let (higher, higher_distance) = pair[1];
        if lower_distance > higher_distance {
            errors.push(format!(
                "scoring.meaning.levels: {} ({}) is above {} ({}), distances must rise with level",
                lower, lower_distance, higher, higher_distance
            ));
            return;
        }
    }
}

/// Every length must hit a bucket, and the matched distance must never drop
/// as words get longer.
///
/// The first matching bucket can only change where some range starts or stops
/// matching, so checking those lengths covers every length, including the
/// open-ended tail past the largest bound.
fn check_bucket_coverage(errors: &mut Vec<String>, buckets: &[(RangeOp, f64)]) {
    let mut previous: Option<(usize, f64)> = None;
    for letters in breakpoints(buckets) {
        let Some((_, distance)) = buckets.iter().find(|(range, _)| range.matches(letters)) else {
            errors.push(format!(
                "scoring.pronunciation.buckets: no bucket matches {} letters",
                letters
            ));
            return;
        };
        if let Some((prev_letters, prev_distance)) = previous {
            if *distance < prev_distance {
                errors.push(format!(
                    "scoring.pronunciation.buckets: distance drops from {} ({} letters) to {} ({} letters)",
                    prev_distance, prev_letters, distance, letters
                ));
                return;
            }
        }
        previous = Some((letters, *distance));
    }
}

fn breakpoints(buckets: &[(RangeOp, f64)]) -> Vec<usize> {
    let mut points = vec![1];
    for (range, _) in buckets {
        if let RangeOp::Between(low, _) = range {
            points.push(*low);
        }
        let bound = range.bound();
        points.push(bound);
        points.push(bound.saturating_add(1));
    }
    points.retain(|&p| p >= 1);
    points.sort_unstable();
    points.dedup();
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{MeaningConfig, PronunciationBucket, PronunciationConfig, VisualConfig, Weights};

    fn empty() -> ScoringConfig {
        ScoringConfig {
            meaning: None,
            visual: None,
            pronunciation: None,
            weights: None,
        }
    }

    fn bucket(range: &str, distance: f64) -> PronunciationBucket {
        PronunciationBucket {
            range: range.to_string(),
            distance,
        }
    }

    fn with_buckets(buckets: Vec<PronunciationBucket>) -> ScoringConfig {
        ScoringConfig {
            pronunciation: Some(PronunciationConfig {
                model: None,
                buckets: Some(buckets),
                syllable_letters: None,
                syllable_step: None,
                syllable_base: None,
            }),
            ..empty()
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_scoring(&ScoringConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_config() {
        assert!(validate_scoring(&empty()).is_ok());
    }

    #[test]
    fn test_unknown_level_key() {
        let mut levels = BTreeMap::new();
        levels.insert("Z9".to_string(), 0.2);
        let config = ScoringConfig {
            meaning: Some(MeaningConfig {
                levels: Some(levels),
                unknown_level: None,
                multi_sense_threshold: None,
                multi_sense_penalty: None,
            }),
            ..empty()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("scoring.meaning.levels.Z9"));
    }

    #[test]
    fn test_distance_out_of_range() {
        let config = ScoringConfig {
            meaning: Some(MeaningConfig {
                levels: None,
                unknown_level: Some(1.5),
                multi_sense_threshold: None,
                multi_sense_penalty: None,
            }),
            ..empty()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("scoring.meaning.unknown_level"));
    }

    #[test]
    fn test_non_positive_stroke_weight() {
        let config = ScoringConfig {
            visual: Some(VisualConfig {
                stroke_weight: Some(0.0),
                saturation: Some(-1.0),
            }),
            ..empty()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("stroke_weight"));
        assert!(errors[1].contains("saturation"));
    }

    #[test]
    fn test_invalid_bucket_range() {
        let config = with_buckets(vec![bucket("<=5", 0.75), bucket("lots", 0.9)]);
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("scoring.pronunciation.buckets[1].range"));
    }

    #[test]
    fn test_buckets_must_cover_all_lengths() {
        let config = with_buckets(vec![bucket("<=5", 0.75), bucket("6-8", 0.85)]);
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("no bucket matches 9 letters"));
    }

    #[test]
    fn test_buckets_must_be_monotone() {
        let config = with_buckets(vec![bucket("<=5", 0.9), bucket(">5", 0.8)]);
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("distance drops"));
    }

    #[test]
    fn test_step_model_requires_buckets() {
        let errors = validate_scoring(&with_buckets(vec![])).unwrap_err();
        assert!(errors[0].contains("at least one bucket"));
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let config = ScoringConfig {
            weights: Some(Weights {
                meaning: 0.5,
                visual: 0.3,
                pronunciation: 0.3,
            }),
            ..empty()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("scoring.weights: must sum to 1.0"));
    }

    #[test]
    fn test_collects_all_errors() {
        let config = ScoringConfig {
            visual: Some(VisualConfig {
                stroke_weight: Some(-8.0),
                saturation: None,
            }),
            weights: Some(Weights {
                meaning: 0.5,
                visual: 0.3,
                pronunciation: 0.3,
            }),
            ..empty()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_meaning_weight_must_dominate() {
        let config = ScoringConfig {
            weights: Some(Weights {
                meaning: 0.0,
                visual: 1.0,
                pronunciation: 0.0,
            }),
            ..empty()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.starts_with("scoring.weights.meaning: must be greater than visual")));
    }

    #[test]
    fn test_visual_and_pronunciation_weights_must_match() {
        let config = ScoringConfig {
            weights: Some(Weights {
                meaning: 0.5,
                visual: 0.2,
                pronunciation: 0.3,
            }),
            ..empty()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("scoring.weights.pronunciation: must equal visual"));
    }

    #[test]
    fn test_alternative_weights_with_same_shape_accepted() {
        let config = ScoringConfig {
            weights: Some(Weights {
                meaning: 0.5,
                visual: 0.25,
                pronunciation: 0.25,
            }),
            ..empty()
        };
        assert!(validate_scoring(&config).is_ok());
    }

    #[test]
    fn test_level_table_must_rise_with_level() {
        let mut levels = BTreeMap::new();
        levels.insert("A1".to_string(), 0.9);
        levels.insert("C2".to_string(), 0.1);
        let config = ScoringConfig {
            meaning: Some(MeaningConfig {
                levels: Some(levels),
                unknown_level: None,
                multi_sense_threshold: None,
                multi_sense_penalty: None,
            }),
            ..empty()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("scoring.meaning.levels:"));
    }

    #[test]
    fn test_level_override_checked_against_defaults() {
        // B2 default is 0.40, so lowering B1 to 0.35 keeps the order
        let mut levels = BTreeMap::new();
        levels.insert("B1".to_string(), 0.35);
        let config = ScoringConfig {
            meaning: Some(MeaningConfig {
                levels: Some(levels.clone()),
                unknown_level: None,
                multi_sense_threshold: None,
                multi_sense_penalty: None,
            }),
            ..empty()
        };
        assert!(validate_scoring(&config).is_ok());

        // ...but raising it past B2 does not
        levels.insert("B1".to_string(), 0.45);
        let config = ScoringConfig {
            meaning: Some(MeaningConfig {
                levels: Some(levels),
                unknown_level: None,
                multi_sense_threshold: None,
                multi_sense_penalty: None,
            }),
            ..empty()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("B1 (0.45) is above B2 (0.4)"));
    }

    #[test]
    fn test_buckets_checked_past_largest_bound() {
        let config = with_buckets(vec![
            bucket("<=64", 0.75),
            bucket("65", 0.1),
            bucket(">65", 0.9),
        ]);
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("distance drops from 0.75 (64 letters) to 0.1 (65 letters)"));
    }

    #[test]
    fn test_large_bounds_checked_without_scanning() {
        let config = with_buckets(vec![
            bucket("<=1000000000", 0.75),
            bucket("1000000001", 0.2),
            bucket(">1000000001", 0.9),
        ]);
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("(1000000000 letters) to 0.2 (1000000001 letters)"));

        let config = with_buckets(vec![bucket("<=5", 0.75), bucket(&format!(">={}", usize::MAX), 0.9)]);
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("no bucket matches 6 letters"));
    }

    #[test]
    fn test_buckets_need_open_ended_tail() {
        let config = with_buckets(vec![bucket("<=5", 0.75), bucket("6-200", 0.85)]);
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("no bucket matches 201 letters"));

        let config = with_buckets(vec![bucket("<=5", 0.75), bucket("6", 0.85), bucket(">=6", 0.9)]);
        assert!(validate_scoring(&config).is_ok());

        let config = with_buckets(vec![bucket(">=1", 0.8), bucket("<=100", 0.9)]);
        assert!(validate_scoring(&config).is_ok());
    }
}
