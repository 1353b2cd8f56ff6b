use anyhow::{bail, Result};

/// Exponent divisor of the visual saturation curve.
pub const DEFAULT_SATURATION: f64 = 10.0;

/// Letter-count range used by pronunciation buckets.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeOp {
    LessThan(usize),
    LessEqual(usize),
    GreaterThan(usize),
    GreaterEqual(usize),
    Equal(usize),
    Between(usize, usize), // Inclusive range: N-M
}

impl RangeOp {
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(val) = s.strip_prefix(">=") {
            Ok(RangeOp::GreaterEqual(val.trim().parse()?))
        } else if let Some(val) = s.strip_prefix("<=") {
            Ok(RangeOp::LessEqual(val.trim().parse()?))
        } else if let Some(val) = s.strip_prefix('>') {
            Ok(RangeOp::GreaterThan(val.trim().parse()?))
        } else if let Some(val) = s.strip_prefix('<') {
            Ok(RangeOp::LessThan(val.trim().parse()?))
        } else if s.contains('-') && !s.starts_with('-') {
            let parts: Vec<&str> = s.split('-').collect();
            if parts.len() != 2 {
                bail!("Invalid range format: {}", s)
            }
            let low: usize = parts[0].trim().parse()?;
            let high: usize = parts[1].trim().parse()?;
            if low > high {
                bail!("Range start {} is greater than end {}", low, high)
            }
            Ok(RangeOp::Between(low, high))
        } else {
            Ok(RangeOp::Equal(s.parse()?))
        }
    }

    pub fn matches(&self, value: usize) -> bool {
        match self {
            RangeOp::LessThan(n) => value < *n,
            RangeOp::LessEqual(n) => value <= *n,
            RangeOp::GreaterThan(n) => value > *n,
            RangeOp::GreaterEqual(n) => value >= *n,
            RangeOp::Equal(n) => value == *n,
            RangeOp::Between(low, high) => value >= *low && value <= *high,
        }
    }

    /// Largest number written in the range.
    pub fn bound(&self) -> usize {
        match self {
            RangeOp::LessThan(n)
            | RangeOp::LessEqual(n)
            | RangeOp::GreaterThan(n)
            | RangeOp::GreaterEqual(n)
            | RangeOp::Equal(n) => *n,
            RangeOp::Between(_, high) => *high,
        }
    }
}

/// Round to two decimal places, the precision every stored distance uses.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Number of letters in a headword, counted in chars rather than bytes.
pub fn letter_count(surface_form: &str) -> usize {
    surface_form.chars().count()
}

/// Characters outside ASCII. Each one stands for a script unit (e.g. a Han
/// character) whose stroke count is estimated with a fixed weight.
pub fn count_script_units(text: &str) -> usize {
    text.chars().filter(|c| (*c as u32) > 127).count()
}

/// `1 - e^(-|strokes - letters| / saturation)`, rounded to two decimals.
///
/// Symmetric in its first two arguments: only the absolute gap matters.
/// Returns 0.0 when the counts are equal and approaches 1.0 as the gap grows.
pub fn visual_distance_from_counts(stroke_estimate: f64, letter_count: f64, saturation: f64) -> f64 {
    let gap = (stroke_estimate - letter_count).abs();
    let distance = 1.0 - (-gap / saturation).exp();
    round2(clamp_unit(distance))
}

/// Syllable-estimate pronunciation model:
/// `min(1, max(1, letters / per_syllable) * step + base)`.
pub fn syllable_distance(letters: usize, letters_per_syllable: usize, step: f64, base: f64) -> f64 {
    let syllables = (letters / letters_per_syllable.max(1)).max(1) as f64;
    round2(clamp_unit(syllables * step + base))
}
