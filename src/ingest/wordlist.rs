use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Shortest headword kept from a list; single letters are list noise.
pub const MIN_WORD_LEN: usize = 2;

/// Read a word list: UTF-8 text, one word per line.
pub fn read_word_list(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list at {}", path.display()))?;
    Ok(parse_word_list(&content))
}

/// Trim and lowercase each line, skipping blanks and single letters. Later
/// duplicates are dropped so each headword appears once, in first-seen order.
pub fn parse_word_list(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| word.chars().count() >= MIN_WORD_LEN)
        .filter(|word| seen.insert(word.clone()))
        .collect()
}
