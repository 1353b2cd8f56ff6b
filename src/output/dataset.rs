use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::ingest::VocabularyEntry;
use crate::scoring::{PronunciationModel, ScoringEngine, FORMULA_VERSION};

/// Serialized dataset. The formula fields record which constants produced the
/// distances, so datasets built with different settings are never mixed up.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset<'a> {
    pub formula_version: u32,
    pub stroke_weight: f64,
    pub pronunciation_model: PronunciationModel,
    pub total: usize,
    pub entries: &'a [VocabularyEntry],
}

impl<'a> Dataset<'a> {
    pub fn new(engine: &ScoringEngine, entries: &'a [VocabularyEntry]) -> Self {
        Self {
            formula_version: FORMULA_VERSION,
            stroke_weight: engine.stroke_weight(),
            pronunciation_model: engine.pronunciation_model(),
            total: entries.len(),
            entries,
        }
    }
}

/// Write the dataset as pretty JSON
///
/// Uses atomic-write-file so a failed run never leaves a half-written dataset.
/// Creates the parent directory if it doesn't exist.
pub fn write_dataset(path: &Path, dataset: &Dataset<'_>) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create output directory at {}", parent.display()))?;
        }
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, dataset).context("Failed to serialize dataset")?;

    file.commit().context("Failed to save dataset")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::{DatasetBuilder, Lexicon, WordSource};

    #[test]
    fn test_write_dataset() {
        let engine = ScoringEngine::default();
        let lexicon = Lexicon::from_yaml("ask: { part_of_speech: v., translations: [问, 询问] }").unwrap();
        let entry = DatasetBuilder::new(&engine, &lexicon)
            .build_entry("ask", &WordSource::Oxford3000)
            .unwrap();
        let entries = vec![entry];

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("vocabulary.json");
        write_dataset(&path, &Dataset::new(&engine, &entries)).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["formulaVersion"], FORMULA_VERSION);
        assert_eq!(written["strokeWeight"], 8.0);
        assert_eq!(written["pronunciationModel"], "step");
        assert_eq!(written["total"], 1);
        assert_eq!(written["entries"][0]["english"], "ask");
        assert_eq!(written["entries"][0]["chinese"][1], "询问");
        assert_eq!(written["entries"][0]["totalDistance"], 0.4);
    }
}
