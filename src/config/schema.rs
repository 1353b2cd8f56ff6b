use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::scoring::ScoringConfig;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Formula constants; defaults apply when absent
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
    /// Curated lexicon (YAML) injected into dataset builds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lexicon: Option<PathBuf>,
    /// Where `build` writes the dataset unless `--output` is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}
