mod schema;

pub use schema::Config;

use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::scoring::ScoringConfig;

/// Get the config directory path (~/.config/vocab-distance/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("vocab-distance"))
}

/// Get the default config file path (~/.config/vocab-distance/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// An explicit `path` must exist. When `path` is None the default location is
/// used, and a missing default file yields the default configuration.
///
/// # Errors
///
/// Returns an error if:
/// - An explicit config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found at {}", path.display());
            }
            path
        }
        None => {
            let default_path = get_config_path()?;
            if !default_path.exists() {
                return Ok(Config::default());
            }
            default_path
        }
    };

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    parse_config(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))
}

pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = serde_saphyr::from_str(content)?;
    Ok(config)
}

/// Write a config holding the default scoring constants.
///
/// Refuses to replace an existing file unless `force` is set. The write is
/// atomic, so an interrupted run never leaves a truncated config behind.
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }
    }

    let config = Config {
        scoring: Some(ScoringConfig::default()),
        lexicon: None,
        output: None,
    };
    let yaml = serde_saphyr::to_string(&config).context("Failed to serialize default config")?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(yaml.as_bytes())
        .context("Failed to write config")?;
    file.commit().context("Failed to save config")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::validate_scoring;

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
lexicon: data/lexicon.yaml
output: out/vocabulary.json
scoring:
  visual:
    stroke_weight: 8
"#;
        let config = parse_config(yaml).unwrap();
        assert_eq!(config.lexicon, Some(PathBuf::from("data/lexicon.yaml")));
        assert_eq!(config.output, Some(PathBuf::from("out/vocabulary.json")));
        assert!(config.scoring.is_some());
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        assert!(parse_config("queries: []").is_err());
    }

    #[test]
    fn test_missing_explicit_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(Some(dir.path().join("nope.yaml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_write_then_load_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        write_default_config(&path, false).unwrap();
        let loaded = load_config(Some(path.clone())).unwrap();
        let scoring = loaded.scoring.unwrap();
        assert_eq!(scoring, ScoringConfig::default());
        assert!(validate_scoring(&scoring).is_ok());

        // Second write without force refuses
        assert!(write_default_config(&path, false).is_err());
        assert!(write_default_config(&path, true).is_ok());
    }
}
