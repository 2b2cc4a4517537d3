//! Default session parameters loaded from `mcqtest.toml`.
//!
//! Command-line flags always win over values found here.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level mcqtest configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McqConfig {
    /// First question of the range.
    #[serde(default = "default_start")]
    pub start_index: u32,
    /// Last question of the range.
    #[serde(default = "default_stop")]
    pub stop_index: u32,
    /// Test duration in minutes.
    #[serde(default = "default_duration")]
    pub duration_minutes: u32,
    /// Directory holding the key, responses, and results tables.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_start() -> u32 {
    1
}
fn default_stop() -> u32 {
    10
}
fn default_duration() -> u32 {
    10
}
fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for McqConfig {
    fn default() -> Self {
        Self {
            start_index: default_start(),
            stop_index: default_stop(),
            duration_minutes: default_duration(),
            output_dir: default_output_dir(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `mcqtest.toml` in the current directory
/// 2. `~/.config/mcqtest/config.toml`
///
/// Environment variable override: `MCQTEST_OUTPUT_DIR`.
pub fn load_config_from(path: Option<&Path>) -> Result<McqConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("mcqtest.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => McqConfig::default(),
    };

    if let Ok(dir) = std::env::var("MCQTEST_OUTPUT_DIR") {
        if !dir.is_empty() {
            config.output_dir = PathBuf::from(dir);
        }
    }

    Ok(config)
}

/// Parse a TOML string into a config (useful for testing).
pub fn parse_config(content: &str) -> Result<McqConfig> {
    Ok(toml::from_str(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("mcqtest"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = McqConfig::default();
        assert_eq!(config.start_index, 1);
        assert_eq!(config.stop_index, 10);
        assert_eq!(config.duration_minutes, 10);
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn parse_partial_config() {
        let config = parse_config(
            r#"
stop_index = 25
duration_minutes = 45
output_dir = "sessions"
"#,
        )
        .unwrap();
        assert_eq!(config.start_index, 1);
        assert_eq!(config.stop_index, 25);
        assert_eq!(config.duration_minutes, 45);
        assert_eq!(config.output_dir, PathBuf::from("sessions"));
    }

    #[test]
    fn parse_rejects_bad_types() {
        assert!(parse_config("start_index = \"one\"").is_err());
    }

    #[test]
    fn explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let err = load_config_from(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mcqtest.toml");
        std::fs::write(&path, "start_index = 11\nstop_index = 20\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.start_index, 11);
        assert_eq!(config.stop_index, 20);
    }
}
