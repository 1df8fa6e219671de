//! Board configuration loaded with figment.
//!
//! Sources, later overriding earlier:
//! 1. built-in defaults
//! 2. `taskboard.toml`, `taskboard.yaml`, `taskboard.json` in the working
//!    directory, or one explicitly named file
//! 3. `TASKBOARD_*` environment variables

use crate::analytics::DEFAULT_DONE_MARKERS;
use crate::error::ConfigError;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "TASKBOARD_";

/// Base name of discovered configuration files
pub const CONFIG_FILE_STEM: &str = "taskboard";

/// Settings for one board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Directory of the file-backed key-value store
    pub storage_dir: PathBuf,
    /// Title fragments marking the done column, matched case-insensitively
    pub done_markers: Vec<String>,
    /// Most activity entries kept in memory
    pub activity_limit: usize,
    pub log_level: String,
    /// Seed absent collections with the starter board
    pub seed_on_empty: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(".taskboard"),
            done_markers: DEFAULT_DONE_MARKERS.iter().map(|m| m.to_string()).collect(),
            activity_limit: 500,
            log_level: "info".to_string(),
            seed_on_empty: true,
        }
    }
}

impl BoardConfig {
    /// Load from the current directory and the environment
    pub fn load() -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::load_from(&cwd, None)
    }

    /// Load with file discovery in `dir`, or from `explicit` when given.
    ///
    /// An explicit file must exist; discovered files are optional.
    pub fn load_from(dir: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let figment = Self::figment(dir, explicit)?;
        let config: Self = figment.extract()?;
        config.validate()?;
        debug!(?config, "loaded board configuration");
        Ok(config)
    }

    fn figment(dir: &Path, explicit: Option<&Path>) -> Result<Figment, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(ConfigError::FileNotFound {
                        path: path.to_path_buf(),
                    });
                }
                trace!(path = %path.display(), "loading explicit config file");
                figment = merge_file(figment, path);
            }
            None => {
                for ext in ["toml", "yaml", "yml", "json"] {
                    let path = dir.join(format!("{CONFIG_FILE_STEM}.{ext}"));
                    if path.is_file() {
                        trace!(path = %path.display(), "loading discovered config file");
                        figment = merge_file(figment, &path);
                    }
                }
            }
        }

        Ok(figment.merge(Env::prefixed(ENV_PREFIX)))
    }

    /// Check values that parse but make no sense
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(i) = self.done_markers.iter().position(|m| m.trim().is_empty()) {
            return Err(ConfigError::validation(format!(
                "done_markers[{i}] is blank"
            )));
        }
        if self.storage_dir.as_os_str().is_empty() {
            return Err(ConfigError::validation("storage_dir is empty"));
        }
        Ok(())
    }
}

fn merge_file(figment: Figment, path: &Path) -> Figment {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml" | "yml") => figment.merge(Yaml::file(path)),
        Some("json") => figment.merge(Json::file(path)),
        _ => figment.merge(Toml::file(path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_are_valid() {
        let config = BoardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.done_markers, vec!["выполнено", "готово", "done"]);
        assert_eq!(config.activity_limit, 500);
        assert!(config.seed_on_empty);
    }

    #[test]
    fn test_blank_marker_rejected() {
        let config = BoardConfig {
            done_markers: vec!["done".into(), "  ".into()],
            ..BoardConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("done_markers[1]"));
    }

    #[test]
    fn test_empty_marker_list_allowed() {
        let config = BoardConfig {
            done_markers: Vec::new(),
            ..BoardConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_discovered_toml_overrides_defaults() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("taskboard.toml"),
            "activity_limit = 10\ndone_markers = [\"shipped\"]\n",
        )
        .unwrap();

        let config = BoardConfig::load_from(temp.path(), None).unwrap();

        assert_eq!(config.activity_limit, 10);
        assert_eq!(config.done_markers, vec!["shipped"]);
        assert_eq!(config.storage_dir, PathBuf::from(".taskboard"));
    }

    #[test]
    fn test_explicit_yaml_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("board.yaml");
        std::fs::write(&path, "seed_on_empty: false\n").unwrap();

        let config = BoardConfig::load_from(temp.path(), Some(&path)).unwrap();

        assert!(!config.seed_on_empty);
    }

    #[test]
    fn test_missing_explicit_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.toml");
        let err = BoardConfig::load_from(temp.path(), Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound { .. }));
    }

    #[test]
    fn test_type_error_is_parse_error() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("taskboard.json"),
            r#"{"activity_limit": "lots"}"#,
        )
        .unwrap();
        let err = BoardConfig::load_from(temp.path(), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
