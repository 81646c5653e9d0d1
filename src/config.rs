//! Configuration handling for the TUI

use crate::state::{FormChoices, DEFAULT_DOWNTIME_CAUSES, DEFAULT_LOCATIONS};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors reading or writing the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TuiConfig {
    /// Storage locations offered in the Location field
    pub locations: Option<Vec<String>>,
    /// Downtime causes offered in the Cause field
    pub downtime_causes: Option<Vec<String>>,
    /// tracing filter directive, used when RUST_LOG is not set
    pub log_filter: Option<String>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "dowson", "production-entry-tui")
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for the log file
    pub fn log_dir() -> PathBuf {
        Self::project_dirs()
            .map(|dirs| dirs.data_local_dir().to_path_buf())
            .unwrap_or_else(std::env::temp_dir)
    }

    /// Load configuration from the platform config path
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`; a missing file means defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Config with every default spelled out, written on first run so the
    /// lists can be edited
    pub fn template() -> Self {
        Self {
            locations: Some(DEFAULT_LOCATIONS.iter().map(|s| s.to_string()).collect()),
            downtime_causes: Some(
                DEFAULT_DOWNTIME_CAUSES
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            ),
            log_filter: None,
        }
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let content = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, content).map_err(io_err)
    }

    /// Configured locations, or the defaults
    pub fn locations_or_default(&self) -> Vec<String> {
        match &self.locations {
            Some(locations) if !locations.is_empty() => locations.clone(),
            _ => DEFAULT_LOCATIONS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Log filter directive, or the crate default
    pub fn log_filter_or_default(&self) -> String {
        self.log_filter
            .clone()
            .unwrap_or_else(|| "production_entry_tui=info".to_string())
    }

    /// Option lists for the form, with causes supplied separately
    pub fn form_choices(&self, downtime_causes: Vec<String>) -> FormChoices {
        FormChoices::new(self.locations_or_default(), downtime_causes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.locations.is_none());
        assert!(config.downtime_causes.is_none());
        assert!(config.log_filter.is_none());
    }

    #[test]
    fn test_defaults_fill_missing_values() {
        let config = TuiConfig::default();
        assert_eq!(config.locations_or_default().len(), 3);
        assert_eq!(config.log_filter_or_default(), "production_entry_tui=info");
    }

    #[test]
    fn test_empty_location_list_falls_back() {
        let config = TuiConfig {
            locations: Some(vec![]),
            ..Default::default()
        };
        assert_eq!(config.locations_or_default()[0], "Clean Room Storage");
    }

    #[test]
    fn test_form_choices() {
        let config = TuiConfig {
            locations: Some(vec!["Bay 1".to_string()]),
            ..Default::default()
        };
        let choices = config.form_choices(vec!["Other".to_string()]);
        assert_eq!(choices.locations, vec!["Bay 1".to_string()]);
        assert_eq!(choices.downtime_causes, vec!["Other".to_string()]);
    }

    #[test]
    fn test_template_spells_out_defaults() {
        let template = TuiConfig::template();
        assert_eq!(template.locations_or_default(), TuiConfig::default().locations_or_default());
        assert_eq!(template.downtime_causes.map(|c| c.len()), Some(5));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, TuiConfig::default());
    }

    #[test]
    fn test_parses_station_lists() {
        let json = r#"{"locations": ["Bay 3"], "downtime_causes": ["Power Cut", "Tooling"]}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.locations_or_default(), vec!["Bay 3".to_string()]);
        assert_eq!(
            parsed.downtime_causes,
            Some(vec!["Power Cut".to_string(), "Tooling".to_string()])
        );
        assert_eq!(parsed.log_filter_or_default(), "production_entry_tui=info");
    }

    #[test]
    fn test_config_path_names_json_file() {
        if let Some(path) = TuiConfig::config_path() {
            assert!(path.ends_with("config.json"), "{}", path.display());
        }
    }

    mod files {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_missing_file_gives_defaults() {
            let dir = tempfile::tempdir().unwrap();
            let loaded = TuiConfig::load_from(&dir.path().join("config.json")).unwrap();
            assert_eq!(loaded, TuiConfig::default());
        }

        #[test]
        fn test_save_then_load() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("nested").join("config.json");
            let config = TuiConfig {
                locations: Some(vec!["Line 2 Buffer".to_string()]),
                downtime_causes: Some(vec!["Power Cut".to_string()]),
                log_filter: Some("production_entry_tui=debug".to_string()),
            };

            config.save_to(&path).unwrap();
            let loaded = TuiConfig::load_from(&path).unwrap();

            assert_eq!(loaded, config);
        }

        #[test]
        fn test_malformed_file_is_parse_error() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("config.json");
            fs::write(&path, "{ not json").unwrap();

            let err = TuiConfig::load_from(&path).unwrap_err();

            assert!(matches!(err, ConfigError::Parse { .. }));
            assert!(err.to_string().contains("malformed config file"));
        }
    }
}
