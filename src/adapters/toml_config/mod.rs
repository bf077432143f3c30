// TOML config adapter - Configuration management using TOML files

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::rules::{ClipRules, DEFAULT_CONTAINER_EXTENSION, DEFAULT_OUTPUT_SUFFIX};
use crate::error::{TrimError, TrimResult};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "trimclip.toml";

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClipConfig {
    /// Tool executable; a bare name or missing path falls back to PATH lookup
    pub ffmpeg_path: PathBuf,
    pub output_suffix: String,
    pub container_extension: String,
    pub overwrite: bool,
    pub log_level: String,
    pub json_logs: bool,
}

impl Default for ClipConfig {
    fn default() -> Self {
        Self {
            ffmpeg_path: PathBuf::from("ffmpeg"),
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            container_extension: DEFAULT_CONTAINER_EXTENSION.to_string(),
            overwrite: false,
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl ClipConfig {
    pub fn rules(&self) -> ClipRules {
        ClipRules::new(&self.container_extension, &self.output_suffix)
    }

    /// Reject values that would make every request fail later
    pub fn validate(&self) -> TrimResult<()> {
        if self.output_suffix.is_empty() {
            return Err(TrimError::ConfigError {
                message: "output_suffix must not be empty".to_string(),
            });
        }
        if self.container_extension.trim_start_matches('.').is_empty() {
            return Err(TrimError::ConfigError {
                message: "container_extension must not be empty".to_string(),
            });
        }
        if self.ffmpeg_path.as_os_str().is_empty() {
            return Err(TrimError::ConfigError {
                message: "ffmpeg_path must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    trimclip: ClipConfig,
}

/// TOML configuration adapter
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Parse the `[trimclip]` table of a TOML document
    pub fn from_toml_str(content: &str) -> TrimResult<ClipConfig> {
        let file: ConfigFile = toml::from_str(content).map_err(|e| TrimError::ConfigError {
            message: format!("Failed to parse TOML config: {}", e),
        })?;
        Ok(file.trimclip)
    }

    /// Load from `path`; it must exist
    pub fn load(path: &Path) -> TrimResult<ClipConfig> {
        let content = std::fs::read_to_string(path).map_err(|e| TrimError::ConfigError {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;
        let config = Self::from_toml_str(&content)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load the explicit file, else `./trimclip.toml` when present, else defaults
    pub fn load_or_default(explicit: Option<&Path>) -> TrimResult<ClipConfig> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            Self::load(default_path)
        } else {
            Ok(ClipConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = TomlConfigAdapter::from_toml_str("").unwrap();
        assert_eq!(config, ClipConfig::default());
    }

    #[test]
    fn test_partial_table() {
        let config = TomlConfigAdapter::from_toml_str(
            "[trimclip]\nffmpeg_path = 'D:/ffmpeg/bin/ffmpeg.exe'\noverwrite = true\n",
        )
        .unwrap();
        assert_eq!(config.ffmpeg_path, PathBuf::from("D:/ffmpeg/bin/ffmpeg.exe"));
        assert!(config.overwrite);
        assert_eq!(config.output_suffix, "_clip");
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let err = TomlConfigAdapter::from_toml_str("[trimclip]\ncrf = 18\n").unwrap_err();
        assert!(matches!(err, TrimError::ConfigError { .. }));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let dir = TempDir::new().unwrap();
        let err = TomlConfigAdapter::load_or_default(Some(&dir.path().join("nope.toml")))
            .unwrap_err();
        assert!(matches!(err, TrimError::ConfigError { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("trimclip.toml");
        std::fs::write(&path, "[trimclip]\noutput_suffix = '_cut'\n").unwrap();

        let config = TomlConfigAdapter::load(&path).unwrap();
        assert_eq!(config.output_suffix, "_cut");
        assert_eq!(config.rules().output_suffix, "_cut");
    }

    #[test]
    fn test_validate() {
        assert!(ClipConfig::default().validate().is_ok());

        let mut config = ClipConfig::default();
        config.output_suffix.clear();
        assert!(config.validate().is_err());

        let mut config = ClipConfig::default();
        config.container_extension = ".".to_string();
        assert!(config.validate().is_err());
    }
}
