//! Environment adapter
//!
//! Environment variable access and executable lookup on the search path.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{TrimError, TrimResult};

/// Environment and search-path adapter
pub struct EnvPathAdapter;

impl EnvPathAdapter {
    /// Get environment variable; unset or empty reads as `None`
    pub fn get_env(key: &str) -> TrimResult<Option<String>> {
        match std::env::var(key) {
            Ok(value) if value.trim().is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(e) => Err(TrimError::ConfigError {
                message: format!("Failed to get environment variable {}: {}", key, e),
            }),
        }
    }

    /// Read a boolean environment flag (`1/0`, `true/false`, `yes/no`)
    pub fn get_env_flag(key: &str) -> TrimResult<Option<bool>> {
        let Some(value) = Self::get_env(key)? else {
            return Ok(None);
        };
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(Some(true)),
            "0" | "false" | "no" | "off" => Ok(Some(false)),
            other => Err(TrimError::ConfigError {
                message: format!("Invalid boolean value for {}: {}", key, other),
            }),
        }
    }

    /// Resolve the executable to spawn.
    ///
    /// An existing file at `program` wins; otherwise its file name is looked
    /// up on `PATH`. Fails with `ToolNotFound` when neither succeeds.
    pub fn resolve_executable(program: &Path) -> TrimResult<PathBuf> {
        let not_found = || TrimError::ToolNotFound {
            tool: program.display().to_string(),
        };

        if program.is_file() {
            return Ok(std::path::absolute(program).unwrap_or_else(|_| program.to_path_buf()));
        }

        let name = program.file_name().ok_or_else(not_found)?;
        let resolved = which::which(name).map_err(|_| not_found())?;
        debug!(
            requested = %program.display(),
            resolved = %resolved.display(),
            "resolved executable on PATH"
        );
        Ok(resolved)
    }
}
