//! Error handling module for TrimClip

use thiserror::Error;

/// Main error type for TrimClip operations
#[derive(Error, Debug)]
pub enum TrimError {
    /// Input file not found or inaccessible
    #[error("Input file not found: {path}")]
    InputNotFound { path: String },

    /// Input container is not the supported one
    #[error("Unsupported input format: {path} (expected a .{expected} file)")]
    UnsupportedFormat { path: String, expected: String },

    /// Neither the configured path nor the search path yields the tool
    #[error("{tool} was not found; install it or add it to the PATH environment variable")]
    ToolNotFound { tool: String },

    /// The OS refused to spawn the process
    #[error("Failed to launch {tool}: {source}")]
    LaunchFailure {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// The tool ran but exited non-zero
    #[error("Clipping failed (exit code {exit_code}): {diagnostics}")]
    ProcessFailed { exit_code: i32, diagnostics: String },

    /// Invalid time format
    #[error("Invalid time format: {time}. Expected HH:MM:SS.ff, MM:SS.ff, or seconds")]
    InvalidTimeFormat { time: String },

    /// Request is structurally unusable
    #[error("Invalid clip request: {message}")]
    InvalidRequest { message: String },

    /// Configuration could not be loaded or is inconsistent
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl TrimError {
    /// True for errors detected before any subprocess is spawned
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TrimError::InputNotFound { .. }
                | TrimError::UnsupportedFormat { .. }
                | TrimError::InvalidRequest { .. }
        )
    }
}

/// Result type alias for TrimClip operations
pub type TrimResult<T> = std::result::Result<T, TrimError>;
