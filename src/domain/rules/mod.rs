// Domain rules - Business logic and policies

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::domain::model::ClipRequest;
use crate::error::{TrimError, TrimResult};

/// Default container accepted as input
pub const DEFAULT_CONTAINER_EXTENSION: &str = "mp4";

/// Default suffix appended to the input stem
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_clip";

/// Input acceptance and output naming rules
#[derive(Debug, Clone, PartialEq)]
pub struct ClipRules {
    /// Extension without the leading dot, compared case-insensitively
    pub container_extension: String,
    pub output_suffix: String,
}

impl Default for ClipRules {
    fn default() -> Self {
        Self {
            container_extension: DEFAULT_CONTAINER_EXTENSION.to_string(),
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
        }
    }
}

impl ClipRules {
    pub fn new(container_extension: impl Into<String>, output_suffix: impl Into<String>) -> Self {
        Self {
            container_extension: container_extension
                .into()
                .trim_start_matches('.')
                .to_string(),
            output_suffix: output_suffix.into(),
        }
    }

    /// Check the input exists as a file and carries the supported extension
    pub fn check_input(&self, input: &Path) -> TrimResult<()> {
        if !input.is_file() {
            return Err(TrimError::InputNotFound {
                path: input.display().to_string(),
            });
        }

        if !self.has_supported_extension(input) {
            return Err(TrimError::UnsupportedFormat {
                path: input.display().to_string(),
                expected: self.container_extension.clone(),
            });
        }

        Ok(())
    }

    pub fn has_supported_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case(&self.container_extension))
            .unwrap_or(false)
    }

    /// `<stem><suffix>.<ext>` next to the input, keeping the input's extension
    pub fn derive_output_path(&self, input: &Path) -> TrimResult<PathBuf> {
        let stem = input.file_stem().ok_or_else(|| TrimError::InvalidRequest {
            message: format!("no file name in {}", input.display()),
        })?;

        let mut name = OsString::from(stem);
        name.push(&self.output_suffix);
        if let Some(ext) = input.extension() {
            name.push(".");
            name.push(ext);
        }

        let output = match input.parent() {
            Some(parent) => parent.join(name),
            None => PathBuf::from(name),
        };

        if output == input {
            return Err(TrimError::InvalidRequest {
                message: format!(
                    "output path would overwrite the input {}",
                    input.display()
                ),
            });
        }

        Ok(output)
    }

    /// Validate `folder/filename` and derive the full request
    pub fn build_request(
        &self,
        folder: &Path,
        filename: &str,
        start_offset: &str,
    ) -> TrimResult<ClipRequest> {
        let joined = folder.join(filename);
        let input_path = std::path::absolute(&joined).unwrap_or(joined);

        self.check_input(&input_path)?;
        let output_path = self.derive_output_path(&input_path)?;

        Ok(ClipRequest {
            input_path,
            start_offset: start_offset.to_string(),
            output_path,
        })
    }
}

#[cfg(test)]
mod tests;
