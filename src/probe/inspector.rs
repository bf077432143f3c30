//! Duration probe backed by the external tool

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::model::TimeSpec;
use crate::engine::command::build_probe_args;
use crate::error::TrimResult;
use crate::ports::ProcessLauncher;
use crate::probe::extract_duration;

/// Runs the tool in report mode and reads the duration off its stderr
pub struct DurationProbe {
    launcher: Arc<dyn ProcessLauncher>,
    tool: PathBuf,
}

impl DurationProbe {
    pub fn new(launcher: Arc<dyn ProcessLauncher>, tool: impl Into<PathBuf>) -> Self {
        Self {
            launcher,
            tool: tool.into(),
        }
    }

    /// Probe `input` for its total duration.
    ///
    /// Completes before returning; the trim's progress depends on it. Only a
    /// missing tool or a failed spawn is an error. No duration in the report
    /// gives [`TimeSpec::ZERO`], which callers must read as "unknown".
    pub async fn probe(&self, input: &Path) -> TrimResult<TimeSpec> {
        info!("Probing duration of {}", input.display());

        let process = self
            .launcher
            .launch(&self.tool, &build_probe_args(input))
            .await?;
        let captured = process.collect().await?;

        // Report mode has no output file, so the tool always exits non-zero
        debug!(exit_code = captured.exit_code, "probe finished");

        match extract_duration(&captured.stderr) {
            Some(duration) => {
                info!("Media duration: {}", duration);
                Ok(duration)
            }
            None => {
                warn!(
                    "No duration found for {}; progress will not be reported",
                    input.display()
                );
                Ok(TimeSpec::ZERO)
            }
        }
    }
}
