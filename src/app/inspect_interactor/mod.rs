// Inspect interactor - Reports the probed duration of a media file

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::adapters::ClipConfig;
use crate::domain::model::TimeSpec;
use crate::error::{TrimError, TrimResult};
use crate::ports::ProcessLauncher;
use crate::probe::DurationProbe;

/// Result of inspecting one file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectReport {
    pub input: PathBuf,
    /// `None` when the tool reported no duration
    pub duration_seconds: Option<f64>,
    pub duration: Option<String>,
}

impl InspectReport {
    fn new(input: PathBuf, duration: TimeSpec) -> Self {
        let known = (!duration.is_zero()).then_some(duration);
        Self {
            input,
            duration_seconds: known.map(|d| d.as_seconds()),
            duration: known.map(|d| d.format_clock()),
        }
    }
}

/// Interactor for the inspect use case
pub struct InspectInteractor {
    probe: DurationProbe,
}

impl InspectInteractor {
    pub fn new(launcher: Arc<dyn ProcessLauncher>, config: &ClipConfig) -> Self {
        Self {
            probe: DurationProbe::new(launcher, config.ffmpeg_path.clone()),
        }
    }

    pub async fn inspect(&self, input: &Path) -> TrimResult<InspectReport> {
        if !input.is_file() {
            return Err(TrimError::InputNotFound {
                path: input.display().to_string(),
            });
        }

        let duration = self.probe.probe(input).await?;
        info!("Inspected {}: {}", input.display(), duration);
        Ok(InspectReport::new(input.to_path_buf(), duration))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_for_unknown_duration() {
        let report = InspectReport::new(PathBuf::from("a.mp4"), TimeSpec::ZERO);
        assert_eq!(report.duration_seconds, None);
        assert_eq!(report.duration, None);
    }

    #[test]
    fn test_report_serializes() {
        let report = InspectReport::new(
            PathBuf::from("a.mp4"),
            TimeSpec::from_components(0, 0, 10, 50),
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["duration"], "00:00:10.50");
        assert_eq!(json["duration_seconds"], 10.5);
        assert_eq!(json["input"], "a.mp4");
    }
}
