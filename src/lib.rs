//! TrimClip library
//!
//! Trims an MP4 from a start offset to its end by driving the ffmpeg
//! executable, and reports progress by reading ffmpeg's status output while
//! the copy is underway.
//!
//! The pieces, bottom up:
//!
//! - [`engine::command`] builds the argument lists for the probe and the trim
//! - [`engine::runner`] spawns ffmpeg and merges its output into one line feed
//! - [`probe`] finds the input's duration in ffmpeg's report
//! - [`engine::progress`] turns `time=` samples into completion ratios
//! - [`app::ClipInteractor`] sequences a run and reports to a [`ProgressObserver`]

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod engine;
pub mod error;
pub mod ports;
pub mod probe;
pub mod utils;

// Re-export commonly used types
pub use adapters::{ChannelObserver, ClipConfig, ClipEvent};
pub use app::{ClipInteractor, DefaultAppContainer, InspectInteractor};
pub use domain::model::{ClipRequest, ClipState, RunOutcome, TimeSpec};
pub use domain::rules::ClipRules;
pub use engine::ProcessRunner;
pub use error::{TrimError, TrimResult};
pub use ports::{ProcessLauncher, ProgressObserver};
pub use probe::DurationProbe;
