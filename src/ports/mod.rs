// Ports - Interface definitions (contracts)

use std::ffi::OsString;
use std::path::Path;

use async_trait::async_trait;

use crate::engine::runner::RunningProcess;
use crate::error::TrimResult;

/// Port for starting external processes
#[async_trait]
pub trait ProcessLauncher: Send + Sync {
    /// Resolve `program` and spawn it with `args`.
    ///
    /// Fails with `ToolNotFound` before anything is spawned when the program
    /// can be found neither at the given path nor on the search path.
    async fn launch(&self, program: &Path, args: &[OsString]) -> TrimResult<RunningProcess>;
}

/// Sink for progress of one clip run.
///
/// Receives zero or more ratios followed by exactly one completion. Calls
/// arrive on the worker task; implementations that drive a UI must hop to
/// their own context (see [`crate::adapters::ChannelObserver`]).
pub trait ProgressObserver: Send + Sync {
    /// Progress as a fraction of the probed duration. Not clamped and not
    /// necessarily monotonic.
    fn on_progress(&self, ratio: f64);

    /// Terminal notification, called once per run
    fn on_complete(&self, success: bool, message: &str);
}
