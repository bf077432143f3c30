// Clip interactor - Orchestrates the trim use case

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, trace, warn};

use crate::adapters::ClipConfig;
use crate::domain::model::*;
use crate::domain::rules::ClipRules;
use crate::engine::command::build_trim_args;
use crate::engine::progress::parse_progress;
use crate::engine::runner::OutputSource;
use crate::error::{TrimError, TrimResult};
use crate::ports::*;
use crate::probe::DurationProbe;

/// Interactor for the trim use case.
///
/// Every call drives a fresh [`ClipStateMachine`]; the observer hears exactly
/// one completion per call, whichever state the run ends in.
pub struct ClipInteractor {
    launcher: Arc<dyn ProcessLauncher>,
    rules: ClipRules,
    tool: PathBuf,
    overwrite: bool,
}

impl ClipInteractor {
    /// Create new clip interactor with an injected launcher
    pub fn new(launcher: Arc<dyn ProcessLauncher>, config: &ClipConfig) -> Self {
        Self {
            launcher,
            rules: config.rules(),
            tool: config.ffmpeg_path.clone(),
            overwrite: config.overwrite,
        }
    }

    /// Trim `folder/filename` from `start_offset` to the end.
    ///
    /// Validation runs synchronously: on failure the observer is notified,
    /// the error returned and no process is spawned. Otherwise the run moves
    /// to a background task whose handle is returned.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime; threads without one use
    /// [`ClipInteractor::trim_on`].
    pub fn trim(
        self: &Arc<Self>,
        folder: &Path,
        filename: &str,
        start_offset: &str,
        observer: Arc<dyn ProgressObserver>,
    ) -> TrimResult<JoinHandle<TrimResult<RunOutcome>>> {
        self.trim_on(&Handle::current(), folder, filename, start_offset, observer)
    }

    /// Like [`ClipInteractor::trim`], spawning the run on `runtime`
    pub fn trim_on(
        self: &Arc<Self>,
        runtime: &Handle,
        folder: &Path,
        filename: &str,
        start_offset: &str,
        observer: Arc<dyn ProgressObserver>,
    ) -> TrimResult<JoinHandle<TrimResult<RunOutcome>>> {
        let mut machine = ClipStateMachine::new();
        machine.advance(ClipState::Validating)?;

        let request = match self.rules.build_request(folder, filename, start_offset) {
            Ok(request) => request,
            Err(e) => {
                Self::fail(&mut machine, observer.as_ref(), &e.to_string());
                return Err(e);
            }
        };

        let interactor = Arc::clone(self);
        Ok(runtime.spawn(async move {
            interactor.run_validated(request, machine, observer).await
        }))
    }

    /// Run a request on the current task
    pub async fn run(
        &self,
        request: ClipRequest,
        observer: Arc<dyn ProgressObserver>,
    ) -> TrimResult<RunOutcome> {
        let mut machine = ClipStateMachine::new();
        machine.advance(ClipState::Validating)?;

        if let Err(e) = self.validate(&request) {
            Self::fail(&mut machine, observer.as_ref(), &e.to_string());
            return Err(e);
        }

        self.run_validated(request, machine, observer).await
    }

    fn validate(&self, request: &ClipRequest) -> TrimResult<()> {
        self.rules.check_input(&request.input_path)?;
        if request.output_path == request.input_path {
            return Err(TrimError::InvalidRequest {
                message: format!(
                    "output path would overwrite the input {}",
                    request.input_path.display()
                ),
            });
        }
        Ok(())
    }

    async fn run_validated(
        &self,
        request: ClipRequest,
        mut machine: ClipStateMachine,
        observer: Arc<dyn ProgressObserver>,
    ) -> TrimResult<RunOutcome> {
        info!(
            "Trimming {} from {} into {}",
            request.input_path.display(),
            request.start_offset,
            request.output_path.display()
        );

        let result = self
            .probe_and_trim(&request, &mut machine, observer.as_ref())
            .await;

        match &result {
            Ok(outcome) if outcome.succeeded() => {
                Self::advance_or_warn(&mut machine, ClipState::Succeeded);
                info!("Clip written to {}", outcome.output_path.display());
                observer.on_complete(true, &outcome.message());
            }
            Ok(outcome) => {
                error!(exit_code = outcome.exit_code, "ffmpeg reported failure");
                Self::fail(&mut machine, observer.as_ref(), &outcome.message());
            }
            Err(e) => {
                error!("Clip run failed: {}", e);
                Self::fail(&mut machine, observer.as_ref(), &e.to_string());
            }
        }

        result
    }

    async fn probe_and_trim(
        &self,
        request: &ClipRequest,
        machine: &mut ClipStateMachine,
        observer: &dyn ProgressObserver,
    ) -> TrimResult<RunOutcome> {
        machine.advance(ClipState::Probing)?;
        let duration = DurationProbe::new(Arc::clone(&self.launcher), &self.tool)
            .probe(&request.input_path)
            .await?;

        machine.advance(ClipState::Running)?;
        let args = build_trim_args(
            &request.input_path,
            &request.output_path,
            &request.start_offset,
            self.overwrite,
        );
        let mut process = self.launcher.launch(&self.tool, &args).await?;
        debug!(tool = process.tool(), pid = ?process.id(), "trim process started");
        let mut lines = process.take_lines();

        let consume = async {
            let mut diagnostics = String::new();
            let mut samples = 0usize;
            if let Some(lines) = lines.as_mut() {
                while let Some(line) = lines.next().await {
                    if line.source == OutputSource::Stderr {
                        diagnostics.push_str(&line.text);
                        diagnostics.push('\n');
                    }

                    if line.text.trim().is_empty() {
                        continue;
                    }
                    debug!(source = ?line.source, "ffmpeg: {}", line.text);

                    if let Some(ratio) = parse_progress(&line.text, &duration) {
                        trace!(ratio, "progress sample");
                        samples += 1;
                        observer.on_progress(ratio);
                    }
                }
            }
            (diagnostics, samples)
        };

        let ((diagnostics, samples), exit) = tokio::join!(consume, process.wait());
        let exit_code = exit?;
        debug!(exit_code, samples, "trim process finished");

        Ok(RunOutcome {
            exit_code,
            diagnostics,
            output_path: request.output_path.clone(),
        })
    }

    fn fail(machine: &mut ClipStateMachine, observer: &dyn ProgressObserver, message: &str) {
        Self::advance_or_warn(machine, ClipState::Failed);
        observer.on_complete(false, message);
    }

    fn advance_or_warn(machine: &mut ClipStateMachine, next: ClipState) {
        if let Err(e) = machine.advance(next) {
            warn!("{}", e);
        }
    }
}
