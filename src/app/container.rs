use std::sync::Arc;

use crate::adapters::ClipConfig;
use crate::app::{clip_interactor::ClipInteractor, inspect_interactor::InspectInteractor};
use crate::engine::runner::ProcessRunner;
use crate::error::TrimResult;
use crate::ports::ProcessLauncher;

pub trait AppContainer: Send + Sync {
    fn clip_interactor(&self) -> Arc<ClipInteractor>;
    fn inspect_interactor(&self) -> Arc<InspectInteractor>;
}

pub struct DefaultAppContainer {
    clip_interactor: Arc<ClipInteractor>,
    inspect_interactor: Arc<InspectInteractor>,
}

impl DefaultAppContainer {
    pub fn new(config: &ClipConfig) -> TrimResult<Self> {
        Self::with_launcher(config, Arc::new(ProcessRunner::new()))
    }

    pub fn with_launcher(
        config: &ClipConfig,
        launcher: Arc<dyn ProcessLauncher>,
    ) -> TrimResult<Self> {
        config.validate()?;

        let clip_interactor = Arc::new(ClipInteractor::new(Arc::clone(&launcher), config));
        let inspect_interactor = Arc::new(InspectInteractor::new(launcher, config));

        Ok(Self {
            clip_interactor,
            inspect_interactor,
        })
    }
}

impl AppContainer for DefaultAppContainer {
    fn clip_interactor(&self) -> Arc<ClipInteractor> {
        Arc::clone(&self.clip_interactor)
    }

    fn inspect_interactor(&self) -> Arc<InspectInteractor> {
        Arc::clone(&self.inspect_interactor)
    }
}
