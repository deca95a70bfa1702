use std::path::PathBuf;
use std::sync::Arc;

use crate::adapters::{
    ConsolePromptAdapter, DegenConfig, FFmpegAdapter, FFprobeAdapter, LocalFsAdapter,
};
use crate::app::clip_interactor::EngineSettings;
use crate::app::{AutoModeInteractor, ClipInteractor, OutputNamer, ParamInteractor};
use crate::ports::{ExecutePort, FsPort, ProbePort, PromptPort};

/// Locations of the external binaries
#[derive(Debug, Clone, PartialEq)]
pub struct EnginePaths {
    pub ffmpeg: PathBuf,
    pub ffprobe: PathBuf,
}

pub trait AppContainer: Send + Sync {
    fn probe_port(&self) -> Arc<dyn ProbePort>;
    fn fs_port(&self) -> Arc<dyn FsPort>;
    fn param_interactor(&self) -> Arc<ParamInteractor>;
    fn auto_interactor(&self) -> Arc<AutoModeInteractor>;
    fn clip_interactor(&self) -> Arc<ClipInteractor>;
}

pub struct DefaultAppContainer {
    probe_port: Arc<dyn ProbePort>,
    fs_port: Arc<dyn FsPort>,
    param_interactor: Arc<ParamInteractor>,
    auto_interactor: Arc<AutoModeInteractor>,
    clip_interactor: Arc<ClipInteractor>,
}

impl DefaultAppContainer {
    /// Wire the real adapters: the engine and prober at `paths`, outputs
    /// written to `working_dir`
    pub fn new(
        config: &DegenConfig,
        paths: &EnginePaths,
        working_dir: PathBuf,
        interactive: bool,
    ) -> Self {
        Self::with_ports(
            config,
            Arc::new(FFprobeAdapter::new(&paths.ffprobe)),
            Arc::new(FFmpegAdapter::new(&paths.ffmpeg)),
            Arc::new(LocalFsAdapter::new(working_dir)),
            Arc::new(ConsolePromptAdapter::new()),
            interactive,
        )
    }

    /// Wire the interactors around the given ports
    pub fn with_ports(
        config: &DegenConfig,
        probe_port: Arc<dyn ProbePort>,
        execute_port: Arc<dyn ExecutePort>,
        fs_port: Arc<dyn FsPort>,
        prompt_port: Arc<dyn PromptPort>,
        interactive: bool,
    ) -> Self {
        let namer = Arc::new(OutputNamer::new(Arc::clone(&fs_port)));

        let param_interactor = Arc::new(ParamInteractor::new(
            prompt_port,
            Arc::clone(&namer),
            interactive,
        ));

        let auto_interactor = Arc::new(AutoModeInteractor::new(
            Arc::clone(&probe_port),
            Arc::clone(&fs_port),
            namer,
            config.video_extensions.clone(),
            config.output_ext.clone(),
        ));

        let clip_interactor = Arc::new(ClipInteractor::new(
            execute_port,
            EngineSettings::from(config),
        ));

        Self {
            probe_port,
            fs_port,
            param_interactor,
            auto_interactor,
            clip_interactor,
        }
    }
}

impl AppContainer for DefaultAppContainer {
    fn probe_port(&self) -> Arc<dyn ProbePort> {
        Arc::clone(&self.probe_port)
    }

    fn fs_port(&self) -> Arc<dyn FsPort> {
        Arc::clone(&self.fs_port)
    }

    fn param_interactor(&self) -> Arc<ParamInteractor> {
        Arc::clone(&self.param_interactor)
    }

    fn auto_interactor(&self) -> Arc<AutoModeInteractor> {
        Arc::clone(&self.auto_interactor)
    }

    fn clip_interactor(&self) -> Arc<ClipInteractor> {
        Arc::clone(&self.clip_interactor)
    }
}
