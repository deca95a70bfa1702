// Application layer - Use case interactors

pub mod auto_interactor;
pub mod clip_interactor;
pub mod container;
pub mod output_namer;
pub mod param_interactor;

// Re-export interactors
pub use auto_interactor::AutoModeInteractor;
pub use clip_interactor::ClipInteractor;
pub use output_namer::OutputNamer;
pub use param_interactor::ParamInteractor;
