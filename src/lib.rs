//! Clip Degenerator library
//!
//! Cuts sub-clips out of videos by driving an external ffmpeg process.
//! Clip parameters come from the command line, interactive prompts, or
//! (in auto mode) from `degen-<start>-<end>-<name>` file names.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod error;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use domain::errors::DomainError;
pub use domain::model::{ClipFlags, ClipJob, JobReport, OutputName, TimeSpec};
pub use error::{DegenError, DegenResult};
