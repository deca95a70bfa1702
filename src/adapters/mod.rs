// Adapters - External system implementations

pub mod console_prompt;
pub mod env_path;
pub mod exec_ffmpeg;
pub mod fs_local;
#[cfg(test)]
pub mod mock;
pub mod probe_ffprobe;
pub mod toml_config;
pub mod tracing_log;

// Re-export adapters
pub use console_prompt::ConsolePromptAdapter;
pub use env_path::EnvPathAdapter;
pub use exec_ffmpeg::FFmpegAdapter;
pub use fs_local::LocalFsAdapter;
#[cfg(test)]
pub use mock::{MockExecutionAdapter, MockFsAdapter, MockProbeAdapter, ScriptedPromptAdapter};
pub use probe_ffprobe::FFprobeAdapter;
pub use toml_config::{DegenConfig, TomlConfigAdapter};
pub use tracing_log::LogFormat;
