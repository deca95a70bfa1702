// TOML config adapter - Configuration management using TOML files

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::adapters::tracing_log::LogFormat;
use crate::error::{DegenError, DegenResult};

/// Name of the config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "degen.toml";

/// Runtime configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DegenConfig {
    /// Engine binary; searched on PATH when unset
    pub ffmpeg: Option<PathBuf>,
    /// Prober binary; searched on PATH when unset
    pub ffprobe: Option<PathBuf>,
    pub log_level: String,
    pub log_format: LogFormat,
    /// Codec used when compressing
    pub video_codec: String,
    pub preset: String,
    pub crf: u8,
    /// `-loglevel` passed to the engine
    pub engine_log_level: String,
    /// Extensions accepted as source videos
    pub video_extensions: Vec<String>,
    /// Container of single-mode outputs
    pub output_ext: String,
}

impl Default for DegenConfig {
    fn default() -> Self {
        Self {
            ffmpeg: None,
            ffprobe: None,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            video_codec: "h264".to_string(),
            preset: "slow".to_string(),
            crf: 22,
            engine_log_level: "warning".to_string(),
            video_extensions: vec!["mp4".to_string(), "avi".to_string()],
            output_ext: "mp4".to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    degen: DegenConfig,
}

impl DegenConfig {
    /// Validate configuration
    pub fn validate(&self) -> DegenResult<()> {
        if self.crf > 51 {
            return Err(DegenError::Config {
                message: format!("crf value {} cannot exceed 51", self.crf),
            });
        }
        if self.video_extensions.is_empty() {
            return Err(DegenError::Config {
                message: "video_extensions cannot be empty".to_string(),
            });
        }
        if self.output_ext.is_empty() || self.output_ext.contains('.') {
            return Err(DegenError::Config {
                message: format!("invalid output_ext \"{}\"", self.output_ext),
            });
        }
        Ok(())
    }
}

/// TOML configuration adapter
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Parse configuration from the `[degen]` table of a TOML document
    pub fn parse(toml_content: &str) -> DegenResult<DegenConfig> {
        let file: ConfigFile = toml::from_str(toml_content).map_err(|e| DegenError::Config {
            message: format!("Failed to parse TOML config: {}", e),
        })?;
        Ok(file.degen)
    }

    /// Load configuration from a file
    pub fn load(file_path: &Path) -> DegenResult<DegenConfig> {
        let content = std::fs::read_to_string(file_path).map_err(|e| DegenError::Config {
            message: format!("Failed to read config file {}: {}", file_path.display(), e),
        })?;
        Self::parse(&content)
    }
}
