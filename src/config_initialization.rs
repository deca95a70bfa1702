//! Configuration initialization and hierarchy management
//!
//! Precedence, highest first: CLI flags, environment, TOML file, defaults.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::adapters::toml_config::DEFAULT_CONFIG_FILE;
use crate::adapters::{DegenConfig, EnvPathAdapter, TomlConfigAdapter};
use crate::app::container::EnginePaths;
use crate::cli::Cli;
use crate::domain::errors::DomainError;
use crate::error::{DegenError, DegenResult};

/// Fully resolved settings for one run
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub config: DegenConfig,
    pub engine_paths: EnginePaths,
}

/// Build the run configuration for `cli`
pub fn initialize_configuration(cli: &Cli, env: &EnvPathAdapter) -> DegenResult<RuntimeConfig> {
    let mut config = load_config_file(cli.config.as_deref(), Path::new(DEFAULT_CONFIG_FILE))?;
    apply_environment_overrides(&mut config, |key| env.get_env(key))?;
    apply_cli_overrides(&mut config, cli);
    config.validate()?;

    let engine_paths = resolve_engine_paths(&config, env)?;
    Ok(RuntimeConfig {
        config,
        engine_paths,
    })
}

/// Load the TOML layer; an explicit path must exist, the default one may not
pub fn load_config_file(explicit: Option<&Path>, default_path: &Path) -> DegenResult<DegenConfig> {
    if let Some(path) = explicit {
        return TomlConfigAdapter::load(path);
    }
    if default_path.is_file() {
        return TomlConfigAdapter::load(default_path);
    }
    debug!("No config file found, using defaults");
    Ok(DegenConfig::default())
}

/// Apply `DEGEN_*` variables read through `lookup`
pub fn apply_environment_overrides<F>(config: &mut DegenConfig, lookup: F) -> DegenResult<()>
where
    F: Fn(&str) -> Result<Option<String>, DomainError>,
{
    let mut overrides = 0;

    if let Some(value) = lookup("DEGEN_FFMPEG")? {
        config.ffmpeg = Some(PathBuf::from(value));
        overrides += 1;
    }
    if let Some(value) = lookup("DEGEN_FFPROBE")? {
        config.ffprobe = Some(PathBuf::from(value));
        overrides += 1;
    }
    if let Some(value) = lookup("DEGEN_LOG_LEVEL")? {
        config.log_level = value;
        overrides += 1;
    }
    if let Some(value) = lookup("DEGEN_PRESET")? {
        config.preset = value;
        overrides += 1;
    }
    if let Some(value) = lookup("DEGEN_CRF")? {
        config.crf = value.trim().parse().map_err(|_| DegenError::Config {
            message: format!("DEGEN_CRF must be a number between 0 and 51, got \"{}\"", value),
        })?;
        overrides += 1;
    }

    if overrides > 0 {
        debug!("Applied {} environment variable overrides", overrides);
    }
    Ok(())
}

/// Apply command-line overrides
pub fn apply_cli_overrides(config: &mut DegenConfig, cli: &Cli) {
    if let Some(ffmpeg) = &cli.ffmpeg {
        config.ffmpeg = Some(ffmpeg.clone());
    }
    if let Some(ffprobe) = &cli.ffprobe {
        config.ffprobe = Some(ffprobe.clone());
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }
}

/// Locate the engine and prober, configured paths first, then `PATH`
pub fn resolve_engine_paths(config: &DegenConfig, env: &EnvPathAdapter) -> DegenResult<EnginePaths> {
    let ffmpeg = locate(config.ffmpeg.as_ref(), "ffmpeg", "--ffmpeg / DEGEN_FFMPEG", env)?;
    let ffprobe = locate(config.ffprobe.as_ref(), "ffprobe", "--ffprobe / DEGEN_FFPROBE", env)?;
    Ok(EnginePaths { ffmpeg, ffprobe })
}

fn locate(
    configured: Option<&PathBuf>,
    name: &str,
    hint: &str,
    env: &EnvPathAdapter,
) -> DegenResult<PathBuf> {
    if let Some(path) = configured {
        return Ok(path.clone());
    }
    env.find_executable(name).ok_or_else(|| {
        DomainError::Usage(format!(
            "{} not found in PATH; install it or set {}",
            name, hint
        ))
        .into()
    })
}
