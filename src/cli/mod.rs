//! CLI module for the clip degenerator
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::Parser;

use crate::adapters::tracing_log::LogFormat;

pub mod commands;

/// Clip Degenerator
///
/// Cuts a sub-clip out of a video with ffmpeg. Missing clip name, start or
/// end are asked for interactively. With --auto, every
/// `degen-<start>-<end>-<name>` video in the directory becomes a clip.
#[derive(Parser, Debug)]
#[command(name = "degen")]
#[command(about = "Clip Degenerator - cut a sub-clip out of a video with ffmpeg")]
#[command(version)]
pub struct Cli {
    /// Input video file (not needed with --auto)
    #[arg(required_unless_present = "auto")]
    pub file: Option<PathBuf>,

    /// Clip start time (seconds, M:SS or NmSSs)
    pub start: Option<String>,

    /// Clip end time (seconds, M:SS or NmSSs)
    pub end: Option<String>,

    /// Clip name, without extension
    #[arg(short = 'o', long)]
    pub name: Option<String>,

    /// Disable audio in the clip
    #[arg(long = "no-audio", visible_aliases = ["an", "na", "noaudio"])]
    pub no_audio: bool,

    /// Disable video compression in the clip (stream copy)
    #[arg(long = "no-compress", visible_aliases = ["nc", "nocompress"])]
    pub no_compress: bool,

    /// Cut every degen-<start>-<end>-<name> video in the directory
    #[arg(short = 'a', long, visible_alias = "batch")]
    pub auto: bool,

    /// Directory scanned in auto mode (default: current directory)
    #[arg(long, value_name = "DIR", requires = "auto")]
    pub dir: Option<PathBuf>,

    /// Never prompt; fields not given take their defaults
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Resolve clips and print the engine commands without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Logging level
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    /// Configuration file
    #[arg(long, env = "DEGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to the ffmpeg binary
    #[arg(long)]
    pub ffmpeg: Option<PathBuf>,

    /// Path to the ffprobe binary
    #[arg(long)]
    pub ffprobe: Option<PathBuf>,
}
