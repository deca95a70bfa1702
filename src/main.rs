//! Clip Degenerator
//!
//! Cut a sub-clip out of a video with ffmpeg, compressing it with h264 or
//! stream-copying it, with or without audio.
//!
//! # Usage
//!
//! ```bash
//! degen holiday.mp4 1:05 1m30s --name beach
//! degen holiday.mp4 --no-audio --no-compress
//! degen --auto
//! ```

use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use degen_cli::cli::commands::{self, print_banner};
use degen_cli::cli::Cli;
use degen_cli::DegenError;

#[tokio::main]
async fn main() -> ExitCode {
    if std::env::args_os().len() < 2 {
        print_banner();
        let _ = Cli::command().print_help();
        println!();
        return ExitCode::SUCCESS;
    }

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            let code = e
                .downcast_ref::<DegenError>()
                .map(DegenError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code as u8)
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    commands::run(cli).await?;
    Ok(())
}
