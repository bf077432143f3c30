//! CLI module for TrimClip
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;

/// TrimClip
///
/// Cuts the beginning off an MP4 by stream-copying everything from a start
/// offset into `<name>_clip.mp4`, showing ffmpeg's progress as it goes.
#[derive(Parser, Debug)]
#[command(name = "trimclip")]
#[command(about = "Trim an MP4 to a start offset with ffmpeg, showing live progress")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Config file (default: ./trimclip.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the ffmpeg executable
    #[arg(long, global = true)]
    pub ffmpeg: Option<PathBuf>,

    /// Overwrite an existing output file
    #[arg(long, global = true)]
    pub overwrite: bool,

    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Keep everything from the start offset onwards
    Clip(args::ClipArgs),
    /// Report the duration ffmpeg sees in a file
    Inspect(args::InspectArgs),
}
