//! TrimClip
//!
//! Cuts the head off an MP4: everything from a start offset onwards is
//! stream-copied by ffmpeg into `<name>_clip.mp4` while a progress bar tracks
//! how far ffmpeg has got.
//!
//! # Usage
//!
//! ```bash
//! trimclip clip --input "holiday.mp4" --start 00:01:30
//! trimclip inspect --input "holiday.mp4" --json
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use trimclip::app::DefaultAppContainer;
use trimclip::cli::{commands, Cli, Commands};
use trimclip::config_initialization::initialize_configuration;
use trimclip::utils::logging::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = initialize_configuration(&cli).context("Failed to load configuration")?;
    init_logging(&config.log_level, config.json_logs)?;

    info!("Starting TrimClip");
    info!("Using ffmpeg at {}", config.ffmpeg_path.display());

    let container = DefaultAppContainer::new(&config)?;

    match cli.command {
        Commands::Clip(args) => {
            info!("Executing clip command");
            commands::clip(args, &container).await?;
        }
        Commands::Inspect(args) => {
            info!("Executing inspect command");
            commands::inspect(args, &container).await?;
        }
    }

    info!("TrimClip completed successfully");
    Ok(())
}
