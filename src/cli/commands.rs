//! Command implementations

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::adapters::{ChannelObserver, ClipEvent};
use crate::app::AppContainer;
use crate::cli::args::{ClipArgs, InspectArgs};
use crate::domain::model::TimeSpec;
use crate::utils::ProgressRenderer;

/// Execute the clip command
pub async fn clip(args: ClipArgs, container: &dyn AppContainer) -> Result<()> {
    info!("Starting clip operation");
    info!("Input: {}", args.input.display());
    info!("Start: {}", args.start);

    // Checked here, but ffmpeg still receives the text as typed
    TimeSpec::parse(&args.start)
        .with_context(|| format!("Invalid start time '{}'", args.start))?;

    let (folder, filename) = split_input(&args.input)?;
    let (observer, mut events) = ChannelObserver::channel();

    let handle = match container
        .clip_interactor()
        .trim(&folder, &filename, &args.start, Arc::new(observer))
    {
        Ok(handle) => Some(handle),
        Err(e) => {
            warn!("Request rejected: {}", e);
            None
        }
    };

    let mut renderer = ProgressRenderer::stderr();
    let mut succeeded = false;
    while let Some(event) = events.recv().await {
        match event {
            ClipEvent::Progress(ratio) => renderer.update(ratio),
            ClipEvent::Complete { success, message } => {
                renderer.finish();
                if success {
                    println!("{}", message);
                } else {
                    eprintln!("Clip failed: {}", message);
                }
                succeeded = success;
                break;
            }
        }
    }

    if let Some(handle) = handle {
        if let Err(e) = handle.await.context("clip task did not finish")? {
            info!("Clip run ended with error: {}", e);
        }
    }

    if !succeeded {
        anyhow::bail!("clipping {} failed", args.input.display());
    }

    info!("Clip operation completed successfully");
    Ok(())
}

/// Execute the inspect command
pub async fn inspect(args: InspectArgs, container: &dyn AppContainer) -> Result<()> {
    info!("Starting inspect operation");

    let report = container
        .inspect_interactor()
        .inspect(&args.input)
        .await
        .with_context(|| format!("Failed to inspect {}", args.input.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let duration = match (&report.duration, report.duration_seconds) {
            (Some(clock), Some(seconds)) => format!("{} ({:.2}s)", clock, seconds),
            _ => "unknown".to_string(),
        };
        println!("File:     {}", report.input.display());
        println!("Duration: {}", duration);
    }

    Ok(())
}

/// Split an input path into the folder and file name the interactor takes
fn split_input(input: &Path) -> Result<(PathBuf, String)> {
    let filename = input
        .file_name()
        .with_context(|| format!("No file name in {}", input.display()))?
        .to_str()
        .with_context(|| format!("File name is not valid UTF-8: {}", input.display()))?
        .to_string();

    let folder = match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok((folder, filename))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_input() {
        let (folder, filename) = split_input(Path::new("/videos/my clip.mp4")).unwrap();
        assert_eq!(folder, PathBuf::from("/videos"));
        assert_eq!(filename, "my clip.mp4");
    }

    #[test]
    fn test_split_bare_file_name() {
        let (folder, filename) = split_input(Path::new("a.mp4")).unwrap();
        assert_eq!(folder, PathBuf::from("."));
        assert_eq!(filename, "a.mp4");
    }

    #[test]
    fn test_split_rejects_directory_like_input() {
        assert!(split_input(Path::new("/")).is_err());
        assert!(split_input(Path::new("..")).is_err());
    }
}
