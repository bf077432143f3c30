//! Common utilities and helpers

use std::io::{self, Write};
use std::time::{Duration, Instant};

pub mod logging;

/// Width of the terminal progress bar in cells
pub const PROGRESS_BAR_WIDTH: usize = 30;

/// Utility functions for TrimClip
pub struct Utils;

impl Utils {
    /// Format elapsed wall time for display
    pub fn format_elapsed(duration: Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h{:02}m{:02}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m{:02}s", minutes, seconds)
        } else {
            format!("{}.{:01}s", seconds, duration.subsec_millis() / 100)
        }
    }

    /// Clamp a progress ratio into `[0, 1]`; NaN reads as zero
    pub fn clamp_ratio(ratio: f64) -> f64 {
        if ratio.is_nan() {
            0.0
        } else {
            ratio.clamp(0.0, 1.0)
        }
    }

    /// Render `[#####-----]  50.0%` for a ratio
    pub fn progress_bar(ratio: f64, width: usize) -> String {
        let ratio = Self::clamp_ratio(ratio);
        let filled = ((ratio * width as f64).round() as usize).min(width);
        format!(
            "[{}{}] {:5.1}%",
            "#".repeat(filled),
            "-".repeat(width - filled),
            ratio * 100.0
        )
    }
}

/// Redraws a single progress line in place
pub struct ProgressRenderer<W: Write> {
    out: W,
    started: Instant,
    last_permille: Option<u32>,
}

impl ProgressRenderer<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> ProgressRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            started: Instant::now(),
            last_permille: None,
        }
    }

    /// Draw the bar for `ratio`, skipping redraws that would look identical
    pub fn update(&mut self, ratio: f64) {
        let permille = (Utils::clamp_ratio(ratio) * 1000.0).round() as u32;
        if self.last_permille == Some(permille) {
            return;
        }
        self.last_permille = Some(permille);

        // Terminal output is best effort
        let _ = write!(
            self.out,
            "\r{} {}",
            Utils::progress_bar(ratio, PROGRESS_BAR_WIDTH),
            Utils::format_elapsed(self.started.elapsed())
        );
        let _ = self.out.flush();
    }

    /// End the progress line if one was drawn
    pub fn finish(&mut self) {
        if self.last_permille.take().is_some() {
            let _ = writeln!(self.out);
            let _ = self.out.flush();
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
