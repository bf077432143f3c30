// Domain models - Core types and data structures

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{TrimError, TrimResult};

/// Non-negative time value with centisecond precision.
///
/// Used both for the probed media duration and for the `time=` samples the
/// tool prints while running. A zero value means "unknown" when it comes
/// out of a probe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSpec {
    centiseconds: u64,
}

impl TimeSpec {
    pub const ZERO: TimeSpec = TimeSpec { centiseconds: 0 };

    /// Create a new TimeSpec from hours, minutes, seconds, centiseconds
    pub fn from_components(hours: u32, minutes: u32, seconds: u32, centiseconds: u32) -> Self {
        let total = u64::from(hours) * 360_000
            + u64::from(minutes) * 6_000
            + u64::from(seconds) * 100
            + u64::from(centiseconds);
        Self {
            centiseconds: total,
        }
    }

    /// Create from fractional seconds, rounding to the nearest centisecond.
    /// Negative or non-finite input collapses to zero.
    pub fn from_seconds(seconds: f64) -> Self {
        if !seconds.is_finite() || seconds <= 0.0 {
            return Self::ZERO;
        }
        Self {
            centiseconds: (seconds * 100.0).round() as u64,
        }
    }

    /// Split into (hours, minutes, seconds, centiseconds)
    pub fn components(&self) -> (u64, u32, u32, u32) {
        let hours = self.centiseconds / 360_000;
        let rest = self.centiseconds % 360_000;
        let minutes = (rest / 6_000) as u32;
        let seconds = ((rest % 6_000) / 100) as u32;
        let centis = (rest % 100) as u32;
        (hours, minutes, seconds, centis)
    }

    pub fn centiseconds(&self) -> u64 {
        self.centiseconds
    }

    pub fn as_seconds(&self) -> f64 {
        self.centiseconds as f64 / 100.0
    }

    pub fn is_zero(&self) -> bool {
        self.centiseconds == 0
    }

    /// Parse the tool's fixed-width clock text, exactly `HH:MM:SS.cc`.
    pub fn parse_clock(text: &str) -> Option<Self> {
        let bytes = text.as_bytes();
        if bytes.len() != 11 || bytes[2] != b':' || bytes[5] != b':' || bytes[8] != b'.' {
            return None;
        }

        let field = |range: std::ops::Range<usize>| -> Option<u32> {
            let digits = &bytes[range];
            if !digits.iter().all(u8::is_ascii_digit) {
                return None;
            }
            Some(digits.iter().fold(0, |acc, d| acc * 10 + u32::from(d - b'0')))
        };

        let hours = field(0..2)?;
        let minutes = field(3..5)?;
        let seconds = field(6..8)?;
        let centis = field(9..11)?;
        if minutes >= 60 || seconds >= 60 {
            return None;
        }

        Some(Self::from_components(hours, minutes, seconds, centis))
    }

    /// Parse a user supplied offset: seconds, `MM:SS[.ff]` or `HH:MM:SS[.ff]`
    pub fn parse(time_str: &str) -> TrimResult<Self> {
        let trimmed = time_str.trim();
        let invalid = || TrimError::InvalidTimeFormat {
            time: time_str.to_string(),
        };

        // Digits with an optional `.` fraction; no signs or exponents
        let seconds_field = |text: &str| -> TrimResult<f64> {
            let (whole, fraction) = match text.split_once('.') {
                Some((whole, fraction)) => (whole, Some(fraction)),
                None => (text, None),
            };
            let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
            if !digits(whole) || fraction.is_some_and(|f| !digits(f)) {
                return Err(invalid());
            }
            text.parse::<f64>().map_err(|_| invalid())
        };
        let whole_field = |text: &str| -> TrimResult<u32> {
            if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            text.parse::<u32>().map_err(|_| invalid())
        };

        let parts: Vec<&str> = trimmed.split(':').collect();
        let total = match parts.as_slice() {
            [seconds] => seconds_field(seconds)?,
            [minutes, seconds] => {
                let minutes = whole_field(minutes)?;
                let seconds = seconds_field(seconds)?;
                if seconds >= 60.0 {
                    return Err(invalid());
                }
                f64::from(minutes) * 60.0 + seconds
            }
            [hours, minutes, seconds] => {
                let hours = whole_field(hours)?;
                let minutes = whole_field(minutes)?;
                let seconds = seconds_field(seconds)?;
                if minutes >= 60 || seconds >= 60.0 {
                    return Err(invalid());
                }
                f64::from(hours) * 3600.0 + f64::from(minutes) * 60.0 + seconds
            }
            _ => return Err(invalid()),
        };

        Ok(Self::from_seconds(total))
    }

    /// Format as HH:MM:SS.cc, the tool's own notation
    pub fn format_clock(&self) -> String {
        let (hours, minutes, seconds, centis) = self.components();
        format!("{:02}:{:02}:{:02}.{:02}", hours, minutes, seconds, centis)
    }
}

impl fmt::Display for TimeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_clock())
    }
}

/// A validated request to trim one file.
///
/// Built by [`crate::domain::rules::ClipRules::build_request`], which
/// guarantees the input exists, has the supported extension and that the
/// derived output differs from the input.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipRequest {
    pub input_path: PathBuf,
    /// Passed to the tool verbatim
    pub start_offset: String,
    pub output_path: PathBuf,
}

impl ClipRequest {
    pub fn input(&self) -> &Path {
        &self.input_path
    }

    pub fn output(&self) -> &Path {
        &self.output_path
    }
}

/// Terminal result of one trim run
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub exit_code: i32,
    /// Full captured error-stream content
    pub diagnostics: String,
    pub output_path: PathBuf,
}

impl RunOutcome {
    pub fn succeeded(&self) -> bool {
        self.exit_code == 0
    }

    /// Human-readable message for the terminal notification
    pub fn message(&self) -> String {
        if self.succeeded() {
            format!("Clip written to {}", self.output_path.display())
        } else if self.diagnostics.trim().is_empty() {
            format!("ffmpeg exited with code {}", self.exit_code)
        } else {
            self.diagnostics.trim_end().to_string()
        }
    }

    /// Convert a non-zero exit into [`TrimError::ProcessFailed`]
    pub fn into_result(self) -> TrimResult<RunOutcome> {
        if self.succeeded() {
            Ok(self)
        } else {
            Err(TrimError::ProcessFailed {
                exit_code: self.exit_code,
                diagnostics: self.diagnostics,
            })
        }
    }
}

/// Lifecycle of one clip run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipState {
    Idle,
    Validating,
    Probing,
    Running,
    Succeeded,
    Failed,
}

impl ClipState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ClipState::Succeeded | ClipState::Failed)
    }

    fn can_advance_to(&self, next: ClipState) -> bool {
        use ClipState::*;
        matches!(
            (self, next),
            (Idle, Validating)
                | (Validating, Probing)
                | (Validating, Failed)
                | (Probing, Running)
                | (Probing, Failed)
                | (Running, Succeeded)
                | (Running, Failed)
        )
    }
}

impl fmt::Display for ClipState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClipState::Idle => "idle",
            ClipState::Validating => "validating",
            ClipState::Probing => "probing",
            ClipState::Running => "running",
            ClipState::Succeeded => "succeeded",
            ClipState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// One-shot state machine; a new request gets a new instance
#[derive(Debug)]
pub struct ClipStateMachine {
    state: ClipState,
}

impl Default for ClipStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipStateMachine {
    pub fn new() -> Self {
        Self {
            state: ClipState::Idle,
        }
    }

    pub fn state(&self) -> ClipState {
        self.state
    }

    pub fn advance(&mut self, next: ClipState) -> TrimResult<ClipState> {
        if !self.state.can_advance_to(next) {
            return Err(TrimError::InvalidRequest {
                message: format!("illegal transition {} -> {}", self.state, next),
            });
        }
        tracing::debug!(from = %self.state, to = %next, "clip state transition");
        self.state = next;
        Ok(next)
    }
}

#[cfg(test)]
mod tests;
