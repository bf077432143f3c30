//! Progress extraction from the tool's diagnostic lines

use tracing::trace;

use crate::domain::model::TimeSpec;

/// Marker preceding the elapsed output time in a status line
pub const TIME_MARKER: &str = "time=";

/// Width of the `HH:MM:SS.cc` field following the marker
pub const CLOCK_WIDTH: usize = 11;

/// Extract the elapsed time from one diagnostic line.
///
/// Only the first marker is considered. A line without the marker, or with
/// fewer than eleven well-formed characters after it (`time=N/A`, a line cut
/// mid-write), yields `None`.
pub fn parse_time(line: &str) -> Option<TimeSpec> {
    let start = line.find(TIME_MARKER)? + TIME_MARKER.len();
    let field = line.get(start..start + CLOCK_WIDTH)?;
    let parsed = TimeSpec::parse_clock(field);
    if parsed.is_none() {
        trace!(field, "ignoring malformed progress field");
    }
    parsed
}

/// Convert one diagnostic line into a progress ratio.
///
/// Yields `None` when the line carries no parseable time or the duration is
/// zero (unknown). The ratio is not clamped: a sample past the probed
/// duration produces a value above 1.
pub fn parse_progress(line: &str, total: &TimeSpec) -> Option<f64> {
    if total.is_zero() {
        return None;
    }
    let elapsed = parse_time(line)?;
    Some(elapsed.as_seconds() / total.as_seconds())
}
