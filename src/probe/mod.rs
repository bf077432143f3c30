//! Media duration probing

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::model::TimeSpec;

pub mod inspector;

pub use inspector::DurationProbe;

static DURATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Duration: (\d{2}):(\d{2}):(\d{2})\.(\d{2})").expect("duration pattern is valid")
});

/// Find the first `Duration: HH:MM:SS.cc` field in the tool's report.
///
/// Returns `None` when there is no such field, e.g. `Duration: N/A` for
/// streams without a known length.
pub fn extract_duration(report: &str) -> Option<TimeSpec> {
    let captures = DURATION_PATTERN.captures(report)?;
    let field = |index: usize| -> Option<u32> { captures.get(index)?.as_str().parse().ok() };

    Some(TimeSpec::from_components(
        field(1)?,
        field(2)?,
        field(3)?,
        field(4)?,
    ))
}
