//! Clock-time arithmetic on minute offsets from midnight.
//!
//! All schedule math runs on plain `u32` minutes. Strings only appear at the
//! edges: parsing the raw schedule text and rendering results.

use crate::error::{Result, SchedulerError};

/// Size of one candidate unit for recommendations, in minutes.
pub const SLOT_MINUTES: u32 = 30;

/// Latest window boundary considered by the recommender (18:30).
pub const HORIZON: u32 = 18 * 60 + 30;

/// Earliest starting time offered to pickers (07:00).
pub const PICKER_START: u32 = 7 * 60;

/// Minimum overlap for a person to count as partially available.
pub const PARTIAL_OVERLAP_MINUTES: u32 = 30;

/// Parse `"HH:MM"` into minutes since midnight.
///
/// Lenient about shape: surrounding whitespace is ignored, the minutes part
/// defaults to 0 when omitted or empty (`"9"` and `"9:"` are both 540), and
/// anything after a second colon is ignored.
///
/// # Errors
/// Returns `SchedulerError::InvalidTime` if the hour part is empty, either
/// part is non-numeric, or the value overflows.
pub fn time_to_minutes(text: &str) -> Result<u32> {
    let invalid = |reason: &str| SchedulerError::InvalidTime {
        input: text.to_string(),
        reason: reason.to_string(),
    };

    let mut parts = text.trim().split(':');
    let hours = parts.next().unwrap_or("").trim();
    let minutes = parts.next().unwrap_or("").trim();

    if hours.is_empty() {
        return Err(invalid("missing hours"));
    }
    let hours: u32 = hours.parse().map_err(|_| invalid("hours must be numeric"))?;
    let minutes: u32 = if minutes.is_empty() {
        0
    } else {
        minutes
            .parse()
            .map_err(|_| invalid("minutes must be numeric"))?
    };

    hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .ok_or_else(|| invalid("value out of range"))
}

/// Format minutes since midnight as zero-padded `"HH:MM"`.
///
/// No day rollover: 1440 renders as `"24:00"`.
pub fn minutes_to_time(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// The starting times a picker offers: 07:00 through 18:30 in 30-minute steps.
pub fn picker_times() -> Vec<String> {
    (PICKER_START..=HORIZON)
        .step_by(SLOT_MINUTES as usize)
        .map(minutes_to_time)
        .collect()
}

/// Render a duration in hours: `"2h"` for whole hours, `"1.5h"` otherwise.
pub fn format_duration(minutes: u32) -> String {
    if minutes % 60 == 0 {
        format!("{}h", minutes / 60)
    } else {
        format!("{}h", f64::from(minutes) / 60.0)
    }
}
