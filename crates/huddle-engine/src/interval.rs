//! Parse a person's free time for one day into minute intervals.
//!
//! The raw text is a semicolon-separated list of `start-end` tokens, e.g.
//! `"09:00-10:30;14:00-15:00"`. Parsing is lenient: a malformed or reversed
//! token is skipped so one bad entry does not discard the rest of the day.

use serde::{Deserialize, Serialize};

use crate::error::SchedulerError;
use crate::time::{minutes_to_time, time_to_minutes};

/// A half-open span of minutes `[start, end)` within a single day.
///
/// Always non-degenerate: `start < end`. Construction, including
/// deserialization, goes through [`Interval::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct Interval {
    start: u32,
    end: u32,
}

#[derive(Deserialize)]
struct RawInterval {
    start: u32,
    end: u32,
}

impl TryFrom<RawInterval> for Interval {
    type Error = SchedulerError;

    fn try_from(raw: RawInterval) -> Result<Self, Self::Error> {
        Interval::new(raw.start, raw.end).ok_or_else(|| SchedulerError::InvalidRange {
            start: minutes_to_time(raw.start),
            end: minutes_to_time(raw.end),
        })
    }
}

impl Interval {
    /// Build an interval, rejecting empty and reversed ranges.
    pub fn new(start: u32, end: u32) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Whether this single interval covers the whole window `[start, end)`.
    pub fn contains(&self, start: u32, end: u32) -> bool {
        self.start <= start && self.end >= end
    }

    /// Minutes shared with the window `[start, end)`; 0 when disjoint.
    pub fn overlap_minutes(&self, start: u32, end: u32) -> u32 {
        let overlap_start = self.start.max(start);
        let overlap_end = self.end.min(end);
        overlap_end.saturating_sub(overlap_start)
    }
}

/// Parse one day's free-time text into intervals.
///
/// Empty or whitespace-only input yields an empty list. Each token is split
/// on its first hyphen; tokens with a missing side, an unparseable time, or
/// `start >= end` are dropped. Order follows the input and overlapping or
/// duplicate intervals are kept as-is.
pub fn parse_day_schedule(raw: &str) -> Vec<Interval> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    raw.split(';').filter_map(parse_token).collect()
}

fn parse_token(token: &str) -> Option<Interval> {
    let token = token.trim();
    let Some((start, end)) = token.split_once('-') else {
        tracing::debug!(token, "dropping interval without a hyphen");
        return None;
    };
    let (start, end) = (start.trim(), end.trim());
    if start.is_empty() || end.is_empty() {
        tracing::debug!(token, "dropping interval with a missing bound");
        return None;
    }

    let bounds = time_to_minutes(start).and_then(|s| Ok((s, time_to_minutes(end)?)));
    let (start, end) = match bounds {
        Ok(bounds) => bounds,
        Err(err) => {
            tracing::debug!(token, %err, "dropping unparseable interval");
            return None;
        }
    };

    let interval = Interval::new(start, end);
    if interval.is_none() {
        tracing::debug!(token, "dropping empty or reversed interval");
    }
    interval
}
