//! Point queries: who can make a specific window on a specific day.

use serde::{Deserialize, Serialize};

use crate::availability::{classify, AvailabilitySet};
use crate::error::{Result, SchedulerError};
use crate::roster::{day_roster, Person, PersonIntervals, Weekday};
use crate::time::minutes_to_time;

/// Availability for one caller-chosen window, echoing the window back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    pub day: Weekday,
    pub start: u32,
    pub end: u32,
    pub availability: AvailabilitySet,
}

impl QueryResult {
    /// `"HH:MM - HH:MM"`.
    pub fn time_range(&self) -> String {
        format!("{} - {}", minutes_to_time(self.start), minutes_to_time(self.end))
    }
}

/// Classify the roster for `[start, end)` on `day`.
///
/// # Errors
/// Returns `SchedulerError::InvalidRange` if `start >= end`; nothing is
/// classified in that case.
pub fn query(people: &[Person], day: Weekday, start: u32, end: u32) -> Result<QueryResult> {
    check_range(start, end)?;
    query_day(&day_roster(people, day), day, start, end)
}

/// Same as [`query`] over an already parsed roster for `day`.
pub fn query_day(
    roster: &[PersonIntervals],
    day: Weekday,
    start: u32,
    end: u32,
) -> Result<QueryResult> {
    check_range(start, end)?;
    Ok(QueryResult {
        day,
        start,
        end,
        availability: classify(roster, start, end),
    })
}

fn check_range(start: u32, end: u32) -> Result<()> {
    if start >= end {
        return Err(SchedulerError::InvalidRange {
            start: minutes_to_time(start),
            end: minutes_to_time(end),
        });
    }
    Ok(())
}
