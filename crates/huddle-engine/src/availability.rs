//! Classify a roster against a single candidate meeting window.
//!
//! Each person is judged on their own intervals only: fully available when one
//! interval covers the whole window, partially available when some interval
//! overlaps it by at least [`PARTIAL_OVERLAP_MINUTES`], otherwise unavailable.
//! Intervals are never unioned, so two back-to-back entries do not combine
//! into full availability.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::roster::PersonIntervals;
use crate::time::PARTIAL_OVERLAP_MINUTES;

/// Weight of one fully available person in a slot score.
pub const FULL_WEIGHT: usize = 10;

/// How one person relates to a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    Full,
    Partial,
    Unavailable,
}

/// The roster partitioned by availability for one window.
///
/// Every person lands in exactly one list; each list keeps roster order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySet {
    pub fully_available: Vec<String>,
    pub partially_available: Vec<String>,
    pub not_available: Vec<String>,
}

impl AvailabilitySet {
    /// `10 × fully + partially`.
    pub fn score(&self) -> usize {
        FULL_WEIGHT * self.fully_available.len() + self.partially_available.len()
    }

    /// Number of people classified.
    pub fn len(&self) -> usize {
        self.fully_available.len() + self.partially_available.len() + self.not_available.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether both sets have exactly the same fully available names,
    /// regardless of order.
    pub fn same_fully_available(&self, other: &AvailabilitySet) -> bool {
        self.fully_available.len() == other.fully_available.len()
            && name_set(&self.fully_available) == name_set(&other.fully_available)
    }

    fn push(&mut self, name: &str, availability: Availability) {
        let bucket = match availability {
            Availability::Full => &mut self.fully_available,
            Availability::Partial => &mut self.partially_available,
            Availability::Unavailable => &mut self.not_available,
        };
        bucket.push(name.to_string());
    }
}

fn name_set(names: &[String]) -> BTreeSet<&str> {
    names.iter().map(String::as_str).collect()
}

/// Classify one person against the window `[window_start, window_end)`.
///
/// Full availability takes precedence over partial. The window must be
/// non-empty (`window_start < window_end`); [`crate::query`] validates this
/// for caller-supplied windows.
pub fn classify_person(person: &PersonIntervals, window_start: u32, window_end: u32) -> Availability {
    debug_assert!(
        window_start < window_end,
        "window start {window_start} must be before end {window_end}"
    );

    if person.intervals.is_empty() {
        return Availability::Unavailable;
    }

    if person
        .intervals
        .iter()
        .any(|interval| interval.contains(window_start, window_end))
    {
        Availability::Full
    } else if person
        .intervals
        .iter()
        .any(|interval| interval.overlap_minutes(window_start, window_end) >= PARTIAL_OVERLAP_MINUTES)
    {
        Availability::Partial
    } else {
        Availability::Unavailable
    }
}

/// Partition the roster by availability for `[window_start, window_end)`.
///
/// Requires `window_start < window_end`.
pub fn classify(people: &[PersonIntervals], window_start: u32, window_end: u32) -> AvailabilitySet {
    debug_assert!(
        window_start < window_end,
        "window start {window_start} must be before end {window_end}"
    );
    let mut set = AvailabilitySet::default();
    for person in people {
        set.push(&person.name, classify_person(person, window_start, window_end));
    }
    set
}
