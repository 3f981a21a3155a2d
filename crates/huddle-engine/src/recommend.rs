//! Recommend the best shared meeting windows for a day.
//!
//! Every 30-minute base start from the caller's earliest start up to the
//! horizon seeds one candidate. A candidate grows in 30-minute steps while
//! the set of fully available people stays the same, then is scored as
//! `10 × fully + partially`. Candidates from neighbouring base starts can
//! overlap; they are ranked independently and the top two are kept.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::availability::{classify, AvailabilitySet};
use crate::roster::{day_roster, Person, PersonIntervals, Weekday};
use crate::time::{format_duration, minutes_to_time, HORIZON, SLOT_MINUTES};

/// Number of slots kept per day.
pub const TOP_SLOTS: usize = 2;

/// A ranked meeting window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedSlot {
    pub day: Weekday,
    /// Minutes since midnight.
    pub start: u32,
    /// Minutes since midnight, exclusive.
    pub end: u32,
    pub duration_minutes: u32,
    pub score: usize,
    pub availability: AvailabilitySet,
}

impl RecommendedSlot {
    pub fn start_time(&self) -> String {
        minutes_to_time(self.start)
    }

    pub fn end_time(&self) -> String {
        minutes_to_time(self.end)
    }

    /// Duration in hours, e.g. `"1.5h"`.
    pub fn duration_label(&self) -> String {
        format_duration(self.duration_minutes)
    }
}

/// Top slots for `day`, best first.
///
/// `earliest_start` is in minutes since midnight; base starts step from it by
/// 30 minutes, so an unaligned value yields unaligned windows. Returns an
/// empty list when nobody is fully available in any window.
pub fn recommend(people: &[Person], day: Weekday, earliest_start: u32) -> Vec<RecommendedSlot> {
    recommend_day(&day_roster(people, day), day, earliest_start)
}

/// Same as [`recommend`] over an already parsed roster for `day`.
pub fn recommend_day(
    roster: &[PersonIntervals],
    day: Weekday,
    earliest_start: u32,
) -> Vec<RecommendedSlot> {
    let mut candidates: Vec<RecommendedSlot> = (earliest_start..HORIZON)
        .step_by(SLOT_MINUTES as usize)
        .filter_map(|start| extend_from(roster, day, start))
        .collect();

    // `sort_by` is stable: equal scores keep base-start order.
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates.truncate(TOP_SLOTS);

    tracing::debug!(
        %day,
        earliest = %minutes_to_time(earliest_start),
        kept = candidates.len(),
        "ranked meeting slots"
    );
    candidates
}

/// Top slots for every weekday. Days without a candidate map to an empty list.
pub fn recommend_week(
    people: &[Person],
    earliest_start: u32,
) -> BTreeMap<Weekday, Vec<RecommendedSlot>> {
    Weekday::ALL
        .into_iter()
        .map(|day| (day, recommend(people, day, earliest_start)))
        .collect()
}

/// Grow the window seeded at `start` while the fully available set is stable.
fn extend_from(roster: &[PersonIntervals], day: Weekday, start: u32) -> Option<RecommendedSlot> {
    let mut end = start + SLOT_MINUTES;
    if end > HORIZON {
        return None;
    }

    let mut current = classify(roster, start, end);
    if current.fully_available.is_empty() {
        return None;
    }

    loop {
        let widened_end = end + SLOT_MINUTES;
        if widened_end > HORIZON {
            break;
        }
        let widened = classify(roster, start, widened_end);
        if !widened.same_fully_available(&current) {
            break;
        }
        end = widened_end;
        current = widened;
    }

    let slot = RecommendedSlot {
        day,
        start,
        end,
        duration_minutes: end - start,
        score: current.score(),
        availability: current,
    };
    tracing::debug!(
        %day,
        start = %slot.start_time(),
        end = %slot.end_time(),
        score = slot.score,
        "candidate slot"
    );
    Some(slot)
}
