//! The team roster: weekdays, people, and per-day interval projections.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SchedulerError;
use crate::interval::{parse_day_schedule, Interval};

/// A working day. Weekends are not scheduled.
///
/// Ordering follows the week, so a `BTreeMap<Weekday, _>` iterates Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = SchedulerError;

    /// Case-insensitive full weekday name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Weekday::ALL
            .into_iter()
            .find(|day| day.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SchedulerError::UnknownWeekday(s.to_string()))
    }
}

/// One person's raw weekly free time, as supplied by the loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique within a roster.
    pub name: String,
    /// Raw free-time text per weekday. A missing day means no availability.
    #[serde(default)]
    pub schedule: BTreeMap<Weekday, String>,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schedule: BTreeMap::new(),
        }
    }

    /// Builder-style setter for one day's raw text.
    pub fn with_day(mut self, day: Weekday, raw: impl Into<String>) -> Self {
        self.schedule.insert(day, raw.into());
        self
    }

    /// Raw text for `day`, or `""` when nothing was entered.
    pub fn raw_day(&self, day: Weekday) -> &str {
        self.schedule.get(&day).map(String::as_str).unwrap_or("")
    }

    /// Parsed intervals for `day`.
    pub fn intervals(&self, day: Weekday) -> PersonIntervals {
        PersonIntervals {
            name: self.name.clone(),
            intervals: parse_day_schedule(self.raw_day(day)),
        }
    }
}

/// A person's parsed free time for a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonIntervals {
    pub name: String,
    pub intervals: Vec<Interval>,
}

impl PersonIntervals {
    pub fn new(name: impl Into<String>, intervals: Vec<Interval>) -> Self {
        Self {
            name: name.into(),
            intervals,
        }
    }
}

/// Project the whole roster onto one day, keeping roster order.
pub fn day_roster(people: &[Person], day: Weekday) -> Vec<PersonIntervals> {
    people.iter().map(|person| person.intervals(day)).collect()
}
