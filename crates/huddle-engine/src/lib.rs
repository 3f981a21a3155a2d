//! # huddle-engine
//!
//! Deterministic meeting-slot matching over weekly team availability.
//!
//! Given each person's free time per weekday (e.g. `"09:00-10:30;14:00-15:00"`),
//! the engine finds the best shared meeting windows for a day and answers
//! point queries ("who can make Monday 10:00-11:00?"). Everything here is a
//! pure function over the caller's roster: no I/O, no shared state.
//!
//! ## Modules
//!
//! - [`time`] — `"HH:MM"` ↔ minute offsets, fixed grid constants
//! - [`interval`] — free-time string → list of [`Interval`]s
//! - [`roster`] — [`Weekday`], [`Person`] and per-day projections
//! - [`availability`] — classify a roster against one window
//! - [`recommend`] — greedy slot extension, scoring and ranking
//! - [`query`] — classify a caller-chosen window
//! - [`error`] — Error types

pub mod availability;
pub mod error;
pub mod interval;
pub mod query;
pub mod recommend;
pub mod roster;
pub mod time;

pub use availability::{classify, Availability, AvailabilitySet};
pub use error::SchedulerError;
pub use interval::{parse_day_schedule, Interval};
pub use query::{query, QueryResult};
pub use recommend::{recommend, recommend_week, RecommendedSlot};
pub use roster::{Person, PersonIntervals, Weekday};
pub use time::{minutes_to_time, time_to_minutes};
