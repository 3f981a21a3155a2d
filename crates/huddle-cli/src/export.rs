//! CSV and JSON export of recommendations and query results.
//!
//! JSON goes through serde-friendly DTOs that carry clock-time strings
//! instead of minute offsets.

use std::collections::BTreeMap;

use anyhow::Result;
use huddle_engine::{AvailabilitySet, QueryResult, RecommendedSlot, Weekday};
use serde::Serialize;

/// Default file name for `recommend --save`.
pub const RECOMMENDATIONS_FILE: &str = "top-meeting-recommendations.csv";

/// Default file name for `query --save`, e.g.
/// `availability-query-Friday-0900-1000.csv`. Times drop the colon so the
/// name is valid on every platform.
pub fn query_file_name(result: &QueryResult) -> String {
    format!(
        "availability-query-{}-{}-{}.csv",
        result.day,
        compact_time(result.start),
        compact_time(result.end)
    )
}

fn compact_time(minutes: u32) -> String {
    huddle_engine::minutes_to_time(minutes).replace(':', "")
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

/// One row per ranked slot, days in week order.
pub fn recommendations_csv(week: &BTreeMap<Weekday, Vec<RecommendedSlot>>) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "Day",
        "Rank",
        "Start Time",
        "End Time",
        "Duration",
        "Fully Available Count",
        "Fully Available Names",
    ])?;

    for (day, slots) in week {
        for (index, slot) in slots.iter().enumerate() {
            writer.write_record([
                day.to_string(),
                format!("#{}", index + 1),
                slot.start_time(),
                slot.end_time(),
                slot.duration_label(),
                slot.availability.fully_available.len().to_string(),
                slot.availability.fully_available.join(", "),
            ])?;
        }
    }

    finish(writer)
}

/// Three rows: fully, partially and not available.
pub fn query_csv(result: &QueryResult) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["Query Day", "Query Time Range", "Availability Status", "Names"])?;

    let day = result.day.to_string();
    let range = result.time_range();
    let groups = [
        ("Fully Available", &result.availability.fully_available),
        ("Partially Available", &result.availability.partially_available),
        ("Not Available", &result.availability.not_available),
    ];
    for (status, names) in groups {
        let names = names.join(", ");
        writer.write_record([day.as_str(), range.as_str(), status, names.as_str()])?;
    }

    finish(writer)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct SlotDto<'a> {
    rank: usize,
    start: String,
    end: String,
    duration: String,
    score: usize,
    #[serde(flatten)]
    availability: &'a AvailabilitySet,
}

#[derive(Serialize)]
struct QueryDto<'a> {
    day: Weekday,
    time_range: String,
    #[serde(flatten)]
    availability: &'a AvailabilitySet,
}

pub fn recommendations_json(week: &BTreeMap<Weekday, Vec<RecommendedSlot>>) -> Result<String> {
    let dto: BTreeMap<Weekday, Vec<SlotDto<'_>>> = week
        .iter()
        .map(|(day, slots)| {
            let slots = slots
                .iter()
                .enumerate()
                .map(|(index, slot)| SlotDto {
                    rank: index + 1,
                    start: slot.start_time(),
                    end: slot.end_time(),
                    duration: slot.duration_label(),
                    score: slot.score,
                    availability: &slot.availability,
                })
                .collect();
            (*day, slots)
        })
        .collect();
    Ok(serde_json::to_string_pretty(&dto)?)
}

pub fn query_json(result: &QueryResult) -> Result<String> {
    let dto = QueryDto {
        day: result.day,
        time_range: result.time_range(),
        availability: &result.availability,
    };
    Ok(serde_json::to_string_pretty(&dto)?)
}
