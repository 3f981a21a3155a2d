//! Plain-text rendering for the terminal.

use std::collections::BTreeMap;
use std::fmt::{self, Write};

use huddle_engine::{Person, QueryResult, RecommendedSlot, Weekday};

pub fn recommendations(
    week: &BTreeMap<Weekday, Vec<RecommendedSlot>>,
) -> Result<String, fmt::Error> {
    let mut out = String::from("Top Meeting Recommendations\n");

    for (day, slots) in week {
        writeln!(out, "\n{day}")?;
        if slots.is_empty() {
            out.push_str("  No optimal times found\n  Try adjusting start time\n");
            continue;
        }

        for (index, slot) in slots.iter().enumerate() {
            let set = &slot.availability;
            writeln!(
                out,
                "  #{} {} - {} ({})  score {}",
                index + 1,
                slot.start_time(),
                slot.end_time(),
                slot.duration_label(),
                slot.score
            )?;
            write!(out, "     fully {}", set.fully_available.len())?;
            if !set.partially_available.is_empty() {
                write!(out, ", partially {}", set.partially_available.len())?;
            }
            if !set.not_available.is_empty() {
                write!(out, ", unavailable {}", set.not_available.len())?;
            }
            out.push('\n');
            for (label, names) in [
                ("Available", &set.fully_available),
                ("Partial", &set.partially_available),
                ("Unavailable", &set.not_available),
            ] {
                if !names.is_empty() {
                    writeln!(out, "     {label}: {}", names.join(", "))?;
                }
            }
        }
    }

    Ok(out)
}

pub fn query(result: &QueryResult) -> Result<String, fmt::Error> {
    let set = &result.availability;
    let mut out = format!("Availability for {} {}\n", result.day, result.time_range());

    for (label, names) in [
        ("Fully Available", &set.fully_available),
        ("Partially Available", &set.partially_available),
        ("Not Available", &set.not_available),
    ] {
        let listed = if names.is_empty() {
            "None".to_string()
        } else {
            names.join(", ")
        };
        writeln!(out, "  {label} ({}): {listed}", names.len())?;
    }

    Ok(out)
}

pub fn preview(people: &[Person]) -> Result<String, fmt::Error> {
    let mut out = format!("Loaded Schedules ({} people)\n", people.len());

    for person in people {
        writeln!(out, "\n{}", person.name)?;
        for day in Weekday::ALL {
            let raw = person.raw_day(day);
            let shown = if raw.trim().is_empty() { "-" } else { raw };
            writeln!(out, "  {:<10} {shown}", day.as_str())?;
        }
    }

    Ok(out)
}
