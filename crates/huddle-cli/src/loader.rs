//! Load a team roster from CSV.
//!
//! Expected shape: a header row with at least six columns including `Name`,
//! then one row per person: `Name, Monday, Tuesday, Wednesday, Thursday, Friday`.
//! Columns are positional; the header is only checked for shape.

use std::path::Path;

use huddle_engine::{Person, Weekday};
use thiserror::Error;

const MIN_COLUMNS: usize = 6;

/// Roster loading failures. These never reach the engine.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Please upload a CSV file (got {0})")]
    NotCsv(String),

    #[error("CSV must have at least a header and one data row")]
    MissingRows,

    #[error("CSV must have Name, Monday, Tuesday, Wednesday, Thursday, Friday columns")]
    InvalidHeader,

    #[error("No valid schedule data found")]
    NoValidRows,

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read and parse a roster file. The path must end in `.csv`.
pub fn load_roster(path: &Path) -> Result<Vec<Person>, LoadError> {
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if !is_csv {
        return Err(LoadError::NotCsv(path.display().to_string()));
    }

    let text = std::fs::read_to_string(path)?;
    parse_roster(&text)
}

/// Parse roster CSV text.
///
/// Cells are trimmed; rows with fewer than six cells or an empty name are
/// skipped.
pub fn parse_roster(text: &str) -> Result<Vec<Person>, LoadError> {
    let text = text.trim();
    if text.lines().count() < 2 {
        return Err(LoadError::MissingRows);
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?;
    if headers.len() < MIN_COLUMNS || !headers.iter().any(|h| h == "Name") {
        return Err(LoadError::InvalidHeader);
    }

    let mut people = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let name = record.get(0).unwrap_or("");
        if record.len() < MIN_COLUMNS || name.is_empty() {
            tracing::debug!(row = index + 2, "skipping incomplete roster row");
            continue;
        }

        let person = Weekday::ALL
            .into_iter()
            .zip(record.iter().skip(1))
            .fold(Person::new(name), |person, (day, raw)| person.with_day(day, raw));
        people.push(person);
    }

    if people.is_empty() {
        return Err(LoadError::NoValidRows);
    }

    tracing::info!(people = people.len(), "loaded roster");
    Ok(people)
}
