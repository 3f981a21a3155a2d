//! `huddle` CLI — find shared meeting slots in a team availability CSV.
//!
//! ## Usage
//!
//! ```sh
//! # Best two slots per weekday, starting from 09:00
//! huddle recommend -i team.csv
//!
//! # Start later and export as CSV
//! huddle recommend -i team.csv --start 13:00 --format csv -o slots.csv
//!
//! # Who can make Monday 10:00-11:00?
//! huddle query -i team.csv --day Monday --start 10:00 --end 11:00
//!
//! # Show what was loaded
//! huddle preview -i team.csv
//! ```
//!
//! The CSV has a header row and one row per person:
//! `Name,Monday,Tuesday,Wednesday,Thursday,Friday`, where each day cell holds
//! free time such as `09:00-10:30;14:00-15:00`.

mod export;
mod loader;
mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use huddle_engine::{time_to_minutes, Weekday};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "huddle",
    version,
    about = "Find shared meeting slots in weekly team availability"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log engine decisions to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend the top two meeting slots for each weekday
    Recommend {
        /// Team availability CSV
        #[arg(short, long)]
        input: PathBuf,
        /// Earliest meeting start (HH:MM)
        #[arg(long, default_value = "09:00")]
        start: String,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long, conflicts_with = "save")]
        output: Option<PathBuf>,
        /// Write CSV to top-meeting-recommendations.csv
        #[arg(long)]
        save: bool,
    },
    /// Check who is available for a specific window
    Query {
        /// Team availability CSV
        #[arg(short, long)]
        input: PathBuf,
        /// Weekday, Monday through Friday
        #[arg(long)]
        day: String,
        /// Window start (HH:MM)
        #[arg(long, default_value = "09:00")]
        start: String,
        /// Window end (HH:MM)
        #[arg(long, default_value = "10:00")]
        end: String,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long, conflicts_with = "save")]
        output: Option<PathBuf>,
        /// Write CSV to availability-query-<day>-<HHMM>-<HHMM>.csv
        #[arg(long)]
        save: bool,
    },
    /// Show the loaded schedules
    Preview {
        /// Team availability CSV
        #[arg(short, long)]
        input: PathBuf,
    },
    /// List the starting times offered by pickers
    Times,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
    Csv,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Recommend {
            input,
            start,
            format,
            output,
            save,
        } => {
            let people = load(&input)?;
            let earliest = parse_clock(&start)?;
            let week = huddle_engine::recommend_week(&people, earliest);

            if save {
                let csv = export::recommendations_csv(&week)?;
                write_output(Some(Path::new(export::RECOMMENDATIONS_FILE)), &csv)?;
                println!("Saved {}", export::RECOMMENDATIONS_FILE);
                return Ok(());
            }

            let content = match format {
                Format::Text => render::recommendations(&week)?,
                Format::Json => export::recommendations_json(&week)?,
                Format::Csv => export::recommendations_csv(&week)?,
            };
            write_output(output.as_deref(), &content)?;
        }
        Commands::Query {
            input,
            day,
            start,
            end,
            format,
            output,
            save,
        } => {
            let day: Weekday = day.parse()?;
            let start = parse_clock(&start)?;
            let end = parse_clock(&end)?;
            let people = load(&input)?;
            let result = huddle_engine::query(&people, day, start, end)?;

            if save {
                let file = export::query_file_name(&result);
                write_output(Some(Path::new(&file)), &export::query_csv(&result)?)?;
                println!("Saved {file}");
                return Ok(());
            }

            let content = match format {
                Format::Text => render::query(&result)?,
                Format::Json => export::query_json(&result)?,
                Format::Csv => export::query_csv(&result)?,
            };
            write_output(output.as_deref(), &content)?;
        }
        Commands::Preview { input } => {
            let people = load(&input)?;
            print!("{}", render::preview(&people)?);
        }
        Commands::Times => {
            for time in huddle_engine::time::picker_times() {
                println!("{time}");
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load(path: &Path) -> Result<Vec<huddle_engine::Person>> {
    loader::load_roster(path).with_context(|| format!("Failed to load roster: {}", path.display()))
}

fn parse_clock(text: &str) -> Result<u32> {
    time_to_minutes(text).with_context(|| format!("Invalid time argument: {}", text))
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
