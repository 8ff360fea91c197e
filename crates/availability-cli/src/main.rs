//! `availability` CLI — summarize, validate, and slot weekly availability files.
//!
//! ## Usage
//!
//! ```sh
//! # Card text for a week read from stdin
//! echo '[{"day":"Mon","ranges":[{"start":"09:00","end":"12:00"}]}]' | availability summarize
//!
//! # Summary as JSON, English day names
//! availability summarize -i week.json --locale en --json
//!
//! # Check a file; overlapping ranges are reported as warnings
//! availability validate -i week.json
//!
//! # 45-minute appointment slots written to a file
//! availability slots -i week.json --length 45 -o slots.txt
//!
//! # Defaults from a TOML config
//! availability --config availability.toml summarize -i week.json
//! ```

mod config;
mod logger;

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use availability_engine::{
    appointment_slots, find_overlaps, render_summary, summarize, total_minutes, Locale,
    WeeklyAvailability,
};
use clap::{Parser, Subcommand};

use crate::config::CliConfig;

#[derive(Parser)]
#[command(
    name = "availability",
    version,
    about = "Weekly consultant availability CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML config file with display and slot defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a week: day names, total hours, day count
    Summarize {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Display locale: fr or en
        #[arg(long)]
        locale: Option<Locale>,
        /// Print the summary as JSON instead of card text
        #[arg(long)]
        json: bool,
    },
    /// Check that a week is well formed and report overlapping ranges
    Validate {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// List bookable appointment slots
    Slots {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Slot length in minutes (5 to 480)
        #[arg(short, long)]
        length: Option<u32>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let config = CliConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Summarize {
            input,
            output,
            locale,
            json,
        } => {
            let week = read_week(input.as_deref())?;
            let locale = config.locale(locale);
            let summary = summarize(&week, locale);
            tracing::info!(
                days = summary.active_day_count,
                minutes = summary.total_minutes(),
                %locale,
                "summarized week"
            );

            let text = if json {
                serde_json::to_string_pretty(&summary)?
            } else {
                render_summary(&summary, locale)
            };
            write_output(output.as_deref(), &format!("{text}\n"))?;
        }
        Commands::Validate { input } => {
            let week = read_week(input.as_deref())?;
            let overlaps = find_overlaps(&week);
            for o in &overlaps {
                tracing::warn!(day = %o.day, overlap_minutes = o.overlap_minutes, "overlapping ranges");
                println!(
                    "warning: {} {}-{} overlaps {}-{} by {} minute(s)",
                    o.day,
                    o.range_a.start(),
                    o.range_a.end(),
                    o.range_b.start(),
                    o.range_b.end(),
                    o.overlap_minutes
                );
            }
            println!(
                "OK: {} day(s), {} minute(s)",
                week.len(),
                total_minutes(&week)
            );
        }
        Commands::Slots {
            input,
            output,
            length,
        } => {
            let week = read_week(input.as_deref())?;
            let slot_minutes = config.slot_minutes(length);
            let slots = appointment_slots(&week, slot_minutes)
                .context("Failed to compute appointment slots")?;
            tracing::info!(count = slots.len(), slot_minutes, "computed slots");

            let text: String = slots
                .iter()
                .map(|s| format!("{} {}-{}\n", s.day, s.start, s.end))
                .collect();
            write_output(output.as_deref(), &text)?;
        }
    }

    Ok(())
}

fn read_week(path: Option<&str>) -> Result<WeeklyAvailability> {
    let json = read_input(path)?;
    WeeklyAvailability::from_json(&json).context("Failed to parse weekly availability")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
