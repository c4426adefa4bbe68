//! `bt-agenda` CLI -- render the plenary agenda of the German Bundestag
//! as calendar and data feeds from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Render the current year's agenda as an iCal feed (stdin -> stdout)
//! cat items.json | bt-agenda render --format ical
//!
//! # Render one sitting week as JSON, with named-vote companion events
//! bt-agenda render --format json -i items.json --year 2024 --week 24 --na
//!
//! # Sitting-week blocks and vote reminders in the calendar feed
//! bt-agenda render --format ics -i items.json --show-sw --na --na-alarm
//!
//! # Restrict to items whose status contains a value
//! bt-agenda render --format csv -i items.json --status erledigt
//!
//! # List which (year, week) pairs the data set covers
//! bt-agenda data-list -i items.json
//! ```

use anyhow::{Context, Result};
use chrono::{Datelike, Local, Utc};
use clap::{Parser, Subcommand};
use std::io::{self, Read};

use agenda_core::calendar::CalendarOptions;
use agenda_core::window::{self, WindowQuery};
use agenda_core::{catalog, AgendaItem, FeedOptions, Format};

#[derive(Parser)]
#[command(
    name = "bt-agenda",
    version,
    about = "Bundestag plenary agenda feeds (iCal/JSON/XML/CSV)"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the agenda in an output format
    Render {
        /// Output format: ical, ics, json, xml or csv
        #[arg(long)]
        format: String,
        /// Input file with agenda records as a JSON array (stdin if omitted)
        #[arg(short, long, env = "BT_AGENDA_INPUT")]
        input: Option<String>,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Target year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
        /// ISO week selector; wins over month and day
        #[arg(long)]
        week: Option<u32>,
        /// Month selector (1-12)
        #[arg(long)]
        month: Option<u32>,
        /// Day-of-month selector (1-31); needs --month to address a date
        #[arg(long)]
        day: Option<u32>,
        /// Keep only items whose status contains this value
        #[arg(long)]
        status: Option<String>,
        /// Emit companion events for named votes
        #[arg(long)]
        na: bool,
        /// Attach a 15-minute display reminder to named-vote events
        #[arg(long = "na-alarm")]
        na_alarm: bool,
        /// Emit all-day sitting-week block events
        #[arg(long = "show-sw")]
        show_sw: bool,
    },
    /// List the (year, week) pairs present in the data set
    DataList {
        /// Input file with agenda records as a JSON array (stdin if omitted)
        #[arg(short, long, env = "BT_AGENDA_INPUT")]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            format,
            input,
            output,
            year,
            week,
            month,
            day,
            status,
            na,
            na_alarm,
            show_sw,
        } => {
            let format: Format = format.parse()?;
            let items = load_items(input.as_deref())?;

            let today = Local::now().date_naive();
            let query = WindowQuery {
                year: year.unwrap_or_else(|| today.year()),
                week,
                month,
                day,
            };
            window::ensure_not_future(&query, today)?;

            let resolved = query.resolve();
            let selected = window::select(items, resolved);
            log::debug!("{} record(s) inside {:?}", selected.len(), resolved);

            let opts = FeedOptions {
                status,
                calendar: CalendarOptions {
                    include_named_votes: na,
                    named_vote_alarm: na_alarm,
                    show_sitting_weeks: show_sw,
                },
            };
            let feed = agenda_core::render(format, selected, &opts, Utc::now())?;
            log::info!("rendered {} byte(s) as {}", feed.body.len(), feed.content_type);

            write_output(output.as_deref(), &feed.body)?;
        }
        Commands::DataList { input } => {
            let items = load_items(input.as_deref())?;
            let listing = catalog::weeks_by_year_json(&items)?;
            write_output(None, &listing)?;
        }
    }

    Ok(())
}

/// Read and parse the agenda records from a file or stdin.
fn load_items(path: Option<&str>) -> Result<Vec<AgendaItem>> {
    let raw = read_input(path)?;
    let items: Vec<AgendaItem> =
        serde_json::from_str(&raw).context("Failed to parse agenda records")?;
    log::debug!("loaded {} agenda record(s)", items.len());
    Ok(items)
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
