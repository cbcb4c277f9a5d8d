/// CLI argument definitions for the `motile` command.
///
/// Defines the subcommands, their arguments, and long help text
/// using the `clap` derive macros.
use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};

use motile::config::ScoringModel;
use motile::tips::parse_date;

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(name = "motile", version, about = "Semen analysis status, scoring and tips")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments shared by the record-reading commands.
#[derive(Args)]
pub struct CommonArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// TOML file overriding thresholds and scoring model
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show statuses, scores, averages and trend for a set of test records
    #[command(long_about = "\
Show statuses, scores, averages and trend for a set of test records.

Reads a JSON array of test records and prints a dashboard: the averaged
sub-scores and composite score, the trend of the latest test against the
earlier ones, and per-record statuses with every field's label.

Composite score weights (weighted model, the default):
  Motility       35%  (total motility, 0-100)
  Concentration  30%  (piecewise: 15 M/mL reads 50)
  Morphology     15%  (piecewise: 4% reads 50)
  DNA            10%  (inverse of the fragmentation risk)
  Analysis       10%  (typical 80, atypical 40)

The unweighted model gives each dimension 20%. Absent measurements are left
out and the remaining weights renormalized.

Score ranges:
  Upper Range (85-100)  Higher Range (70-84)
  Moderate Range (50-69)  Lower Range (0-49)

Examples:
  motile report records.json                   # text dashboard
  motile report records.json --json            # machine-readable output
  motile report records.json --model unweighted
  motile report records.json --config motile.toml")]
    Report {
        /// JSON file holding an array of test records
        records: PathBuf,

        #[command(flatten)]
        common: CommonArgs,

        /// Scoring model: weighted or unweighted (overrides the config file)
        #[arg(long)]
        model: Option<ScoringModel>,

        /// Reference time for "days since last test" (RFC 3339; default: now)
        #[arg(long, value_parser = parse_now)]
        now: Option<DateTime<Utc>>,
    },

    /// Estimate DNA fragmentation risk for a single record
    #[command(long_about = "\
Estimate DNA fragmentation risk for a single record.

Risk points per factor present:
  Low total motility     30
  Abnormal morphology    25
  High leukocytes        20
  Low semen volume       15
  pH outside range       10

Category: Low (<20), Moderate (20-39), High (40+). Fields missing from the
record never raise a factor.

Examples:
  motile estimate record.json
  motile estimate record.json --json           # record as stored, plus estimate")]
    Estimate {
        /// JSON file holding one test record
        record: PathBuf,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Show the three tips selected for a day
    #[command(long_about = "\
Show the three tips selected for a day.

The tip file holds one tip per line; blank lines are skipped. The selection
depends only on the date, so the same day always shows the same tips.

Examples:
  motile tips tips.txt                         # today's tips
  motile tips tips.txt --date 2025-03-14")]
    Tips {
        /// Text file with one tip per line
        tips: PathBuf,

        /// Day to select for (YYYY-MM-DD; default: today)
        #[arg(long, value_parser = parse_day)]
        date: Option<NaiveDate>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_now(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("invalid time '{s}': {e}"))
}

fn parse_day(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).map_err(|e| e.to_string())
}
