//! Semen-analysis metrics: qualitative statuses, composite scoring with
//! trend and averages, DNA fragmentation risk estimation, deterministic
//! daily tips, and a 74-day challenge tracker.
//!
//! [`MetricsEngine`] is the single entry point for everything derived from
//! test records; the `motile` binary is a thin CLI over it.

pub mod challenge;
pub mod config;
pub mod dna;
pub mod engine;
pub mod error;
pub mod record;
pub mod report;
pub mod report_helpers;
pub mod score;
pub mod status;
pub mod tips;

#[cfg(test)]
mod fixtures;

pub use config::{Config, ScoringModel, Thresholds};
pub use engine::{Dashboard, MetricsEngine, RecordReport};
pub use error::{Error, Result};
pub use record::TestRecord;
