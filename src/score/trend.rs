//! Direction of the latest composite score against the history before it.

use std::fmt;

use serde::Serialize;

use super::scoring::{CompositeScore, score_record};
use crate::config::{ScoringModel, Thresholds};
use crate::record::TestRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trend {
    Improving,
    Declining,
    #[serde(rename = "No Change")]
    NoChange,
}

impl Trend {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Improving => "Improving",
            Self::Declining => "Declining",
            Self::NoChange => "No Change",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Compare the first (newest) composite with the mean of the rest.
///
/// Both sides use the same truncated integer composites, so rounding never
/// favours one branch.
pub fn trend_of(composites_newest_first: &[u8]) -> Trend {
    let [latest, older @ ..] = composites_newest_first else {
        return Trend::NoChange;
    };
    if older.is_empty() {
        return Trend::NoChange;
    }
    let mean = older.iter().map(|&s| f64::from(s)).sum::<f64>() / older.len() as f64;
    let latest = f64::from(*latest);
    if latest > mean {
        Trend::Improving
    } else if latest < mean {
        Trend::Declining
    } else {
        Trend::NoChange
    }
}

/// Trend over records ordered newest first.
///
/// Records with nothing measured carry no score and are skipped; when the
/// newest record is one of them there is nothing to compare.
pub fn trend(records: &[TestRecord], t: &Thresholds, model: ScoringModel) -> Trend {
    let scores: Vec<CompositeScore> = records
        .iter()
        .map(|r| score_record(r, t, model))
        .collect();
    match scores.first() {
        Some(latest) if latest.is_measured() => {}
        _ => return Trend::NoChange,
    }
    let composites: Vec<u8> = scores
        .iter()
        .filter(|s| s.is_measured())
        .map(|s| s.score)
        .collect();
    trend_of(&composites)
}

#[cfg(test)]
#[path = "trend_test.rs"]
mod tests;
