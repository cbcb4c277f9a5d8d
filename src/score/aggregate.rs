//! Dashboard averages across several records.
//!
//! Sub-scores are computed per record and then averaged, dimension by
//! dimension, over the records where they are present. Raw field values are
//! never averaged: the normalization curves are non-linear, so averaging
//! before scoring would give a different (wrong) result.

use serde::Serialize;

use super::scoring::{CompositeScore, Dimension, SubScores, composite, sub_scores};
use crate::config::{ScoringModel, Thresholds};
use crate::record::TestRecord;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateScore {
    pub records: usize,
    /// Per-dimension mean of the per-record sub-scores.
    pub sub_scores: SubScores,
    /// Composite computed from the averaged sub-scores.
    pub composite: CompositeScore,
    /// Plain mean of the integer composites of records with anything measured.
    pub mean_composite: f64,
}

/// Mean of each dimension over the sub-score sets where it is present.
pub fn average_sub_scores(per_record: &[SubScores]) -> SubScores {
    let mut avg = SubScores::default();
    for dim in Dimension::ALL {
        let present: Vec<f64> = per_record.iter().filter_map(|s| s.get(dim)).collect();
        if !present.is_empty() {
            avg.set(dim, Some(present.iter().sum::<f64>() / present.len() as f64));
        }
    }
    avg
}

pub fn aggregate(records: &[TestRecord], t: &Thresholds, model: ScoringModel) -> AggregateScore {
    let per_record: Vec<SubScores> = records.iter().map(|r| sub_scores(r, t)).collect();
    let averaged = average_sub_scores(&per_record);

    let measured: Vec<f64> = per_record
        .iter()
        .map(|s| composite(s, model))
        .filter(CompositeScore::is_measured)
        .map(|c| f64::from(c.score))
        .collect();
    let mean_composite = if measured.is_empty() {
        0.0
    } else {
        measured.iter().sum::<f64>() / measured.len() as f64
    };

    AggregateScore {
        records: records.len(),
        sub_scores: averaged,
        composite: composite(&averaged, model),
        mean_composite,
    }
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;
