//! Composite scoring: normalization curves, the per-record composite with
//! its range label, multi-record averages, and the trend between them.

pub mod aggregate;
pub mod normalize;
pub mod scoring;
pub mod trend;

pub use aggregate::{AggregateScore, aggregate};
pub use scoring::{
    Component, CompositeScore, Dimension, ScoreRange, SubScores, composite, score_record,
    sub_scores,
};
pub use trend::{Trend, trend, trend_of};
