//! Qualitative statuses: the four named statuses and their roll-up, the
//! per-field display rows, and the shared tone predicate both rely on.

pub mod classifier;
pub mod fields;
pub mod tone;

pub use classifier::{
    AnalysisStatus, ConcentrationStatus, MorphologyStatus, MotilityStatus, OverallStatus,
    StatusSet, classify,
};
pub use fields::{FieldStatus, NOT_PROVIDED, field_statuses};
pub use tone::{Tone, is_positive};
