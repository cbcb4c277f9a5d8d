//! Sub-score extraction and the composite 0–100 score.
//!
//! Five sub-scores (motility, concentration, morphology, DNA, analysis) are
//! normalized to 0–100 and combined with the weight table of the active
//! scoring model. A sub-score whose input is absent is left out and the
//! remaining weights are renormalized, mirroring the status classifier's
//! missing-field policy.
//!
//! Supports two scoring models:
//! - **Weighted** (default): motility and concentration dominate.
//! - **Unweighted**: plain mean of the five sub-scores.

use std::fmt;

use serde::Serialize;

use super::normalize::{
    normalize_concentration, normalize_dna_risk, normalize_morphology, normalize_motility,
};
use crate::config::{ScoringModel, Thresholds};
use crate::record::{TestRecord, measured};
use crate::status::AnalysisStatus;
use crate::status::classifier::analysis_status;

// ─── Weighted model (default) ────────────────────────────────────────

/// Sub-score weights for the weighted model (must sum to 1.0).
pub const W_MOTILITY: f64 = 0.35;
pub const W_CONCENTRATION: f64 = 0.30;
pub const W_MORPHOLOGY: f64 = 0.15;
pub const W_DNA: f64 = 0.10;
pub const W_ANALYSIS: f64 = 0.10;

// ─── Unweighted model ────────────────────────────────────────────────

/// Every sub-score counts the same.
pub const W_UNWEIGHTED: f64 = 0.20;

// ─── Analysis sub-score ──────────────────────────────────────────────

pub const ANALYSIS_TYPICAL_SCORE: f64 = 80.0;
pub const ANALYSIS_ATYPICAL_SCORE: f64 = 40.0;

/// Absorbs float accumulation error before truncating to an integer score.
const TRUNCATION_EPSILON: f64 = 1e-9;

/// The five scored dimensions, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Dimension {
    Motility,
    Concentration,
    Morphology,
    #[serde(rename = "DNA")]
    Dna,
    Analysis,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Self::Motility,
        Self::Concentration,
        Self::Morphology,
        Self::Dna,
        Self::Analysis,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Motility => "Motility",
            Self::Concentration => "Concentration",
            Self::Morphology => "Morphology",
            Self::Dna => "DNA",
            Self::Analysis => "Analysis",
        }
    }

    pub fn weight(self, model: ScoringModel) -> f64 {
        match model {
            ScoringModel::Unweighted => W_UNWEIGHTED,
            ScoringModel::Weighted => match self {
                Self::Motility => W_MOTILITY,
                Self::Concentration => W_CONCENTRATION,
                Self::Morphology => W_MORPHOLOGY,
                Self::Dna => W_DNA,
                Self::Analysis => W_ANALYSIS,
            },
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Normalized sub-scores of one record (or averaged over several).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SubScores {
    pub motility: Option<f64>,
    pub concentration: Option<f64>,
    pub morphology: Option<f64>,
    pub dna: Option<f64>,
    pub analysis: Option<f64>,
}

impl SubScores {
    pub fn get(&self, dim: Dimension) -> Option<f64> {
        match dim {
            Dimension::Motility => self.motility,
            Dimension::Concentration => self.concentration,
            Dimension::Morphology => self.morphology,
            Dimension::Dna => self.dna,
            Dimension::Analysis => self.analysis,
        }
    }

    pub fn set(&mut self, dim: Dimension, value: Option<f64>) {
        let slot = match dim {
            Dimension::Motility => &mut self.motility,
            Dimension::Concentration => &mut self.concentration,
            Dimension::Morphology => &mut self.morphology,
            Dimension::Dna => &mut self.dna,
            Dimension::Analysis => &mut self.analysis,
        };
        *slot = value;
    }
}

/// Four-band range of a composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreRange {
    #[serde(rename = "Lower Range")]
    Lower,
    #[serde(rename = "Moderate Range")]
    Moderate,
    #[serde(rename = "Higher Range")]
    Higher,
    #[serde(rename = "Upper Range")]
    Upper,
}

impl ScoreRange {
    pub fn of(score: u8) -> Self {
        match score {
            85.. => Self::Upper,
            70..=84 => Self::Higher,
            50..=69 => Self::Moderate,
            _ => Self::Lower,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Lower => "Lower Range",
            Self::Moderate => "Moderate Range",
            Self::Higher => "Higher Range",
            Self::Upper => "Upper Range",
        }
    }

    /// Label used where the score sits next to other statuses: the lowest
    /// band reads "Review".
    pub fn status_label(self) -> &'static str {
        match self {
            Self::Lower => "Review",
            other => other.label(),
        }
    }
}

impl fmt::Display for ScoreRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// One weighted contribution to a composite score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Component {
    pub dimension: Dimension,
    pub weight: f64,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositeScore {
    pub score: u8,
    pub range: ScoreRange,
    /// Sub-scores that contributed; empty when nothing was measured.
    pub components: Vec<Component>,
}

impl CompositeScore {
    pub fn is_measured(&self) -> bool {
        !self.components.is_empty()
    }
}

/// Categorical analysis sub-score; an indeterminate analysis carries no
/// measurement and is left out.
pub fn analysis_score(status: AnalysisStatus) -> Option<f64> {
    match status {
        AnalysisStatus::Typical => Some(ANALYSIS_TYPICAL_SCORE),
        AnalysisStatus::Atypical => Some(ANALYSIS_ATYPICAL_SCORE),
        AnalysisStatus::Indeterminate => None,
    }
}

/// Normalize every scored field of `r`.
pub fn sub_scores(r: &TestRecord, t: &Thresholds) -> SubScores {
    SubScores {
        motility: measured(r.total_mobility).map(normalize_motility),
        concentration: measured(r.sperm_concentration).map(normalize_concentration),
        morphology: measured(r.morphology_rate).map(normalize_morphology),
        dna: r.dna_fragmentation_risk.map(normalize_dna_risk),
        analysis: analysis_score(analysis_status(r, t)),
    }
}

/// Truncate a 0–100 float score to its integer value.
pub fn truncate_score(value: f64) -> u8 {
    // `as` saturates, NaN maps to 0
    (value + TRUNCATION_EPSILON).clamp(0.0, 100.0) as u8
}

/// Weighted mean over the present sub-scores, truncated to an integer.
pub fn composite(subs: &SubScores, model: ScoringModel) -> CompositeScore {
    let components: Vec<Component> = Dimension::ALL
        .iter()
        .filter_map(|&dim| {
            subs.get(dim).map(|score| Component {
                dimension: dim,
                weight: dim.weight(model),
                score,
            })
        })
        .collect();

    let weight_sum: f64 = components.iter().map(|c| c.weight).sum();
    let score = if weight_sum == 0.0 {
        0
    } else {
        let weighted_sum: f64 = components.iter().map(|c| c.score * c.weight).sum();
        truncate_score(weighted_sum / weight_sum)
    };

    CompositeScore {
        score,
        range: ScoreRange::of(score),
        components,
    }
}

/// Composite score of a single record.
pub fn score_record(r: &TestRecord, t: &Thresholds, model: ScoringModel) -> CompositeScore {
    composite(&sub_scores(r, t), model)
}

#[cfg(test)]
#[path = "scoring_test.rs"]
mod tests;
