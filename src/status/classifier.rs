//! Qualitative status classification of a single record.
//!
//! Each status is decided from the fields that are present. An absent field
//! is left out of the decision instead of being defaulted to a passing or
//! failing value; when none of a status's fields is present the status is
//! `Indeterminate`.

use serde::Serialize;

use super::tone::is_positive;
use crate::config::Thresholds;
use crate::record::{Agglutination, Appearance, Liquefaction, TestRecord, measured};

/// Outcome of a set of optional threshold checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
    Indeterminate,
}

/// Combine checks: any failing present check fails, otherwise any passing
/// present check passes, otherwise nothing was measured.
pub fn decide(checks: &[Option<bool>]) -> Verdict {
    if checks.contains(&Some(false)) {
        Verdict::Fail
    } else if checks.contains(&Some(true)) {
        Verdict::Pass
    } else {
        Verdict::Indeterminate
    }
}

/// Defines a three-state status enum with its display labels.
macro_rules! status_enum {
    ($(#[$meta:meta])* $name:ident { $pass:ident => $pass_label:literal, $fail:ident => $fail_label:literal $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
        pub enum $name {
            #[serde(rename = $pass_label)]
            $pass,
            #[serde(rename = $fail_label)]
            $fail,
            Indeterminate,
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    Self::$pass => $pass_label,
                    Self::$fail => $fail_label,
                    Self::Indeterminate => "Indeterminate",
                }
            }

            pub fn verdict(self) -> Verdict {
                match self {
                    Self::$pass => Verdict::Pass,
                    Self::$fail => Verdict::Fail,
                    Self::Indeterminate => Verdict::Indeterminate,
                }
            }

            fn from_verdict(v: Verdict) -> Self {
                match v {
                    Verdict::Pass => Self::$pass,
                    Verdict::Fail => Self::$fail,
                    Verdict::Indeterminate => Self::Indeterminate,
                }
            }

            /// Whether the label renders in the affirming tone.
            pub fn is_positive(self) -> bool {
                is_positive(self.as_str())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.pad(self.as_str())
            }
        }
    };
}

status_enum!(
    /// Macroscopic analysis: appearance, liquefaction, pH, volume.
    AnalysisStatus { Typical => "Typical", Atypical => "Atypical" }
);
status_enum!(
    /// Total and progressive motility plus agglutination grade.
    MotilityStatus { Active => "Active", LessActive => "Less Active" }
);
status_enum!(
    /// Concentration and vitality.
    ConcentrationStatus { Typical => "Typical", Lower => "Lower" }
);
status_enum!(
    MorphologyStatus { Typical => "Typical", Varied => "Varied" }
);
status_enum!(
    /// Roll-up of the four sub-statuses.
    OverallStatus { Balanced => "Balanced", Review => "Review" }
);

/// The four named statuses of a record plus their roll-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusSet {
    pub analysis: AnalysisStatus,
    pub motility: MotilityStatus,
    pub concentration: ConcentrationStatus,
    pub morphology: MorphologyStatus,
    pub overall: OverallStatus,
}

pub fn analysis_status(r: &TestRecord, t: &Thresholds) -> AnalysisStatus {
    AnalysisStatus::from_verdict(decide(&[
        r.appearance.map(|a| a == Appearance::Normal),
        r.liquefaction.map(|l| l == Liquefaction::Normal),
        measured(r.ph).map(|ph| t.ph_in_range(ph)),
        measured(r.semen_quantity).map(|q| q >= t.min_volume),
    ]))
}

pub fn motility_status(r: &TestRecord, t: &Thresholds) -> MotilityStatus {
    MotilityStatus::from_verdict(decide(&[
        measured(r.total_mobility).map(|m| m >= t.min_total_mobility),
        measured(r.progressive_mobility).map(|m| m >= t.min_progressive_mobility),
        r.agglutination.map(|a| a == Agglutination::Mild),
    ]))
}

pub fn concentration_status(r: &TestRecord, t: &Thresholds) -> ConcentrationStatus {
    ConcentrationStatus::from_verdict(decide(&[
        measured(r.sperm_concentration).map(|c| c >= t.min_concentration),
        measured(r.live_spermatozoa).map(|l| l >= t.min_live),
    ]))
}

pub fn morphology_status(r: &TestRecord, t: &Thresholds) -> MorphologyStatus {
    MorphologyStatus::from_verdict(decide(&[
        measured(r.morphology_rate).map(|m| m >= t.min_morphology)
    ]))
}

/// Any failing sub-status means Review; all indeterminate stays indeterminate.
pub fn overall_status(
    analysis: AnalysisStatus,
    motility: MotilityStatus,
    concentration: ConcentrationStatus,
    morphology: MorphologyStatus,
) -> OverallStatus {
    let as_check = |v: Verdict| match v {
        Verdict::Pass => Some(true),
        Verdict::Fail => Some(false),
        Verdict::Indeterminate => None,
    };
    OverallStatus::from_verdict(decide(&[
        as_check(analysis.verdict()),
        as_check(motility.verdict()),
        as_check(concentration.verdict()),
        as_check(morphology.verdict()),
    ]))
}

pub fn classify(r: &TestRecord, t: &Thresholds) -> StatusSet {
    let analysis = analysis_status(r, t);
    let motility = motility_status(r, t);
    let concentration = concentration_status(r, t);
    let morphology = morphology_status(r, t);
    StatusSet {
        analysis,
        motility,
        concentration,
        morphology,
        overall: overall_status(analysis, motility, concentration, morphology),
    }
}

#[cfg(test)]
#[path = "classifier_test.rs"]
mod tests;
