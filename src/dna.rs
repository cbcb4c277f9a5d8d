//! DNA fragmentation risk estimate.
//!
//! Five independent risk flags, each worth a fixed number of points, are
//! summed into a 0–100 risk and bucketed into a three-tier category. An
//! absent field never raises its flag. The estimate is taken once, when a
//! record is submitted, and stored on the record.

use std::fmt;

use serde::Serialize;

use crate::config::Thresholds;
use crate::record::{TestRecord, measured};

pub const POINTS_LOW_MOTILITY: u8 = 30;
pub const POINTS_ABNORMAL_MORPHOLOGY: u8 = 25;
pub const POINTS_HIGH_LEUKOCYTES: u8 = 20;
pub const POINTS_LOW_VOLUME: u8 = 15;
pub const POINTS_ABNORMAL_PH: u8 = 10;

/// Risk below this is Low.
pub const MODERATE_FROM: u8 = 20;
/// Risk at or above this is High.
pub const HIGH_FROM: u8 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskFlag {
    LowMotility,
    AbnormalMorphology,
    HighLeukocytes,
    LowVolume,
    AbnormalPh,
}

impl RiskFlag {
    pub fn points(self) -> u8 {
        match self {
            Self::LowMotility => POINTS_LOW_MOTILITY,
            Self::AbnormalMorphology => POINTS_ABNORMAL_MORPHOLOGY,
            Self::HighLeukocytes => POINTS_HIGH_LEUKOCYTES,
            Self::LowVolume => POINTS_LOW_VOLUME,
            Self::AbnormalPh => POINTS_ABNORMAL_PH,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::LowMotility => "low motility",
            Self::AbnormalMorphology => "abnormal morphology",
            Self::HighLeukocytes => "high leukocytes",
            Self::LowVolume => "low volume",
            Self::AbnormalPh => "abnormal pH",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskCategory {
    Low,
    Moderate,
    High,
}

impl RiskCategory {
    pub fn of(risk: u8) -> Self {
        if risk < MODERATE_FROM {
            Self::Low
        } else if risk < HIGH_FROM {
            Self::Moderate
        } else {
            Self::High
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnaRiskEstimate {
    pub risk: u8,
    pub category: RiskCategory,
    pub flags: Vec<RiskFlag>,
}

/// Flags raised by `r`. Absent fields never raise a flag.
pub fn risk_flags(r: &TestRecord, t: &Thresholds) -> Vec<RiskFlag> {
    let checks = [
        (
            RiskFlag::LowMotility,
            measured(r.total_mobility).is_some_and(|m| m < t.min_total_mobility),
        ),
        (
            RiskFlag::AbnormalMorphology,
            measured(r.morphology_rate).is_some_and(|m| m < t.min_morphology),
        ),
        (
            RiskFlag::HighLeukocytes,
            measured(r.leukocytes).is_some_and(|l| l > t.max_leukocytes),
        ),
        (
            RiskFlag::LowVolume,
            measured(r.semen_quantity).is_some_and(|q| q < t.min_volume),
        ),
        (
            RiskFlag::AbnormalPh,
            measured(r.ph).is_some_and(|ph| ph < t.ph_min || ph > t.ph_max),
        ),
    ];
    checks
        .into_iter()
        .filter_map(|(flag, raised)| raised.then_some(flag))
        .collect()
}

pub fn estimate(r: &TestRecord, t: &Thresholds) -> DnaRiskEstimate {
    let flags = risk_flags(r, t);
    let total: u32 = flags.iter().map(|f| u32::from(f.points())).sum();
    let risk = u8::try_from(total.min(100)).unwrap_or(100);
    DnaRiskEstimate {
        risk,
        category: RiskCategory::of(risk),
        flags,
    }
}

/// Prepare a record for hand-off to the record store.
///
/// With `estimate_dna` set, the derived DNA fields are filled in. A record
/// that already carries a risk keeps it: the estimate is taken once.
pub fn prepare_submission(mut record: TestRecord, t: &Thresholds, estimate_dna: bool) -> TestRecord {
    if !estimate_dna || record.dna_fragmentation_risk.is_some() {
        return record;
    }
    let est = estimate(&record, t);
    tracing::debug!(
        risk = est.risk,
        category = est.category.as_str(),
        flags = est.flags.len(),
        "estimated DNA fragmentation risk"
    );
    record.dna_fragmentation_risk = Some(est.risk);
    record.dna_risk_category = Some(est.category.as_str().to_string());
    record
}

#[cfg(test)]
#[path = "dna_test.rs"]
mod tests;
