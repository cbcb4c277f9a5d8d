//! Test-result data model.
//!
//! A `TestRecord` is one semen-analysis sample as handed over by the record
//! store. Every measurement is optional: "not provided" is a value of its own
//! and is never collapsed into zero. Records arrive as a JSON array ordered
//! newest first.

use std::fmt;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Visual appearance of the sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Normal,
    Abnormal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Liquefaction {
    Normal,
    Abnormal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Consistency {
    Thin,
    Medium,
    Thick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Agglutination {
    Mild,
    Moderate,
    Severe,
}

/// Display names shared by the field enums.
macro_rules! display_names {
    ($name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.as_str())
            }
        }
    };
}

display_names!(Appearance { Normal => "Normal", Abnormal => "Abnormal" });
display_names!(Liquefaction { Normal => "Normal", Abnormal => "Abnormal" });
display_names!(Consistency { Thin => "Thin", Medium => "Medium", Thick => "Thick" });
display_names!(Agglutination { Mild => "Mild", Moderate => "Moderate", Severe => "Severe" });

/// One semen-analysis sample.
///
/// `dna_fragmentation_risk` and `dna_risk_category` are derived fields,
/// written once by [`crate::dna::prepare_submission`] and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestRecord {
    /// Assigned by the record store; empty until the record is persisted.
    #[serde(default)]
    pub id: String,
    pub date: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appearance: Option<Appearance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquefaction: Option<Liquefaction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consistency: Option<Consistency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semen_quantity: Option<f64>,
    #[serde(rename = "pH", default, skip_serializing_if = "Option::is_none")]
    pub ph: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_mobility: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progressive_mobility: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_progressive_mobility: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobility_index: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub still: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agglutination: Option<Agglutination>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sperm_concentration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_spermatozoa: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub functional_spermatozoa: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round_cells: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leukocytes: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_spermatozoa: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub morphology_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pathology: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_defect: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neck_defect: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tail_defect: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dna_fragmentation_risk: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dna_risk_category: Option<String>,
}

impl TestRecord {
    /// A record with only identity and date set.
    pub fn new(id: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            date,
            appearance: None,
            liquefaction: None,
            consistency: None,
            semen_quantity: None,
            ph: None,
            total_mobility: None,
            progressive_mobility: None,
            non_progressive_mobility: None,
            travel_speed: None,
            mobility_index: None,
            still: None,
            agglutination: None,
            sperm_concentration: None,
            total_spermatozoa: None,
            functional_spermatozoa: None,
            round_cells: None,
            leukocytes: None,
            live_spermatozoa: None,
            morphology_rate: None,
            pathology: None,
            head_defect: None,
            neck_defect: None,
            tail_defect: None,
            dna_fragmentation_risk: None,
            dna_risk_category: None,
        }
    }

    /// Names of percent fields whose value lies outside [0, 100] (or is NaN).
    /// These are clamped wherever they feed a score.
    pub fn out_of_domain_fields(&self) -> Vec<&'static str> {
        let percents = [
            ("totalMobility", self.total_mobility),
            ("progressiveMobility", self.progressive_mobility),
            ("nonProgressiveMobility", self.non_progressive_mobility),
            ("mobilityIndex", self.mobility_index),
            ("still", self.still),
            ("liveSpermatozoa", self.live_spermatozoa),
            ("morphologyRate", self.morphology_rate),
            ("pathology", self.pathology),
            ("headDefect", self.head_defect),
            ("neckDefect", self.neck_defect),
            ("tailDefect", self.tail_defect),
        ];
        percents
            .into_iter()
            .filter_map(|(name, v)| match v {
                Some(v) if !(0.0..=100.0).contains(&v) => Some(name),
                _ => None,
            })
            .collect()
    }
}

/// A numeric measurement as the derivations see it: NaN counts as absent.
pub fn measured(value: Option<f64>) -> Option<f64> {
    value.filter(|v| !v.is_nan())
}

/// Parse a JSON array of records.
pub fn parse_records(text: &str) -> Result<Vec<TestRecord>> {
    Ok(serde_json::from_str(text)?)
}

/// Parse a single JSON record (a submission that has not been persisted yet).
pub fn parse_record(text: &str) -> Result<TestRecord> {
    Ok(serde_json::from_str(text)?)
}

/// Read and parse a JSON array of records from `path`.
pub fn load_records(path: &Path) -> Result<Vec<TestRecord>> {
    let text = read_to_string(path)?;
    let records = parse_records(&text)?;
    tracing::debug!(path = %path.display(), count = records.len(), "loaded records");
    Ok(records)
}

/// Read and parse a single JSON record from `path`.
pub fn load_record(path: &Path) -> Result<TestRecord> {
    parse_record(&read_to_string(path)?)
}

pub(crate) fn read_to_string(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// True when dates never increase along the slice.
pub fn is_newest_first(records: &[TestRecord]) -> bool {
    records.windows(2).all(|w| w[0].date >= w[1].date)
}

/// Stable sort by date, newest first.
pub fn sort_newest_first(records: &mut [TestRecord]) {
    records.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Whole days elapsed from `date` to `now`; 0 when `date` lies in the future.
pub fn days_since(date: DateTime<Utc>, now: DateTime<Utc>) -> u32 {
    let days = (now - date).num_days();
    u32::try_from(days).unwrap_or(0)
}

#[cfg(test)]
#[path = "record_test.rs"]
mod tests;
