//! `MetricsEngine`: one entry point binding the threshold table and scoring
//! model to every derivation, so all surfaces read the same numbers.
//!
//! Every method is pure. A `Dashboard` is built from a single snapshot of
//! records and is internally consistent.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::{Config, ScoringModel, Thresholds};
use crate::dna::{self, DnaRiskEstimate, RiskCategory};
use crate::record::{TestRecord, days_since, is_newest_first, sort_newest_first};
use crate::score::{self, AggregateScore, CompositeScore, Trend};
use crate::status::{self, FieldStatus, StatusSet};

/// Stored DNA estimate as shown for a persisted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DnaRisk {
    pub risk: u8,
    pub category: RiskCategory,
}

/// Everything derived from a single record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordReport {
    pub id: String,
    pub date: DateTime<Utc>,
    pub statuses: StatusSet,
    pub fields: Vec<FieldStatus>,
    pub composite: CompositeScore,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dna: Option<DnaRisk>,
}

/// Cross-record view over one snapshot, newest record first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub model: ScoringModel,
    pub averages: AggregateScore,
    pub trend: Trend,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_since_last_test: Option<u32>,
    pub records: Vec<RecordReport>,
}

impl Dashboard {
    pub fn latest(&self) -> Option<&RecordReport> {
        self.records.first()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsEngine {
    thresholds: Thresholds,
    model: ScoringModel,
}

impl MetricsEngine {
    pub fn new(thresholds: Thresholds, model: ScoringModel) -> Self {
        Self { thresholds, model }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.thresholds.clone(), config.scoring.model)
    }

    pub fn with_model(mut self, model: ScoringModel) -> Self {
        self.model = model;
        self
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn model(&self) -> ScoringModel {
        self.model
    }

    pub fn statuses(&self, r: &TestRecord) -> StatusSet {
        status::classify(r, &self.thresholds)
    }

    pub fn field_statuses(&self, r: &TestRecord) -> Vec<FieldStatus> {
        status::field_statuses(r, &self.thresholds)
    }

    pub fn score(&self, r: &TestRecord) -> CompositeScore {
        score::score_record(r, &self.thresholds, self.model)
    }

    pub fn estimate_dna(&self, r: &TestRecord) -> DnaRiskEstimate {
        dna::estimate(r, &self.thresholds)
    }

    pub fn prepare_submission(&self, r: TestRecord, estimate_dna: bool) -> TestRecord {
        dna::prepare_submission(r, &self.thresholds, estimate_dna)
    }

    pub fn report(&self, r: &TestRecord) -> RecordReport {
        let bad = r.out_of_domain_fields();
        if !bad.is_empty() {
            tracing::warn!(id = %r.id, fields = ?bad, "percent values outside 0-100 are clamped");
        }
        RecordReport {
            id: r.id.clone(),
            date: r.date,
            statuses: self.statuses(r),
            fields: self.field_statuses(r),
            composite: self.score(r),
            dna: r.dna_fragmentation_risk.map(|risk| {
                let risk = risk.min(100);
                DnaRisk {
                    risk,
                    category: RiskCategory::of(risk),
                }
            }),
        }
    }

    /// Trend over `records`, re-sorted newest first when needed.
    pub fn trend(&self, records: &[TestRecord]) -> Trend {
        score::trend(&newest_first(records), &self.thresholds, self.model)
    }

    pub fn averages(&self, records: &[TestRecord]) -> AggregateScore {
        score::aggregate(records, &self.thresholds, self.model)
    }

    pub fn dashboard(&self, records: &[TestRecord], now: DateTime<Utc>) -> Dashboard {
        let records = newest_first(records);
        Dashboard {
            model: self.model,
            averages: score::aggregate(&records, &self.thresholds, self.model),
            trend: score::trend(&records, &self.thresholds, self.model),
            days_since_last_test: records.first().map(|r| days_since(r.date, now)),
            records: records.iter().map(|r| self.report(r)).collect(),
        }
    }
}

/// Borrow when already ordered newest first, sort a copy otherwise.
fn newest_first(records: &[TestRecord]) -> Cow<'_, [TestRecord]> {
    if is_newest_first(records) {
        Cow::Borrowed(records)
    } else {
        tracing::debug!(count = records.len(), "records out of order, sorting newest first");
        let mut sorted = records.to_vec();
        sort_newest_first(&mut sorted);
        Cow::Owned(sorted)
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
