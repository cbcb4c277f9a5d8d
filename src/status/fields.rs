//! Per-field display statuses.
//!
//! One row per threshold-bearing field, each labelled independently and
//! toned through the shared [`Tone`] predicate.

use serde::Serialize;

use super::tone::Tone;
use crate::config::Thresholds;
use crate::record::{Agglutination, Appearance, Consistency, Liquefaction, TestRecord, measured};

pub const NOT_PROVIDED: &str = "Not Provided";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldStatus {
    pub field: &'static str,
    /// Formatted value with unit; `None` when the field was not provided.
    pub value: Option<String>,
    pub label: &'static str,
    pub tone: Tone,
}

impl FieldStatus {
    fn new(field: &'static str, value: Option<String>, label: &'static str) -> Self {
        Self {
            field,
            value,
            label,
            tone: Tone::of(label),
        }
    }

    fn absent(field: &'static str) -> Self {
        Self::new(field, None, NOT_PROVIDED)
    }

    fn categorical<T: Copy>(
        field: &'static str,
        value: Option<T>,
        display: impl Fn(T) -> &'static str,
        label: impl Fn(T) -> &'static str,
    ) -> Self {
        match value {
            Some(v) => Self::new(field, Some(display(v).to_string()), label(v)),
            None => Self::absent(field),
        }
    }

    fn numeric(
        field: &'static str,
        value: Option<f64>,
        unit: &str,
        label: impl Fn(f64) -> &'static str,
    ) -> Self {
        match measured(value) {
            Some(v) => Self::new(field, Some(format_value(v, unit)), label(v)),
            None => Self::absent(field),
        }
    }
}

fn format_value(v: f64, unit: &str) -> String {
    match unit {
        "" => format!("{v:.1}"),
        "%" => format!("{v:.0}%"),
        _ => format!("{v:.1} {unit}"),
    }
}

fn at_least(min: f64) -> impl Fn(f64) -> &'static str {
    move |v| if v >= min { "Normal" } else { "Low" }
}

/// Display statuses for every threshold-bearing field of `r`.
pub fn field_statuses(r: &TestRecord, t: &Thresholds) -> Vec<FieldStatus> {
    vec![
        FieldStatus::categorical("Appearance", r.appearance, Appearance::as_str, Appearance::as_str),
        FieldStatus::categorical(
            "Liquefaction",
            r.liquefaction,
            Liquefaction::as_str,
            Liquefaction::as_str,
        ),
        FieldStatus::categorical("Consistency", r.consistency, Consistency::as_str, |c| {
            match c {
                Consistency::Medium => "Normal",
                other => other.as_str(),
            }
        }),
        FieldStatus::numeric("Semen Quantity", r.semen_quantity, "mL", at_least(t.min_volume)),
        FieldStatus::numeric("pH", r.ph, "", |ph| {
            if ph < t.ph_min {
                "Acidic"
            } else if ph > t.ph_max {
                "Alkaline"
            } else {
                "Normal"
            }
        }),
        FieldStatus::numeric(
            "Total Motility",
            r.total_mobility,
            "%",
            at_least(t.min_total_mobility),
        ),
        FieldStatus::numeric(
            "Progressive Motility",
            r.progressive_mobility,
            "%",
            at_least(t.min_progressive_mobility),
        ),
        FieldStatus::categorical(
            "Agglutination",
            r.agglutination,
            Agglutination::as_str,
            Agglutination::as_str,
        ),
        FieldStatus::numeric(
            "Concentration",
            r.sperm_concentration,
            "M/mL",
            at_least(t.min_concentration),
        ),
        FieldStatus::numeric(
            "Live Spermatozoa",
            r.live_spermatozoa,
            "%",
            at_least(t.min_live),
        ),
        FieldStatus::numeric(
            "Morphology",
            r.morphology_rate,
            "%",
            at_least(t.min_morphology),
        ),
        FieldStatus::numeric("Leukocytes", r.leukocytes, "M/mL", |v| {
            if v > t.max_leukocytes { "High" } else { "Normal" }
        }),
    ]
}

#[cfg(test)]
#[path = "fields_test.rs"]
mod tests;
