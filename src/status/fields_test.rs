use super::*;
use crate::fixtures::{empty_record, healthy_record};

fn row<'a>(rows: &'a [FieldStatus], field: &str) -> &'a FieldStatus {
    rows.iter().find(|r| r.field == field).unwrap()
}

#[test]
fn one_row_per_threshold_field() {
    let rows = field_statuses(&healthy_record(), &Thresholds::default());
    assert_eq!(rows.len(), 12);
}

#[test]
fn healthy_record_all_positive() {
    let rows = field_statuses(&healthy_record(), &Thresholds::default());
    for r in &rows {
        assert_eq!(r.tone, Tone::Positive, "{} was {}", r.field, r.label);
    }
}

#[test]
fn absent_fields_are_not_provided() {
    let rows = field_statuses(&empty_record(), &Thresholds::default());
    for r in &rows {
        assert_eq!(r.label, NOT_PROVIDED);
        assert_eq!(r.value, None);
        assert_eq!(r.tone, Tone::Attention);
    }
}

#[test]
fn ph_labels() {
    let t = Thresholds::default();
    let mut rec = empty_record();
    rec.ph = Some(6.9);
    assert_eq!(row(&field_statuses(&rec, &t), "pH").label, "Acidic");
    rec.ph = Some(8.4);
    assert_eq!(row(&field_statuses(&rec, &t), "pH").label, "Alkaline");
    rec.ph = Some(7.5);
    let rows = field_statuses(&rec, &t);
    assert_eq!(row(&rows, "pH").label, "Normal");
    assert_eq!(row(&rows, "pH").value.as_deref(), Some("7.5"));
}

#[test]
fn numeric_formatting_and_labels() {
    let t = Thresholds::default();
    let mut rec = empty_record();
    rec.semen_quantity = Some(1.2);
    rec.total_mobility = Some(35.0);
    rec.leukocytes = Some(2.5);
    let rows = field_statuses(&rec, &t);
    let q = row(&rows, "Semen Quantity");
    assert_eq!(q.value.as_deref(), Some("1.2 mL"));
    assert_eq!(q.label, "Low");
    assert_eq!(q.tone, Tone::Attention);
    assert_eq!(row(&rows, "Total Motility").value.as_deref(), Some("35%"));
    assert_eq!(row(&rows, "Leukocytes").label, "High");
}

#[test]
fn categorical_labels() {
    let t = Thresholds::default();
    let mut rec = healthy_record();
    rec.consistency = Some(Consistency::Thick);
    rec.agglutination = Some(Agglutination::Severe);
    rec.appearance = Some(Appearance::Abnormal);
    let rows = field_statuses(&rec, &t);
    let c = row(&rows, "Consistency");
    assert_eq!(c.value.as_deref(), Some("Thick"));
    assert_eq!(c.tone, Tone::Attention);
    assert_eq!(row(&rows, "Agglutination").label, "Severe");
    assert_eq!(row(&rows, "Appearance").tone, Tone::Attention);
}

#[test]
fn medium_consistency_reads_normal() {
    let rows = field_statuses(&healthy_record(), &Thresholds::default());
    let c = row(&rows, "Consistency");
    assert_eq!(c.value.as_deref(), Some("Medium"));
    assert_eq!(c.label, "Normal");
}

#[test]
fn nan_values_are_not_provided() {
    let mut r = empty_record();
    r.ph = Some(f64::NAN);
    r.total_mobility = Some(f64::NAN);
    let rows = field_statuses(&r, &Thresholds::default());
    for field in ["pH", "Total Motility"] {
        let row = row(&rows, field);
        assert_eq!(row.label, NOT_PROVIDED, "{field}");
        assert_eq!(row.value, None, "{field}");
    }
}
