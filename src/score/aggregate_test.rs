use super::*;
use crate::fixtures::{empty_record, healthy_record, measured};
use crate::score::normalize::normalize_concentration;
use crate::score::scoring::ScoreRange;

fn t() -> Thresholds {
    Thresholds::default()
}

#[test]
fn empty_set_is_zero() {
    let agg = aggregate(&[], &t(), ScoringModel::Weighted);
    assert_eq!(agg.records, 0);
    assert_eq!(agg.composite.score, 0);
    assert_eq!(agg.composite.range, ScoreRange::Lower);
    assert!((agg.mean_composite - 0.0).abs() < 1e-9);
    assert_eq!(agg.sub_scores, SubScores::default());
}

#[test]
fn scores_each_record_before_averaging() {
    // concentration 5 → 16.67, 45 → 67.65; raw mean 25 would score 55.88
    let records = vec![
        measured("new", 2, 50.0, 45.0),
        measured("old", 1, 50.0, 5.0),
    ];
    let agg = aggregate(&records, &t(), ScoringModel::Weighted);
    let per_record_mean = (normalize_concentration(5.0) + normalize_concentration(45.0)) / 2.0;
    let raw_mean_scored = normalize_concentration(25.0);
    let got = agg.sub_scores.concentration.unwrap();
    assert!(
        (got - per_record_mean).abs() < 1e-9,
        "expected per-record mean {per_record_mean}, got {got}"
    );
    assert!(
        (got - raw_mean_scored).abs() > 10.0,
        "fixture must separate the two orders: {got} vs {raw_mean_scored}"
    );
}

#[test]
fn absent_dimensions_average_over_present_records_only() {
    let mut a = empty_record();
    a.total_mobility = Some(60.0);
    let mut b = empty_record();
    b.total_mobility = Some(40.0);
    b.morphology_rate = Some(4.0);
    let agg = aggregate(&[a, b], &t(), ScoringModel::Weighted);
    assert_eq!(agg.sub_scores.motility, Some(50.0));
    assert_eq!(agg.sub_scores.morphology, Some(50.0));
    assert_eq!(agg.sub_scores.concentration, None);
}

#[test]
fn mean_composite_averages_integer_scores() {
    let records = vec![
        measured("a", 3, 80.0, 100.0),
        measured("b", 2, 40.0, 15.0),
    ];
    let agg = aggregate(&records, &t(), ScoringModel::Weighted);
    // a: (0.35*80 + 0.30*100)/0.65 = 89.23 → 89; b: (14 + 15)/0.65 = 44.6 → 44
    assert!((agg.mean_composite - 66.5).abs() < 1e-9, "got {}", agg.mean_composite);
}

#[test]
fn all_empty_records_average_to_nothing() {
    let agg = aggregate(&[empty_record(), empty_record()], &t(), ScoringModel::Weighted);
    assert_eq!(agg.records, 2);
    assert!(!agg.composite.is_measured());
    assert!((agg.mean_composite - 0.0).abs() < 1e-9);
}

#[test]
fn unmeasured_records_stay_out_of_mean_composite() {
    let records = vec![healthy_record(), empty_record()];
    let agg = aggregate(&records, &t(), ScoringModel::Weighted);
    assert_eq!(agg.records, 2);
    assert_eq!(agg.composite.score, 89);
    assert!((agg.mean_composite - 89.0).abs() < 1e-9, "got {}", agg.mean_composite);

    let reversed = vec![empty_record(), healthy_record()];
    let agg = aggregate(&reversed, &t(), ScoringModel::Weighted);
    assert!((agg.mean_composite - 89.0).abs() < 1e-9, "got {}", agg.mean_composite);
}
