use chrono::Duration;

use super::*;
use crate::fixtures::{day, empty_record, healthy_record, measured};
use crate::score::ScoreRange;
use crate::status::OverallStatus;

#[test]
fn default_engine_uses_weighted_model() {
    let engine = MetricsEngine::default();
    assert_eq!(engine.model(), ScoringModel::Weighted);
    assert_eq!(engine.thresholds(), &Thresholds::default());
}

#[test]
fn from_config_picks_up_model_and_thresholds() {
    let config = Config::parse("[scoring]\nmodel = \"unweighted\"\n[thresholds]\nmin_morphology = 6.0\n")
        .unwrap();
    let engine = MetricsEngine::from_config(&config);
    assert_eq!(engine.model(), ScoringModel::Unweighted);
    assert_eq!(engine.thresholds().min_morphology, 6.0);
    assert_eq!(
        engine.with_model(ScoringModel::Weighted).model(),
        ScoringModel::Weighted
    );
}

#[test]
fn healthy_report_is_balanced_and_upper_range() {
    let report = MetricsEngine::default().report(&healthy_record());
    assert_eq!(report.statuses.overall, OverallStatus::Balanced);
    assert!(report.composite.score >= 85, "got {}", report.composite.score);
    assert_eq!(report.composite.range, ScoreRange::Upper);
    assert_eq!(
        report.dna,
        Some(DnaRisk {
            risk: 0,
            category: RiskCategory::Low
        })
    );
}

#[test]
fn empty_record_report_is_total() {
    let report = MetricsEngine::default().report(&empty_record());
    assert_eq!(report.statuses.overall, OverallStatus::Indeterminate);
    assert_eq!(report.composite.score, 0);
    assert_eq!(report.dna, None);
    assert_eq!(report.fields.len(), 12);
}

#[test]
fn submission_then_report_uses_stored_estimate() {
    let engine = MetricsEngine::default();
    let mut r = empty_record();
    r.semen_quantity = Some(1.0);
    r.ph = Some(7.0);
    r.morphology_rate = Some(3.0);
    r.leukocytes = Some(2.0);
    let submitted = engine.prepare_submission(r, true);
    let report = engine.report(&submitted);
    let dna = report.dna.unwrap();
    assert_eq!(dna.risk, 70);
    assert_eq!(dna.category, RiskCategory::High);
    assert_eq!(engine.estimate_dna(&submitted).risk, 70);
}

#[test]
fn dashboard_of_empty_snapshot() {
    let dash = MetricsEngine::default().dashboard(&[], day(10));
    assert_eq!(dash.averages.composite.score, 0);
    assert_eq!(dash.trend, Trend::NoChange);
    assert_eq!(dash.days_since_last_test, None);
    assert!(dash.latest().is_none());
}

#[test]
fn dashboard_sorts_out_of_order_snapshot() {
    let records = vec![
        measured("oldest", 1, 50.0, 25.0),
        measured("newest", 3, 80.0, 60.0),
        measured("mid", 2, 45.0, 20.0),
    ];
    let engine = MetricsEngine::default();
    let dash = engine.dashboard(&records, day(3) + Duration::days(4));
    let ids: Vec<&str> = dash.records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["newest", "mid", "oldest"]);
    assert_eq!(dash.latest().unwrap().id, "newest");
    assert_eq!(dash.trend, Trend::Improving);
    assert_eq!(engine.trend(&records), Trend::Improving);
    assert_eq!(dash.days_since_last_test, Some(4));
}

#[test]
fn dashboard_single_record_has_no_trend() {
    let dash = MetricsEngine::default().dashboard(&[healthy_record()], day(1));
    assert_eq!(dash.trend, Trend::NoChange);
    assert_eq!(dash.days_since_last_test, Some(0));
    assert_eq!(dash.averages.records, 1);
}

#[test]
fn averages_match_dashboard() {
    let records = vec![measured("b", 2, 60.0, 40.0), measured("a", 1, 30.0, 10.0)];
    let engine = MetricsEngine::default();
    let dash = engine.dashboard(&records, day(2));
    assert_eq!(dash.averages, engine.averages(&records));
}

#[test]
fn stored_risk_above_range_is_clamped() {
    let mut r = empty_record();
    r.dna_fragmentation_risk = Some(140);
    let report = MetricsEngine::default().report(&r);
    assert_eq!(report.dna.unwrap().risk, 100);
}

#[test]
fn dashboard_serializes() {
    let dash = MetricsEngine::default().dashboard(&[healthy_record()], day(2));
    let json = serde_json::to_string(&dash).unwrap();
    assert!(json.contains("\"model\":\"weighted\""), "got {json}");
    assert!(json.contains("\"trend\":\"No Change\""), "got {json}");
    assert!(json.contains("\"range\":\"Upper Range\""), "got {json}");
}

#[test]
fn dashboard_ignores_unmeasured_records_in_trend_and_mean() {
    let engine = MetricsEngine::default();
    let mut healthy = healthy_record();
    healthy.date = day(5);
    let dash = engine.dashboard(&[healthy.clone(), empty_record()], day(6));
    assert_eq!(dash.trend, Trend::NoChange);
    assert_eq!(dash.averages.composite.score, 89);
    assert!((dash.averages.mean_composite - 89.0).abs() < 1e-9);

    let mut empty = empty_record();
    empty.date = day(5);
    healthy.date = day(1);
    let dash = engine.dashboard(&[empty, healthy], day(6));
    assert_eq!(dash.trend, Trend::NoChange);
}
