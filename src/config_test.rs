use super::*;

#[test]
fn defaults_are_reference_values() {
    let t = Thresholds::default();
    assert_eq!(t.ph_min, 7.2);
    assert_eq!(t.ph_max, 8.0);
    assert_eq!(t.min_volume, 1.5);
    assert_eq!(t.min_total_mobility, 40.0);
    assert_eq!(t.min_progressive_mobility, 32.0);
    assert_eq!(t.min_concentration, 15.0);
    assert_eq!(t.min_live, 58.0);
    assert_eq!(t.min_morphology, 4.0);
    assert_eq!(t.max_leukocytes, 1.0);
}

#[test]
fn ph_range_is_inclusive() {
    let t = Thresholds::default();
    assert!(t.ph_in_range(7.2));
    assert!(t.ph_in_range(8.0));
    assert!(!t.ph_in_range(7.19));
    assert!(!t.ph_in_range(8.01));
    assert!(!t.ph_in_range(f64::NAN));
}

#[test]
fn empty_config_is_default() {
    assert_eq!(Config::parse("").unwrap(), Config::default());
    assert_eq!(Config::default().scoring.model, ScoringModel::Weighted);
}

#[test]
fn partial_threshold_override() {
    let config = Config::parse(
        r#"
[scoring]
model = "unweighted"

[thresholds]
min_morphology = 5.0
"#,
    )
    .unwrap();
    assert_eq!(config.scoring.model, ScoringModel::Unweighted);
    assert_eq!(config.thresholds.min_morphology, 5.0);
    assert_eq!(config.thresholds.min_concentration, 15.0);
}

#[test]
fn unknown_model_rejected() {
    assert!(Config::parse("[scoring]\nmodel = \"fancy\"\n").is_err());
    assert!("fancy".parse::<ScoringModel>().is_err());
}

#[test]
fn unknown_threshold_key_rejected() {
    assert!(Config::parse("[thresholds]\nmin_speed = 3.0\n").is_err());
}

#[test]
fn model_from_str_round_trips_display() {
    for model in [ScoringModel::Weighted, ScoringModel::Unweighted] {
        assert_eq!(model.to_string().parse::<ScoringModel>().unwrap(), model);
    }
}

#[test]
fn load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("motile.toml");
    std::fs::write(&path, "[thresholds]\nph_max = 7.8\n").unwrap();
    let config = Config::load_or_default(Some(&path)).unwrap();
    assert_eq!(config.thresholds.ph_max, 7.8);
}

#[test]
fn load_or_default_without_path() {
    assert_eq!(Config::load_or_default(None).unwrap(), Config::default());
}
