use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 0.01
}

#[test]
fn test_motility_clamps() {
    assert!(close(normalize_motility(55.0), 55.0));
    assert!(close(normalize_motility(-5.0), 0.0));
    assert!(close(normalize_motility(140.0), 100.0));
}

#[test]
fn test_concentration_midpoint() {
    let s = normalize_concentration(15.0);
    assert!(close(s, 50.0), "concentration=15 should score 50, got {s}");
}

#[test]
fn test_concentration_lower_segment() {
    let s = normalize_concentration(6.0);
    assert!(close(s, 20.0), "concentration=6 should score 20, got {s}");
}

#[test]
fn test_concentration_upper_segment() {
    let s = normalize_concentration(57.5);
    assert!(close(s, 75.0), "concentration=57.5 should score 75, got {s}");
}

#[test]
fn test_concentration_clamps() {
    assert!(close(normalize_concentration(-3.0), 0.0));
    assert!(close(normalize_concentration(250.0), 100.0));
}

#[test]
fn test_morphology_midpoint() {
    let s = normalize_morphology(4.0);
    assert!(close(s, 50.0), "morphology=4 should score 50, got {s}");
}

#[test]
fn test_morphology_segments() {
    assert!(close(normalize_morphology(2.0), 25.0));
    assert!(close(normalize_morphology(52.0), 75.0));
    assert!(close(normalize_morphology(100.0), 100.0));
}

#[test]
fn test_dna_risk_low_segment() {
    assert!(close(normalize_dna_risk(0), 100.0));
    let s = normalize_dna_risk(3);
    assert!(close(s, 90.0), "risk=3 should score 90, got {s}");
    assert!(close(normalize_dna_risk(15), 50.0));
}

#[test]
fn test_dna_risk_high_segment() {
    assert!(close(normalize_dna_risk(100), 0.0));
    let s = normalize_dna_risk(70);
    assert!((s - 17.647).abs() < 0.01, "risk=70 should score ~17.6, got {s}");
}

#[test]
fn test_curves_monotonic() {
    let inputs = [0.0, 1.0, 4.0, 10.0, 15.0, 40.0, 99.0, 100.0, 150.0];
    for w in inputs.windows(2) {
        assert!(normalize_concentration(w[1]) >= normalize_concentration(w[0]));
        assert!(normalize_morphology(w[1]) >= normalize_morphology(w[0]));
    }
    for r in 0..100u8 {
        assert!(normalize_dna_risk(r + 1) <= normalize_dna_risk(r));
    }
}

#[test]
fn test_piecewise_empty_curve() {
    assert!(close(piecewise(5.0, &[]), 0.0));
}
