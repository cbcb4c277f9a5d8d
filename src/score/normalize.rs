//! Piecewise linear normalization curves for the composite score.
//!
//! Each scored field uses a curve of breakpoints to map its raw value to a
//! 0–100 sub-score. Values between breakpoints are linearly interpolated;
//! values beyond the endpoints are clamped, so out-of-domain input never
//! leaks into score arithmetic.

/// A single point on a piecewise linear curve, mapping an `input` value to
/// an output `score` (0–100).
struct Breakpoint {
    input: f64,
    score: f64,
}

/// Piecewise linear interpolation. Values below the first breakpoint clamp to
/// its score; values above the last clamp to its score.
fn piecewise(value: f64, curve: &[Breakpoint]) -> f64 {
    debug_assert!(
        curve.windows(2).all(|w| w[0].input <= w[1].input),
        "Breakpoints must be sorted by input in ascending order"
    );
    let Some(first) = curve.first() else {
        return 0.0;
    };
    if value <= first.input {
        return first.score;
    }
    for w in curve.windows(2) {
        if value <= w[1].input {
            let frac = (value - w[0].input) / (w[1].input - w[0].input);
            return w[0].score + frac * (w[1].score - w[0].score);
        }
    }
    curve.last().map_or(0.0, |b| b.score)
}

/// Concentration curve (millions/mL): the reference minimum of 15 sits at
/// the midpoint. 0 → 0, 15 → 50, ≥100 → 100.
const CONCENTRATION_CURVE: &[Breakpoint] = &[
    Breakpoint {
        input: 0.0,
        score: 0.0,
    },
    Breakpoint {
        input: 15.0,
        score: 50.0,
    },
    Breakpoint {
        input: 100.0,
        score: 100.0,
    },
];

/// Morphology curve (% normal forms), same shape with the midpoint at 4.
/// 0 → 0, 4 → 50, 100 → 100.
const MORPHOLOGY_CURVE: &[Breakpoint] = &[
    Breakpoint {
        input: 0.0,
        score: 0.0,
    },
    Breakpoint {
        input: 4.0,
        score: 50.0,
    },
    Breakpoint {
        input: 100.0,
        score: 100.0,
    },
];

/// DNA fragmentation risk curve: low risk loses 50/15 points per risk
/// point up to 15, the remainder declines to 0 at risk 100.
const DNA_RISK_CURVE: &[Breakpoint] = &[
    Breakpoint {
        input: 0.0,
        score: 100.0,
    },
    Breakpoint {
        input: 15.0,
        score: 50.0,
    },
    Breakpoint {
        input: 100.0,
        score: 0.0,
    },
];

/// Total motility is already a percentage; clamp it into 0–100.
pub fn normalize_motility(total_mobility: f64) -> f64 {
    total_mobility.clamp(0.0, 100.0)
}

/// Normalize concentration to a 0–100 score (higher concentration = higher score).
pub fn normalize_concentration(concentration: f64) -> f64 {
    piecewise(concentration, CONCENTRATION_CURVE)
}

/// Normalize the normal-forms percentage to a 0–100 score.
pub fn normalize_morphology(morphology_rate: f64) -> f64 {
    piecewise(morphology_rate, MORPHOLOGY_CURVE)
}

/// Normalize DNA fragmentation risk to a 0–100 score (lower risk = higher score).
pub fn normalize_dna_risk(risk: u8) -> f64 {
    piecewise(f64::from(risk), DNA_RISK_CURVE)
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
