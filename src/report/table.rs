//! Plain-text tables for the terminal.

use std::fmt::Write as _;

use crate::dna::DnaRiskEstimate;
use crate::engine::{Dashboard, RecordReport};
use crate::record::TestRecord;
use crate::report_helpers::{separator, tone_marker, truncate};
use crate::score::{AggregateScore, Dimension};
use crate::status::Tone;
use crate::tips::DailyTips;

const WIDTH: usize = 66;

/// Render the dashboard: averages, trend, then one block per record.
pub fn render_dashboard(dash: &Dashboard) -> String {
    let sep = separator(WIDTH);
    let mut out = String::new();

    let _ = writeln!(out, "Semen Analysis Dashboard ({} model)", dash.model);
    let _ = writeln!(out, "{sep}");
    let _ = writeln!(out, " Tests:            {}", dash.averages.records);
    if let Some(days) = dash.days_since_last_test {
        let _ = writeln!(out, " Last Test:        {days} day(s) ago");
    }
    let _ = writeln!(
        out,
        " Average Score:    {} ({})",
        dash.averages.composite.score, dash.averages.composite.range
    );
    let _ = writeln!(out, " Trend:            {}", dash.trend);
    let _ = writeln!(out, "{sep}");
    render_averages(&mut out, &dash.averages);

    for r in &dash.records {
        out.push('\n');
        render_record_into(&mut out, r);
    }
    out
}

fn render_averages(out: &mut String, avg: &AggregateScore) {
    let sep = separator(WIDTH);
    let _ = writeln!(out, " {:<25} {:>6}   {:>5}", "Dimension", "Weight", "Score");
    let _ = writeln!(out, "{sep}");
    for dim in Dimension::ALL {
        let weight = avg
            .composite
            .components
            .iter()
            .find(|c| c.dimension == dim)
            .map(|c| c.weight);
        match (avg.sub_scores.get(dim), weight) {
            (Some(score), Some(w)) => {
                let _ = writeln!(out, " {:<25} {:>5.0}%   {:>5.1}", dim.as_str(), w * 100.0, score);
            }
            _ => {
                let _ = writeln!(out, " {:<25} {:>6}   {:>5}", dim.as_str(), "-", "-");
            }
        }
    }
    let _ = writeln!(out, "{sep}");
}

/// Render a single record's statuses, score and field rows.
pub fn render_record(r: &RecordReport) -> String {
    let mut out = String::new();
    render_record_into(&mut out, r);
    out
}

fn render_record_into(out: &mut String, r: &RecordReport) {
    let sep = separator(WIDTH);
    let id = if r.id.is_empty() { "(unsaved)" } else { r.id.as_str() };
    let _ = writeln!(out, "Test {} ({})", truncate(id, 24), r.date.format("%Y-%m-%d"));
    let _ = writeln!(out, "{sep}");
    let _ = writeln!(
        out,
        " Overall:  {:<14} Score: {} ({})",
        r.statuses.overall,
        r.composite.score,
        r.composite.range.status_label()
    );
    let _ = writeln!(
        out,
        " Analysis: {:<14} Motility: {}",
        r.statuses.analysis, r.statuses.motility
    );
    let _ = writeln!(
        out,
        " Concentration: {:<9} Morphology: {}",
        r.statuses.concentration, r.statuses.morphology
    );
    if let Some(dna) = r.dna {
        let _ = writeln!(out, " DNA Fragmentation Risk: {}% ({})", dna.risk, dna.category);
    }
    let _ = writeln!(out, "{sep}");
    for f in &r.fields {
        let value = f.value.as_deref().unwrap_or("-");
        let _ = writeln!(
            out,
            " {} {:<22} {:>12}   {}",
            tone_marker(f.tone),
            f.field,
            value,
            f.label
        );
    }
    let _ = writeln!(out, "{sep}");
}

/// Render the outcome of a DNA estimate for a submission.
pub fn render_estimate(record: &TestRecord, est: &DnaRiskEstimate) -> String {
    let sep = separator(WIDTH);
    let mut out = String::new();
    let _ = writeln!(out, "DNA Fragmentation Risk ({})", record.date.format("%Y-%m-%d"));
    let _ = writeln!(out, "{sep}");
    let _ = writeln!(out, " Risk:      {}%", est.risk);
    let _ = writeln!(out, " Category:  {}", est.category);
    let _ = writeln!(out, "{sep}");
    if est.flags.is_empty() {
        let _ = writeln!(out, " No risk factors present");
    }
    for flag in &est.flags {
        let _ = writeln!(
            out,
            " {} {:<22} +{}",
            tone_marker(Tone::Attention),
            flag.as_str(),
            flag.points()
        );
    }
    let _ = writeln!(out, "{sep}");
    out
}

/// Render the day's selected tips.
pub fn render_tips(daily: &DailyTips, pool: &[String]) -> String {
    let sep = separator(WIDTH);
    let mut out = String::new();
    let _ = writeln!(out, "Tips for {}", daily.date.format("%Y-%m-%d"));
    let _ = writeln!(out, "{sep}");
    for &i in &daily.indices {
        let mark = if daily.is_checked(i) { 'x' } else { ' ' };
        let text = pool.get(i).map_or("", String::as_str);
        let _ = writeln!(out, " [{mark}] {:>3}  {}", i + 1, truncate(text, WIDTH - 10));
    }
    let _ = writeln!(out, "{sep}");
    out
}

#[cfg(test)]
#[path = "table_test.rs"]
mod tests;
