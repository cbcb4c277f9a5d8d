//! Command entry points: load inputs, run the engine, print text or JSON.

pub mod table;

use std::error::Error;
use std::path::Path;

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::Serialize;

use crate::config::{Config, ScoringModel};
use crate::dna::DnaRiskEstimate;
use crate::engine::MetricsEngine;
use crate::record::{TestRecord, load_record, load_records, read_to_string};
use crate::report_helpers::print_json_stdout;
use crate::tips::{DailyTips, TIPS_PER_DAY};

use table::{render_dashboard, render_estimate, render_tips};

/// Build the engine from an optional config file, with `model` overriding
/// the configured scoring model.
fn engine_for(config: Option<&Path>, model: Option<ScoringModel>) -> crate::Result<MetricsEngine> {
    let engine = MetricsEngine::from_config(&Config::load_or_default(config)?);
    Ok(match model {
        Some(m) => engine.with_model(m),
        None => engine,
    })
}

pub fn run_report(
    path: &Path,
    json: bool,
    model: Option<ScoringModel>,
    config: Option<&Path>,
    now: Option<DateTime<Utc>>,
) -> Result<(), Box<dyn Error>> {
    let engine = engine_for(config, model)?;
    let records = load_records(path)?;
    let dash = engine.dashboard(&records, now.unwrap_or_else(Utc::now));
    tracing::info!(
        records = records.len(),
        model = %engine.model(),
        score = dash.averages.composite.score,
        "dashboard built"
    );

    if json {
        print_json_stdout(&dash)?;
    } else {
        print!("{}", render_dashboard(&dash));
    }
    Ok(())
}

/// Submission view: the record as it would be stored, plus the estimate.
#[derive(Serialize)]
struct EstimateOutput<'a> {
    record: &'a TestRecord,
    estimate: &'a DnaRiskEstimate,
}

pub fn run_estimate(path: &Path, json: bool, config: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let engine = engine_for(config, None)?;
    let record = load_record(path)?;
    let estimate = engine.estimate_dna(&record);
    let record = engine.prepare_submission(record, true);

    if json {
        print_json_stdout(&EstimateOutput {
            record: &record,
            estimate: &estimate,
        })?;
    } else {
        print!("{}", render_estimate(&record, &estimate));
    }
    Ok(())
}

/// One tip per line; surrounding whitespace trimmed, blank lines skipped.
pub fn parse_tip_pool(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Serialize)]
struct TipOutput<'a> {
    index: usize,
    tip: &'a str,
}

#[derive(Serialize)]
struct TipsOutput<'a> {
    date: NaiveDate,
    tips: Vec<TipOutput<'a>>,
}

pub fn run_tips(path: &Path, date: Option<NaiveDate>, json: bool) -> Result<(), Box<dyn Error>> {
    let pool = parse_tip_pool(&read_to_string(path)?);
    if pool.len() < TIPS_PER_DAY {
        tracing::warn!(
            pool = pool.len(),
            wanted = TIPS_PER_DAY,
            "tip pool smaller than a day's selection"
        );
    }
    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let daily = DailyTips::new(date, pool.len());

    if json {
        let tips = daily
            .indices
            .iter()
            .filter_map(|&index| {
                pool.get(index).map(|tip| TipOutput {
                    index,
                    tip: tip.as_str(),
                })
            })
            .collect();
        print_json_stdout(&TipsOutput { date, tips })?;
    } else {
        print!("{}", render_tips(&daily, &pool));
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
