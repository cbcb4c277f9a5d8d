//! Reference thresholds, scoring model selection and the optional
//! `motile.toml` config file.
//!
//! `Thresholds` is the single table every classifier, estimator and field
//! display reads from. The defaults are the reference values; a config file
//! may override any subset of them.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::record::read_to_string;

/// Reference limits for each threshold-bearing field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Thresholds {
    /// Inclusive lower bound of the typical pH range.
    pub ph_min: f64,
    /// Inclusive upper bound of the typical pH range.
    pub ph_max: f64,
    /// Minimum semen volume in mL.
    pub min_volume: f64,
    /// Minimum total motility in percent.
    pub min_total_mobility: f64,
    /// Minimum progressive motility in percent.
    pub min_progressive_mobility: f64,
    /// Minimum concentration in millions/mL.
    pub min_concentration: f64,
    /// Minimum live spermatozoa (vitality) in percent.
    pub min_live: f64,
    /// Minimum normal-form morphology in percent.
    pub min_morphology: f64,
    /// Maximum leukocytes in millions/mL.
    pub max_leukocytes: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            ph_min: 7.2,
            ph_max: 8.0,
            min_volume: 1.5,
            min_total_mobility: 40.0,
            min_progressive_mobility: 32.0,
            min_concentration: 15.0,
            min_live: 58.0,
            min_morphology: 4.0,
            max_leukocytes: 1.0,
        }
    }
}

impl Thresholds {
    pub fn ph_in_range(&self, ph: f64) -> bool {
        (self.ph_min..=self.ph_max).contains(&ph)
    }
}

/// Weight table used to combine sub-scores into the composite score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringModel {
    /// Motility 35%, concentration 30%, morphology 15%, DNA 10%, analysis 10%.
    #[default]
    Weighted,
    /// Plain mean of the five sub-scores.
    Unweighted,
}

impl ScoringModel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weighted => "weighted",
            Self::Unweighted => "unweighted",
        }
    }
}

impl fmt::Display for ScoringModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ScoringModel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "weighted" => Ok(Self::Weighted),
            "unweighted" => Ok(Self::Unweighted),
            other => Err(format!(
                "unknown scoring model '{other}' (expected weighted or unweighted)"
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    pub model: ScoringModel,
}

/// Contents of `motile.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub thresholds: Thresholds,
}

impl Config {
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let config = Self::parse(&read_to_string(path)?)?;
        tracing::debug!(
            path = %path.display(),
            model = %config.scoring.model,
            "loaded config"
        );
        Ok(config)
    }

    /// Load `path` when given, reference defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
