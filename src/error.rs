//! Error type for the fallible edges of the crate (file loading, config
//! parsing, challenge index validation). The scoring engine itself is total
//! and never returns errors.

use std::path::PathBuf;

/// Errors produced while loading inputs or mutating challenge progress.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid record data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{what} {value} out of range (expected {min}..={max})")]
    OutOfRange {
        what: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },

    #[error("invalid date '{0}' (expected YYYY-MM-DD or RFC 3339)")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, Error>;
