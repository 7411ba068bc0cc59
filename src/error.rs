use std::path::PathBuf;

use thiserror::Error;

/// Reasons a body record is rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidBody {
    #[error("mass must be positive, got {0} kg")]
    Mass(f64),
    #[error("physical radius must be positive, got {0} m")]
    PhysicalRadius(f64),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid body: {0}")]
    InvalidBody(#[from] InvalidBody),

    #[error("invalid {name} scale: must be positive and finite, got {value}")]
    InvalidScale { name: &'static str, value: f64 },

    #[error("scenario contains no bodies")]
    EmptyScenario,

    #[error("failed to read config {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ParseConfig(#[from] toml::de::Error),

    #[error("failed to write status line: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
