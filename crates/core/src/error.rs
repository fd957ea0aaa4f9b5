use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Precondition failures for the softmax core and its input adapters.
///
/// The slider clamps its own range, so in a wired-up view these should never
/// reach an end user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("score table is empty")]
    EmptyEntries,

    #[error("temperature must be finite and > 0, got {0}")]
    NonPositiveTemperature(f64),

    #[error("score for `{label}` is not finite ({score})")]
    NonFiniteScore { label: String, score: f64 },

    #[error("entry label must not be empty")]
    EmptyLabel,

    #[error("duplicate entry label `{0}`")]
    DuplicateLabel(String),

    #[error("cannot parse temperature from `{0}`")]
    UnparsableTemperature(String),

    #[error("invalid slider range: {0}")]
    SliderRange(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}
