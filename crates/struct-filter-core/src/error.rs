//! Error type shared by every struct-filter layer.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    /// The search reported no schema, so real columns cannot be qualified.
    #[error("search has no schema; a filter form needs at least one schema to qualify columns")]
    NoSchema,
    #[error("search failed: {0}")]
    Search(String),
    #[error("invalid filter parameter {name:?}: {reason}")]
    InvalidParam { name: String, reason: String },
    #[error("markup error: {0}")]
    Markup(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("malformed result source: {0}")]
    Source(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("failed to write to output sink")]
    Fmt(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, FilterError>;

impl From<config::ConfigError> for FilterError {
    fn from(e: config::ConfigError) -> Self {
        Self::Config(e.to_string())
    }
}

impl FilterError {
    pub(crate) fn invalid_param(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParam {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
