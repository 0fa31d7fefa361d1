//! Error types for site configuration

use thiserror::Error;

/// Errors raised while loading or validating [`crate::config::SiteConfig`]
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid color for '{field}': {value}")]
    InvalidColor { field: &'static str, value: String },

    #[error("Invalid duration for '{field}': {value} ms")]
    InvalidDuration { field: &'static str, value: u32 },

    #[error("Invalid contact email: '{0}'")]
    InvalidEmail(String),

    #[error("Missing required field '{0}'")]
    MissingField(&'static str),
}

pub type SiteResult<T> = Result<T, SiteError>;
