//! Top-level error funnel
//!
//! Every failure ends the same way: one color-coded placeholder token on
//! stdout and exit status 0, so the status-bar host renders a red marker
//! instead of treating the invocation as a broken command. The distinguished
//! error kind is still logged to stderr for anything supervising the process.

use thiserror::Error;

use crate::config::ConfigError;
use crate::dates::DateParseError;
use crate::notify::NotifyError;
use crate::postal::PostalError;

/// All the ways an invocation can fail
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Postal(#[from] PostalError),

    #[error(transparent)]
    DateParse(#[from] DateParseError),

    #[error(transparent)]
    Notify(#[from] NotifyError),
}

impl AppError {
    /// The short token printed in place of the bar line.
    pub fn token(&self) -> String {
        match self {
            AppError::Config(ConfigError::Missing(_) | ConfigError::NoProjectDirs) => {
                "Config missing".to_string()
            }
            AppError::Config(_) => "Config invalid".to_string(),
            AppError::Postal(PostalError::Timeout) => "Timeout".to_string(),
            AppError::Postal(PostalError::Connection(_)) => "Error".to_string(),
            AppError::Postal(PostalError::NoData) => "No data".to_string(),
            other => format!("Error: {}", other),
        }
    }
}

/// Formats the placeholder line printed on any failure.
pub fn error_line(token: &str) -> String {
    format!("%{{F#ff0000}} {}", token)
}
