//! Error types for chart parsing and assembly.

use thiserror::Error;

/// Errors that can occur while parsing a chart payload.
///
/// Assembly itself never fails: malformed bookings degrade to empty
/// contributions and a malformed payload degrades to the no-data state.
#[derive(Error, Debug)]
pub enum ChartError {
    /// The payload string was not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A calendar day string was not in `YYYY-MM-DD` form.
    #[error("Invalid calendar day: {0}")]
    InvalidDay(String),
}

/// Convenience alias used throughout staychart-engine.
pub type Result<T> = std::result::Result<T, ChartError>;
