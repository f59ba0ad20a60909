//! Error types for clqtt conversion.
//!
//! Conversion has a single error boundary: either both output documents are
//! produced, or a [`ConvertError`] carrying the underlying cause is returned.
//! Field-level anomalies inside a well-formed project (missing `txt`,
//! non-digit `fps`, non-object annotation entries) are handled by defaulting
//! or skipping and never surface here. That leniency is part of the format
//! contract, not an oversight.

use thiserror::Error;

/// Unified error for a failed conversion.
///
/// Only catastrophic structural failures reach this type: invalid JSON
/// syntax, or a top-level shape that cannot be decoded into a project at
/// all (e.g. `events` mapped to an array).
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input bytes are not a decodable clqtt project.
    #[error("invalid clqtt project: {0}")]
    Parse(#[from] serde_json::Error),

    /// CSV writer failure while rendering the annotation table.
    #[error("csv rendering failed: {0}")]
    Csv(String),
}

impl ConvertError {
    /// Create a CSV rendering error from any displayable cause.
    pub fn csv<T: core::fmt::Display>(cause: T) -> Self {
        Self::Csv(cause.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_carries_cause() {
        let cause = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = ConvertError::from(cause);
        assert!(err.to_string().starts_with("invalid clqtt project:"));
    }

    #[test]
    fn csv_error_from_display() {
        let err = ConvertError::csv("buffer poisoned");
        assert_eq!(err.to_string(), "csv rendering failed: buffer poisoned");
    }
}
