//! Error types for the content pipeline.
//!
//! Only `ValidationError` ever reaches an HTTP caller. Dispatch and
//! normalization failures are absorbed by the fallback generators.

use thiserror::Error;

/// Problems with caller input. Surfaced as client errors, never defaulted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid zodiac sign: {0}")]
    InvalidSign(String),

    #[error("Invalid date format for {field}. Use YYYY-MM-DD")]
    InvalidDate { field: &'static str },

    #[error("Invalid time format for {field}. Use HH:MM")]
    InvalidTime { field: &'static str },

    #[error("Invalid month: {0}. Use 1-12")]
    InvalidMonth(String),

    #[error("Invalid year: {0}")]
    InvalidYear(String),

    #[error("Invalid {field}: {value}")]
    InvalidCoordinate { field: &'static str, value: f64 },

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Invalid rating: {0}. Use 1-5")]
    InvalidRating(i64),

    #[error("Invalid content kind: {0}")]
    InvalidKind(String),
}

/// Failure signals from the prompt dispatcher. All of them mean "unavailable".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("No credential configured for the generative-text provider")]
    MissingCredential,

    #[error("Missing prompt parameter: {0}")]
    MissingParam(&'static str),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Provider returned HTTP {0}")]
    Status(u16),

    #[error("Request timeout after {0} seconds")]
    Timeout(u64),

    #[error("Malformed provider envelope: {0}")]
    Envelope(String),

    #[error("Provider returned empty text")]
    EmptyResponse,
}

/// The single failure outcome of the response normalizer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Expected a JSON {0}")]
    UnexpectedShape(&'static str),

    #[error("No recognised {0} fields in payload")]
    NoContent(&'static str),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Not enough usable {0} entries")]
    Insufficient(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_names_the_field() {
        let err = ValidationError::MissingField("zodiacSign");
        assert_eq!(err.to_string(), "Missing required field: zodiacSign");
    }

    #[test]
    fn test_dispatch_timeout_message() {
        assert_eq!(
            DispatchError::Timeout(15).to_string(),
            "Request timeout after 15 seconds"
        );
    }
}
