//! Error types for narrative-outline library.
//!
//! Parsing a narrative never fails; these errors only come from the edges
//! (reading files, decoding response bodies or category maps, serializing output).

use std::io;
use thiserror::Error;

/// Result type alias for narrative-outline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur around narrative processing.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A response body or category map was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A category map had the wrong shape.
    #[error("Invalid category map: {0}")]
    InvalidCategoryMap(String),

    /// A category name did not match any known category.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Error during rendering (Markdown, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownCategory("weather".to_string());
        assert_eq!(err.to_string(), "Unknown category: weather");

        let err = Error::InvalidCategoryMap("expected an object".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid category map: expected an object"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
