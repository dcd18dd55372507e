//! Error types for Calificar operations.
//!
//! Parse errors are fatal and surface to the caller of the record parser;
//! missing optional fields are never errors (they are `None` downstream).

use std::fmt;

/// Main error type for Calificar operations.
///
/// # Examples
///
/// ```
/// use calificar::error::CalificarError;
///
/// let err = CalificarError::UnknownStatus {
///     value: "maybe".to_string(),
/// };
/// assert!(err.to_string().contains("maybe"));
/// ```
#[derive(Debug)]
pub enum CalificarError {
    /// A matrix literal has inconsistent row lengths or a non-integer token.
    MalformedMatrix {
        /// The offending literal (or the relevant part of it)
        literal: String,
        /// What was wrong with it
        reason: String,
    },

    /// The `result` line carried a value outside `{pass, fail, done}`.
    UnknownStatus {
        /// The literal that was found
        value: String,
    },

    /// A numeric field (dimension, counter, or time) failed to parse.
    InvalidNumber {
        /// Record key the value belonged to
        key: String,
        /// The raw value
        value: String,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for CalificarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalificarError::MalformedMatrix { literal, reason } => {
                write!(f, "Malformed matrix literal {literal:?}: {reason}")
            }
            CalificarError::UnknownStatus { value } => {
                write!(f, "Unknown result status: {value:?}")
            }
            CalificarError::InvalidNumber { key, value } => {
                write!(f, "Invalid number for {key}: {value:?}")
            }
            CalificarError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CalificarError {}

impl From<&str> for CalificarError {
    fn from(msg: &str) -> Self {
        CalificarError::Other(msg.to_string())
    }
}

impl From<String> for CalificarError {
    fn from(msg: String) -> Self {
        CalificarError::Other(msg)
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, CalificarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_matrix_display() {
        let err = CalificarError::MalformedMatrix {
            literal: "[1 2; 3]".to_string(),
            reason: "row 1 has 1 cells, expected 2".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Malformed matrix"));
        assert!(msg.contains("[1 2; 3]"));
        assert!(msg.contains("expected 2"));
    }

    #[test]
    fn test_unknown_status_display() {
        let err = CalificarError::UnknownStatus {
            value: "crashed".to_string(),
        };
        assert!(err.to_string().contains("Unknown result status"));
        assert!(err.to_string().contains("crashed"));
    }

    #[test]
    fn test_invalid_number_display() {
        let err = CalificarError::InvalidNumber {
            key: "perf_cycles".to_string(),
            value: "lots".to_string(),
        };
        assert!(err.to_string().contains("perf_cycles"));
        assert!(err.to_string().contains("lots"));
    }

    #[test]
    fn test_from_str() {
        let err: CalificarError = "boom".into();
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_from_string() {
        let err: CalificarError = String::from("boom").into();
        assert_eq!(err.to_string(), "boom");
    }
}
