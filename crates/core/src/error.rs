//! Error types for the promptwright domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Extraction and assembly are total and never produce errors; the only
//! failure kind in the domain is a template catalog lookup.

use thiserror::Error;

/// The top-level error type for all promptwright operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Template catalog errors ---
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- I/O ---
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Template catalog is invalid: {0}")]
    InvalidCatalog(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_not_found_displays_name() {
        let err = Error::Template(TemplateError::NotFound("press_release".into()));
        assert!(err.to_string().contains("press_release"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn serde_errors_convert() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
