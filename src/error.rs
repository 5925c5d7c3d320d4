// src/error.rs

//! Unified error handling for the sheet ingestion library.

use std::fmt;

use thiserror::Error;

/// Result type alias for gabarito operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Sheet endpoint answered with a non-success status
    #[error("Sheet '{sheet}' returned HTTP {status}")]
    Status { sheet: String, status: u16 },

    /// CSV body could not be read
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Pattern compilation failed
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Year catalog and classification table disagree
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Answer key is incomplete or inconsistent
    #[error("Answer key error: {0}")]
    AnswerKey(String),
}

impl AppError {
    /// Create a non-success status error for a sheet.
    pub fn status(sheet: impl Into<String>, status: u16) -> Self {
        Self::Status {
            sheet: sheet.into(),
            status,
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a catalog error.
    pub fn catalog(message: impl fmt::Display) -> Self {
        Self::Catalog(message.to_string())
    }

    /// Create an answer key error.
    pub fn answer_key(message: impl fmt::Display) -> Self {
        Self::AnswerKey(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let err = AppError::status("Login", 404);
        assert_eq!(err.to_string(), "Sheet 'Login' returned HTTP 404");
    }

    #[test]
    fn test_answer_key_message() {
        let err = AppError::answer_key("answered 3 of 5 questions");
        assert_eq!(
            err.to_string(),
            "Answer key error: answered 3 of 5 questions"
        );
    }
}
