// src/error.rs
//! Application error types.
//!
//! `AppError` describes what went wrong at the transport or configuration
//! level. The two tool-facing errors, [`RetrievalError`] and [`SearchError`],
//! flatten any `AppError` into a prefixed message: callers see one string,
//! not a cause chain.

use std::fmt;
use thiserror::Error;

/// The code attached to a failed Notion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotionErrorCode {
    /// The `code` field of Notion's error body, such as `object_not_found`.
    Api(String),
    /// No readable error body; only the HTTP status is known.
    HttpStatus(u16),
}

impl NotionErrorCode {
    pub fn api(code: impl Into<String>) -> Self {
        Self::Api(code.into())
    }
}

impl fmt::Display for NotionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(code) => f.write_str(code),
            Self::HttpStatus(status) => write!(f, "http_{}", status),
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Notion API returned an error ({code}): {message}")]
    NotionService {
        code: NotionErrorCode,
        message: String,
        status: u16,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error(transparent)]
    ValidationError(#[from] crate::types::ValidationError),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

/// Page metadata or block listing could not be retrieved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to get page content: {message}")]
pub struct RetrievalError {
    message: String,
}

impl RetrievalError {
    /// The underlying cause, without the prefix.
    pub fn cause(&self) -> &str {
        &self.message
    }
}

impl From<AppError> for RetrievalError {
    fn from(err: AppError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// The search call failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to search Notion: {message}")]
pub struct SearchError {
    message: String,
}

impl SearchError {
    /// The underlying cause, without the prefix.
    pub fn cause(&self) -> &str {
        &self.message
    }
}

impl From<AppError> for SearchError {
    fn from(err: AppError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}
