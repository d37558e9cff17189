use thiserror::Error;

mod domain_types;

pub use domain_types::*;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid URL: {url} - {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid path segment: {0:?}")]
    InvalidPathSegment(String),

    #[error("Empty required field: {0}")]
    EmptyField(&'static str),
}
