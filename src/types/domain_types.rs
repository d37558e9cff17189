// src/types/domain_types.rs
//! Domain-specific newtypes for configuration values.

use super::ValidationError;
use std::fmt;
use url::Url;

/// Bearer token for the Notion API.
///
/// The token is opaque: it is only checked for presence, never for shape.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ValidationError::EmptyField("NOTION_API_KEY"));
        }
        Ok(Self(key))
    }

    /// Get the API key as a string reference
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let visible: String = self.0.chars().take(4).collect();
        write!(f, "{}...", visible)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey({})", self)
    }
}

/// Root URL of the Notion API, without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBaseUrl(String);

impl ApiBaseUrl {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let parsed = Url::parse(input).map_err(|e| ValidationError::InvalidUrl {
            url: input.to_string(),
            reason: e.to_string(),
        })?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ValidationError::InvalidUrl {
                url: input.to_string(),
                reason: "Only HTTP and HTTPS URLs are supported".to_string(),
            });
        }

        Ok(Self(input.trim_end_matches('/').to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Appends path segments to the root, percent-encoding each one whole.
    ///
    /// A segment can never add further path levels, a query or a fragment.
    /// Blank, `.` and `..` segments are rejected.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ValidationError> {
        if let Some(bad) = segments
            .iter()
            .find(|segment| segment.trim().is_empty() || matches!(**segment, "." | ".."))
        {
            return Err(ValidationError::InvalidPathSegment(bad.to_string()));
        }

        let mut url = Url::parse(&self.0).map_err(|e| ValidationError::InvalidUrl {
            url: self.0.clone(),
            reason: e.to_string(),
        })?;
        url.path_segments_mut()
            .map_err(|_| ValidationError::InvalidUrl {
                url: self.0.clone(),
                reason: "URL cannot carry a path".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

impl Default for ApiBaseUrl {
    fn default() -> Self {
        Self(crate::constants::NOTION_API_BASE_URL.to_string())
    }
}

impl fmt::Display for ApiBaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
