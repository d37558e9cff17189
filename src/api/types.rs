// src/api/types.rs
//! Wire types for Notion API requests and responses.

use serde::{Deserialize, Serialize};

/// Generic paginated response from Notion API.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginatedResponse<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

impl<T> PaginatedResponse<T> {
    /// A response with no further pages.
    pub fn last(results: Vec<T>) -> Self {
        Self {
            results,
            next_cursor: None,
            has_more: false,
        }
    }

    /// A response pointing at another page.
    pub fn with_cursor(results: Vec<T>, cursor: impl Into<String>) -> Self {
        Self {
            results,
            next_cursor: Some(cursor.into()),
            has_more: true,
        }
    }

    /// The cursor for the next page, if any. An empty cursor counts as none.
    pub fn continuation(&self) -> Option<&str> {
        self.next_cursor.as_deref().filter(|cursor| !cursor.is_empty())
    }
}

/// Error body returned by the Notion API on non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct NotionApiErrorResponse {
    pub code: String,
    pub message: String,
}

/// Filter half of a search request.
#[derive(Debug, Clone, Serialize)]
pub struct SearchFilter {
    pub property: &'static str,
    pub value: &'static str,
}

/// Body of `POST /search`.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest<'a> {
    pub query: &'a str,
    pub filter: SearchFilter,
}

impl<'a> SearchRequest<'a> {
    /// A search restricted to page objects.
    pub fn pages(query: &'a str) -> Self {
        Self {
            query,
            filter: SearchFilter {
                property: "object",
                value: crate::constants::SEARCH_OBJECT_FILTER,
            },
        }
    }
}
