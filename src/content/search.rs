use crate::api::NotionRepository;
use crate::error::SearchError;
use crate::formatting::{normalize_properties, NormalizedProperty};
use indexmap::IndexMap;
use serde::Serialize;
use std::sync::Arc;

/// One page hit, with its properties already normalized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub id: String,
    pub url: String,
    pub created_time: String,
    pub last_edited_time: String,
    pub properties: IndexMap<String, NormalizedProperty>,
}

/// Runs a page-only search and flattens each hit.
#[derive(Clone)]
pub struct SearchAdapter {
    repository: Arc<dyn NotionRepository>,
}

impl SearchAdapter {
    pub fn new(repository: Arc<dyn NotionRepository>) -> Self {
        Self { repository }
    }

    /// Issues exactly one search call. Results beyond the first upstream page
    /// are not requested.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let pages = self.repository.search_pages(query).await?;

        Ok(pages
            .into_iter()
            .map(|page| SearchResult {
                properties: normalize_properties(&page.properties),
                id: page.id,
                url: page.url,
                created_time: page.created_time,
                last_edited_time: page.last_edited_time,
            })
            .collect())
    }
}
