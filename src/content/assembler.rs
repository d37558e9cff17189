use super::fetcher::PageFetcher;
use crate::api::NotionRepository;
use crate::error::RetrievalError;
use crate::formatting::{normalize_properties, render_blocks, NormalizedProperty};
use crate::model::{Block, PageMeta};
use indexmap::IndexMap;
use std::sync::Arc;

/// Everything a page retrieval produces. Built once, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct PageContentBundle {
    pub page: PageMeta,
    pub properties: IndexMap<String, NormalizedProperty>,
    pub content: String,
    pub blocks: Vec<Block>,
    pub total_blocks: usize,
}

/// Composes fetching, normalization, and rendering into a content bundle.
#[derive(Clone)]
pub struct PageAssembler {
    fetcher: PageFetcher,
}

impl PageAssembler {
    pub fn new(repository: Arc<dyn NotionRepository>) -> Self {
        Self {
            fetcher: PageFetcher::new(repository),
        }
    }

    pub async fn assemble(&self, page_id: &str) -> Result<PageContentBundle, RetrievalError> {
        let (page, blocks) = self.fetcher.fetch(page_id).await?;

        let properties = normalize_properties(&page.properties);
        let content = render_blocks(&blocks);

        Ok(PageContentBundle {
            page: page.meta(),
            properties,
            content,
            total_blocks: blocks.len(),
            blocks,
        })
    }
}
