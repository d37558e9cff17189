use crate::api::{fetch_all_pages, NotionRepository};
use crate::error::RetrievalError;
use crate::model::{Block, Page};
use std::sync::Arc;

/// Retrieves a page and the complete flat list of its top-level blocks.
#[derive(Clone)]
pub struct PageFetcher {
    repository: Arc<dyn NotionRepository>,
}

impl PageFetcher {
    pub fn new(repository: Arc<dyn NotionRepository>) -> Self {
        Self { repository }
    }

    /// Fetches page metadata once, then every page of block children in order.
    ///
    /// Nested children are not followed.
    pub async fn fetch(&self, page_id: &str) -> Result<(Page, Vec<Block>), RetrievalError> {
        let page = self.repository.retrieve_page(page_id).await?;

        let repository = Arc::clone(&self.repository);
        let parent_id = page_id.to_string();
        let listing = fetch_all_pages(move |cursor: Option<String>| {
            let repository = Arc::clone(&repository);
            let parent_id = parent_id.clone();
            async move {
                repository
                    .list_block_children(&parent_id, cursor.as_deref())
                    .await
            }
        })
        .await?;

        log::debug!(
            "Fetched {} blocks for page {} in {} request(s)",
            listing.items.len(),
            page_id,
            listing.pages_fetched
        );

        Ok((page, listing.items))
    }
}
