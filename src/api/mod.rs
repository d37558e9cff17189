//! Notion API interaction: the ability to read pages, blocks, and search results.
//!
//! Business logic depends on [`NotionRepository`], never on HTTP details, so
//! tests can substitute an in-memory fake for [`NotionHttpClient`].

pub mod client;
pub mod pagination;
pub mod parser;
pub mod types;

use crate::error::AppError;
use crate::model::{Block, Page};

pub use client::NotionHttpClient;
pub use pagination::{fetch_all_pages, PaginationResult};
pub use types::PaginatedResponse;

/// The upstream capabilities this crate consumes.
///
/// Implementations hold no per-call state; one instance is shared by every
/// concurrent tool invocation.
#[async_trait::async_trait]
pub trait NotionRepository: Send + Sync {
    /// Retrieves a page's metadata and property map.
    async fn retrieve_page(&self, page_id: &str) -> Result<Page, AppError>;

    /// Lists one page of a block's children, starting at `cursor` when given.
    async fn list_block_children(
        &self,
        parent_id: &str,
        cursor: Option<&str>,
    ) -> Result<PaginatedResponse<Block>, AppError>;

    /// Searches the workspace, restricted to page objects. Only the first
    /// page of results is returned.
    async fn search_pages(&self, query: &str) -> Result<Vec<Page>, AppError>;
}
