//! Request-scoped entry points: page retrieval and search.
//!
//! Each entry point holds the injected [`NotionRepository`] and nothing else,
//! so concurrent calls share no mutable state.
//!
//! [`NotionRepository`]: crate::api::NotionRepository

mod assembler;
mod fetcher;
mod search;

pub use assembler::{PageAssembler, PageContentBundle};
pub use fetcher::PageFetcher;
pub use search::{SearchAdapter, SearchResult};
