// src/lib.rs
//! notion-mcp-bridge library: flattens Notion pages and search results for MCP clients.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `RetrievalError`, `SearchError`
//! - **Configuration**: `ServerConfig`
//! - **Domain model**: `Page`, `PropertyValue`, `Block`, `BlockKind`
//! - **API client**: `NotionRepository`, `NotionHttpClient`, pagination
//! - **Formatting**: `normalize_properties`, `render_block`, `render_blocks`
//! - **Entry points**: `PageAssembler`, `SearchAdapter`, `NotionMcpService`

pub mod api;
pub mod config;
pub mod constants;
pub mod content;
pub mod error;
pub mod formatting;
pub mod model;
pub mod server;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, NotionErrorCode, RetrievalError, SearchError};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, ServerConfig};

// --- Domain Model ---
pub use crate::model::{
    Block, BlockCommon, BlockKind, CodeContent, DateValue, Page, PageMeta, Person,
    PropertyValue, RelationRef, RichTextRun, SelectOption, TextBlockContent, ToDoContent,
};

// --- Domain Types ---
pub use crate::types::{ApiBaseUrl, ApiKey};

// --- API Client ---
pub use crate::api::{
    fetch_all_pages, NotionHttpClient, NotionRepository, PaginatedResponse, PaginationResult,
};

// --- Formatting ---
pub use crate::formatting::{
    normalize_properties, normalize_property, render_block, render_blocks, NormalizedProperty,
};

// --- Entry Points ---
pub use crate::content::{
    PageAssembler, PageContentBundle, PageFetcher, SearchAdapter, SearchResult,
};
pub use crate::server::NotionMcpService;
