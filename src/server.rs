//! MCP tool definitions for reading Notion content.
//!
//! Exposes two read-only tools:
//! - `search_notion`: page search with normalized properties
//! - `get_notion_page`: one page's properties plus its blocks as text

use std::sync::Arc;

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use serde::{Deserialize, Serialize};

use crate::api::NotionRepository;
use crate::content::{PageAssembler, PageContentBundle, SearchAdapter, SearchResult};
use crate::formatting::NormalizedProperty;
use indexmap::IndexMap;

/// MCP server exposing read-only Notion operations.
#[derive(Clone)]
pub struct NotionMcpService {
    search: SearchAdapter,
    pages: PageAssembler,
    tool_router: ToolRouter<Self>,
}

impl NotionMcpService {
    /// Create a server around an already-authenticated repository.
    pub fn new(repository: Arc<dyn NotionRepository>) -> Self {
        Self {
            search: SearchAdapter::new(Arc::clone(&repository)),
            pages: PageAssembler::new(repository),
            tool_router: Self::tool_router(),
        }
    }
}

// === Tool request types ===

/// Request for a page search.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchRequest {
    /// Text to search for across page titles and content
    pub query: String,
}

/// Request to read a single page.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetPageRequest {
    /// Notion page ID
    pub page_id: String,
}

// === Tool payloads ===

/// Payload returned by `search_notion`.
#[derive(Debug, Serialize)]
pub struct SearchPayload<'a> {
    pub query: &'a str,
    pub total_results: usize,
    pub results: &'a [SearchResult],
}

/// Payload returned by `get_notion_page`.
#[derive(Debug, Serialize)]
pub struct PagePayload<'a> {
    pub page_id: &'a str,
    pub url: &'a str,
    pub properties: &'a IndexMap<String, NormalizedProperty>,
    pub content: &'a str,
    pub total_blocks: usize,
}

impl<'a> SearchPayload<'a> {
    pub fn new(query: &'a str, results: &'a [SearchResult]) -> Self {
        Self {
            query,
            total_results: results.len(),
            results,
        }
    }
}

impl<'a> From<&'a PageContentBundle> for PagePayload<'a> {
    fn from(bundle: &'a PageContentBundle) -> Self {
        Self {
            page_id: &bundle.page.id,
            url: &bundle.page.url,
            properties: &bundle.properties,
            content: &bundle.content,
            total_blocks: bundle.total_blocks,
        }
    }
}

fn json_result<T: Serialize>(payload: &T) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(payload)
        .map_err(|e| McpError::internal_error(format!("Failed to encode result: {e}"), None))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

#[tool_router]
impl NotionMcpService {
    /// Search pages in the Notion workspace.
    #[tool(description = "Search Notion pages by text and return their normalized properties")]
    async fn search_notion(
        &self,
        Parameters(req): Parameters<SearchRequest>,
    ) -> Result<CallToolResult, McpError> {
        log::info!("search_notion query={:?}", req.query);
        match self.search.search(&req.query).await {
            Ok(results) => {
                log::info!("search_notion returned {} result(s)", results.len());
                json_result(&SearchPayload::new(&req.query, &results))
            }
            Err(e) => {
                log::error!("{}", e);
                Ok(CallToolResult::error(vec![Content::text(e.to_string())]))
            }
        }
    }

    /// Read one page as properties plus text.
    #[tool(
        description = "Get a Notion page's properties and its content rendered as markdown-like text"
    )]
    async fn get_notion_page(
        &self,
        Parameters(req): Parameters<GetPageRequest>,
    ) -> Result<CallToolResult, McpError> {
        log::info!("get_notion_page page_id={}", req.page_id);
        match self.pages.assemble(&req.page_id).await {
            Ok(bundle) => {
                log::info!(
                    "get_notion_page rendered {} block(s) for {}",
                    bundle.total_blocks,
                    bundle.page.id
                );
                json_result(&PagePayload::from(&bundle))
            }
            Err(e) => {
                log::error!("{}", e);
                Ok(CallToolResult::error(vec![Content::text(e.to_string())]))
            }
        }
    }
}

#[tool_handler]
impl ServerHandler for NotionMcpService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Read-only Notion bridge. Use search_notion to find pages, then \
                 get_notion_page to read a page's properties and content."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
