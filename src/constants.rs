// src/constants.rs
//! Domain constants that define the operational boundaries of the system.

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// Notion API version sent with every request.
pub const NOTION_VERSION: &str = "2022-06-28";

/// Public Notion API root.
pub const NOTION_API_BASE_URL: &str = "https://api.notion.com/v1";

/// How many blocks the Notion API returns per page of children.
///
/// 100 is both the API maximum and its default.
pub const NOTION_API_PAGE_SIZE: usize = 100;

/// Object kind the search endpoint is restricted to.
pub const SEARCH_OBJECT_FILTER: &str = "page";

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Separator placed between rendered blocks in page content.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Estimated characters per block, used to pre-allocate output strings.
pub const CHARS_PER_BLOCK_ESTIMATE: usize = 256;

// ---------------------------------------------------------------------------
// Diagnostics
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing unparseable response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;

/// Log file name used when none is configured.
pub const DEFAULT_LOG_FILE_NAME: &str = "notion_mcp_bridge.log";
