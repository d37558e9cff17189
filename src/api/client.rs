//! HTTP client for the Notion API.
//!
//! A thin wrapper around reqwest that handles authentication and raw
//! request/response plumbing. Parsing lives in [`super::parser`].

use super::parser;
use super::types::{PaginatedResponse, SearchRequest};
use crate::constants::{NOTION_API_PAGE_SIZE, NOTION_VERSION};
use crate::error::AppError;
use crate::model::{Block, Page};
use crate::types::{ApiBaseUrl, ApiKey};
use reqwest::{header, Client, Response};
use serde::Serialize;
use url::Url;

/// A thin wrapper around reqwest Client for Notion API requests.
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Clone)]
pub struct NotionHttpClient {
    client: Client,
    base_url: ApiBaseUrl,
}

impl NotionHttpClient {
    /// Creates a client against a specific API root.
    pub fn with_base_url(api_key: &ApiKey, base_url: ApiBaseUrl) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(api_key)?)
            .build()?;
        Ok(Self { client, base_url })
    }

    /// Creates the default headers for Notion API requests.
    fn create_headers(api_key: &ApiKey) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", api_key.as_str());
        let mut auth_value = header::HeaderValue::from_str(&auth_header).map_err(|e| {
            AppError::MissingConfiguration(format!("Invalid API token format: {}", e))
        })?;
        auth_value.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth_value);

        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_static(NOTION_VERSION),
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    /// Builds the full request URL. Each path segment is encoded on its own,
    /// so caller-supplied ids cannot leave their segment.
    fn request_url(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Url, AppError> {
        let mut url = self.base_url.endpoint(segments)?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(key, value)| (*key, value.as_str())));
        }
        Ok(url)
    }

    /// Makes a GET request to the given path with query parameters.
    pub async fn get(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<Response, AppError> {
        let url = self.request_url(segments, query)?;
        log::debug!("GET {}", url);
        Ok(self.client.get(url).send().await?)
    }

    /// Makes a POST request with JSON body to the given path.
    pub async fn post<T: Serialize>(
        &self,
        segments: &[&str],
        body: &T,
    ) -> Result<Response, AppError> {
        let url = self.request_url(segments, &[])?;
        log::debug!("POST {}", url);
        Ok(self.client.post(url).json(body).send().await?)
    }
}

#[async_trait::async_trait]
impl super::NotionRepository for NotionHttpClient {
    async fn retrieve_page(&self, page_id: &str) -> Result<Page, AppError> {
        let response = self.get(&["pages", page_id], &[]).await?;
        let result = extract_response_text(response).await?;
        parser::parse_page_response(result)
    }

    async fn list_block_children(
        &self,
        parent_id: &str,
        cursor: Option<&str>,
    ) -> Result<PaginatedResponse<Block>, AppError> {
        let mut query = vec![("page_size", NOTION_API_PAGE_SIZE.to_string())];
        if let Some(cursor) = cursor {
            query.push(("start_cursor", cursor.to_string()));
        }
        let response = self.get(&["blocks", parent_id, "children"], &query).await?;
        let result = extract_response_text(response).await?;
        parser::parse_blocks_pagination(result)
    }

    async fn search_pages(&self, query: &str) -> Result<Vec<Page>, AppError> {
        let response = self.post(&["search"], &SearchRequest::pages(query)).await?;
        let result = extract_response_text(response).await?;
        parser::parse_search_response(result)
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text with metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}
