// src/api/parser.rs
//! Turns raw HTTP results into typed responses or typed errors.

use super::client::ApiResponse;
use super::types::{NotionApiErrorResponse, PaginatedResponse};
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, NotionErrorCode};
use crate::model::{Block, Page};
use serde::de::DeserializeOwned;

/// Parse any Notion API response: the body on success, the error otherwise.
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: DeserializeOwned,
{
    if result.status.is_success() {
        parse_success_body(&result.data, &result.url)
    } else {
        Err(parse_error_body(&result))
    }
}

fn parse_success_body<T>(body: &str, url: &str) -> Result<T, AppError>
where
    T: DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!(
            "Failed to parse response from {}: {} (body: {})",
            url,
            e,
            preview(body)
        );
        AppError::from(e)
    })
}

fn parse_error_body(result: &ApiResponse<String>) -> AppError {
    let status = result.status.as_u16();

    if let Ok(error) = serde_json::from_str::<NotionApiErrorResponse>(&result.data) {
        log::warn!(
            "Notion API error from {} ({}): {}",
            result.url,
            error.code,
            error.message
        );
        return AppError::NotionService {
            code: NotionErrorCode::Api(error.code),
            message: error.message,
            status,
        };
    }

    log::warn!(
        "Unparseable error body from {} (status {}): {}",
        result.url,
        result.status,
        preview(&result.data)
    );
    AppError::NotionService {
        code: NotionErrorCode::HttpStatus(status),
        message: format!("HTTP {} from {}", result.status, result.url),
        status,
    }
}

fn preview(body: &str) -> String {
    if body.chars().count() > ERROR_BODY_PREVIEW_LENGTH {
        let head: String = body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
        format!("{}...", head)
    } else {
        body.to_string()
    }
}

/// Parse page response
pub fn parse_page_response(result: ApiResponse<String>) -> Result<Page, AppError> {
    parse_api_response(result)
}

/// Parse one page of block children
pub fn parse_blocks_pagination(
    result: ApiResponse<String>,
) -> Result<PaginatedResponse<Block>, AppError> {
    parse_api_response(result)
}

/// Parse a search response into its page results
pub fn parse_search_response(result: ApiResponse<String>) -> Result<Vec<Page>, AppError> {
    let response: PaginatedResponse<Page> = parse_api_response(result)?;
    if response.continuation().is_some() {
        log::debug!(
            "Search returned more than one page; keeping the first {} results",
            response.results.len()
        );
    }
    Ok(response.results)
}
