// src/api/pagination.rs
//! Cursor pagination over Notion list endpoints.

use super::types::PaginatedResponse;
use crate::error::AppError;

/// Everything a paginated listing produced.
#[derive(Debug, Clone)]
pub struct PaginationResult<T> {
    pub items: Vec<T>,
    pub pages_fetched: u32,
}

/// Fetches pages until the API stops returning a cursor.
///
/// Requests are strictly sequential: each call receives the cursor from the
/// previous response (`None` first). The loop ends only when a response has
/// no cursor or an empty one; there is no page cap, so an endpoint that keeps
/// handing out cursors keeps this loop running.
pub async fn fetch_all_pages<T, F, Fut>(mut fetch_fn: F) -> Result<PaginationResult<T>, AppError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: std::future::Future<Output = Result<PaginatedResponse<T>, AppError>>,
{
    let mut all_items = Vec::new();
    let mut cursor: Option<String> = None;
    let mut pages_fetched = 0u32;

    loop {
        let response = fetch_fn(cursor.take()).await?;
        pages_fetched += 1;

        let next = response.continuation().map(str::to_string);
        log::debug!(
            "Fetched page {} with {} items (more: {})",
            pages_fetched,
            response.results.len(),
            next.is_some()
        );
        all_items.extend(response.results);

        match next {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    Ok(PaginationResult {
        items: all_items,
        pages_fetched,
    })
}
