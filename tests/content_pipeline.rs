//! End-to-end tests for page assembly and search against an in-memory Notion.

use notion_mcp_bridge::{
    AppError, Block, NormalizedProperty, NotionErrorCode, NotionRepository, Page, PageAssembler,
    PageFetcher, PaginatedResponse, SearchAdapter,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// A scripted Notion workspace that records every call it receives.
#[derive(Default)]
struct FakeNotion {
    pages: HashMap<String, Value>,
    /// Block listings keyed by the cursor that requests them ("" = first call).
    block_pages: HashMap<String, PaginatedResponse<Block>>,
    search_results: Vec<Value>,
    fail_search: bool,
    fail_children_at: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl FakeNotion {
    fn record(&self, call: String) {
        self.calls.lock().expect("call log lock").push(call);
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("call log lock").clone()
    }

    fn not_found(id: &str) -> AppError {
        AppError::NotionService {
            code: NotionErrorCode::api("object_not_found"),
            message: format!("Could not find page with ID: {}", id),
            status: 404,
        }
    }
}

#[async_trait::async_trait]
impl NotionRepository for FakeNotion {
    async fn retrieve_page(&self, page_id: &str) -> Result<Page, AppError> {
        self.record(format!("page:{}", page_id));
        let raw = self
            .pages
            .get(page_id)
            .cloned()
            .ok_or_else(|| Self::not_found(page_id))?;
        Ok(serde_json::from_value(raw)?)
    }

    async fn list_block_children(
        &self,
        parent_id: &str,
        cursor: Option<&str>,
    ) -> Result<PaginatedResponse<Block>, AppError> {
        let cursor = cursor.unwrap_or_default();
        self.record(format!("children:{}:{}", parent_id, cursor));
        if self.fail_children_at.as_deref() == Some(cursor) {
            return Err(AppError::MalformedResponse("connection reset".to_string()));
        }
        self.block_pages
            .get(cursor)
            .cloned()
            .ok_or_else(|| Self::not_found(parent_id))
    }

    async fn search_pages(&self, query: &str) -> Result<Vec<Page>, AppError> {
        self.record(format!("search:{}", query));
        if self.fail_search {
            return Err(AppError::NotionService {
                code: NotionErrorCode::api("unauthorized"),
                message: "API token is invalid.".to_string(),
                status: 401,
            });
        }
        self.search_results
            .iter()
            .cloned()
            .map(|raw| serde_json::from_value(raw).map_err(AppError::from))
            .collect()
    }
}

fn block(raw: Value) -> Block {
    serde_json::from_value(raw).expect("block parses")
}

fn paragraph(text: &str) -> Block {
    block(json!({
        "object": "block",
        "id": format!("para-{}", text),
        "type": "paragraph",
        "paragraph": {"rich_text": [{"plain_text": text}]}
    }))
}

fn sample_page() -> Value {
    json!({
        "object": "page",
        "id": "page-1",
        "url": "https://www.notion.so/Roadmap-page1",
        "created_time": "2024-05-01T10:00:00.000Z",
        "last_edited_time": "2024-05-02T11:30:00.000Z",
        "archived": false,
        "properties": {
            "Name": {"id": "title", "type": "title", "title": [
                {"plain_text": "Road"}, {"plain_text": "map"}
            ]},
            "Tags": {"id": "t", "type": "multi_select", "multi_select": [
                {"name": "A"}, {"name": "B"}
            ]},
            "Done": {"id": "d", "type": "checkbox", "checkbox": true},
            "Score": {"id": "s", "type": "formula", "formula": {"type": "number", "number": 4}}
        }
    })
}

fn workspace_with_two_block_pages() -> FakeNotion {
    let mut fake = FakeNotion::default();
    fake.pages.insert("page-1".to_string(), sample_page());
    fake.block_pages.insert(
        String::new(),
        PaginatedResponse::with_cursor(
            vec![
                block(json!({"type": "heading_1", "heading_1": {"rich_text": [{"plain_text": "Plan"}]}})),
                paragraph("first"),
                block(json!({"type": "divider", "divider": {}})),
            ],
            "abc",
        ),
    );
    fake.block_pages.insert(
        "abc".to_string(),
        PaginatedResponse::last(vec![
            block(json!({"type": "paragraph", "paragraph": {"rich_text": []}})),
            block(json!({
                "type": "to_do",
                "to_do": {"checked": false, "rich_text": [{"plain_text": "Buy milk"}]}
            })),
        ]),
    );
    fake
}

#[tokio::test]
async fn fetcher_drains_every_cursor_in_order() {
    let fake = Arc::new(workspace_with_two_block_pages());
    let fetcher = PageFetcher::new(fake.clone());

    let (page, blocks) = fetcher.fetch("page-1").await.expect("fetch succeeds");

    assert_eq!(page.id, "page-1");
    assert_eq!(blocks.len(), 5);
    assert_eq!(
        fake.calls(),
        vec![
            "page:page-1".to_string(),
            "children:page-1:".to_string(),
            "children:page-1:abc".to_string(),
        ]
    );
}

#[tokio::test]
async fn fetcher_makes_one_listing_call_per_page() {
    let mut fake = FakeNotion::default();
    fake.pages.insert("page-1".to_string(), sample_page());
    fake.block_pages.insert(
        String::new(),
        PaginatedResponse::with_cursor(vec![paragraph("a"), paragraph("b")], "c1"),
    );
    fake.block_pages.insert(
        "c1".to_string(),
        PaginatedResponse::with_cursor(vec![paragraph("c")], "c2"),
    );
    fake.block_pages.insert(
        "c2".to_string(),
        PaginatedResponse::with_cursor(Vec::new(), "c3"),
    );
    fake.block_pages.insert(
        "c3".to_string(),
        PaginatedResponse::last(vec![paragraph("d"), paragraph("e"), paragraph("f")]),
    );
    let fake = Arc::new(fake);

    let (_, blocks) = PageFetcher::new(fake.clone())
        .fetch("page-1")
        .await
        .expect("fetch succeeds");

    let listing_calls = fake
        .calls()
        .iter()
        .filter(|call| call.starts_with("children:"))
        .count();
    assert_eq!(listing_calls, 4);
    assert_eq!(blocks.len(), 2 + 1 + 3);
}

#[tokio::test]
async fn assembler_builds_content_bundle() {
    let fake = Arc::new(workspace_with_two_block_pages());
    let bundle = PageAssembler::new(fake)
        .assemble("page-1")
        .await
        .expect("assemble succeeds");

    assert_eq!(bundle.page.id, "page-1");
    assert_eq!(bundle.page.url, "https://www.notion.so/Roadmap-page1");
    assert_eq!(bundle.total_blocks, 5);
    assert_eq!(bundle.blocks.len(), 5);
    assert_eq!(bundle.content, "# Plan\n\nfirst\n\n---\n\n○ Buy milk");

    let keys: Vec<&str> = bundle.properties.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["Name", "Tags", "Done", "Score"]);
    assert_eq!(
        bundle.properties["Name"],
        NormalizedProperty::Text("Roadmap".to_string())
    );
    assert_eq!(
        bundle.properties["Tags"],
        NormalizedProperty::List(vec!["A".to_string(), "B".to_string()])
    );
    assert_eq!(bundle.properties["Done"], NormalizedProperty::Boolean(true));
    assert_eq!(
        bundle.properties["Score"],
        NormalizedProperty::Raw(json!({"id": "s", "type": "formula", "formula": {"type": "number", "number": 4}}))
    );
}

#[tokio::test]
async fn missing_page_fails_with_prefixed_message() {
    let fake = Arc::new(FakeNotion::default());
    let err = PageAssembler::new(fake.clone())
        .assemble("nope")
        .await
        .expect_err("missing page fails");

    assert_eq!(
        err.to_string(),
        "Failed to get page content: Notion API returned an error (object_not_found): Could not find page with ID: nope"
    );
    assert_eq!(fake.calls(), vec!["page:nope".to_string()]);
}

#[tokio::test]
async fn listing_failure_mid_pagination_fails_whole_call() {
    let mut fake = workspace_with_two_block_pages();
    fake.fail_children_at = Some("abc".to_string());

    let err = PageAssembler::new(Arc::new(fake))
        .assemble("page-1")
        .await
        .expect_err("second listing fails");

    assert_eq!(
        err.to_string(),
        "Failed to get page content: Malformed response: connection reset"
    );
}

#[tokio::test]
async fn search_normalizes_each_result() {
    let mut fake = FakeNotion::default();
    fake.search_results = vec![
        sample_page(),
        json!({
            "object": "page",
            "id": "page-2",
            "url": "https://www.notion.so/page2",
            "created_time": "2024-06-01T00:00:00.000Z",
            "last_edited_time": "2024-06-01T00:00:00.000Z",
            "properties": {
                "Owner": {"type": "people", "people": [{"id": "u1", "name": "Ada"}, {"id": "u2"}]},
                "Due": {"type": "date", "date": {"start": "2024-07-01", "end": null}}
            }
        }),
    ];
    let fake = Arc::new(fake);

    let results = SearchAdapter::new(fake.clone())
        .search("road")
        .await
        .expect("search succeeds");

    assert_eq!(fake.calls(), vec!["search:road".to_string()]);
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].id, "page-1");
    assert_eq!(results[0].created_time, "2024-05-01T10:00:00.000Z");
    assert_eq!(
        serde_json::to_value(&results[1]).expect("encodes"),
        json!({
            "id": "page-2",
            "url": "https://www.notion.so/page2",
            "created_time": "2024-06-01T00:00:00.000Z",
            "last_edited_time": "2024-06-01T00:00:00.000Z",
            "properties": {"Owner": ["Ada", "u2"], "Due": "2024-07-01"}
        })
    );
}

#[tokio::test]
async fn search_failure_is_prefixed() {
    let fake = FakeNotion {
        fail_search: true,
        ..FakeNotion::default()
    };

    let err = SearchAdapter::new(Arc::new(fake))
        .search("anything")
        .await
        .expect_err("search fails");

    assert_eq!(
        err.to_string(),
        "Failed to search Notion: Notion API returned an error (unauthorized): API token is invalid."
    );
}

#[tokio::test]
async fn concurrent_calls_share_one_repository() {
    let fake = Arc::new(workspace_with_two_block_pages());
    let assembler = PageAssembler::new(fake.clone());
    let search = SearchAdapter::new(fake.clone());

    let (page, found) = tokio::join!(assembler.assemble("page-1"), search.search("x"));

    assert_eq!(page.expect("assemble succeeds").total_blocks, 5);
    assert!(found.expect("search succeeds").is_empty());
    assert_eq!(fake.calls().len(), 4);
}
