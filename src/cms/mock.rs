//! In-process stand-in for the content API, used by tests

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

const API_KEY: &str = "test-api-key";

struct MockState {
    entries: Vec<Value>,
    last_query: Mutex<Option<Vec<(String, String)>>>,
    requests: Mutex<usize>,
}

pub(crate) struct MockCms {
    base_url: String,
    state: Arc<MockState>,
}

impl MockCms {
    /// Serve `entries` under `/api/v1/blogs` on an ephemeral port
    pub(crate) async fn start(entries: Vec<Value>) -> Self {
        let state = Arc::new(MockState {
            entries,
            last_query: Mutex::new(None),
            requests: Mutex::new(0),
        });

        let app = Router::new()
            .route("/api/v1/blogs", get(list_handler))
            .route("/api/v1/blogs/:id", get(detail_handler))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}/api/v1", addr),
            state,
        }
    }

    pub(crate) fn base_url(&self) -> String {
        self.base_url.clone()
    }

    pub(crate) fn api_key(&self) -> &'static str {
        API_KEY
    }

    pub(crate) fn last_query(&self) -> Option<Vec<(String, String)>> {
        self.state.last_query.lock().unwrap().clone()
    }

    pub(crate) fn request_count(&self) -> usize {
        *self.state.requests.lock().unwrap()
    }
}

fn record(state: &MockState, query: Vec<(String, String)>) {
    *state.requests.lock().unwrap() += 1;
    *state.last_query.lock().unwrap() = Some(query);
}

fn authorized(headers: &HeaderMap) -> Result<(), Response> {
    let key = headers
        .get("x-microcms-api-key")
        .and_then(|v| v.to_str().ok());
    if key == Some(API_KEY) {
        Ok(())
    } else {
        Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "X-MICROCMS-API-KEY header is invalid."})),
        )
            .into_response())
    }
}

fn query_value<'a>(query: &'a [(String, String)], key: &str) -> Option<&'a str> {
    query
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

async fn list_handler(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Query(query): Query<Vec<(String, String)>>,
) -> Response {
    record(&state, query.clone());
    if let Err(response) = authorized(&headers) {
        return response;
    }

    let offset: usize = query_value(&query, "offset")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    let limit: usize = query_value(&query, "limit")
        .and_then(|v| v.parse().ok())
        .unwrap_or(10);
    let contents: Vec<Value> = state
        .entries
        .iter()
        .skip(offset)
        .take(limit)
        .cloned()
        .collect();

    Json(json!({
        "contents": contents,
        "totalCount": state.entries.len(),
        "offset": offset,
        "limit": limit,
    }))
    .into_response()
}

async fn detail_handler(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(query): Query<Vec<(String, String)>>,
) -> Response {
    record(&state, query);
    if let Err(response) = authorized(&headers) {
        return response;
    }

    match state.entries.iter().find(|e| e["id"] == id.as_str()) {
        Some(entry) => Json(entry.clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"message": "Content is not found."})),
        )
            .into_response(),
    }
}
