//! HTTP surface for the analyze/bookmarks API.
//!
//! Thin JSON glue over the analyzer and bookmark store. Provider and
//! validation failures surface as 502 with a structured body naming the
//! error kind; the caller never receives a silently wrong report.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

use crate::analyzer::{AnalysisRequest, Analyzer};
use crate::bookmarks::BookmarkStore;
use crate::error::ScholarLensError;
use crate::schemas::AnalysisResult;

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
    pub bookmarks: Arc<dyn BookmarkStore>,
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/analyze", post(analyze_handler))
        .route("/bookmarks", get(list_bookmarks).post(add_bookmark))
        .route("/bookmarks/:id", axum::routing::delete(remove_bookmark))
        .route("/bookmarks/:id/notes", patch(update_notes))
        .layer(cors)
        .with_state(state)
}

pub async fn serve(state: AppState, bind: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("listening on {}", bind);
    axum::serve(listener, router(state)).await?;
    Ok(())
}

async fn health_handler() -> impl IntoResponse {
    "ok"
}

#[derive(Debug, Deserialize)]
struct AnalyzeBody {
    title: String,
    #[serde(default)]
    text: String,
    #[serde(rename = "abstract", default)]
    abstract_text: Option<String>,
}

async fn analyze_handler(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeBody>,
) -> impl IntoResponse {
    if body.title.trim().is_empty() {
        return error_body(
            StatusCode::BAD_REQUEST,
            "request",
            "title must not be empty",
        );
    }

    let mut request = AnalysisRequest::new(body.title, body.text);
    if let Some(abstract_text) = body.abstract_text {
        request = request.with_abstract(abstract_text);
    }

    match state.analyzer.analyze(request).await {
        Ok(result) => (StatusCode::OK, Json(json!(result))),
        Err(err) => error_response(err),
    }
}

async fn list_bookmarks(State(state): State<AppState>) -> impl IntoResponse {
    match state.bookmarks.list().await {
        Ok(bookmarks) => (StatusCode::OK, Json(json!(bookmarks))),
        Err(err) => error_response(err),
    }
}

#[derive(Debug, Deserialize)]
struct AddBookmarkBody {
    analysis: AnalysisResult,
    #[serde(default)]
    notes: Option<String>,
}

async fn add_bookmark(
    State(state): State<AppState>,
    Json(body): Json<AddBookmarkBody>,
) -> impl IntoResponse {
    match state.bookmarks.add(body.analysis, body.notes).await {
        Ok(bookmark) => (StatusCode::CREATED, Json(json!(bookmark))),
        Err(err) => error_response(err),
    }
}

async fn remove_bookmark(
    State(state): State<AppState>,
    Path(paper_id): Path<String>,
) -> impl IntoResponse {
    match state.bookmarks.remove(&paper_id).await {
        Ok(removed) => (StatusCode::OK, Json(json!({ "removed": removed }))),
        Err(err) => error_response(err),
    }
}

#[derive(Debug, Deserialize)]
struct UpdateNotesBody {
    notes: String,
}

async fn update_notes(
    State(state): State<AppState>,
    Path(bookmark_id): Path<String>,
    Json(body): Json<UpdateNotesBody>,
) -> impl IntoResponse {
    match state.bookmarks.update_notes(&bookmark_id, body.notes).await {
        Ok(true) => (StatusCode::OK, Json(json!({ "updated": true }))),
        Ok(false) => error_body(StatusCode::NOT_FOUND, "bookmark", "bookmark not found"),
        Err(err) => error_response(err),
    }
}

/// Map a pipeline error onto a status code and structured JSON body
fn error_response(err: ScholarLensError) -> (StatusCode, Json<serde_json::Value>) {
    error!(kind = err.kind(), "request failed: {}", err);
    let status = match &err {
        ScholarLensError::Provider { .. }
        | ScholarLensError::Parse { .. }
        | ScholarLensError::Schema { .. } => StatusCode::BAD_GATEWAY,
        ScholarLensError::Bookmark { .. } => StatusCode::CONFLICT,
        ScholarLensError::Validation { .. } => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let body = match &err {
        ScholarLensError::Provider { status, body } => json!({
            "error": err.to_string(),
            "kind": err.kind(),
            "statusCode": status,
            "details": body,
        }),
        _ => json!({
            "error": err.to_string(),
            "kind": err.kind(),
        }),
    };
    (status, Json(body))
}

fn error_body(
    status: StatusCode,
    kind: &str,
    message: &str,
) -> (StatusCode, Json<serde_json::Value>) {
    (status, Json(json!({ "error": message, "kind": kind })))
}
