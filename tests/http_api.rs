//! HTTP surface tests: routing plus the error-to-status contract.

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::Utc;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use scholar_lens::analyzer::Analyzer;
use scholar_lens::bookmarks::MemoryBookmarkStore;
use scholar_lens::classify::{AcademicField, DocumentType};
use scholar_lens::clients::ChatProvider;
use scholar_lens::error::{Result, ScholarLensError};
use scholar_lens::http::{AppState, router};
use scholar_lens::schemas::{AnalysisResult, CredibilityScore, Paper, Rating};

/// Provider stub with a fixed reply or failure
struct ScriptedProvider {
    reply: std::result::Result<String, (u16, String)>,
}

#[async_trait]
impl ChatProvider for ScriptedProvider {
    async fn complete(&self, _system: &str, _prompt: &str) -> Result<String> {
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err((status, body)) => Err(ScholarLensError::Provider {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}

fn app(reply: std::result::Result<String, (u16, String)>) -> Router {
    let provider = Arc::new(ScriptedProvider { reply });
    router(AppState {
        analyzer: Arc::new(Analyzer::new(provider)),
        bookmarks: Arc::new(MemoryBookmarkStore::new()),
    })
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn sample_analysis(paper_id: &str) -> AnalysisResult {
    AnalysisResult {
        paper: Paper {
            id: paper_id.to_string(),
            title: "Sample".to_string(),
            authors: vec![],
            journal: None,
            doi: None,
            abstract_text: None,
            url: None,
            year: Some(2026),
            document_type: DocumentType::Article,
            field: AcademicField::Interdisciplinary,
        },
        credibility: CredibilityScore {
            total_score: 7.0,
            rating: Rating::Strong,
            ..Default::default()
        },
        bias: Default::default(),
        key_findings: Default::default(),
        perspective: Default::default(),
        timestamp: Utc::now(),
    }
}

#[tokio::test]
async fn health_endpoint_responds() {
    let response = app(Ok(String::new()))
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn provider_failure_maps_to_bad_gateway() {
    let response = app(Err((529, "{\"error\":\"overloaded\"}".to_string())))
        .oneshot(post_json(
            "/analyze",
            json!({ "title": "Trial", "text": "some text" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = body_json(response).await;
    assert_eq!(body["kind"], "provider");
    assert_eq!(body["statusCode"], 529);
    assert!(body["details"].as_str().unwrap().contains("overloaded"));
}

#[tokio::test]
async fn unparseable_reply_maps_to_bad_gateway() {
    let response = app(Ok("I cannot assess this document.".to_string()))
        .oneshot(post_json(
            "/analyze",
            json!({ "title": "Trial", "text": "some text" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(body_json(response).await["kind"], "parse");
}

#[tokio::test]
async fn blank_title_is_a_bad_request() {
    let response = app(Ok(String::new()))
        .oneshot(post_json(
            "/analyze",
            json!({ "title": "   ", "text": "some text" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["kind"], "request");
}

#[tokio::test]
async fn duplicate_bookmark_is_a_conflict() {
    let app = app(Ok(String::new()));
    let body = json!({ "analysis": sample_analysis("p1") });

    let first = app
        .clone()
        .oneshot(post_json("/bookmarks", body.clone()))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app
        .clone()
        .oneshot(post_json("/bookmarks", body))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(second).await["kind"], "bookmark");

    let listed = app
        .oneshot(Request::builder().uri("/bookmarks").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(listed.status(), StatusCode::OK);
    assert_eq!(body_json(listed).await.as_array().unwrap().len(), 1);
}
