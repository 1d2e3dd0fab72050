use axum::http::{HeaderName, HeaderValue, Method};
use axum_test::TestServer;
use serde_json::{json, Value};
use std::sync::Arc;

use hustlehub_api::{create_router, AppState};
use hustlehub_core::llm::{GenerateRequest, TextGenerator};
use hustlehub_core::recommend::Recommender;

/// Server with no configured generator: every endpoint runs degraded.
fn degraded_server() -> TestServer {
    server_with(Recommender::new(None))
}

fn server_with(recommender: Recommender) -> TestServer {
    let state = AppState {
        recommender: Arc::new(recommender),
    };
    TestServer::new(create_router(state)).unwrap()
}

struct CannedGenerator(String);

#[async_trait::async_trait]
impl TextGenerator for CannedGenerator {
    async fn generate(&self, _req: GenerateRequest) -> anyhow::Result<String> {
        Ok(self.0.clone())
    }
}

fn canned_server(reply: &str) -> TestServer {
    server_with(Recommender::new(Some(Arc::new(CannedGenerator(
        reply.to_string(),
    )))))
}

#[tokio::test]
async fn health_check() {
    let server = degraded_server();
    let response = server.get("/healthz").await;
    response.assert_status_ok();
    response.assert_text("ok");
}

#[tokio::test]
async fn ideas_require_a_hobby() {
    let server = degraded_server();

    let response = server.post("/generate-hobby-ideas").json(&json!({})).await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].is_string());

    let response = server
        .post("/generate-hobby-ideas")
        .json(&json!({"hobby": "   "}))
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn ideas_degrade_to_default_batch() {
    let server = degraded_server();

    let response = server
        .post("/generate-hobby-ideas")
        .json(&json!({"hobby": "pottery"}))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    let ideas = body["ideas"].as_array().unwrap();
    assert_eq!(ideas.len(), 10);
    assert!(ideas.iter().all(|i| i["method"].is_string()));
    assert!(ideas[0]["description"]
        .as_str()
        .unwrap()
        .contains("pottery"));
}

#[tokio::test]
async fn ideas_pass_model_batch_through() {
    let server = canned_server(
        r#"```json
[{"method": "Clay Coasters", "icon": "🏺"}]
```"#,
    );

    let response = server
        .post("/generate-hobby-ideas")
        .json(&json!({"hobby": "pottery"}))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["ideas"][0]["method"], "Clay Coasters");
}

#[tokio::test]
async fn ideas_salvage_prose_replies() {
    let server = canned_server("1. Sell mugs at markets\n2. Teach wheel throwing");

    let response = server
        .post("/generate-hobby-ideas")
        .json(&json!({"hobby": "pottery"}))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    let ideas = body["ideas"].as_array().unwrap();
    assert_eq!(ideas.len(), 2);
    assert_eq!(ideas[0]["method"], "pottery Opportunity 1");
    assert_eq!(ideas[1]["description"], "Teach wheel throwing");
}

#[tokio::test]
async fn courses_surface_missing_credentials() {
    let server = degraded_server();

    let response = server
        .post("/generate-course-recommendations")
        .json(&json!({"hobby": "chess"}))
        .await;
    response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn courses_without_topic_serve_the_browsing_batch() {
    let server = degraded_server();

    let response = server.post("/generate-course-recommendations").await;
    response.assert_status_ok();

    let body: Value = response.json();
    let courses = body["courses"].as_array().unwrap();
    assert_eq!(courses.len(), 3);
    assert!(courses.iter().all(|c| c["title"].is_string()));
}

#[tokio::test]
async fn courses_degrade_on_unusable_model_output() {
    let server = canned_server(r#"{"courses": "not an array"}"#);

    let response = server
        .post("/generate-course-recommendations")
        .json(&json!({"hobby": "chess"}))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    let courses = body["courses"].as_array().unwrap();
    assert_eq!(courses.len(), 3);
    assert!(courses[0]["title"].as_str().unwrap().contains("chess"));
}

#[tokio::test]
async fn trending_always_succeeds() {
    let server = degraded_server();

    let response = server.post("/get-trending-hobbies").await;
    response.assert_status_ok();

    let body: Value = response.json();
    let trending = body["trendingHobbies"].as_array().unwrap();
    assert_eq!(trending.len(), 6);
    assert!(trending.iter().all(|t| t["incomeRange"].is_string()));
}

#[tokio::test]
async fn preflight_gets_permissive_cors() {
    let server = degraded_server();

    let response = server
        .method(Method::OPTIONS, "/generate-hobby-ideas")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("https://example.com"),
        )
        .add_header(
            HeaderName::from_static("access-control-request-method"),
            HeaderValue::from_static("POST"),
        )
        .await;
    response.assert_status_ok();
    response.assert_text("");

    let allow_origin = response.header(HeaderName::from_static("access-control-allow-origin"));
    assert_eq!(allow_origin, "*");
}
