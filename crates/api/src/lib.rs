use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use hustlehub_core::domain::course::default_courses;
use hustlehub_core::recommend::Recommender;

/// Topic used when a browsing request arrives with no hobby.
const GENERIC_TOPIC: &str = "your hobby";

#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<Recommender>,
}

pub fn create_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/healthz", get(healthz))
        .route("/generate-hobby-ideas", post(generate_hobby_ideas))
        .route(
            "/generate-course-recommendations",
            post(generate_course_recommendations),
        )
        .route("/get-trending-hobbies", post(get_trending_hobbies))
        .with_state(state);

    with_middleware(routes)
}

fn with_middleware(routes: Router) -> Router {
    // Any origin, any header; preflight OPTIONS is answered by the layer.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(panic_response))
}

/// A handler panic still gets a response: a generic 500 JSON error with no
/// panic detail leaked to the caller.
fn panic_response(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!(%detail, "request handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"error": "internal server error"})),
    )
        .into_response()
}

async fn healthz() -> &'static str {
    "ok"
}

#[derive(Debug, Default, Deserialize)]
struct TopicRequest {
    #[serde(default)]
    hobby: Option<String>,
}

/// A missing body, a missing field, and a blank string are all "no topic".
fn topic(req: &Option<Json<TopicRequest>>) -> Option<&str> {
    req.as_ref()?
        .hobby
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

async fn generate_hobby_ideas(
    State(state): State<AppState>,
    req: Option<Json<TopicRequest>>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let Some(hobby) = topic(&req) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "hobby is required"})),
        ));
    };

    let ideas = state.recommender.hobby_ideas(hobby).await;
    Ok(Json(json!({ "ideas": ideas })))
}

async fn generate_course_recommendations(
    State(state): State<AppState>,
    req: Option<Json<TopicRequest>>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    // No topic means the browsing context: the default batch, no model call.
    let Some(hobby) = topic(&req) else {
        return Ok(Json(json!({ "courses": default_courses(GENERIC_TOPIC) })));
    };

    let courses = state
        .recommender
        .course_recommendations(hobby)
        .await
        .map_err(|e| {
            sentry_anyhow::capture_anyhow(&e);
            tracing::error!(hobby, error = %e, "course recommendations unavailable");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
        })?;

    Ok(Json(json!({ "courses": courses })))
}

async fn get_trending_hobbies(State(state): State<AppState>) -> Json<serde_json::Value> {
    let trending = state.recommender.trending_hobbies().await;
    Json(json!({ "trendingHobbies": trending }))
}
