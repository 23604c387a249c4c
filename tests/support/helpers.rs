// tests/support/helpers.rs
use std::sync::Arc;

use agent_directory::application::ports::{time::Clock, util::SlugGenerator};
use agent_directory::application::services::{ApplicationServices, SlugOptions};
use agent_directory::infrastructure::{
    database,
    repositories::{
        SqliteListingReadRepository, SqliteListingWriteRepository, SqliteSlugIndex,
        SqliteTermRepository,
    },
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use agent_directory::presentation::http::{routes::build_router, state::HttpState};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use serde_json::Value;
use sqlx::SqlitePool;

/// Fresh in-memory database with the schema applied.
pub async fn memory_pool() -> Arc<SqlitePool> {
    let pool = database::init_memory_pool().await.expect("open sqlite");
    database::run_migrations(&pool).await.expect("migrate");
    Arc::new(pool)
}

pub fn sqlite_services(pool: &Arc<SqlitePool>) -> ApplicationServices {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    ApplicationServices::new(
        Arc::new(SqliteListingWriteRepository::new(Arc::clone(pool))),
        Arc::new(SqliteListingReadRepository::new(Arc::clone(pool))),
        Arc::new(SqliteTermRepository::new(Arc::clone(pool))),
        Arc::new(SqliteSlugIndex::new(Arc::clone(pool))),
        clock,
        slugger,
        SlugOptions::default(),
    )
    .expect("services wire up")
}

pub async fn make_test_router() -> axum::Router {
    let pool = memory_pool().await;
    let state = HttpState {
        services: Arc::new(sqlite_services(&pool)),
    };
    build_router(state)
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Assert an error response carries the expected status and the
/// `{ "error", "message" }` body shape.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = read_json(resp).await;
    assert_eq!(json["error"].as_str(), Some(expected_error));
    assert!(
        json["message"].as_str().is_some_and(|m| !m.is_empty()),
        "expected non-empty message"
    );
}
