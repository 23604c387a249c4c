// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{listings, terms};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::Method,
    routing::{get, put},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route(
            "/api/v1/listings/{kind}",
            get(listings::list_listings).post(listings::create_listing),
        )
        .route(
            "/api/v1/listings/{kind}/by-slug/{slug}",
            get(listings::get_listing_by_slug),
        )
        .route(
            "/api/v1/listings/{kind}/{id}",
            put(listings::update_listing).delete(listings::delete_listing),
        )
        .route(
            "/api/v1/taxonomies/{kind}",
            get(terms::list_terms).post(terms::create_term),
        )
        .route(
            "/api/v1/taxonomies/{kind}/by-slug/{slug}",
            get(terms::get_term_by_slug),
        )
        .route(
            "/api/v1/taxonomies/{kind}/{id}",
            put(terms::update_term).delete(terms::delete_term),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

async fn health() -> Json<StatusResponse> {
    Json(StatusResponse { status: "ok" })
}
