// src/presentation/http/controllers/listings.rs
use crate::application::{
    commands::listings::{CreateListingCommand, DeleteListingCommand, UpdateListingCommand},
    dto::ListingDto,
    queries::listings::{GetListingBySlugQuery, ListListingsQuery},
};
use crate::domain::listing::ListingKind;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct CreateListingRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateListingRequest {
    pub title: Option<String>,
    pub summary: Option<String>,
}

fn parse_kind(raw: &str) -> HttpResult<ListingKind> {
    raw.parse::<ListingKind>().map_err(HttpError::from)
}

pub async fn list_listings(
    Extension(state): Extension<HttpState>,
    Path(kind): Path<String>,
) -> HttpResult<Json<Vec<ListingDto>>> {
    let kind = parse_kind(&kind)?;
    let listings = state
        .services
        .listing_queries
        .list_listings(ListListingsQuery { kind })
        .await
        .into_http()?;
    Ok(Json(listings))
}

pub async fn create_listing(
    Extension(state): Extension<HttpState>,
    Path(kind): Path<String>,
    Json(payload): Json<CreateListingRequest>,
) -> HttpResult<(StatusCode, Json<ListingDto>)> {
    let kind = parse_kind(&kind)?;
    let listing = state
        .services
        .listing_commands
        .create_listing(CreateListingCommand {
            kind,
            title: payload.title,
            slug: payload.slug,
            summary: payload.summary,
        })
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(listing)))
}

pub async fn get_listing_by_slug(
    Extension(state): Extension<HttpState>,
    Path((kind, slug)): Path<(String, String)>,
) -> HttpResult<Json<ListingDto>> {
    let kind = parse_kind(&kind)?;
    let listing = state
        .services
        .listing_queries
        .get_listing_by_slug(GetListingBySlugQuery { kind, slug })
        .await
        .into_http()?;
    Ok(Json(listing))
}

pub async fn update_listing(
    Extension(state): Extension<HttpState>,
    Path((kind, id)): Path<(String, i64)>,
    Json(payload): Json<UpdateListingRequest>,
) -> HttpResult<Json<ListingDto>> {
    let kind = parse_kind(&kind)?;
    let listing = state
        .services
        .listing_commands
        .update_listing(UpdateListingCommand {
            kind,
            id,
            title: payload.title,
            summary: payload.summary,
        })
        .await
        .into_http()?;
    Ok(Json(listing))
}

pub async fn delete_listing(
    Extension(state): Extension<HttpState>,
    Path((kind, id)): Path<(String, i64)>,
) -> HttpResult<Json<serde_json::Value>> {
    let kind = parse_kind(&kind)?;
    state
        .services
        .listing_commands
        .delete_listing(DeleteListingCommand { kind, id })
        .await
        .into_http()?;
    Ok(Json(json!({ "status": "deleted" })))
}
