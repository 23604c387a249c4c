// src/presentation/http/controllers/terms.rs
use crate::application::{
    commands::terms::{CreateTermCommand, DeleteTermCommand, UpdateTermCommand},
    dto::TermDto,
    queries::terms::{GetTermBySlugQuery, ListTermsQuery},
};
use crate::domain::taxonomy::TaxonomyKind;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct CreateTermRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTermRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

fn parse_kind(raw: &str) -> HttpResult<TaxonomyKind> {
    raw.parse::<TaxonomyKind>().map_err(HttpError::from)
}

pub async fn list_terms(
    Extension(state): Extension<HttpState>,
    Path(kind): Path<String>,
) -> HttpResult<Json<Vec<TermDto>>> {
    let kind = parse_kind(&kind)?;
    let terms = state
        .services
        .term_queries
        .list_terms(ListTermsQuery { kind })
        .await
        .into_http()?;
    Ok(Json(terms))
}

pub async fn create_term(
    Extension(state): Extension<HttpState>,
    Path(kind): Path<String>,
    Json(payload): Json<CreateTermRequest>,
) -> HttpResult<(StatusCode, Json<TermDto>)> {
    let kind = parse_kind(&kind)?;
    let term = state
        .services
        .term_commands
        .create_term(CreateTermCommand {
            kind,
            name: payload.name,
            slug: payload.slug,
            description: payload.description,
        })
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(term)))
}

pub async fn get_term_by_slug(
    Extension(state): Extension<HttpState>,
    Path((kind, slug)): Path<(String, String)>,
) -> HttpResult<Json<TermDto>> {
    let kind = parse_kind(&kind)?;
    let term = state
        .services
        .term_queries
        .get_term_by_slug(GetTermBySlugQuery { kind, slug })
        .await
        .into_http()?;
    Ok(Json(term))
}

pub async fn update_term(
    Extension(state): Extension<HttpState>,
    Path((kind, id)): Path<(String, i64)>,
    Json(payload): Json<UpdateTermRequest>,
) -> HttpResult<Json<TermDto>> {
    let kind = parse_kind(&kind)?;
    let term = state
        .services
        .term_commands
        .update_term(UpdateTermCommand {
            kind,
            id,
            name: payload.name,
            description: payload.description,
        })
        .await
        .into_http()?;
    Ok(Json(term))
}

pub async fn delete_term(
    Extension(state): Extension<HttpState>,
    Path((kind, id)): Path<(String, i64)>,
) -> HttpResult<Json<serde_json::Value>> {
    let kind = parse_kind(&kind)?;
    state
        .services
        .term_commands
        .delete_term(DeleteTermCommand { kind, id })
        .await
        .into_http()?;
    Ok(Json(json!({ "status": "deleted" })))
}
