use askama::Template;
use axum::{
    extract::{RawQuery, State},
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use anyhow::Context;
use serde_json::Value;
use tracing::debug;

use crate::errors::AppError;
use crate::models::SectionKind;
use crate::render::{build_page, build_stylesheet, PageLocation, PageQuery};
use crate::state::AppState;

const SCRIPT: &str = include_str!("../../assets/site.js");

/// GET /
/// Renders the page. A reported swipe (`dx`, `v`) is resolved and answered with a
/// redirect to the resulting location so reloads do not swipe again.
pub async fn handle_page(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<Response, AppError> {
    let query = PageQuery::parse(raw.as_deref());
    let threshold = state.config.swipe;
    let location = PageLocation::resolve(&query, &state.catalog, &threshold);

    if query.swipe().is_some() {
        debug!(card = location.card, "Swipe resolved");
        let target = location.href(Some(SectionKind::Certifications.anchor_id()));
        return Ok(Redirect::to(&target).into_response());
    }

    let html = build_page(&state.catalog, location, threshold).render()?;
    Ok(Html(html).into_response())
}

/// GET /assets/site.css
pub async fn handle_stylesheet(State(state): State<AppState>) -> Result<Response, AppError> {
    let css = build_stylesheet(state.config.nav_breakpoint_px).render()?;
    Ok(([(header::CONTENT_TYPE, "text/css; charset=utf-8")], css).into_response())
}

/// GET /assets/site.js
pub async fn handle_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        SCRIPT,
    )
}

/// GET /api/v1/content
pub async fn handle_get_content(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let content = serde_json::to_value(state.catalog.as_ref())
        .context("Failed to serialize content catalog")?;
    Ok(Json(content))
}
