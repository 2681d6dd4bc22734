//! Site HTTP routes
//!
//! Handlers for pages and API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
};
use serde::Serialize;
use tracing::debug;

use super::SiteState;
use crate::registry::{Lookup, ReportSummary};
use crate::render::{render_hub_page, render_not_found_page, render_report_page};

/// Listing page
pub async fn index(State(state): State<SiteState>) -> impl IntoResponse {
    let summaries = state.registry.summaries();
    Html(render_hub_page(&summaries, &state.config.site, state.hub_token()))
}

/// Detail page for `id`
pub fn report_page(state: &SiteState, id: &str) -> Response {
    match state.registry.get(id) {
        Lookup::Found(report) => {
            Html(render_report_page(report, state.config.gate.enabled)).into_response()
        }
        Lookup::NotFound => not_found_response(),
    }
}

/// Anything that is neither a page, an API route nor an asset
pub async fn not_found() -> impl IntoResponse {
    not_found_response()
}

fn not_found_response() -> Response {
    (StatusCode::NOT_FOUND, Html(render_not_found_page())).into_response()
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    "OK"
}

// === API Endpoints ===

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// GET /api/reports
pub async fn api_reports(State(state): State<SiteState>) -> Json<Vec<ReportSummary>> {
    Json(state.registry.summaries())
}

/// GET /api/reports/:id
pub async fn api_report(State(state): State<SiteState>, Path(id): Path<String>) -> Response {
    match state.registry.get(&id) {
        Lookup::Found(report) => Json(report.clone()).into_response(),
        Lookup::NotFound => {
            debug!(id = %id, "Report not found");
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("No report with id {}", id),
                }),
            )
                .into_response()
        }
    }
}
