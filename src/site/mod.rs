//! Site - HTTP surface and static export
//!
//! Provides:
//! - Listing page and one detail page per registered report
//! - JSON views of the listing records and canonical reports
//! - Static assets (cover images, illustrations) from the asset directory
//! - Export of the same pages as static files

pub mod export;
pub mod routes;

use axum::{extract::State, handler::HandlerWithoutStateExt, routing::get, Router};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::Config;
use crate::registry::Registry;

/// Read-only state shared across handlers
#[derive(Clone)]
pub struct SiteState {
    pub registry: Arc<Registry>,
    pub config: Arc<Config>,
}

impl SiteState {
    pub fn new(registry: Registry, config: Config) -> Self {
        Self {
            registry: Arc::new(registry),
            config: Arc::new(config),
        }
    }

    /// Hub token to render, or `None` when gates are off
    pub fn hub_token(&self) -> Option<&str> {
        let gate = &self.config.gate;
        if gate.enabled && !gate.hub_token.is_empty() {
            Some(gate.hub_token.as_str())
        } else {
            None
        }
    }
}

/// Create the site router
pub fn create_router(state: SiteState) -> Router {
    let mut router = Router::new()
        // Pages
        .route("/", get(routes::index))
        // API endpoints
        .route("/api/reports", get(routes::api_reports))
        .route("/api/reports/:id", get(routes::api_report))
        // Health check
        .route("/health", get(routes::health));

    // Detail routes are registered per id so that single-segment asset
    // paths (`/cava-cover.png`) still reach the asset directory.
    let ids: Vec<String> = state.registry.ids().into_iter().map(str::to_string).collect();
    for id in ids {
        let path = format!("/{}", id);
        router = router.route(
            &path,
            get(move |State(state): State<SiteState>| {
                let id = id.clone();
                async move { routes::report_page(&state, &id) }
            }),
        );
    }

    // Static files, with the not-found page for anything else
    let assets = ServeDir::new(&state.config.site.asset_dir)
        .not_found_service(routes::not_found.into_service());

    router
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
