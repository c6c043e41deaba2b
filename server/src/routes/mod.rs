//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos SSR renders the landing page at `/`; brand images are served from
//! `/assets` and the compiled WASM/CSS bundle from `/pkg`. Every request is
//! traced and responses are gzip-compressed.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use vorrenti_client::app::{App, shell};

use crate::state::AppState;

/// Output name used when the cargo-leptos environment is absent.
const DEFAULT_OUTPUT_NAME: &str = "vorrenti";

/// Leptos options from the cargo-leptos environment, or built-in defaults.
pub fn leptos_options() -> LeptosOptions {
    match get_configuration(None) {
        Ok(conf) => conf.leptos_options,
        Err(e) => {
            tracing::warn!(error = %e, "leptos configuration unavailable, using defaults");
            LeptosOptions::builder().output_name(DEFAULT_OUTPUT_NAME).build()
        }
    }
}

/// Full application router: SSR page, static assets, health check.
pub fn app(state: AppState, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            let head = state.head.clone();
            move || shell(opts.clone(), head.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    let assets_dir = assets_dir(&state, &site_root);
    tracing::debug!(assets = %assets_dir.display(), site_root = %site_root.display(), "static directories");

    Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/assets", ServeDir::new(assets_dir))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

fn assets_dir(state: &AppState, site_root: &std::path::Path) -> PathBuf {
    state
        .config
        .assets_dir
        .clone()
        .unwrap_or_else(|| site_root.join("assets"))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
