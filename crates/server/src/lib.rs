pub mod handler;
pub mod middleware;
pub mod upstream;

use crate::upstream::UpstreamExecutor;
use axum::{Router, middleware as axum_mw};
use fiire_core::config::Config;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub upstream: Arc<dyn UpstreamExecutor>,
    pub assets: ServeDir,
}

pub fn build_router(config: Arc<Config>, upstream: Arc<dyn UpstreamExecutor>) -> Router {
    let assets = ServeDir::new(&config.static_root);
    let state = AppState {
        config,
        upstream,
        assets,
    };

    // The chat endpoint owns POST; every other method on it falls through to
    // the static handler like any other path.
    Router::new()
        .route(
            "/api/chat",
            axum::routing::post(handler::chat::chat).fallback(handler::static_files::fallback),
        )
        .fallback(handler::static_files::fallback)
        .layer(axum_mw::from_fn(middleware::cors::cors_middleware))
        .layer(axum_mw::from_fn(
            middleware::request_logging::request_logging_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
