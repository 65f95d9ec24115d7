//! Router assembly.

mod catalog;
mod common;

pub use catalog::catalog_routes;
pub use common::{common_routes, common_routes_with_ready};

use crate::state::AppState;
use axum::Router;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Full application: catalog routes, operational routes, and request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(catalog_routes(state.clone()))
        .merge(common_routes_with_ready(state))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
