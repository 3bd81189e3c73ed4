//! Router assembly.

mod common;
mod resource;

pub use common::common_routes;
pub use resource::{api_routes, resource_routes};

use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Maximum accepted request body, in bytes.
pub const BODY_LIMIT: usize = 64 * 1024;

/// Full application router: common routes plus /api resources.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(api_routes(state))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT))
        .layer(TraceLayer::new_for_http())
}
