use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::collectors::Inspector;

pub mod error;
pub mod system_info;

/// Shared application state available to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub inspector: Arc<dyn Inspector>,
}

impl AppState {
    pub fn new(inspector: Arc<dyn Inspector>) -> Self {
        Self { inspector }
    }
}

/// Build the application router. Cross-origin requests are permitted from
/// any origin on all routes.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/system-info", get(system_info::show))
        .layer(cors)
        .with_state(state)
}
