pub mod health;
pub mod page;
pub mod upload;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/", get(upload::index).post(upload::upload_form))
        .route("/api/parse", post(upload::api_parse))
        .route("/health", get(health::health_handler))
        .layer(upload_limit)
        .with_state(state)
}
