use crate::endpoints;
use crate::models::AppState;
use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(root))
        .route("/check", post(endpoints::check::handler))
        .route("/platforms", get(endpoints::get_platforms::handler))
}

async fn root() -> (StatusCode, String) {
    (
        StatusCode::ACCEPTED,
        format!("copyright_server v{}", env!("CARGO_PKG_VERSION")),
    )
}
