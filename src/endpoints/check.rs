use crate::{
    common::check_content::{check_content, CheckError},
    models::{AppState, CheckRequest},
    utils::{get_error, get_invalid_request},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

pub async fn handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CheckRequest>,
) -> impl IntoResponse {
    if !body.platform.is_empty()
        && !state
            .conf
            .platforms
            .supported
            .iter()
            .any(|supported| supported == &body.platform)
    {
        state.logger.warning(format!(
            "check requested for unsupported platform: {}",
            body.platform
        ));
    }

    match check_content(state.verdict.as_ref(), body).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(CheckError::InvalidArgument(msg)) => get_invalid_request(msg.to_string()),
        Err(CheckError::VerdictSource(e)) => {
            state.logger.severe(format!("verdict source failure: {}", e));
            get_error("Error checking content".to_string())
        }
    }
}
