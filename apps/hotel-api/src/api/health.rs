//! Readiness endpoint

use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::AppError;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
struct ReadyResponse {
    status: &'static str,
    mongodb: bool,
}

/// Create a readiness router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Readiness check - 503 until MongoDB answers a ping
async fn readiness_check(State(state): State<AppState>) -> Result<Json<ReadyResponse>, AppError> {
    let health = database::mongodb::check_health_detailed(&state.mongo_client).await;

    if !health.healthy {
        return Err(AppError::ServiceUnavailable(format!(
            "mongodb unreachable after {}ms: {}",
            health.response_time_ms as u64,
            health.message.as_deref().unwrap_or("unknown")
        )));
    }

    Ok(Json(ReadyResponse {
        status: "ready",
        mongodb: true,
    }))
}
