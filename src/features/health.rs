use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::middleware::HEALTH_PATH;

const HEALTH_STATUS: &str = "OK";
const HEALTH_MESSAGE: &str = "Thai Location API is running";

/// Liveness payload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// Liveness check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTH_STATUS.to_string(),
        message: HEALTH_MESSAGE.to_string(),
    })
}

pub fn routes() -> Router {
    Router::new().route(HEALTH_PATH, get(health_check))
}
