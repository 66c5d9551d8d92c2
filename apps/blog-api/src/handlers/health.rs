//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub storage: &'static str,
    pub database_connected: bool,
    pub timestamp: String,
}

/// Health check endpoint - reports whether the post store answers.
///
/// GET /api/health. 503 while the store is unreachable.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let store = state.posts.status().await;

    let response = HealthResponse {
        status: if store.connected { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        storage: store.backend,
        database_connected: store.connected,
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    if store.connected {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
