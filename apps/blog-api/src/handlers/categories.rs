//! Category handlers.
//!
//! The list is fixed at process start. Creating a category echoes the body
//! back without storing it.

use actix_web::{HttpResponse, web};
use serde_json::{Map, Value};

use crate::state::AppState;

/// GET /api/categories
pub async fn list_categories(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(&*state.categories)
}

/// POST /api/categories
pub async fn create_category(body: web::Json<Map<String, Value>>) -> HttpResponse {
    tracing::debug!(fields = body.len(), "Echoing category (not persisted)");
    HttpResponse::Created().json(body.into_inner())
}
