//! Development helpers: reset, debug listing and connectivity check.

use actix_web::{HttpResponse, web};

use blog_shared::dto::{ApiStatusResponse, DebugPost, DebugResponse, ResetResponse, ServerInfo};

use crate::middleware::error::AppResult;
use crate::observability::RequestId;
use crate::state::AppState;

/// GET /api/reset-database
///
/// Destroys every post and reseeds the sample data. Irreversible.
pub async fn reset_database(
    state: web::Data<AppState>,
    request_id: RequestId,
) -> AppResult<HttpResponse> {
    tracing::warn!(request_id = %request_id.as_str(), "Database reset requested");

    let summary = state.posts.reset().await?;

    Ok(HttpResponse::Ok().json(ResetResponse {
        message: "Database completely reset and seeded with fresh data!".to_string(),
        posts_created: summary.posts_created,
        post_ids: summary.post_ids.iter().map(|id| id.to_string()).collect(),
        note: "Check the server logs for detailed post IDs".to_string(),
    }))
}

/// GET /api/debug
pub async fn debug_info(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let snapshot = state.posts.debug_snapshot().await?;
    let status = state.posts.status().await;

    let posts: Vec<DebugPost> = snapshot
        .entries
        .into_iter()
        .map(|entry| DebugPost {
            id: entry.id,
            id_string: entry.id_string,
            id_type: "uuid".to_string(),
            title: entry.title,
            category: entry.category,
            author: entry.author,
            created_at: entry.created_at,
        })
        .collect();

    Ok(HttpResponse::Ok().json(DebugResponse {
        total_posts: posts.len(),
        posts,
        server_info: ServerInfo {
            version: env!("CARGO_PKG_VERSION").to_string(),
            platform: std::env::consts::OS.to_string(),
            storage: status.backend.to_string(),
            database_connected: status.connected,
        },
    }))
}

/// GET /api/test
pub async fn api_status(state: web::Data<AppState>) -> HttpResponse {
    let status = state.posts.status().await;
    let database = if status.connected {
        format!("Connected ({})", status.backend)
    } else {
        "Disconnected".to_string()
    };

    HttpResponse::Ok().json(ApiStatusResponse {
        message: "Blog API is running!".to_string(),
        database,
    })
}
