//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of `POST /api/posts` and `PUT /api/posts/{id}`.
///
/// Every field is optional on the wire; required-ness is enforced by the
/// post store so that a missing title and a blank title fail the same way.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Response of `GET /api/reset-database`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetResponse {
    pub message: String,
    pub posts_created: u64,
    pub post_ids: Vec<String>,
    pub note: String,
}

/// One post in the debug listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugPost {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(rename = "_idString")]
    pub id_string: String,
    #[serde(rename = "_idType")]
    pub id_type: String,
    pub title: String,
    pub category: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

/// Process and storage metadata reported by the debug endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfo {
    pub version: String,
    pub platform: String,
    pub storage: String,
    pub database_connected: bool,
}

/// Response of `GET /api/debug`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugResponse {
    pub total_posts: usize,
    pub posts: Vec<DebugPost>,
    pub server_info: ServerInfo,
}

/// Response of `GET /api/test`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiStatusResponse {
    pub message: String,
    pub database: String,
}
