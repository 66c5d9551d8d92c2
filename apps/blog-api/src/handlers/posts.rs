//! Post CRUD handlers.

use actix_web::{HttpResponse, web};

use blog_core::domain::PostInput;
use blog_shared::MessageResponse;
use blog_shared::dto::PostRequest;

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn into_input(req: PostRequest) -> PostInput {
    PostInput {
        title: req.title,
        content: req.content,
        author: req.author,
        category: req.category,
    }
}

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get(&path).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let post = state.posts.create(into_input(body.into_inner())).await?;
    Ok(HttpResponse::Created().json(post))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .update(&path, into_input(body.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.posts.delete(&path).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Post deleted successfully")))
}
