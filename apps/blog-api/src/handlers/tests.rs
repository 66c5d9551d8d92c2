//! Endpoint tests over the in-memory store.

use std::sync::Arc;

use actix_web::{App, http::StatusCode, test, web};
use async_trait::async_trait;
use blog_core::domain::Post;
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository};
use serde_json::{Value, json};
use uuid::Uuid;

use super::configure_routes;
use crate::state::AppState;

/// Repository whose backend never answers.
struct UnreachableRepository;

#[async_trait]
impl BaseRepository<Post, Uuid> for UnreachableRepository {
    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Post>, RepoError> {
        Err(RepoError::Connection("connection refused".into()))
    }

    async fn insert(&self, _entity: Post) -> Result<Post, RepoError> {
        Err(RepoError::Connection("connection refused".into()))
    }

    async fn update(&self, _entity: Post) -> Result<Post, RepoError> {
        Err(RepoError::Connection("connection refused".into()))
    }

    async fn delete(&self, _id: Uuid) -> Result<(), RepoError> {
        Err(RepoError::Connection("connection refused".into()))
    }
}

#[async_trait]
impl PostRepository for UnreachableRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Err(RepoError::Connection("connection refused".into()))
    }

    async fn find_recent(&self) -> Result<Vec<Post>, RepoError> {
        Err(RepoError::Connection("connection refused".into()))
    }

    async fn replace_all(&self, _posts: Vec<Post>) -> Result<u64, RepoError> {
        Err(RepoError::Connection("connection refused".into()))
    }

    async fn ping(&self) -> Result<(), RepoError> {
        Err(RepoError::Connection("connection refused".into()))
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}

macro_rules! app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .configure(configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_post_lifecycle() {
    let app = app!(AppState::in_memory());

    // Create
    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(json!({ "title": "Hi", "content": "World" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(res).await;
    assert_eq!(created["author"], "Anonymous");
    assert_eq!(created["category"], "General");
    let id = created["_id"].as_str().unwrap().to_string();

    // Read
    let req = test::TestRequest::get()
        .uri(&format!("/api/posts/{id}"))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched, created);

    // Update
    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/{id}"))
        .set_json(json!({ "title": "Hi2", "content": "World2", "author": "" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(res).await;
    assert_eq!(updated["title"], "Hi2");
    assert_eq!(updated["author"], "Anonymous");
    assert_eq!(updated["createdAt"], created["createdAt"]);

    // Delete
    let req = test::TestRequest::delete()
        .uri(&format!("/api/posts/{id}"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!({ "message": "Post deleted successfully" }));

    // Gone
    let req = test::TestRequest::get()
        .uri(&format!("/api/posts/{id}"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["requestedId"], id.as_str());
    let available = body["availableIds"].as_array().unwrap();
    assert!(!available.iter().any(|v| v == id.as_str()));
}

#[actix_web::test]
async fn test_create_with_blank_title_is_rejected() {
    let app = app!(AppState::in_memory());

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(json!({ "title": "  ", "content": "World", "author": "Ada" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert!(body["message"].is_string());
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let app = app!(AppState::in_memory());

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"title\": ")
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .starts_with("Invalid request body")
    );
}

#[actix_web::test]
async fn test_update_and_delete_unknown_id_are_404() {
    let app = app!(AppState::in_memory());

    let req = test::TestRequest::put()
        .uri("/api/posts/missing")
        .set_json(json!({ "title": "a", "content": "b" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["requestedId"], "missing");
    assert_eq!(body["availableIds"], json!([]));

    let req = test::TestRequest::delete()
        .uri("/api/posts/missing")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_truncated_id_still_resolves() {
    let app = app!(AppState::in_memory());

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(json!({ "title": "Hi", "content": "World" }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["_id"].as_str().unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/api/posts/{}", &id[..8]))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_reset_then_list_newest_first() {
    let app = app!(AppState::in_memory());

    let req = test::TestRequest::get()
        .uri("/api/reset-database")
        .to_request();
    let reset: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(reset["postsCreated"], 3);
    assert_eq!(reset["postIds"].as_array().unwrap().len(), 3);

    let req = test::TestRequest::get().uri("/api/posts").to_request();
    let posts: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    let titles: Vec<_> = posts.iter().map(|p| p["title"].as_str().unwrap()).collect();
    assert_eq!(
        titles,
        [
            "Mastering MongoDB for Web Applications",
            "Getting Started with React Development",
            "Welcome to Your MERN Blog",
        ]
    );
}

#[actix_web::test]
async fn test_debug_reports_both_id_forms() {
    let app = app!(AppState::in_memory());

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(json!({ "title": "Hi", "content": "World" }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::get().uri("/api/debug").to_request();
    let debug: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(debug["totalPosts"], 1);
    assert_eq!(debug["posts"][0]["_id"], created["_id"]);
    assert_eq!(debug["posts"][0]["_idString"], created["_id"]);
    assert_eq!(debug["posts"][0]["_idType"], "uuid");
    assert_eq!(debug["serverInfo"]["storage"], "memory");
    assert_eq!(debug["serverInfo"]["databaseConnected"], true);
}

#[actix_web::test]
async fn test_categories() {
    let app = app!(AppState::in_memory());

    let req = test::TestRequest::get().uri("/api/categories").to_request();
    let list: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        list,
        json!([
            { "_id": 1, "name": "Technology" },
            { "_id": 2, "name": "Lifestyle" },
            { "_id": 3, "name": "Travel" },
        ])
    );

    let body = json!({ "_id": 4, "name": "Food" });
    let req = test::TestRequest::post()
        .uri("/api/categories")
        .set_json(&body)
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let echoed: Value = test::read_body_json(res).await;
    assert_eq!(echoed, body);

    // Not persisted.
    let req = test::TestRequest::get().uri("/api/categories").to_request();
    let list: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(list.as_array().unwrap().len(), 3);
}

#[actix_web::test]
async fn test_category_body_must_be_an_object() {
    let app = app!(AppState::in_memory());

    let req = test::TestRequest::post()
        .uri("/api/categories")
        .set_json(json!(["not", "an", "object"]))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_status_endpoints() {
    let app = app!(AppState::in_memory());

    let req = test::TestRequest::get().uri("/api/test").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Blog API is running!");
    assert_eq!(body["database"], "Connected (memory)");

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["storage"], "memory");
    assert_eq!(body["databaseConnected"], true);
}

#[actix_web::test]
async fn test_unreachable_store() {
    let app = app!(AppState::with_repository(Arc::new(UnreachableRepository)));

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["storage"], "postgres");
    assert_eq!(body["databaseConnected"], false);

    let req = test::TestRequest::get().uri("/api/test").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["database"], "Disconnected");

    let req = test::TestRequest::get().uri("/api/posts").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!({ "message": "Internal server error" }));
}

#[actix_web::test]
async fn test_client_cannot_set_id_or_timestamp() {
    let app = app!(AppState::in_memory());

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(json!({
            "_id": "zzz",
            "title": "Hi",
            "content": "World",
            "createdAt": "2000-01-01T00:00:00Z"
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(res).await;

    let id = created["_id"].as_str().unwrap();
    assert_ne!(id, "zzz");
    assert!(Uuid::parse_str(id).is_ok());
    let created_at = created["createdAt"].as_str().unwrap();
    assert!(!created_at.starts_with("2000-"));

    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/{id}"))
        .set_json(json!({ "_id": "zzz", "createdAt": "2000-01-01T00:00:00Z" }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["_id"], id);
    assert_eq!(updated["createdAt"], created_at);
}

#[actix_web::test]
async fn test_update_and_delete_resolve_mangled_ids() {
    let app = app!(AppState::in_memory());

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(json!({ "title": "Hi", "content": "World" }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["_id"].as_str().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/{}", &id[..8]))
        .set_json(json!({ "title": "Hi2" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(res).await;
    assert_eq!(updated["_id"], id);
    assert_eq!(updated["title"], "Hi2");
    assert_eq!(updated["content"], "World");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/posts/%20{id}%20"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/posts").to_request();
    let posts: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(posts, json!([]));
}

#[actix_web::test]
async fn test_cors_preflight_allows_requested_headers() {
    let app = test::init_service(
        App::new()
            .wrap(crate::middleware::cors())
            .app_data(web::Data::new(AppState::in_memory()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::default()
        .method(actix_web::http::Method::OPTIONS)
        .uri("/api/posts")
        .insert_header(("Origin", "http://localhost:5173"))
        .insert_header(("Access-Control-Request-Method", "PUT"))
        .insert_header(("Access-Control-Request-Headers", "authorization, x-client-version"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert!(res.status().is_success());

    let allowed = res
        .headers()
        .get("access-control-allow-headers")
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_ascii_lowercase();
    assert!(allowed.contains("authorization"));
    assert!(allowed.contains("x-client-version"));
    assert_eq!(
        res.headers().get("access-control-allow-origin").unwrap(),
        "http://localhost:5173"
    );

    let req = test::TestRequest::get()
        .uri("/api/categories")
        .insert_header(("Origin", "http://localhost:5173"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key("access-control-allow-origin"));
}
