//! HTTP handlers and route configuration.

mod admin;
mod categories;
mod health;
mod posts;

#[cfg(test)]
mod tests;

use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .route("/test", web::get().to(admin::api_status))
            // Posts
            .service(
                web::resource("/posts")
                    .route(web::get().to(posts::list_posts))
                    .route(web::post().to(posts::create_post)),
            )
            .service(
                web::resource("/posts/{id}")
                    .route(web::get().to(posts::get_post))
                    .route(web::put().to(posts::update_post))
                    .route(web::delete().to(posts::delete_post)),
            )
            // Categories
            .service(
                web::resource("/categories")
                    .route(web::get().to(categories::list_categories))
                    .route(web::post().to(categories::create_category)),
            )
            // Development helpers
            .route("/reset-database", web::get().to(admin::reset_database))
            .route("/debug", web::get().to(admin::debug_info)),
    );
}

/// Malformed JSON bodies become `400 {message}` like every other client error.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(format!("Invalid request body: {}", err)).into()
    })
}
