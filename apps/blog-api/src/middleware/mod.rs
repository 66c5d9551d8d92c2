//! Middleware modules.

pub mod error;

use actix_cors::Cors;

/// Cross-origin policy. The blog client is served from another origin, so
/// any origin, method and requested header is allowed.
pub fn cors() -> Cors {
    Cors::permissive().max_age(3600)
}
