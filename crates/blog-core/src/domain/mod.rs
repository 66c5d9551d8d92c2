//! Domain entities - the core business objects.

mod category;
mod post;
pub mod seed;

pub use category::Category;
pub use post::{DEFAULT_AUTHOR, DEFAULT_CATEGORY, Post, PostChanges, PostFields, PostInput};
