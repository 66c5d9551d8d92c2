//! Fixed sample posts written by a database reset.

use chrono::{DateTime, Duration, Utc};

use super::{Post, PostFields};

/// `(title, content, author, category)` for each sample post, oldest first.
pub const SAMPLE_POSTS: [(&str, &str, &str, &str); 3] = [
    (
        "Welcome to Your MERN Blog",
        "This is your fully functional MERN stack blog application! You can create, read, update, and delete blog posts.",
        "Admin",
        "Technology",
    ),
    (
        "Getting Started with React Development",
        "React is a powerful JavaScript library for building user interfaces. Learn about components, props, state, and hooks.",
        "React Developer",
        "Tutorials",
    ),
    (
        "Mastering MongoDB for Web Applications",
        "MongoDB is a NoSQL database that provides high performance and scalability for modern applications.",
        "Database Expert",
        "Technology",
    ),
];

/// Build the sample posts with fresh ids.
///
/// Each post is stamped one microsecond after the previous one so that
/// newest-first ordering is well defined on every backend.
pub fn sample_posts(reset_at: DateTime<Utc>) -> Vec<Post> {
    SAMPLE_POSTS
        .iter()
        .zip(0i64..)
        .map(|(&(title, content, author, category), offset)| {
            Post::with_created_at(
                PostFields {
                    title: title.to_string(),
                    content: content.to_string(),
                    author: author.to_string(),
                    category: category.to_string(),
                },
                reset_at + Duration::microseconds(offset),
            )
        })
        .collect()
}
