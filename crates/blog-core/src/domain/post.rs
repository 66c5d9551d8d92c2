use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Author stored when none (or a blank one) is supplied.
pub const DEFAULT_AUTHOR: &str = "Anonymous";

/// Category label stored when none (or a blank one) is supplied.
pub const DEFAULT_CATEGORY: &str = "General";

/// Post entity - a blog entry.
///
/// Serialized with the field names the blog client expects (`_id`, `createdAt`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post with a fresh id, stamped with the current time.
    pub fn new(fields: PostFields) -> Self {
        Self::with_created_at(fields, Utc::now())
    }

    /// Create a new post with a fresh id and an explicit creation time.
    pub fn with_created_at(fields: PostFields, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: fields.title,
            content: fields.content,
            author: fields.author,
            category: fields.category,
            created_at,
        }
    }

    /// Canonical text form of the id (lowercase, hyphenated).
    pub fn id_string(&self) -> String {
        self.id.hyphenated().to_string()
    }

    /// Apply validated changes. `id` and `created_at` are never touched.
    pub fn apply(&mut self, changes: PostChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
        self.author = changes.author;
        self.category = changes.category;
    }
}

/// Raw, unvalidated post input as supplied by a caller.
#[derive(Debug, Clone, Default)]
pub struct PostInput {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
}

/// Validated fields for a new post, defaults already filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFields {
    pub title: String,
    pub content: String,
    pub author: String,
    pub category: String,
}

/// Validated changes for an existing post.
///
/// `title`/`content` of `None` keep the stored value; `author`/`category`
/// are always replaced (omitted values fall back to the defaults).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: String,
    pub category: String,
}

impl PostInput {
    /// Validate input for a create: title and content are required.
    pub fn into_fields(self) -> Result<PostFields, DomainError> {
        let title = required_title(self.title)?;
        let content = required_content(self.content)?;

        Ok(PostFields {
            title,
            content,
            author: or_default(self.author, DEFAULT_AUTHOR),
            category: or_default(self.category, DEFAULT_CATEGORY),
        })
    }

    /// Validate input for an update: title and content may be omitted, but
    /// not blanked.
    pub fn into_changes(self) -> Result<PostChanges, DomainError> {
        let title = self.title.map(|t| required_title(Some(t))).transpose()?;
        let content = self
            .content
            .map(|c| required_content(Some(c)))
            .transpose()?;

        Ok(PostChanges {
            title,
            content,
            author: or_default(self.author, DEFAULT_AUTHOR),
            category: or_default(self.category, DEFAULT_CATEGORY),
        })
    }
}

fn required_title(title: Option<String>) -> Result<String, DomainError> {
    match title.as_deref().map(str::trim) {
        Some(t) if !t.is_empty() => Ok(t.to_string()),
        _ => Err(DomainError::Validation("Title is required".to_string())),
    }
}

// Content keeps its original whitespace; only emptiness is checked on the trimmed form.
fn required_content(content: Option<String>) -> Result<String, DomainError> {
    match content {
        Some(c) if !c.trim().is_empty() => Ok(c),
        _ => Err(DomainError::Validation("Content is required".to_string())),
    }
}

fn or_default(value: Option<String>, default: &str) -> String {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .to_string()
}
