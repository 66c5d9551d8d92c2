//! The post store - CRUD over the post collection with tolerant id lookup.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{Post, PostInput, seed};
use crate::error::{DomainError, RepoError};
use crate::ports::PostRepository;
use crate::resolve::{self, IdQuery, MatchStrategy};

const ENTITY: &str = "Post";

/// Outcome of [`PostStore::reset`].
#[derive(Debug, Clone)]
pub struct ResetSummary {
    pub posts_created: u64,
    pub post_ids: Vec<Uuid>,
}

/// One post as seen by [`PostStore::debug_snapshot`].
#[derive(Debug, Clone)]
pub struct DebugEntry {
    pub id: Uuid,
    pub id_string: String,
    pub title: String,
    pub author: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

/// Read-only view of the collection for diagnosing id mismatches.
#[derive(Debug, Clone)]
pub struct DebugSnapshot {
    pub entries: Vec<DebugEntry>,
}

impl DebugSnapshot {
    pub fn total(&self) -> usize {
        self.entries.len()
    }
}

/// Reachability of the backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStatus {
    pub backend: &'static str,
    pub connected: bool,
}

/// Handle over the post collection.
///
/// Constructed once at process start and shared by request handlers. Every
/// mutating call returns only after the repository acknowledged the write.
#[derive(Clone)]
pub struct PostStore {
    repo: Arc<dyn PostRepository>,
}

impl PostStore {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// All posts, newest first.
    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        let posts = self.repo.find_recent().await?;
        tracing::debug!(count = posts.len(), "Listing posts");
        Ok(posts)
    }

    /// Resolve `raw_id` to a post.
    pub async fn get(&self, raw_id: &str) -> Result<Post, DomainError> {
        self.resolve(raw_id).await
    }

    /// Validate, fill defaults and persist a new post.
    pub async fn create(&self, input: PostInput) -> Result<Post, DomainError> {
        let fields = input.into_fields()?;
        let post = self.repo.insert(Post::new(fields)).await?;

        tracing::info!(post_id = %post.id, title = %post.title, "Created post");
        Ok(post)
    }

    /// Replace the mutable fields of the post `raw_id` resolves to.
    ///
    /// The body is validated before any lookup happens.
    pub async fn update(&self, raw_id: &str, input: PostInput) -> Result<Post, DomainError> {
        let changes = input.into_changes()?;
        let mut post = self.resolve(raw_id).await?;
        post.apply(changes);

        match self.repo.update(post).await {
            Ok(updated) => {
                tracing::info!(post_id = %updated.id, title = %updated.title, "Updated post");
                Ok(updated)
            }
            // Deleted between resolution and write.
            Err(RepoError::NotFound) => Err(self.not_found(raw_id).await),
            Err(e) => Err(e.into()),
        }
    }

    /// Permanently remove the post `raw_id` resolves to. Returns the removed post.
    pub async fn delete(&self, raw_id: &str) -> Result<Post, DomainError> {
        let post = self.resolve(raw_id).await?;

        match self.repo.delete(post.id).await {
            Ok(()) => {
                tracing::info!(post_id = %post.id, title = %post.title, "Deleted post");
                Ok(post)
            }
            Err(RepoError::NotFound) => Err(self.not_found(raw_id).await),
            Err(e) => Err(e.into()),
        }
    }

    /// Wipe the collection and reseed it with the sample posts.
    ///
    /// Destructive and development-only. Writes racing a reset are ordered
    /// last-writer-wins; the repository decides whether the swap is atomic.
    pub async fn reset(&self) -> Result<ResetSummary, DomainError> {
        let posts = seed::sample_posts(Utc::now());
        let post_ids: Vec<Uuid> = posts.iter().map(|p| p.id).collect();

        let posts_created = self.repo.replace_all(posts).await?;
        tracing::warn!(posts_created, ?post_ids, "Post collection reset to sample data");

        Ok(ResetSummary {
            posts_created,
            post_ids,
        })
    }

    /// Every post (newest first) with its id in native and text form.
    pub async fn debug_snapshot(&self) -> Result<DebugSnapshot, DomainError> {
        let entries = self
            .repo
            .find_recent()
            .await?
            .into_iter()
            .map(|post| DebugEntry {
                id: post.id,
                id_string: post.id_string(),
                title: post.title,
                author: post.author,
                category: post.category,
                created_at: post.created_at,
            })
            .collect();

        Ok(DebugSnapshot { entries })
    }

    /// Ping the backing store.
    pub async fn status(&self) -> StoreStatus {
        let connected = match self.repo.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Store ping failed");
                false
            }
        };

        StoreStatus {
            backend: self.repo.backend_name(),
            connected,
        }
    }

    async fn resolve(&self, raw_id: &str) -> Result<Post, DomainError> {
        let query = IdQuery::parse(raw_id);

        // Keyed lookup first; the scan below only runs on a miss.
        if let Some(id) = query.and_then(|q| q.native()) {
            if let Some(post) = self.repo.find_by_id(id).await? {
                tracing::debug!(
                    requested_id = raw_id,
                    strategy = MatchStrategy::ExactNative.as_str(),
                    "Resolved post id"
                );
                return Ok(post);
            }
        }

        let posts = self.repo.find_all().await?;
        if let Some(found) = query.and_then(|q| resolve::resolve(&q, &posts)) {
            tracing::debug!(
                requested_id = raw_id,
                post_id = %found.post.id,
                strategy = found.strategy.as_str(),
                "Resolved post id"
            );
            return Ok(found.post.clone());
        }

        tracing::warn!(requested_id = raw_id, available = posts.len(), "Post not found");
        Err(not_found_in(raw_id, &posts))
    }

    async fn not_found(&self, raw_id: &str) -> DomainError {
        match self.repo.find_all().await {
            Ok(posts) => not_found_in(raw_id, &posts),
            Err(e) => e.into(),
        }
    }
}

fn not_found_in(raw_id: &str, posts: &[Post]) -> DomainError {
    DomainError::NotFound {
        entity_type: ENTITY,
        requested_id: raw_id.to_string(),
        available_ids: posts.iter().map(Post::id_string).collect(),
    }
}
