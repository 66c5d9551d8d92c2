use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Post;
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Replace an existing entity. Fails with [`RepoError::NotFound`] if it is gone.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// All posts in store iteration (insertion) order.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// All posts, newest `created_at` first.
    async fn find_recent(&self) -> Result<Vec<Post>, RepoError>;

    /// Remove every post and store `posts` in their place.
    /// Returns the number of posts written.
    async fn replace_all(&self, posts: Vec<Post>) -> Result<u64, RepoError>;

    /// Check that the backing store is reachable.
    async fn ping(&self) -> Result<(), RepoError>;

    /// Short name of the storage backend, e.g. `"postgres"`.
    fn backend_name(&self) -> &'static str;
}
