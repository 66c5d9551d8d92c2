//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{EntityTrait, QueryOrder, TransactionTrait};

use blog_core::domain::Post;
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_asc(post::Column::Seq)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_recent(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Seq)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn replace_all(&self, posts: Vec<Post>) -> Result<u64, RepoError> {
        let count = posts.len() as u64;
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let cleared = PostEntity::delete_many()
            .exec(&txn)
            .await
            .map_err(map_db_err)?;
        tracing::debug!(rows = cleared.rows_affected, "Cleared posts table");

        if !posts.is_empty() {
            let models: Vec<post::ActiveModel> = posts.into_iter().map(Into::into).collect();
            PostEntity::insert_many(models)
                .exec(&txn)
                .await
                .map_err(map_db_err)?;
        }

        txn.commit().await.map_err(map_db_err)?;
        Ok(count)
    }

    async fn ping(&self) -> Result<(), RepoError> {
        self.db
            .ping()
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
