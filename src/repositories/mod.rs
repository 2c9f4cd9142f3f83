pub mod in_memory;

use async_trait::async_trait;

use crate::entities::Resource;
use crate::errors::RepoErr;

/// Condition a stored entity must meet for a conditional write to go ahead.
pub type Precondition<E> = dyn Fn(&E) -> bool + Send + Sync;

/// Storage for one kind of entity. Handlers and guards only ever see it
/// through `Arc<dyn Repository<E>>`.
#[async_trait]
pub trait Repository<E: Resource>: Send + Sync {
    async fn list(&self) -> Vec<E>;
    async fn find_by_id(&self, id: &str) -> Option<E>;
    async fn insert(&self, entity: E) -> Result<E, RepoErr>;

    /// Replaces the stored entity with the same id, provided the stored one
    /// still satisfies `precondition`. Check and write happen atomically.
    async fn update_if(&self, entity: E, precondition: &Precondition<E>) -> Result<E, RepoErr>;

    async fn update(&self, entity: E) -> Result<E, RepoErr> {
        self.update_if(entity, &|_| true).await
    }

    async fn remove_at(&self, index: usize) -> Result<E, RepoErr>;

    /// Removes the entity with this id by position, provided it still
    /// satisfies `precondition`. Check and removal happen atomically.
    async fn remove_if(&self, id: &str, precondition: &Precondition<E>) -> Result<E, RepoErr>;
}
