use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::entities::Resource;
use crate::errors::RepoErr;
use crate::repositories::{Precondition, Repository};

/// Vec-backed store; keeps insertion order so listings come back in the
/// order entities were created.
#[derive(Clone)]
pub struct InMemoryRepository<E> {
    inner: Arc<RwLock<Vec<E>>>,
}

impl<E> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<E: Resource> InMemoryRepository<E> {
    pub fn seeded(items: Vec<E>) -> Result<Self, RepoErr> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id().to_string()) {
                return Err(RepoErr::Duplicate(item.id().to_string()));
            }
        }
        Ok(Self {
            inner: Arc::new(RwLock::new(items)),
        })
    }
}

#[async_trait]
impl<E: Resource> Repository<E> for InMemoryRepository<E> {
    async fn list(&self) -> Vec<E> {
        self.inner.read().await.clone()
    }

    async fn find_by_id(&self, id: &str) -> Option<E> {
        let items = self.inner.read().await;
        items.iter().find(|e| e.id() == id).cloned()
    }

    async fn insert(&self, entity: E) -> Result<E, RepoErr> {
        let mut items = self.inner.write().await;
        if items.iter().any(|e| e.id() == entity.id()) {
            return Err(RepoErr::Duplicate(entity.id().to_string()));
        }
        items.push(entity.clone());
        Ok(entity)
    }

    async fn update_if(&self, entity: E, precondition: &Precondition<E>) -> Result<E, RepoErr> {
        let mut items = self.inner.write().await;
        let slot = items
            .iter_mut()
            .find(|e| e.id() == entity.id())
            .ok_or_else(|| RepoErr::NotFound(entity.id().to_string()))?;
        if !precondition(&*slot) {
            return Err(RepoErr::PreconditionFailed(entity.id().to_string()));
        }
        *slot = entity.clone();
        Ok(entity)
    }

    async fn remove_at(&self, index: usize) -> Result<E, RepoErr> {
        let mut items = self.inner.write().await;
        if index >= items.len() {
            return Err(RepoErr::IndexOutOfRange(index));
        }
        Ok(items.remove(index))
    }

    async fn remove_if(&self, id: &str, precondition: &Precondition<E>) -> Result<E, RepoErr> {
        let mut items = self.inner.write().await;
        let index = items
            .iter()
            .position(|e| e.id() == id)
            .ok_or_else(|| RepoErr::NotFound(id.to_string()))?;
        if !precondition(&items[index]) {
            return Err(RepoErr::PreconditionFailed(id.to_string()));
        }
        Ok(items.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::dish::{Dish, DishFields};

    fn sample_dish(id: &str) -> Dish {
        Dish::new(
            id.to_string(),
            DishFields {
                name: format!("dish {id}"),
                description: "tasty".to_string(),
                price: 10,
                image_url: "https://img.example/x.png".to_string(),
            },
        )
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let repo = InMemoryRepository::default();
        for id in ["c", "a", "b"] {
            repo.insert(sample_dish(id)).await.unwrap();
        }
        let ids: Vec<String> = repo.list().await.into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_id() {
        let repo = InMemoryRepository::default();
        repo.insert(sample_dish("a")).await.unwrap();
        let err = repo.insert(sample_dish("a")).await.unwrap_err();
        assert_eq!(err, RepoErr::Duplicate("a".into()));
        assert_eq!(repo.list().await.len(), 1);
    }

    #[tokio::test]
    async fn update_replaces_in_place() {
        let repo = InMemoryRepository::seeded(vec![sample_dish("a"), sample_dish("b")]).unwrap();
        let mut d = sample_dish("a");
        d.price = 99;
        repo.update(d).await.unwrap();

        let all = repo.list().await;
        assert_eq!(all[0].id, "a");
        assert_eq!(all[0].price, 99);
        assert_eq!(all[1].price, 10);
    }

    #[tokio::test]
    async fn update_missing_returns_not_found() {
        let repo = InMemoryRepository::<Dish>::default();
        let err = repo.update(sample_dish("ghost")).await.unwrap_err();
        assert_eq!(err, RepoErr::NotFound("ghost".into()));
    }

    #[tokio::test]
    async fn remove_if_and_remove_at() {
        let repo = InMemoryRepository::seeded(vec![
            sample_dish("a"),
            sample_dish("b"),
            sample_dish("c"),
        ])
        .unwrap();

        let removed = repo.remove_if("b", &|_| true).await.unwrap();
        assert_eq!(removed.id, "b");
        assert!(repo.find_by_id("b").await.is_none());

        let removed = repo.remove_at(0).await.unwrap();
        assert_eq!(removed.id, "a");
        assert_eq!(repo.remove_at(5).await.unwrap_err(), RepoErr::IndexOutOfRange(5));
        assert_eq!(
            repo.remove_if("nope", &|_| true).await.unwrap_err(),
            RepoErr::NotFound("nope".into())
        );
    }

    #[tokio::test]
    async fn failed_precondition_leaves_entity_in_place() {
        let repo = InMemoryRepository::seeded(vec![sample_dish("a")]).unwrap();

        let err = repo.remove_if("a", &|d: &Dish| d.price > 100).await.unwrap_err();
        assert_eq!(err, RepoErr::PreconditionFailed("a".into()));
        assert!(repo.find_by_id("a").await.is_some());

        let mut changed = sample_dish("a");
        changed.price = 500;
        let err = repo
            .update_if(changed, &|d: &Dish| d.price > 100)
            .await
            .unwrap_err();
        assert_eq!(err, RepoErr::PreconditionFailed("a".into()));
        assert_eq!(repo.find_by_id("a").await.unwrap().price, 10);
    }

    #[tokio::test]
    async fn precondition_sees_the_latest_write() {
        let repo = InMemoryRepository::seeded(vec![sample_dish("a")]).unwrap();
        let snapshot = repo.find_by_id("a").await.unwrap();

        let mut bumped = snapshot.clone();
        bumped.price = 11;
        repo.update(bumped).await.unwrap();

        let err = repo
            .remove_if("a", &move |d: &Dish| d.price == snapshot.price)
            .await
            .unwrap_err();
        assert_eq!(err, RepoErr::PreconditionFailed("a".into()));
    }

    #[test]
    fn seeded_rejects_duplicate_ids() {
        let err = InMemoryRepository::seeded(vec![sample_dish("a"), sample_dish("a")])
            .err()
            .unwrap();
        assert_eq!(err, RepoErr::Duplicate("a".into()));
    }
}
