//! Request validation as an ordered chain of guards.
//!
//! Each route builds a [`GuardChain`] out of two kinds of step:
//!
//! - **resolve**: look the route id up in a repository and attach the found
//!   entity to the [`RequestContext`], or fail with 404;
//! - **check**: a synchronous predicate over the payload and/or the resolved
//!   entity that either passes or returns an [`ApiError`].
//!
//! [`GuardChain::run`] stops at the first failing step, so a request reports
//! exactly one error and later guards never observe a request an earlier
//! guard has rejected.

pub mod body;
pub mod dishes;
pub mod orders;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::debug;

use crate::entities::Resource;
use crate::errors::ApiError;
use crate::repositories::Repository;

/// Per-request state threaded through a guard chain.
#[derive(Debug, Clone)]
pub struct RequestContext<E> {
    route_id: Option<String>,
    data: Map<String, Value>,
    resolved: Option<E>,
}

impl<E: Resource> RequestContext<E> {
    /// Context for a collection route. A non-object `data` is read as `{}`.
    pub fn new(data: Value) -> Self {
        let data = match data {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self {
            route_id: None,
            data,
            resolved: None,
        }
    }

    pub fn with_route_id(route_id: impl Into<String>, data: Value) -> Self {
        Self {
            route_id: Some(route_id.into()),
            ..Self::new(data)
        }
    }

    pub fn route_id(&self) -> Option<&str> {
        self.route_id.as_deref()
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.data.get(name)
    }

    pub fn resolved(&self) -> Option<&E> {
        self.resolved.as_ref()
    }

    /// Hands the resolved entity to the terminal handler. A chain without a
    /// resolve step has nothing to hand over, which is a wiring bug.
    pub fn take_resolved(&mut self) -> Result<E, ApiError> {
        self.resolved.take().ok_or_else(|| {
            tracing::error!(resource = E::LABEL, "handler ran without a resolved entity");
            ApiError::Internal
        })
    }

    /// Typed view of the payload once the chain has accepted it.
    pub fn parse_data<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_value(Value::Object(self.data.clone())).map_err(|e| {
            ApiError::BadRequest(format!("Invalid {} payload: {e}", E::LABEL.to_lowercase()))
        })
    }
}

type Check<E> = Box<dyn Fn(&RequestContext<E>) -> Result<(), ApiError> + Send + Sync>;

enum Step<E: Resource> {
    Resolve(Arc<dyn Repository<E>>),
    Check(Check<E>),
}

pub struct GuardChain<E: Resource> {
    steps: Vec<Step<E>>,
}

impl<E: Resource> Default for GuardChain<E> {
    fn default() -> Self {
        Self { steps: Vec::new() }
    }
}

impl<E: Resource> GuardChain<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(mut self, repo: Arc<dyn Repository<E>>) -> Self {
        self.steps.push(Step::Resolve(repo));
        self
    }

    pub fn check<F>(mut self, check: F) -> Self
    where
        F: Fn(&RequestContext<E>) -> Result<(), ApiError> + Send + Sync + 'static,
    {
        self.steps.push(Step::Check(Box::new(check)));
        self
    }

    pub async fn run(&self, ctx: &mut RequestContext<E>) -> Result<(), ApiError> {
        for step in &self.steps {
            let outcome = match step {
                Step::Resolve(repo) => resolve(repo.as_ref(), ctx).await,
                Step::Check(check) => check(&*ctx),
            };
            if let Err(err) = outcome {
                debug!(resource = E::LABEL, route_id = ?ctx.route_id, %err, "guard rejected request");
                return Err(err);
            }
        }
        Ok(())
    }
}

/// Exact-match lookup of the route id; on a hit the entity is attached to
/// the context.
pub async fn resolve<E: Resource>(
    repo: &dyn Repository<E>,
    ctx: &mut RequestContext<E>,
) -> Result<(), ApiError> {
    let id = ctx.route_id.clone().unwrap_or_default();
    match repo.find_by_id(&id).await {
        Some(entity) => {
            ctx.resolved = Some(entity);
            Ok(())
        }
        None => Err(ApiError::NotFound(E::not_found(&id))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::dish::{Dish, DishFields};
    use crate::repositories::in_memory::InMemoryRepository;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn dish(id: &str) -> Dish {
        Dish::new(
            id.into(),
            DishFields {
                name: "Tacos".into(),
                description: "al pastor".into(),
                price: 9,
                image_url: "https://img.example/t.png".into(),
            },
        )
    }

    fn repo_with(ids: &[&str]) -> Arc<dyn Repository<Dish>> {
        Arc::new(InMemoryRepository::seeded(ids.iter().map(|id| dish(id)).collect()).unwrap())
    }

    #[tokio::test]
    async fn resolve_attaches_entity() {
        let chain = GuardChain::new().resolve(repo_with(&["d1", "d2"]));
        let mut ctx = RequestContext::<Dish>::with_route_id("d2", json!({}));
        chain.run(&mut ctx).await.unwrap();
        assert_eq!(ctx.resolved().map(|d| d.id.as_str()), Some("d2"));
        assert_eq!(ctx.take_resolved().unwrap().id, "d2");
        assert!(ctx.resolved().is_none());
    }

    #[tokio::test]
    async fn resolve_miss_is_not_found_with_id() {
        let chain = GuardChain::new().resolve(repo_with(&["d1"]));
        let mut ctx = RequestContext::<Dish>::with_route_id("ghost", json!({}));
        let err = chain.run(&mut ctx).await.unwrap_err();
        assert_eq!(err, ApiError::NotFound("Dish id not found: ghost".into()));
    }

    #[tokio::test]
    async fn chain_stops_at_first_failure() {
        let later_calls = Arc::new(AtomicUsize::new(0));
        let counter = later_calls.clone();
        let chain = GuardChain::<Dish>::new()
            .check(|_| Ok(()))
            .check(|_| Err(ApiError::BadRequest("first".into())))
            .check(|_| Err(ApiError::BadRequest("second".into())))
            .check(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            });

        let mut ctx = RequestContext::new(json!({}));
        let err = chain.run(&mut ctx).await.unwrap_err();
        assert_eq!(err, ApiError::BadRequest("first".into()));
        assert_eq!(later_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn checks_after_resolve_see_the_entity() {
        let chain = GuardChain::new()
            .resolve(repo_with(&["d1"]))
            .check(|ctx: &RequestContext<Dish>| match ctx.resolved() {
                Some(d) if d.price == 9 => Ok(()),
                _ => Err(ApiError::Internal),
            });
        let mut ctx = RequestContext::with_route_id("d1", json!({}));
        assert!(chain.run(&mut ctx).await.is_ok());
    }

    #[test]
    fn non_object_data_reads_as_empty() {
        let ctx = RequestContext::<Dish>::new(json!([1, 2, 3]));
        assert!(ctx.field("name").is_none());
        assert!(ctx.route_id().is_none());
    }

    #[test]
    fn take_resolved_without_resolve_is_internal() {
        let mut ctx = RequestContext::<Dish>::new(json!({}));
        assert_eq!(ctx.take_resolved().unwrap_err(), ApiError::Internal);
    }

    #[test]
    fn parse_data_reports_type_errors_as_bad_request() {
        let ctx = RequestContext::<Dish>::new(json!({
            "name": 5,
            "description": "d",
            "price": 3,
            "image_url": "u"
        }));
        let err = ctx.parse_data::<DishFields>().unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(m) if m.starts_with("Invalid dish payload")));
    }
}
