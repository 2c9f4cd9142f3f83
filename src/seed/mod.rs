use serde::Deserialize;
use std::path::Path;

use crate::entities::{dish::Dish, order::Order};
use crate::errors::RepoErr;
use crate::repositories::in_memory::InMemoryRepository;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("reading seed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("parsing seed file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("seed data: {0}")]
    Repo(#[from] RepoErr),
}

/// Start-up contents of the stores.
#[derive(Debug, Default, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub dishes: Vec<Dish>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl Seed {
    pub fn from_json(raw: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Self, SeedError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn into_repositories(
        self,
    ) -> Result<(InMemoryRepository<Dish>, InMemoryRepository<Order>), SeedError> {
        Ok((
            InMemoryRepository::seeded(self.dishes)?,
            InMemoryRepository::seeded(self.orders)?,
        ))
    }
}
