use serde::{Deserialize, Serialize};

use super::Resource;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(deserialize_with = "super::deserialize_whole_number")]
    pub price: u64,
    pub image_url: String,
}

/// Caller-supplied dish fields, accepted on create and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishFields {
    pub name: String,
    pub description: String,
    #[serde(deserialize_with = "super::deserialize_whole_number")]
    pub price: u64,
    pub image_url: String,
}

impl Dish {
    pub fn new(id: String, fields: DishFields) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            image_url: fields.image_url,
        }
    }

    /// Full replace of every mutable field; the id is kept.
    pub fn overwrite(&mut self, fields: DishFields) {
        self.name = fields.name;
        self.description = fields.description;
        self.price = fields.price;
        self.image_url = fields.image_url;
    }
}

impl Resource for Dish {
    const LABEL: &'static str = "Dish";

    fn id(&self) -> &str {
        &self.id
    }

    fn not_found(id: &str) -> String {
        format!("Dish id not found: {id}")
    }
}
