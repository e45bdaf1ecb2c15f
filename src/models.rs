//! Frontend Models
//!
//! Catalog records as served by the plant API, plus the id-carrying
//! versions the shop keeps in its state.

use serde::{Deserialize, Serialize};

/// Locally assigned plant identifier, unique for the lifetime of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlantId(pub u64);

/// Plant record as returned by `GET /plants` (extra API fields are ignored)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogPlant {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub price: f64,
}

/// Plant held in the shop state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub id: PlantId,
    pub name: String,
    pub category: String,
    pub description: String,
    pub image: String,
    pub price: f64,
}

impl Plant {
    pub fn from_catalog(id: PlantId, plant: CatalogPlant) -> Self {
        Self {
            id,
            name: plant.name,
            category: plant.category,
            description: plant.description,
            image: plant.image,
            price: plant.price,
        }
    }
}

/// Category record as returned by `GET /categories`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub category_name: String,
}

/// `{ "categories": [...] }` envelope
#[derive(Debug, Clone, Deserialize)]
pub struct CategoriesResponse {
    #[serde(default)]
    pub categories: Option<Vec<Category>>,
}

/// `{ "plants": [...] }` envelope
#[derive(Debug, Clone, Deserialize)]
pub struct PlantsResponse {
    #[serde(default)]
    pub plants: Option<Vec<CatalogPlant>>,
}
