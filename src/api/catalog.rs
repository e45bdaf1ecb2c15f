//! Catalog Resources
//!
//! Typed wrappers for the two read-only endpoints.

use super::fetch_resource;
use crate::config::ShopConfig;
use crate::models::{CatalogPlant, CategoriesResponse, Category, PlantsResponse};

pub const CATEGORIES_ENDPOINT: &str = "categories";
pub const PLANTS_ENDPOINT: &str = "plants";

/// `GET /categories`; `None` on failure or when the envelope is missing
pub async fn fetch_categories(config: &ShopConfig) -> Option<Vec<Category>> {
    let response: CategoriesResponse = fetch_resource(config, CATEGORIES_ENDPOINT).await?;
    response.categories
}

/// `GET /plants`; always the full, unfiltered list
pub async fn fetch_plants(config: &ShopConfig) -> Option<Vec<CatalogPlant>> {
    let response: PlantsResponse = fetch_resource(config, PLANTS_ENDPOINT).await?;
    response.plants
}
