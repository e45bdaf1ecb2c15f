//! Shop State Store
//!
//! All view state lives in one `ShopState`. Every transition is a plain
//! method so it can be exercised without a browser; the UI wraps it in a
//! `reactive_stores::Store` for field-level reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::cart::{Cart, LineId, LineItem};
use crate::filter::{filter_plants, CategoryFilter};
use crate::models::{CatalogPlant, Category, Plant, PlantId};

#[derive(Clone, Debug, Default, Store)]
pub struct ShopState {
    /// Plants currently rendered as cards
    pub plants: Vec<Plant>,
    /// Categories for the filter buttons
    pub categories: Vec<Category>,
    pub cart: Cart,
    /// Active category control
    pub filter: CategoryFilter,
    /// Plant shown in the detail modal
    pub detail: Option<PlantId>,
    /// Card grid shows the spinner
    pub loading: bool,
    /// Id of the most recent plant fetch; older results are dropped
    pub generation: u64,
    pub next_plant_id: u64,
}

impl ShopState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_categories(&mut self, categories: Vec<Category>) {
        self.categories = categories;
    }

    /// Start a plant fetch for `filter`: activates its control, shows the
    /// spinner and returns the generation the result must be applied with.
    pub fn begin_fetch(&mut self, filter: CategoryFilter) -> u64 {
        self.filter = filter;
        self.loading = true;
        self.generation += 1;
        self.generation
    }

    /// Replace the plant list with a fetched catalog narrowed to the active
    /// filter. Returns `false` (and changes nothing) when a newer fetch has
    /// started since `generation` was issued.
    pub fn apply_plants(&mut self, generation: u64, catalog: Vec<CatalogPlant>) -> bool {
        if generation != self.generation {
            return false;
        }

        let plants = filter_plants(catalog, &self.filter)
            .into_iter()
            .map(|plant| {
                let id = PlantId(self.next_plant_id);
                self.next_plant_id += 1;
                Plant::from_catalog(id, plant)
            })
            .collect();
        self.plants = plants;
        self.loading = false;

        if let Some(id) = self.detail {
            if self.plant(id).is_none() {
                self.detail = None;
            }
        }
        true
    }

    pub fn plant(&self, id: PlantId) -> Option<&Plant> {
        self.plants.iter().find(|plant| plant.id == id)
    }

    /// Append a line for the plant's current name and price.
    /// Ids from a superseded list resolve to nothing and are ignored.
    pub fn add_to_cart(&mut self, id: PlantId) -> Option<LineId> {
        let plant = self.plants.iter().find(|plant| plant.id == id)?;
        Some(self.cart.add(&plant.name, plant.price))
    }

    pub fn remove_line(&mut self, line: LineId) -> Option<LineItem> {
        self.cart.remove(line)
    }

    pub fn cart_total(&self) -> f64 {
        self.cart.total()
    }

    /// Footer is shown while the cart has at least one line
    pub fn cart_visible(&self) -> bool {
        !self.cart.is_empty()
    }

    pub fn open_detail(&mut self, id: PlantId) -> bool {
        if self.plant(id).is_none() {
            return false;
        }
        self.detail = Some(id);
        true
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    pub fn detail_plant(&self) -> Option<&Plant> {
        self.detail.and_then(|id| self.plant(id))
    }
}

/// Type alias for the store
pub type ShopStore = Store<ShopState>;

/// Get the shop store from context
pub fn use_shop_store() -> ShopStore {
    expect_context::<ShopStore>()
}
