//! Application Context
//!
//! Shop actions provided to every component via the Leptos Context API.
//! Each action runs one self-contained step against the store.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::cart::LineId;
use crate::config::ShopConfig;
use crate::filter::CategoryFilter;
use crate::models::PlantId;
use crate::store::ShopStore;

#[derive(Clone, Copy)]
pub struct ShopContext {
    pub store: ShopStore,
    config: StoredValue<ShopConfig>,
}

impl ShopContext {
    pub fn new(store: ShopStore, config: ShopConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> ShopConfig {
        self.config.get_value()
    }

    /// Page load: categories first, then the spinner and the full plant list
    pub async fn initialize(self) {
        let config = self.config();

        if let Some(categories) = api::fetch_categories(&config).await {
            web_sys::console::log_1(&format!("[Shop] Loaded {} categories", categories.len()).into());
            self.store.write().set_categories(categories);
        }

        self.load_plants(CategoryFilter::All).await;
    }

    /// Activate `filter`, re-fetch the whole catalog and show the matching plants
    pub async fn load_plants(self, filter: CategoryFilter) {
        let config = self.config();
        let generation = self.store.write().begin_fetch(filter);

        let Some(catalog) = api::fetch_plants(&config).await else {
            return;
        };

        if self.store.write().apply_plants(generation, catalog) {
            let shown = self.store.read().plants.len();
            web_sys::console::log_1(&format!("[Shop] Showing {} plants (fetch #{})", shown, generation).into());
        } else {
            web_sys::console::warn_1(&format!("[Shop] Dropped superseded plant fetch #{}", generation).into());
        }
    }

    /// Category button click handler
    pub fn filter_by_category(&self, filter: CategoryFilter) {
        let ctx = *self;
        spawn_local(async move {
            ctx.load_plants(filter).await;
        });
    }

    pub fn add_to_cart(&self, id: PlantId) {
        match self.store.write().add_to_cart(id) {
            Some(line) => web_sys::console::log_1(&format!("[Cart] Added line {:?} for plant {:?}", line, id).into()),
            None => web_sys::console::warn_1(&format!("[Cart] Plant {:?} is no longer listed", id).into()),
        }
    }

    pub fn remove_line(&self, line: LineId) {
        if let Some(removed) = self.store.write().remove_line(line) {
            web_sys::console::log_1(&format!("[Cart] Removed {} ({})", removed.plant_name, removed.price).into());
        }
    }

    pub fn open_detail(&self, id: PlantId) {
        self.store.write().open_detail(id);
    }

    pub fn close_detail(&self) {
        self.store.write().close_detail();
    }
}

/// Get the shop context
pub fn use_shop() -> ShopContext {
    use_context::<ShopContext>().expect("ShopContext should be provided")
}
