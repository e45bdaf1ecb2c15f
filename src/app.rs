//! Plant Shop App
//!
//! Main application component with the three-column storefront layout.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{CartPanel, CategoryList, PlantGrid, PlantModal};
use crate::config::ShopConfig;
use crate::context::ShopContext;
use crate::store::ShopState;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(ShopState::new());
    let ctx = ShopContext::new(store, ShopConfig::from_document());

    // Provide store and actions to all children
    provide_context(store);
    provide_context(ctx);

    // Load categories, then plants, once on mount
    Effect::new(move |_| {
        web_sys::console::log_1(&"[APP] Loading catalog".into());
        spawn_local(ctx.initialize());
    });

    view! {
        <main class="max-w-7xl mx-auto px-4 py-10">
            <h2 class="text-3xl font-bold text-center mb-8">"Choose Trees To Plant"</h2>
            <div class="grid grid-cols-1 md:grid-cols-5 gap-6">
                // Left: categories
                <aside class="md:col-span-1">
                    <h3 class="font-bold text-xl mb-4">"Categories"</h3>
                    <CategoryList />
                </aside>

                // Center: plant cards
                <section class="md:col-span-3">
                    <PlantGrid />
                </section>

                // Right: cart
                <aside class="md:col-span-1">
                    <CartPanel />
                </aside>
            </div>

            <PlantModal />
        </main>
    }
}
