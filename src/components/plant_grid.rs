//! Plant Grid Component
//!
//! Card grid for the current plant list, or a spinner while a fetch is
//! pending.

use leptos::prelude::*;

use crate::components::PlantCard;
use crate::store::{use_shop_store, ShopStateStoreFields};

#[component]
fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="col-span-1 md:col-span-3 flex justify-center items-center py-20">
            <span class="loading loading-spinner loading-lg text-green-700"></span>
        </div>
    }
}

/// Plant card grid
#[component]
pub fn PlantGrid() -> impl IntoView {
    let store = use_shop_store();

    view! {
        <div id="cards" class="grid grid-cols-1 md:grid-cols-3 gap-4">
            <Show
                when=move || !store.loading().get()
                fallback=|| view! { <LoadingSpinner /> }
            >
                <For
                    each=move || store.plants().get()
                    key=|plant| plant.id
                    children=move |plant| view! { <PlantCard plant=plant /> }
                />
            </Show>
        </div>
    }
}
