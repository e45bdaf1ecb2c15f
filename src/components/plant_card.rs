//! Plant Card Component

use leptos::prelude::*;

use crate::context::use_shop;
use crate::display::{format_price, truncate_description};
use crate::models::Plant;

/// One catalog card. Clicking the image or name opens the detail modal.
#[component]
pub fn PlantCard(plant: Plant) -> impl IntoView {
    let ctx = use_shop();
    let config = ctx.config();
    let id = plant.id;

    let preview = truncate_description(&plant.description, config.description_preview_chars);
    let price = format_price(&config.currency_symbol, plant.price);

    view! {
        <div class="bg-white rounded-lg p-4 shadow-sm hover:shadow-md transition-shadow card flex flex-col" data-category=plant.category.clone()>
            <img
                src=plant.image.clone()
                alt=plant.name.clone()
                class="w-full h-[200px] object-cover bg-gray-200 rounded-lg mb-3 cursor-pointer"
                on:click=move |_| ctx.open_detail(id)
            />
            <h3
                class="font-semibold text-lg text-gray-800 mb-2 cursor-pointer"
                on:click=move |_| ctx.open_detail(id)
            >
                {plant.name.clone()}
            </h3>
            <p class="text-sm text-gray-800 opacity-80 mb-3 line-clamp-2 leading-snug flex-grow">{preview}</p>
            <div class="flex justify-between items-center mb-4">
                <div class="bg-green-100 text-green-800 px-3 py-1 rounded-full text-sm font-medium">{plant.category.clone()}</div>
                <p class="font-semibold text-gray-800">{price}</p>
            </div>
            <button
                class="btn w-full bg-green-700 text-white rounded-full font-semibold hover:bg-green-800 transition-colors border-none min-h-[48px] h-auto"
                on:click=move |_| ctx.add_to_cart(id)
            >
                "Add to Cart"
            </button>
        </div>
    }
}
