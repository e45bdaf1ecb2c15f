//! Plant Modal Component
//!
//! Detail dialog for the selected plant, with the full description.

use leptos::html::Dialog;
use leptos::prelude::*;

use crate::context::use_shop;
use crate::display::format_price;
use crate::store::ShopStateStoreFields;

#[component]
pub fn PlantModal() -> impl IntoView {
    let ctx = use_shop();
    let store = ctx.store;
    let symbol = ctx.config().currency_symbol;
    let dialog_ref = NodeRef::<Dialog>::new();

    // Open the native dialog whenever a plant gets selected
    Effect::new(move |_| {
        let selected = store.detail().get().is_some();
        let Some(dialog) = dialog_ref.get() else { return };
        if selected && !dialog.open() {
            if let Err(e) = dialog.show_modal() {
                web_sys::console::error_1(&format!("[Modal] showModal failed: {:?}", e).into());
            }
        } else if !selected && dialog.open() {
            dialog.close();
        }
    });

    let content = move || {
        store.read().detail_plant().cloned().map(|plant| {
            let price = format!("Price: {}", format_price(&symbol, plant.price));
            view! {
                <div class="flex flex-col gap-4 p-6">
                    <img src=plant.image class="w-full h-[250px] object-cover rounded-xl" />
                    <h3 class="text-2xl font-bold text-gray-800">{plant.name}</h3>
                    <span class="badge badge-ghost">{format!("Category: {}", plant.category)}</span>
                    <p class="py-4 text-gray-600">{plant.description}</p>
                    <p class="text-xl font-bold text-green-700">{price}</p>
                    <div class="modal-action">
                        <form method="dialog"><button class="btn">"Close"</button></form>
                    </div>
                </div>
            }
        })
    };

    view! {
        <dialog
            id="modal_container"
            class="modal modal-bottom sm:modal-middle"
            node_ref=dialog_ref
            on:close=move |_| ctx.close_detail()
        >
            <div id="modal" class="modal-box">{content}</div>
        </dialog>
    }
}
