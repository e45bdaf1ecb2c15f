//! Cart Panel Component
//!
//! Right sidebar listing cart lines, with a total footer that only shows
//! while the cart is not empty.

use leptos::prelude::*;

use crate::cart::LineItem;
use crate::context::use_shop;
use crate::display::{format_price, line_quantity};
use crate::store::ShopStateStoreFields;

#[component]
fn CartLine(line: LineItem) -> impl IntoView {
    let ctx = use_shop();
    let symbol = ctx.config().currency_symbol;
    let id = line.id;

    view! {
        <div class="flex justify-between items-center p-4 bg-green-50 rounded-xl w-full relative mb-3">
            <div class="flex flex-col">
                <p class="font-bold text-gray-800 text-base">{line.plant_name}</p>
                <p class="text-gray-400 text-sm mt-1">{line_quantity(&symbol, line.price)}</p>
            </div>
            <button
                class="btn btn-ghost btn-xs text-gray-400 hover:text-error font-bold text-lg"
                on:click=move |_| ctx.remove_line(id)
            >
                "x"
            </button>
        </div>
    }
}

/// Cart sidebar
#[component]
pub fn CartPanel() -> impl IntoView {
    let ctx = use_shop();
    let store = ctx.store;
    let symbol = ctx.config().currency_symbol;

    let lines = move || store.cart().with(|cart| cart.lines().to_vec());
    let visible = move || store.read().cart_visible();
    let total = move || format_price(&symbol, store.read().cart_total());

    view! {
        <div class="bg-white rounded-lg p-4">
            <h3 class="font-bold text-xl mb-4">"Your Cart"</h3>
            <div id="cart-items-container">
                <For
                    each=lines
                    key=|line| line.id
                    children=move |line| view! { <CartLine line=line /> }
                />
            </div>
            <Show when=visible>
                <div id="cart-footer" class="flex justify-between items-center border-t pt-3 font-semibold">
                    <span>"Total:"</span>
                    <span id="cart-total-value">{total.clone()}</span>
                </div>
            </Show>
        </div>
    }
}
