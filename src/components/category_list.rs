//! Category List Component
//!
//! Left sidebar of filter buttons. The "All" button and every category
//! button share one active state, driven by the store's filter.

use leptos::prelude::*;

use crate::context::use_shop;
use crate::filter::CategoryFilter;
use crate::store::ShopStateStoreFields;

const ALL_CLASS: &str = "w-full text-left p-2 md:p-3 rounded text-gray-800 font-normal transition-colors hover:bg-gray-100 text-base";
const ALL_ACTIVE_CLASS: &str = "w-full text-left p-2 md:p-3 rounded bg-green-700 text-white font-medium mb-2 transition-colors hover:bg-gray-100 dark:hover:text-gray-800";
const CATEGORY_CLASS: &str = "cat w-full text-left p-2 md:p-3 rounded text-gray-800 font-normal transition-colors hover:bg-gray-100 text-base";
const CATEGORY_ACTIVE_CLASS: &str = "cat w-full text-left p-2 md:p-3 rounded bg-green-700 text-white font-medium text-base";

pub fn all_button_class(filter: &CategoryFilter) -> &'static str {
    if *filter == CategoryFilter::All { ALL_ACTIVE_CLASS } else { ALL_CLASS }
}

pub fn category_button_class(filter: &CategoryFilter, category: &str) -> &'static str {
    if filter.is_category(category) { CATEGORY_ACTIVE_CLASS } else { CATEGORY_CLASS }
}

/// Category filter sidebar
#[component]
pub fn CategoryList() -> impl IntoView {
    let ctx = use_shop();
    let store = ctx.store;

    view! {
        <div id="category" class="flex flex-col">
            <button
                id="all"
                class=move || all_button_class(&store.filter().get())
                on:click=move |_| ctx.filter_by_category(CategoryFilter::All)
            >
                "All Trees"
            </button>
            <For
                each=move || store.categories().get()
                key=|category| category.category_name.clone()
                children=move |category| {
                    let name = category.category_name;
                    let for_class = name.clone();
                    let for_click = name.clone();
                    view! {
                        <button
                            class=move || category_button_class(&store.filter().get(), &for_class)
                            on:click=move |_| ctx.filter_by_category(CategoryFilter::Category(for_click.clone()))
                        >
                            {name}
                        </button>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATEGORIES: &[&str] = &["Fruit Tree", "Flowering Plant", "Shade Tree"];

    fn active_count(filter: &CategoryFilter) -> usize {
        let all = usize::from(all_button_class(filter) == ALL_ACTIVE_CLASS);
        let categories = CATEGORIES
            .iter()
            .filter(|c| category_button_class(filter, c) == CATEGORY_ACTIVE_CLASS)
            .count();
        all + categories
    }

    #[test]
    fn test_exactly_one_control_active() {
        assert_eq!(active_count(&CategoryFilter::All), 1);
        for category in CATEGORIES {
            let filter = CategoryFilter::Category(category.to_string());
            assert_eq!(active_count(&filter), 1);
            assert_eq!(all_button_class(&filter), ALL_CLASS);
            assert_eq!(category_button_class(&filter, category), CATEGORY_ACTIVE_CLASS);
        }
    }
}
