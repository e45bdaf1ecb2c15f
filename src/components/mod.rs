//! UI Components
//!
//! Leptos components for the storefront page.

mod cart_panel;
mod category_list;
mod plant_card;
mod plant_grid;
mod plant_modal;

pub use cart_panel::CartPanel;
pub use category_list::CategoryList;
pub use plant_card::PlantCard;
pub use plant_grid::PlantGrid;
pub use plant_modal::PlantModal;
