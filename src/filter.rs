//! Category Filter
//!
//! Narrowing of a freshly fetched plant list to one category.

use crate::models::CatalogPlant;

/// Which category control is active
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(name) => name == category,
        }
    }

    /// Is this the control labelled `category`?
    pub fn is_category(&self, category: &str) -> bool {
        matches!(self, CategoryFilter::Category(name) if name == category)
    }
}

/// Keep plants whose category equals the filter exactly (case-sensitive),
/// preserving order
pub fn filter_plants(plants: Vec<CatalogPlant>, filter: &CategoryFilter) -> Vec<CatalogPlant> {
    match filter {
        CategoryFilter::All => plants,
        CategoryFilter::Category(_) => plants.into_iter().filter(|p| filter.matches(&p.category)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plant(name: &str, category: &str) -> CatalogPlant {
        CatalogPlant {
            name: name.to_string(),
            category: category.to_string(),
            description: String::new(),
            image: String::new(),
            price: 1.0,
        }
    }

    fn catalog() -> Vec<CatalogPlant> {
        vec![
            plant("Areca Palm", "Indoor"),
            plant("Cactus", "Succulent"),
            plant("Snake Plant", "Indoor"),
            plant("Aloe", "Succulent"),
        ]
    }

    #[test]
    fn test_filter_keeps_matching_in_order() {
        let filtered = filter_plants(catalog(), &CategoryFilter::Category("Indoor".to_string()));
        let names: Vec<_> = filtered.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Areca Palm", "Snake Plant"]);
    }

    #[test]
    fn test_filter_is_exact_and_case_sensitive() {
        assert!(filter_plants(catalog(), &CategoryFilter::Category("indoor".to_string())).is_empty());
        assert!(filter_plants(catalog(), &CategoryFilter::Category("Indo".to_string())).is_empty());
    }

    #[test]
    fn test_all_returns_full_list() {
        assert_eq!(filter_plants(catalog(), &CategoryFilter::All), catalog());
    }

    #[test]
    fn test_is_category() {
        let filter = CategoryFilter::Category("Succulent".to_string());
        assert!(filter.is_category("Succulent"));
        assert!(!filter.is_category("Indoor"));
        assert!(!CategoryFilter::All.is_category("Succulent"));
    }
}
