//! Cart Ledger
//!
//! Ordered list of line items. The total is always derived from the lines,
//! so a removal takes back exactly the price captured when the line was added.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineId(pub u64);

/// One add-to-cart action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: LineId,
    pub plant_name: String,
    /// Price at the time of the click
    pub price: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<LineItem>,
    next_id: u64,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new line; repeated plants get independent lines
    pub fn add(&mut self, plant_name: &str, price: f64) -> LineId {
        let id = LineId(self.next_id);
        self.next_id += 1;
        self.lines.push(LineItem {
            id,
            plant_name: plant_name.to_string(),
            price,
        });
        id
    }

    /// Remove one line by id
    pub fn remove(&mut self, id: LineId) -> Option<LineItem> {
        let index = self.lines.iter().position(|line| line.id == id)?;
        Some(self.lines.remove(index))
    }

    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    pub fn total(&self) -> f64 {
        self.lines.iter().map(|line| line.price).sum()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_total() {
        let mut cart = Cart::new();
        cart.add("Cactus", 10.0);
        cart.add("Areca Palm", 25.0);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total(), 35.0);
    }

    #[test]
    fn test_duplicate_adds_are_separate_lines() {
        let mut cart = Cart::new();
        let first = cart.add("Cactus", 10.0);
        let second = cart.add("Cactus", 10.0);
        assert_ne!(first, second);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total(), 20.0);
    }

    #[test]
    fn test_remove_only_that_line() {
        let mut cart = Cart::new();
        let first = cart.add("Cactus", 10.0);
        let second = cart.add("Cactus", 10.0);

        let removed = cart.remove(first).unwrap();
        assert_eq!(removed.id, first);
        assert_eq!(cart.lines()[0].id, second);
        assert_eq!(cart.total(), 10.0);

        assert!(cart.remove(first).is_none());
    }

    #[test]
    fn test_empty_after_removing_everything() {
        let mut cart = Cart::new();
        let id = cart.add("Cactus", 10.0);
        cart.remove(id);
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut cart = Cart::new();
        let first = cart.add("Cactus", 10.0);
        cart.remove(first);
        let second = cart.add("Cactus", 10.0);
        assert_ne!(first, second);
    }
}
