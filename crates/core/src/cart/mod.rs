//! Shopping cart context
//!
//! Lines are identified by [`CartLineKey`]: product, variation and seller.
//! Adding merges on the exact key; removal and quantity updates take a
//! [`CartLineSelector`] where an unset variation or seller matches any.

use marketfeed_domain::{CartItem, CartLineKey, MarketError, Money, Result};
use parking_lot::Mutex;
use tracing::debug;

/// Matches cart lines for removal and quantity updates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLineSelector {
    pub product_id: u32,
    pub variation_id: Option<u32>,
    pub seller_id: Option<u32>,
}

impl CartLineSelector {
    /// Every line of a product, whatever its variation or seller
    pub fn product(product_id: u32) -> Self {
        Self { product_id, variation_id: None, seller_id: None }
    }

    pub fn matches(&self, item: &CartItem) -> bool {
        item.product_id == self.product_id
            && (self.variation_id.is_none() || item.variation_id == self.variation_id)
            && (self.seller_id.is_none() || item.seller_id == self.seller_id)
    }
}

impl From<CartLineKey> for CartLineSelector {
    fn from(key: CartLineKey) -> Self {
        Self { product_id: key.product_id, variation_id: key.variation_id, seller_id: key.seller_id }
    }
}

/// In-memory cart for the current session
#[derive(Debug, Default)]
pub struct CartStore {
    lines: Mutex<Vec<CartItem>>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of `item`.
    ///
    /// A line with the same key grows; otherwise a new line is appended
    /// carrying `quantity` (the item's own quantity field is ignored).
    pub fn add(&self, mut item: CartItem, quantity: u32) -> Result<()> {
        if quantity == 0 {
            return Err(MarketError::InvalidInput("Quantity must be at least 1".to_string()));
        }

        let key = item.key();
        let mut lines = self.lines.lock();
        if let Some(line) = lines.iter_mut().find(|line| line.key() == key) {
            line.quantity = line.quantity.saturating_add(quantity);
            debug!(product_id = key.product_id, quantity = line.quantity, "cart_line_merged");
        } else {
            item.quantity = quantity;
            debug!(product_id = key.product_id, quantity, "cart_line_added");
            lines.push(item);
        }
        Ok(())
    }

    /// Remove every matching line; returns how many were removed
    pub fn remove(&self, selector: &CartLineSelector) -> usize {
        let mut lines = self.lines.lock();
        let before = lines.len();
        lines.retain(|line| !selector.matches(line));
        before - lines.len()
    }

    /// Set the quantity of the first matching line.
    ///
    /// Zero or less removes that line. No match is a no-op.
    pub fn update_quantity(&self, selector: &CartLineSelector, quantity: i64) {
        let mut lines = self.lines.lock();
        let Some(index) = lines.iter().position(|line| selector.matches(line)) else {
            return;
        };

        if quantity <= 0 {
            let removed = lines.remove(index);
            debug!(product_id = removed.product_id, "cart_line_removed");
            return;
        }
        lines[index].quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }

    /// Snapshot of the current lines, in insertion order
    pub fn items(&self) -> Vec<CartItem> {
        self.lines.lock().clone()
    }

    /// Sum of line quantities
    pub fn total_items(&self) -> u32 {
        self.lines.lock().iter().fold(0u32, |acc, line| acc.saturating_add(line.quantity))
    }

    /// Sum of price times quantity
    pub fn total_price(&self) -> Money {
        self.lines.lock().iter().map(CartItem::line_total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(product_id: u32, variation_id: Option<u32>, seller_id: Option<u32>) -> CartItem {
        CartItem {
            product_id,
            name: format!("Product {product_id}"),
            price: Money::from_cents(1_000),
            image: String::new(),
            variation_id,
            seller_id,
            quantity: 0,
        }
    }

    #[test]
    fn adding_same_key_twice_merges_quantity() {
        let cart = CartStore::new();
        cart.add(item(1, Some(2), Some(1)), 1).unwrap();
        cart.add(item(1, Some(2), Some(1)), 2).unwrap();

        let items = cart.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 3);
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn different_variation_or_seller_is_a_new_line() {
        let cart = CartStore::new();
        cart.add(item(1, Some(1), Some(1)), 1).unwrap();
        cart.add(item(1, Some(2), Some(1)), 1).unwrap();
        cart.add(item(1, Some(1), Some(2)), 1).unwrap();
        cart.add(item(1, None, None), 1).unwrap();

        assert_eq!(cart.items().len(), 4);
    }

    #[test]
    fn zero_quantity_add_is_rejected() {
        let cart = CartStore::new();
        assert!(matches!(cart.add(item(1, None, None), 0), Err(MarketError::InvalidInput(_))));
        assert!(cart.is_empty());
    }

    #[test]
    fn setting_quantity_to_zero_removes_line() {
        let cart = CartStore::new();
        cart.add(item(1, Some(1), Some(1)), 1).unwrap();
        cart.add(item(2, None, None), 1).unwrap();

        cart.update_quantity(&item(1, Some(1), Some(1)).key().into(), 0);

        let items = cart.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].product_id, 2);
    }

    #[test]
    fn negative_quantity_removes_line() {
        let cart = CartStore::new();
        cart.add(item(1, None, None), 2).unwrap();
        cart.update_quantity(&CartLineSelector::product(1), -1);
        assert!(cart.is_empty());
    }

    #[test]
    fn update_touches_only_first_match() {
        let cart = CartStore::new();
        cart.add(item(1, Some(1), None), 1).unwrap();
        cart.add(item(1, Some(2), None), 1).unwrap();

        cart.update_quantity(&CartLineSelector::product(1), 5);

        let quantities: Vec<u32> = cart.items().iter().map(|i| i.quantity).collect();
        assert_eq!(quantities, vec![5, 1]);
    }

    #[test]
    fn update_without_match_is_noop() {
        let cart = CartStore::new();
        cart.add(item(1, None, None), 1).unwrap();
        cart.update_quantity(&CartLineSelector::product(9), 0);
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn unset_selector_fields_are_wildcards_on_remove() {
        let cart = CartStore::new();
        cart.add(item(1, Some(1), Some(1)), 1).unwrap();
        cart.add(item(1, Some(2), Some(2)), 1).unwrap();
        cart.add(item(3, None, None), 1).unwrap();

        let selector = CartLineSelector { product_id: 1, variation_id: None, seller_id: Some(2) };
        assert_eq!(cart.remove(&selector), 1);
        assert_eq!(cart.remove(&CartLineSelector::product(1)), 1);
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn set_selector_field_does_not_match_unset_line() {
        let cart = CartStore::new();
        cart.add(item(3, None, None), 1).unwrap();

        let selector = CartLineSelector { product_id: 3, variation_id: Some(1), seller_id: None };
        assert_eq!(cart.remove(&selector), 0);
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn totals_and_clear() {
        let cart = CartStore::new();
        cart.add(item(1, None, None), 2).unwrap();
        cart.add(item(2, None, None), 1).unwrap();

        assert_eq!(cart.total_price(), Money::from_cents(3_000));

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), Money::ZERO);
    }
}
