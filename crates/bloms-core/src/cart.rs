//! # Cart Model
//!
//! The in-memory cart: an ordered list of line items, unique by product id.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Page Action              Controller Call         Cart State Change     │
//! │  ───────────              ───────────────         ─────────────────     │
//! │                                                                         │
//! │  Click "Agregar" ────────► add(product) ────────► qty += 1 (or push)   │
//! │                                                                         │
//! │  Change quantity ────────► update_quantity() ───► items[i].qty = n     │
//! │                            (n <= 0 removes)                             │
//! │                                                                         │
//! │  Click remove ───────────► remove(id) ──────────► items.retain(...)    │
//! │                                                                         │
//! │  NOTE: These methods are pure state transitions. Persistence and        │
//! │        rendering are side effects the controller performs afterwards.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Items are unique by `id` (adding the same product increases quantity)
//! - Quantity is >= 1 while an item is present; a quantity reaching <= 0
//!   removes the item, it is never stored non-positive

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::money::Money;

/// One product entry in the cart with its quantity.
///
/// The serde field names are the persisted format: the cart is stored as a
/// JSON array of exactly this shape, no envelope and no version field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product id this line refers to.
    pub id: u32,

    /// Product name at time of adding.
    pub name: String,

    /// Unit price in whole pesos at time of adding.
    pub price: i64,

    /// Image reference.
    pub image: String,

    /// Product description.
    pub description: String,

    /// Quantity in cart. Always >= 1.
    pub quantity: i64,
}

impl LineItem {
    /// Creates a line item for one unit of a product.
    pub fn from_product(product: &Product) -> Self {
        LineItem {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            description: product.description.clone(),
            quantity: 1,
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_pesos(self.price)
    }

    /// Line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price() * self.quantity
    }
}

/// The shopping cart.
///
/// Created empty on first load, repopulated from persisted state when
/// present, and mutated only through the methods below.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Creates a cart from already-deserialized line items.
    ///
    /// Entries violating the quantity invariant (possible in hand-edited or
    /// stale persisted data) are dropped rather than carried along.
    pub fn from_items(items: Vec<LineItem>) -> Self {
        Cart {
            items: items.into_iter().filter(|i| i.quantity >= 1).collect(),
        }
    }

    /// Adds exactly one unit of a product.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity increases by 1
    /// - Product not in cart: appended as a new item with quantity 1
    pub fn add(&mut self, product: &Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == product.id) {
            item.quantity += 1;
            return;
        }

        self.items.push(LineItem::from_product(product));
    }

    /// Removes the entry with a matching id.
    ///
    /// A missing id is a silent no-op - removing twice is idempotent.
    pub fn remove(&mut self, id: u32) {
        self.items.retain(|i| i.id != id);
    }

    /// Sets the quantity of an item.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: equivalent to [`Cart::remove`]
    /// - Item not in cart: no-op
    pub fn update_quantity(&mut self, id: u32, quantity: i64) {
        if quantity <= 0 {
            self.remove(id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.quantity = quantity;
        }
    }

    /// Total quantity across all entries. Pure query, no side effects.
    pub fn total_item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The line items, in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_add_merges_by_id() {
        let product = catalog::featured();
        let mut cart = Cart::new();

        cart.add(&product);
        cart.add(&product);
        cart.add(&product);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
        assert_eq!(cart.total_item_count(), 3);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let product = catalog::featured();
        let mut cart = Cart::new();
        cart.add(&product);

        cart.remove(product.id);
        assert!(cart.is_empty());

        // Second remove of the same id is a no-op
        cart.remove(product.id);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_sets_value() {
        let product = catalog::featured();
        let mut cart = Cart::new();
        cart.add(&product);

        cart.update_quantity(product.id, 7);
        assert_eq!(cart.items()[0].quantity, 7);
        assert_eq!(cart.total_item_count(), 7);
    }

    #[test]
    fn test_update_quantity_nonpositive_removes() {
        let product = catalog::featured();

        let mut cart = Cart::new();
        cart.add(&product);
        cart.update_quantity(product.id, 0);
        assert!(cart.is_empty());

        let mut cart = Cart::new();
        cart.add(&product);
        cart.update_quantity(product.id, -5);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_unknown_id_is_noop() {
        let product = catalog::featured();
        let mut cart = Cart::new();
        cart.add(&product);

        cart.update_quantity(999, 5);
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn test_from_items_drops_invariant_violations() {
        let product = catalog::featured();
        let mut bad = LineItem::from_product(&product);
        bad.quantity = 0;

        let cart = Cart::from_items(vec![LineItem::from_product(&product), bad]);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn test_line_item_persisted_shape() {
        let item = LineItem::from_product(&catalog::featured());
        let json = serde_json::to_value(&item).unwrap();

        // Exact field set of the persistence format - no extras, no envelope
        let obj = json.as_object().unwrap();
        let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["description", "id", "image", "name", "price", "quantity"]
        );
        assert_eq!(json["price"], 8000);
        assert_eq!(json["quantity"], 1);
    }
}
