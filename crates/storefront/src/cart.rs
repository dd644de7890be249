//! The shopping cart container.
//!
//! Holds an insertion-ordered collection of (product, quantity) lines
//! with at most one line per product. Lines reference products by ID;
//! prices are resolved against the [`Catalog`](crate::catalog::Catalog)
//! at read time rather than captured on add.
//!
//! Every mutation bumps a revision published on a watch channel so
//! consuming views know to re-render. Cart contents are not persisted
//! across process lifetimes; a production system would push them to
//! storage or a server session.

use parking_lot::Mutex;
use tokio::sync::watch;

use austoc_core::{CurrencyCode, Price, ProductId};

use crate::catalog::{Catalog, Product};

/// One (product, quantity) pairing in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    /// The product this line refers to.
    pub product_id: ProductId,
    /// Units of the product. Always at least 1; a line that would drop
    /// to zero is removed instead.
    pub quantity: u32,
}

/// The cart container.
///
/// All operations are synchronous and take `&self`; interior
/// mutability is a non-poisoning mutex, matching the single-threaded
/// UI event model the cart is driven from.
#[derive(Debug)]
pub struct CartContainer {
    lines: Mutex<Vec<CartLine>>,
    changed: watch::Sender<u64>,
}

impl CartContainer {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        let (changed, _) = watch::channel(0);
        Self {
            lines: Mutex::new(Vec::new()),
            changed,
        }
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing line, or appends a new line with
    /// quantity 1. Always succeeds: the stock flag on the product is
    /// advisory and not enforced here. Returns the line's new quantity.
    pub fn add_item(&self, product: &Product) -> u32 {
        let quantity = {
            let mut lines = self.lines.lock();
            match lines.iter_mut().find(|l| l.product_id == product.id) {
                Some(line) => {
                    line.quantity += 1;
                    line.quantity
                }
                None => {
                    lines.push(CartLine {
                        product_id: product.id.clone(),
                        quantity: 1,
                    });
                    1
                }
            }
        };
        self.notify();
        quantity
    }

    /// Remove a line entirely, regardless of quantity.
    ///
    /// Returns `true` if a line was removed.
    pub fn remove_item(&self, product_id: &ProductId) -> bool {
        let removed = {
            let mut lines = self.lines.lock();
            let before = lines.len();
            lines.retain(|l| l.product_id != *product_id);
            lines.len() != before
        };
        if removed {
            self.notify();
        }
        removed
    }

    /// Set a line to an exact quantity.
    ///
    /// A quantity of zero behaves as [`remove_item`](Self::remove_item).
    /// Setting a quantity for a product with no line is a no-op: the
    /// operation receives no price-bearing product to insert. Returns
    /// `true` if the cart changed.
    pub fn set_quantity(&self, product_id: &ProductId, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove_item(product_id);
        }
        let updated = {
            let mut lines = self.lines.lock();
            match lines.iter_mut().find(|l| l.product_id == *product_id) {
                Some(line) if line.quantity != quantity => {
                    line.quantity = quantity;
                    true
                }
                _ => false,
            }
        };
        if updated {
            self.notify();
        }
        updated
    }

    /// Empty the cart.
    pub fn clear(&self) {
        let was_empty = {
            let mut lines = self.lines.lock();
            let was_empty = lines.is_empty();
            lines.clear();
            was_empty
        };
        if !was_empty {
            self.notify();
        }
    }

    /// Total units across all lines, for the badge display.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.lock().iter().map(|l| l.quantity).sum()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    /// Snapshot of the lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> Vec<CartLine> {
        self.lines.lock().clone()
    }

    /// Sum over lines of price x quantity, resolved against the
    /// catalog at read time.
    ///
    /// Lines whose product is missing from the catalog contribute
    /// nothing; that cannot happen while the invariant "lines reference
    /// only catalog products" holds, since products are never removed.
    #[must_use]
    pub fn subtotal(&self, catalog: &Catalog) -> Price {
        let lines = self.lines.lock();
        lines
            .iter()
            .filter_map(|line| {
                catalog
                    .get(&line.product_id)
                    .map(|p| p.price.times(line.quantity))
            })
            .fold(Price::zero(CurrencyCode::default()), |acc, line_total| {
                acc.plus(&line_total)
            })
    }

    /// Subscribe to mutation notifications.
    ///
    /// The value is a revision counter; consumers re-read the cart on
    /// every change rather than diffing.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changed.subscribe()
    }

    fn notify(&self) {
        self.changed.send_modify(|rev| *rev += 1);
    }
}

impl Default for CartContainer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::load().unwrap()
    }

    fn product<'a>(catalog: &'a Catalog, id: &str) -> &'a Product {
        catalog.get(&ProductId::parse(id).unwrap()).unwrap()
    }

    #[test]
    fn test_add_item_inserts_then_increments() {
        let catalog = catalog();
        let cart = CartContainer::new();
        let headphones = product(&catalog, "1");

        assert_eq!(cart.add_item(headphones), 1);
        assert_eq!(cart.add_item(headphones), 2);

        let lines = cart.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines.first().unwrap().quantity, 2);
    }

    #[test]
    fn test_item_count_is_sum_of_quantities() {
        let catalog = catalog();
        let cart = CartContainer::new();

        cart.add_item(product(&catalog, "1"));
        cart.add_item(product(&catalog, "1"));
        cart.add_item(product(&catalog, "2"));
        assert_eq!(cart.item_count(), 3);

        cart.remove_item(&ProductId::parse("1").unwrap());
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let catalog = catalog();
        let cart = CartContainer::new();
        let watch = product(&catalog, "2");

        cart.add_item(watch);
        assert!(cart.set_quantity(&watch.id, 0));
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_set_quantity_exact() {
        let catalog = catalog();
        let cart = CartContainer::new();
        let lamp = product(&catalog, "8");

        cart.add_item(lamp);
        assert!(cart.set_quantity(&lamp.id, 5));
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_set_quantity_absent_product_is_noop() {
        let cart = CartContainer::new();
        let id = ProductId::parse("1").unwrap();
        assert!(!cart.set_quantity(&id, 3));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let catalog = catalog();
        let cart = CartContainer::new();

        cart.add_item(product(&catalog, "3"));
        cart.add_item(product(&catalog, "1"));
        cart.add_item(product(&catalog, "3"));

        let lines = cart.lines();
        let order: Vec<&str> = lines.iter().map(|l| l.product_id.as_str()).collect();
        assert_eq!(order, vec!["3", "1"]);
    }

    #[test]
    fn test_subtotal_resolves_against_catalog() {
        let catalog = catalog();
        let cart = CartContainer::new();
        let coffee = product(&catalog, "7"); // $24.99

        cart.add_item(coffee);
        cart.add_item(coffee);
        assert_eq!(cart.subtotal(&catalog).display(), "$49.98");
    }

    #[test]
    fn test_clear() {
        let catalog = catalog();
        let cart = CartContainer::new();
        cart.add_item(product(&catalog, "1"));
        cart.add_item(product(&catalog, "2"));

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(&catalog).display(), "$0.00");
    }

    #[test]
    fn test_mutations_notify_subscribers() {
        let catalog = catalog();
        let cart = CartContainer::new();
        let mut rx = cart.subscribe();
        let initial = *rx.borrow_and_update();

        cart.add_item(product(&catalog, "1"));
        assert!(rx.has_changed().unwrap());
        assert!(*rx.borrow_and_update() > initial);

        // A no-op mutation does not notify.
        assert!(!cart.set_quantity(&ProductId::parse("99").unwrap(), 2));
        assert!(!rx.has_changed().unwrap());
    }
}
