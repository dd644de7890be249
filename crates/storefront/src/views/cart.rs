//! Cart display models.

use crate::cart::CartContainer;
use crate::catalog::Catalog;

/// Cart line display data.
#[derive(Debug, Clone)]
pub struct CartItemView {
    pub product_id: String,
    pub name: String,
    pub quantity: u32,
    /// Unit price, formatted.
    pub price: String,
    /// Price x quantity, formatted.
    pub line_total: String,
    pub image: String,
}

/// Cart display data: items in insertion order plus derived totals.
#[derive(Debug, Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl CartView {
    /// An empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: "$0.00".to_owned(),
            item_count: 0,
        }
    }

    /// Derive the cart view, resolving each line's product in the
    /// catalog at read time.
    #[must_use]
    pub fn build(cart: &CartContainer, catalog: &Catalog) -> Self {
        let items = cart
            .lines()
            .iter()
            .filter_map(|line| {
                catalog.get(&line.product_id).map(|product| CartItemView {
                    product_id: product.id.as_str().to_owned(),
                    name: product.name.clone(),
                    quantity: line.quantity,
                    price: product.price.display(),
                    line_total: product.price.times(line.quantity).display(),
                    image: product.image.to_string(),
                })
            })
            .collect();

        Self {
            items,
            subtotal: cart.subtotal(catalog).display(),
            item_count: cart.item_count(),
        }
    }
}
