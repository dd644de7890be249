//! The static product catalog.
//!
//! The catalog is compiled into the binary as a JSON dataset and parsed
//! once at startup. Products are immutable for the lifetime of the
//! process: nothing is ever added, mutated, or removed, which is what
//! lets the cart resolve prices at read time without staleness concerns.

use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Deserialize;
use url::Url;

use austoc_core::{Category, Price, PriceError, ProductId, ProductIdError, Rating, RatingError};

/// The product dataset compiled into the crate.
const PRODUCT_DATA: &str = include_str!("../data/products.json");

/// Errors that can occur while loading the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The dataset is not valid JSON or has the wrong shape.
    #[error("failed to parse product data: {0}")]
    Parse(String),

    /// A record carries an invalid product ID.
    #[error("invalid product id: {0}")]
    InvalidId(#[from] ProductIdError),

    /// Two records share the same product ID.
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),

    /// A record carries a negative price.
    #[error("product {id}: {source}")]
    InvalidPrice {
        id: ProductId,
        #[source]
        source: PriceError,
    },

    /// A record carries a rating outside the 0-5 scale.
    #[error("product {id}: {source}")]
    InvalidRating {
        id: ProductId,
        #[source]
        source: RatingError,
    },
}

/// A purchasable product.
///
/// Loaded once from the embedded dataset; immutable afterwards.
#[derive(Debug, Clone)]
pub struct Product {
    /// Unique identifier within the catalog.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Current price.
    pub price: Price,
    /// Pre-discount price, present only for discounted products.
    pub original_price: Option<Price>,
    /// Category from the closed set.
    pub category: Category,
    /// Display description.
    pub description: String,
    /// Rating on the 0-5 scale.
    pub rating: Rating,
    /// Number of reviews behind the rating.
    pub reviews: u32,
    /// Advisory stock flag. Display-only: the cart does not enforce it.
    pub in_stock: bool,
    /// Whether the product appears in the home-page featured rail.
    pub featured: bool,
    /// Primary image.
    pub image: Url,
    /// Gallery images, primary first.
    pub images: Vec<Url>,
    /// Free-form tags.
    pub tags: Vec<String>,
}

/// Raw dataset record, converted into [`Product`] with validation.
#[derive(Debug, Deserialize)]
struct ProductRecord {
    id: String,
    name: String,
    price: Decimal,
    #[serde(default)]
    original_price: Option<Decimal>,
    category: Category,
    description: String,
    rating: Decimal,
    reviews: u32,
    in_stock: bool,
    #[serde(default)]
    featured: bool,
    image: Url,
    #[serde(default)]
    images: Vec<Url>,
    #[serde(default)]
    tags: Vec<String>,
}

impl ProductRecord {
    fn into_product(self) -> Result<Product, CatalogError> {
        let id = ProductId::parse(&self.id)?;

        let price = Price::new(self.price, austoc_core::CurrencyCode::USD).map_err(|source| {
            CatalogError::InvalidPrice {
                id: id.clone(),
                source,
            }
        })?;

        let original_price = self
            .original_price
            .map(|amount| Price::new(amount, austoc_core::CurrencyCode::USD))
            .transpose()
            .map_err(|source| CatalogError::InvalidPrice {
                id: id.clone(),
                source,
            })?;

        let rating = Rating::parse(self.rating).map_err(|source| CatalogError::InvalidRating {
            id: id.clone(),
            source,
        })?;

        Ok(Product {
            id,
            name: self.name,
            price,
            original_price,
            category: self.category,
            description: self.description,
            rating,
            reviews: self.reviews,
            in_stock: self.in_stock,
            featured: self.featured,
            image: self.image,
            images: self.images,
            tags: self.tags,
        })
    }
}

/// The catalog store.
///
/// Cheaply cloneable; the product list is behind an `Arc` and shared
/// between all consumers.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<Vec<Product>>,
    by_id: Arc<HashMap<ProductId, usize>>,
}

impl Catalog {
    /// Load the catalog from the embedded dataset.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the embedded dataset is malformed.
    /// That would be a build defect, but the caller decides how loudly
    /// to fail.
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_json(PRODUCT_DATA)
    }

    /// Load a catalog from a JSON array of product records.
    ///
    /// An empty array is a valid (empty) catalog, not a failure.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] on malformed JSON, invalid or
    /// duplicate IDs, negative prices, or out-of-range ratings.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<ProductRecord> =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;

        let mut products = Vec::with_capacity(records.len());
        let mut by_id = HashMap::with_capacity(records.len());

        for record in records {
            let product = record.into_product()?;
            if by_id.contains_key(&product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            by_id.insert(product.id.clone(), products.len());
            products.push(product);
        }

        tracing::info!(count = products.len(), "catalog loaded");

        Ok(Self {
            products: Arc::new(products),
            by_id: Arc::new(by_id),
        })
    }

    /// All products in stable insertion (dataset) order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.by_id.get(id).and_then(|&idx| self.products.get(idx))
    }

    /// Category filters for display: the `All` sentinel first, then
    /// each distinct category in first-appearance order, exactly once.
    #[must_use]
    pub fn categories(&self) -> Vec<CategoryFilter> {
        let mut filters = vec![CategoryFilter::All];
        for product in self.products.iter() {
            let filter = CategoryFilter::Category(product.category);
            if !filters.contains(&filter) {
                filters.push(filter);
            }
        }
        filters
    }

    /// Products flagged for the home-page featured rail, in catalog order.
    #[must_use]
    pub fn featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// A category selection for filtering, including the `All` pseudo-category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Matches every product.
    All,
    /// Matches products of exactly this category.
    Category(Category),
}

impl CategoryFilter {
    /// The display label for this filter.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Category(c) => c.label(),
        }
    }

    /// Whether a product's category passes this filter.
    #[must_use]
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Category(c) => *c == category,
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
