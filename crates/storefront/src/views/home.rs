//! Home screen display model.

use crate::catalog::Catalog;

use super::products::ProductView;

/// The home screen's featured-product rail.
#[derive(Debug, Clone)]
pub struct HomeView {
    pub featured: Vec<ProductView>,
}

impl HomeView {
    /// Build the home view from the catalog.
    #[must_use]
    pub fn build(catalog: &Catalog) -> Self {
        Self {
            featured: catalog
                .featured()
                .into_iter()
                .map(ProductView::from)
                .collect(),
        }
    }
}
