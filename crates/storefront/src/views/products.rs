//! The catalog listing view: filter, sort, search.

use rust_decimal::Decimal;

use crate::catalog::{Catalog, CategoryFilter, Product};

/// Sort orders for the listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Alphabetical by name.
    #[default]
    NameAsc,
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
    /// Highest rated first.
    RatingDesc,
}

/// The inputs of the listing page: free-text search, category,
/// inclusive price range, and sort order.
///
/// The default query shows the whole catalog sorted by name, matching
/// the listing page's initial state.
#[derive(Debug, Clone)]
pub struct ProductQuery {
    /// Case-insensitive substring matched against name and description.
    pub search: String,
    /// Category filter, `All` by default.
    pub category: CategoryFilter,
    /// Inclusive lower price bound.
    pub price_floor: Decimal,
    /// Inclusive upper price bound.
    pub price_ceiling: Decimal,
    /// Sort order.
    pub sort: SortKey,
}

impl ProductQuery {
    /// The listing page's full price range.
    pub const DEFAULT_PRICE_CEILING: Decimal = Decimal::from_parts(2000, 0, 0, false, 0);

    /// Whether a product passes search AND category AND price range.
    /// `needle` is the search term, already trimmed and lowercased.
    fn matches(&self, needle: &str, product: &Product) -> bool {
        let matches_search = needle.is_empty()
            || product.name.to_lowercase().contains(needle)
            || product.description.to_lowercase().contains(needle);

        let price = product.price.amount();

        matches_search
            && self.category.matches(product.category)
            && price >= self.price_floor
            && price <= self.price_ceiling
    }
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: CategoryFilter::All,
            price_floor: Decimal::ZERO,
            price_ceiling: Self::DEFAULT_PRICE_CEILING,
            sort: SortKey::default(),
        }
    }
}

/// Derive the filtered, sorted listing for a query.
///
/// A pure function of (catalog, query): a linear scan keeps products
/// matching search AND category AND price range, then one stable sort
/// applies the requested order. Ties keep the catalog's insertion
/// order. An empty result is a valid display state, not an error.
#[must_use]
pub fn filter_and_sort<'a>(catalog: &'a Catalog, query: &ProductQuery) -> Vec<&'a Product> {
    let needle = query.search.trim().to_lowercase();
    let mut selected: Vec<&Product> = catalog
        .products()
        .iter()
        .filter(|p| query.matches(&needle, p))
        .collect();

    match query.sort {
        SortKey::NameAsc => selected.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::PriceAsc => selected.sort_by(|a, b| a.price.amount().cmp(&b.price.amount())),
        SortKey::PriceDesc => selected.sort_by(|a, b| b.price.amount().cmp(&a.price.amount())),
        SortKey::RatingDesc => selected.sort_by(|a, b| b.rating.cmp(&a.rating)),
    }

    selected
}

/// Product display data for the listing and featured rails.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub original_price: Option<String>,
    /// Whole-percent discount against the original price, when any.
    pub discount_percent: Option<u32>,
    pub category: &'static str,
    pub description: String,
    pub rating: String,
    pub reviews: u32,
    pub in_stock: bool,
    pub image: String,
    pub tags: Vec<String>,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        let discount_percent = product.original_price.as_ref().and_then(|original| {
            let original = original.amount();
            if original <= product.price.amount() {
                return None;
            }
            let off = (Decimal::ONE - product.price.amount() / original) * Decimal::ONE_HUNDRED;
            u32::try_from(off.round().mantissa()).ok()
        });

        Self {
            id: product.id.as_str().to_owned(),
            name: product.name.clone(),
            price: product.price.display(),
            original_price: product.original_price.as_ref().map(|p| p.display()),
            discount_percent,
            category: product.category.label(),
            description: product.description.clone(),
            rating: product.rating.to_string(),
            reviews: product.reviews,
            in_stock: product.in_stock,
            image: product.image.to_string(),
            tags: product.tags.clone(),
        }
    }
}

/// The full listing page model: views plus the "Showing X of Y" counts.
#[derive(Debug, Clone)]
pub struct ListingView {
    pub products: Vec<ProductView>,
    pub shown: usize,
    pub total: usize,
}

impl ListingView {
    /// Build the listing for a query.
    #[must_use]
    pub fn build(catalog: &Catalog, query: &ProductQuery) -> Self {
        let selected = filter_and_sort(catalog, query);
        Self {
            shown: selected.len(),
            total: catalog.len(),
            products: selected.into_iter().map(ProductView::from).collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use austoc_core::Category;

    fn catalog() -> Catalog {
        Catalog::load().unwrap()
    }

    fn names(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_default_query_returns_whole_catalog_sorted_by_name() {
        let catalog = catalog();
        let result = filter_and_sort(&catalog, &ProductQuery::default());

        assert_eq!(result.len(), catalog.len());
        let names = names(&result);
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_search_matches_name_and_description_case_insensitive() {
        let catalog = catalog();

        let query = ProductQuery {
            search: "LEATHER".to_owned(),
            ..ProductQuery::default()
        };
        let result = filter_and_sort(&catalog, &query);
        assert_eq!(names(&result), vec!["Luxury Leather Bag"]);

        // "noise cancellation" appears only in a description.
        let query = ProductQuery {
            search: "noise cancellation".to_owned(),
            ..ProductQuery::default()
        };
        let result = filter_and_sort(&catalog, &query);
        assert_eq!(names(&result), vec!["Premium Wireless Headphones"]);
    }

    #[test]
    fn test_category_filter() {
        let catalog = catalog();
        let query = ProductQuery {
            category: CategoryFilter::Category(Category::Fashion),
            ..ProductQuery::default()
        };
        let result = filter_and_sort(&catalog, &query);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|p| p.category == Category::Fashion));
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let catalog = catalog();
        let query = ProductQuery {
            price_floor: "24.99".parse().unwrap(),
            price_ceiling: "79.99".parse().unwrap(),
            ..ProductQuery::default()
        };
        let result = filter_and_sort(&catalog, &query);
        assert_eq!(
            names(&result),
            vec!["Artisan Coffee Beans", "Minimalist Desk Lamp"]
        );
    }

    #[test]
    fn test_price_sorts_are_reverses_without_ties() {
        let catalog = catalog();
        // Dataset prices are all distinct.
        let asc = filter_and_sort(
            &catalog,
            &ProductQuery {
                sort: SortKey::PriceAsc,
                ..ProductQuery::default()
            },
        );
        let mut desc = filter_and_sort(
            &catalog,
            &ProductQuery {
                sort: SortKey::PriceDesc,
                ..ProductQuery::default()
            },
        );
        desc.reverse();
        assert_eq!(names(&asc), names(&desc));
    }

    #[test]
    fn test_rating_desc() {
        let catalog = catalog();
        let result = filter_and_sort(
            &catalog,
            &ProductQuery {
                sort: SortKey::RatingDesc,
                ..ProductQuery::default()
            },
        );
        let ratings: Vec<_> = result.iter().map(|p| p.rating).collect();
        let mut sorted = ratings.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(ratings, sorted);
    }

    #[test]
    fn test_rating_ties_keep_catalog_order() {
        let catalog = catalog();
        // Products 3 and 7 are both rated 4.9; 3 comes first in the dataset.
        let result = filter_and_sort(
            &catalog,
            &ProductQuery {
                sort: SortKey::RatingDesc,
                ..ProductQuery::default()
            },
        );
        let top_two: Vec<&str> = result
            .iter()
            .take(2)
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(top_two, vec!["3", "7"]);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let catalog = catalog();
        let query = ProductQuery {
            search: "zeppelin".to_owned(),
            ..ProductQuery::default()
        };
        assert!(filter_and_sort(&catalog, &query).is_empty());
    }

    #[test]
    fn test_combined_filters_are_conjunctive() {
        let catalog = catalog();
        let query = ProductQuery {
            search: "premium".to_owned(),
            category: CategoryFilter::Category(Category::Electronics),
            price_ceiling: "300".parse().unwrap(),
            ..ProductQuery::default()
        };
        let result = filter_and_sort(&catalog, &query);
        assert_eq!(names(&result), vec!["Premium Wireless Headphones"]);
    }

    #[test]
    fn test_listing_view_counts() {
        let catalog = catalog();
        let listing = ListingView::build(
            &catalog,
            &ProductQuery {
                category: CategoryFilter::Category(Category::HomeLiving),
                ..ProductQuery::default()
            },
        );
        assert_eq!(listing.shown, 1);
        assert_eq!(listing.total, 8);
    }

    #[test]
    fn test_product_view_discount_percent() {
        let catalog = catalog();
        let headphones = catalog.products().first().unwrap();
        let view = ProductView::from(headphones);

        // $299.99 from $399.99 is a 25% discount.
        assert_eq!(view.discount_percent, Some(25));
        assert_eq!(view.price, "$299.99");
        assert_eq!(view.original_price.as_deref(), Some("$399.99"));
    }

    #[test]
    fn test_product_view_without_discount() {
        let catalog = catalog();
        let camera = catalog.products().get(3).unwrap();
        let view = ProductView::from(camera);
        assert_eq!(view.discount_percent, None);
        assert_eq!(view.original_price, None);
    }
}
