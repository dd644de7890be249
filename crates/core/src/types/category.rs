//! The closed set of product categories.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A product category.
///
/// The catalog uses a closed set; the dataset serializes categories by
/// their display labels (`"Home & Living"`, not `HomeLiving`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Fashion,
    #[serde(rename = "Home & Living")]
    HomeLiving,
    #[serde(rename = "Food & Beverage")]
    FoodBeverage,
}

impl Category {
    /// The display label for this category.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Fashion => "Fashion",
            Self::HomeLiving => "Home & Living",
            Self::FoodBeverage => "Food & Beverage",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
