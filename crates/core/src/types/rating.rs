//! Bounded product rating.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Rating`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum RatingError {
    /// The value is outside the 0.0-5.0 scale.
    #[error("rating must be between 0 and 5, got {0}")]
    OutOfRange(Decimal),
}

/// A product rating on the 0.0-5.0 scale.
///
/// Ratings come from the catalog dataset and are validated at load
/// time; the wrapper guarantees the bound everywhere downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(Decimal);

impl Rating {
    /// The maximum rating value.
    pub const MAX: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

    /// Parse a `Rating`, enforcing the 0.0-5.0 bound.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::OutOfRange`] if the value is negative or
    /// greater than 5.
    pub fn parse(value: Decimal) -> Result<Self, RatingError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(RatingError::OutOfRange(value));
        }
        if value > Self::MAX {
            return Err(RatingError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// The rating value.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}
