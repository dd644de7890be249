//! Core types for Austoc.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod email;
pub mod id;
pub mod price;
pub mod rating;

pub use category::Category;
pub use email::{Email, EmailError};
pub use id::{ProductId, ProductIdError, UserId};
pub use price::{CurrencyCode, Price, PriceError};
pub use rating::{Rating, RatingError};
