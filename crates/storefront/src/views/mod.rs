//! View-layer logic for the storefront screens.
//!
//! Everything here is a pure derivation from container state: query
//! types, filter/sort/search, display models with preformatted
//! strings, and form validation. No module in this tree mutates a
//! container.

pub mod auth;
pub mod cart;
pub mod home;
pub mod products;
