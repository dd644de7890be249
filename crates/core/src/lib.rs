//! Austoc Core - Shared types library.
//!
//! This crate provides common types used across all Austoc components:
//! - `storefront` - The storefront runtime (catalog, cart, session, theme)
//! - `integration-tests` - Cross-container scenario tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no async, no storage.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails,
//!   ratings, and the closed category set

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
