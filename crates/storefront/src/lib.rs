//! Austoc Storefront - the storefront runtime library.
//!
//! # Architecture
//!
//! - Static catalog compiled in from a JSON dataset
//! - In-memory cart, simulated session, and persisted theme containers
//! - Pure view-layer derivations (filter/sort/search, display models,
//!   form validation)
//! - `tokio::sync::watch` channels as the re-render notification edge;
//!   the rendering runtime is an opaque observer
//!
//! # What this is not
//!
//! There is no network I/O, no database, and no real authentication.
//! The session boundary is a deliberate simulation with artificial
//! latency; a production deployment replaces it with a real identity
//! provider.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod session;
pub mod state;
pub mod storage;
pub mod theme;
pub mod views;
