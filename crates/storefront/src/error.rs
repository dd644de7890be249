//! Unified error handling.
//!
//! Provides a unified `AppError` aggregating the subsystem errors.
//! Most of the system is total over valid inputs; what remains is
//! dataset loading, the string boundaries (theme tokens, emails), and
//! storage I/O.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::session::AuthError;
use crate::storage::StorageError;
use crate::theme::ThemeError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// The embedded catalog dataset failed to load.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// A simulated authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// A theme token was outside the closed set.
    #[error("Theme error: {0}")]
    Theme(#[from] ThemeError),

    /// Local key-value storage failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
