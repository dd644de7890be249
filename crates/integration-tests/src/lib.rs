//! Integration tests for Austoc.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p austoc-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_arithmetic` - Cross-container cart/catalog math
//! - `session_lifecycle` - Simulated auth flows on a paused clock
//! - `theme_reload` - Theme persistence across simulated reloads
//!
//! All artificial delays run under `#[tokio::test(start_paused = true)]`,
//! so the suite never waits on a wall clock.

use austoc_storefront::config::StorefrontConfig;
use austoc_storefront::state::AppState;

/// Initialize tracing for test output. Safe to call repeatedly; only
/// the first call installs a subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "austoc_storefront=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

/// Build an `AppState` with the default artificial delays.
///
/// # Panics
///
/// Panics if the embedded catalog dataset fails to load; tests cannot
/// proceed without it.
#[must_use]
#[allow(clippy::expect_used)]
pub fn test_state() -> AppState {
    init_tracing();
    AppState::new(StorefrontConfig::default()).expect("embedded catalog must load")
}
