//! Storefront configuration.
//!
//! The core consumes no environment variables; hosts construct a
//! config programmatically. Every knob has a default matching the
//! observed behavior of the storefront: a 3-second boot delay behind
//! the loading screen and 1.5-second simulated authentication calls.

use std::path::PathBuf;
use std::time::Duration;

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Artificial delay between [`AppState::start`] and readiness,
    /// gating the initial loading screen.
    ///
    /// [`AppState::start`]: crate::state::AppState::start
    pub startup_delay: Duration,
    /// Artificial delay inside simulated login/signup calls.
    pub auth_delay: Duration,
    /// Where to persist the theme selection. `None` keeps it in
    /// memory, which loses the selection on restart.
    pub theme_storage_path: Option<PathBuf>,
}

impl StorefrontConfig {
    /// Default boot delay.
    pub const DEFAULT_STARTUP_DELAY: Duration = Duration::from_secs(3);
    /// Default simulated authentication delay.
    pub const DEFAULT_AUTH_DELAY: Duration = Duration::from_millis(1500);

    /// Persist the theme to the given file.
    #[must_use]
    pub fn with_theme_storage(mut self, path: impl Into<PathBuf>) -> Self {
        self.theme_storage_path = Some(path.into());
        self
    }

    /// Override both artificial delays. Tests use zero to keep paused
    /// clocks from mattering at all.
    #[must_use]
    pub const fn with_delays(mut self, startup: Duration, auth: Duration) -> Self {
        self.startup_delay = startup;
        self.auth_delay = auth;
        self
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            startup_delay: Self::DEFAULT_STARTUP_DELAY,
            auth_delay: Self::DEFAULT_AUTH_DELAY,
            theme_storage_path: None,
        }
    }
}
