//! Application state shared across views.
//!
//! The containers are explicit state objects handed to the view layer
//! by reference; there are no ambient globals. `AppState` is cheaply
//! cloneable via `Arc`.

use std::sync::Arc;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::cart::CartContainer;
use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::session::SessionContainer;
use crate::storage::{FileStorage, KeyValueStorage, MemoryStorage};
use crate::theme::ThemeStore;

/// Application state shared across all views.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    cart: CartContainer,
    session: SessionContainer,
    theme: ThemeStore,
    ready: watch::Sender<bool>,
    shutdown: CancellationToken,
}

impl AppState {
    /// Create the application state: load the catalog, wire the theme
    /// store to its storage backend, and construct the containers.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded catalog dataset is malformed.
    pub fn new(config: StorefrontConfig) -> Result<Self> {
        let catalog = Catalog::load()?;

        let storage: Box<dyn KeyValueStorage> = match &config.theme_storage_path {
            Some(path) => Box::new(FileStorage::new(path.clone())),
            None => Box::new(MemoryStorage::new()),
        };
        let theme = ThemeStore::load(storage);

        let session = SessionContainer::new(config.auth_delay);
        let (ready, _) = watch::channel(false);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                cart: CartContainer::new(),
                session,
                theme,
                ready,
                shutdown: CancellationToken::new(),
            }),
        })
    }

    /// Get a reference to the configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog store.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the cart container.
    #[must_use]
    pub fn cart(&self) -> &CartContainer {
        &self.inner.cart
    }

    /// Get a reference to the session container.
    #[must_use]
    pub fn session(&self) -> &SessionContainer {
        &self.inner.session
    }

    /// Get a reference to the theme store.
    #[must_use]
    pub fn theme(&self) -> &ThemeStore {
        &self.inner.theme
    }

    /// Arm the startup gate.
    ///
    /// Spawns a task that waits the configured startup delay and then
    /// flips [`is_ready`](Self::is_ready), letting the host drop its
    /// loading screen. Cancelled by [`shutdown`](Self::shutdown).
    pub fn start(&self) -> tokio::task::JoinHandle<()> {
        let state = self.clone();
        tokio::spawn(async move {
            tokio::select! {
                () = state.inner.shutdown.cancelled() => {
                    tracing::debug!("bootstrap cancelled");
                }
                () = tokio::time::sleep(state.inner.config.startup_delay) => {
                    state.inner.ready.send_replace(true);
                    tracing::info!("storefront ready");
                }
            }
        })
    }

    /// Whether the startup gate has opened.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        *self.inner.ready.borrow()
    }

    /// Subscribe to the readiness flag.
    #[must_use]
    pub fn ready_changed(&self) -> watch::Receiver<bool> {
        self.inner.ready.subscribe()
    }

    /// Cancel the startup gate and any pending session delay.
    ///
    /// Idempotent; used when the host unmounts mid-delay so no timer
    /// outlives the UI.
    pub fn shutdown(&self) {
        self.inner.shutdown.cancel();
        self.inner.session.cancel_pending();
    }
}
