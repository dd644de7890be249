//! Theme selection and persistence.
//!
//! The theme is one of a closed set and survives reloads through a
//! [`KeyValueStorage`] backend (the localStorage analog). Consumers
//! observe the current value on a watch channel and mirror it onto
//! whatever plays the document root in the host UI.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::storage::KeyValueStorage;

/// Storage key for the persisted theme token.
const THEME_KEY: &str = "theme";

/// Errors from the string boundary of the theme API.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// The token is not a member of the closed theme set.
    #[error("unknown theme: {0}")]
    Unknown(String),
}

/// The closed set of visual themes.
///
/// `next()` cycles dark -> light -> luxury -> dark, the order the
/// header's theme toggle steps through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
    Luxury,
}

impl Theme {
    /// The persisted string token for this theme.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Luxury => "luxury",
        }
    }

    /// Parse a persisted token.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Unknown`] for tokens outside the closed set.
    pub fn parse(s: &str) -> Result<Self, ThemeError> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "luxury" => Ok(Self::Luxury),
            other => Err(ThemeError::Unknown(other.to_owned())),
        }
    }

    /// The next theme in the toggle cycle.
    #[must_use]
    pub const fn next(&self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Luxury,
            Self::Luxury => Self::Dark,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The theme store.
///
/// Holds the current selection, persists changes, and publishes the
/// value on a watch channel. The initial state comes from storage; an
/// absent or unrecognized token falls back to the default rather than
/// failing startup.
pub struct ThemeStore {
    storage: Box<dyn KeyValueStorage>,
    current: Mutex<Theme>,
    changed: watch::Sender<Theme>,
}

impl ThemeStore {
    /// Create a store over a storage backend, reading the initial
    /// selection from it.
    #[must_use]
    pub fn load(storage: Box<dyn KeyValueStorage>) -> Self {
        let initial = match storage.get(THEME_KEY) {
            Ok(Some(token)) => Theme::parse(&token).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring persisted theme");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read persisted theme");
                Theme::default()
            }
        };

        let (changed, _) = watch::channel(initial);
        Self {
            storage,
            current: Mutex::new(initial),
            changed,
        }
    }

    /// The current theme.
    #[must_use]
    pub fn current(&self) -> Theme {
        *self.current.lock()
    }

    /// Select a theme, persist it, and notify observers.
    ///
    /// A storage failure is logged and does not un-set the in-memory
    /// selection; the next successful write catches persistence up.
    pub fn set_theme(&self, theme: Theme) {
        *self.current.lock() = theme;

        if let Err(e) = self.storage.set(THEME_KEY, theme.as_str()) {
            tracing::warn!(error = %e, theme = %theme, "failed to persist theme");
        }

        self.changed.send_replace(theme);
        tracing::debug!(theme = %theme, "theme changed");
    }

    /// Advance to the next theme in the cycle. Returns the new theme.
    pub fn toggle_theme(&self) -> Theme {
        let next = self.current().next();
        self.set_theme(next);
        next
    }

    /// Subscribe to theme changes. The channel carries the theme value
    /// itself; observers mirror it onto the document root.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.changed.subscribe()
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("current", &self.current())
            .finish_non_exhaustive()
    }
}
