//! The simulated authentication session.
//!
//! This is a deliberately fake boundary: there is no credential check,
//! no password hashing, no token issuance, and no server round-trip.
//! `login`/`signup` validate that their fields are non-empty, wait a
//! configured artificial delay, and install a user record synthesized
//! from the submitted email/name. Production use requires a real
//! identity provider; nothing here is a security mechanism.
//!
//! The state machine has two states, anonymous and authenticated, plus
//! a transient loading flag exposed for spinner display. The artificial
//! delay races a cancellation token so a UI that unmounts mid-delay can
//! abandon the pending operation without leaking a timer.

use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::instrument;
use url::Url;

use austoc_core::{Email, EmailError, UserId};

/// Errors from the simulated authentication operations.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The email field is empty.
    #[error("email is required")]
    MissingEmail,

    /// The password field is empty.
    #[error("password is required")]
    MissingPassword,

    /// The name field is empty (signup only).
    #[error("name is required")]
    MissingName,

    /// The email is structurally invalid.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The pending operation was cancelled mid-delay.
    #[error("authentication cancelled")]
    Cancelled,
}

/// The simulated authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Locally generated identifier.
    pub id: UserId,
    /// Display name: the signup name, or the email's local part.
    pub name: String,
    /// The email the user signed in with.
    pub email: Email,
    /// Deterministic avatar reference derived from the email.
    pub avatar: Option<Url>,
    /// When this session was established.
    pub signed_in_at: DateTime<Utc>,
}

impl User {
    /// Synthesize a user record from an email and display name.
    fn synthesize(name: String, email: Email) -> Self {
        let avatar = Url::parse(&format!("https://i.pravatar.cc/150?u={email}")).ok();
        Self {
            id: UserId::generate(),
            name,
            email,
            avatar,
            signed_in_at: Utc::now(),
        }
    }
}

/// The two session states.
#[derive(Debug, Clone, Default)]
enum SessionState {
    #[default]
    Anonymous,
    Authenticated(User),
}

#[derive(Debug, Default)]
struct SessionInner {
    state: SessionState,
    loading: bool,
}

/// The session container.
///
/// At most one active session per application instance; `login` and
/// `signup` replace any existing session.
#[derive(Debug)]
pub struct SessionContainer {
    inner: Mutex<SessionInner>,
    changed: watch::Sender<u64>,
    pending: Mutex<CancellationToken>,
    delay: Duration,
}

impl SessionContainer {
    /// Create an anonymous session with the given artificial delay for
    /// login/signup.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        let (changed, _) = watch::channel(0);
        Self {
            inner: Mutex::new(SessionInner::default()),
            changed,
            pending: Mutex::new(CancellationToken::new()),
            delay,
        }
    }

    /// Simulated login.
    ///
    /// Validates that both fields are non-empty, waits the artificial
    /// delay, then installs a user synthesized from the email. The
    /// display name is the email's local part.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] on empty or malformed fields (before
    /// the delay) or if the operation is cancelled mid-delay. The
    /// session state is unchanged on any error.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &SecretString) -> Result<User, AuthError> {
        let email = Self::validate_credentials(email, password)?;
        let name = email.local_part().to_owned();
        self.authenticate(name, email).await
    }

    /// Simulated signup.
    ///
    /// Same pattern as [`login`](Self::login) with the display name
    /// taken from the submitted name.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] on empty or malformed fields (before
    /// the delay) or if the operation is cancelled mid-delay.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &SecretString,
    ) -> Result<User, AuthError> {
        if name.trim().is_empty() {
            return Err(AuthError::MissingName);
        }
        let email = Self::validate_credentials(email, password)?;
        self.authenticate(name.trim().to_owned(), email).await
    }

    /// Clear the current user immediately.
    ///
    /// Synchronous: logout carries no artificial delay.
    pub fn logout(&self) {
        {
            let mut inner = self.inner.lock();
            inner.state = SessionState::Anonymous;
            inner.loading = false;
        }
        self.notify();
        tracing::info!("session cleared");
    }

    /// Cancel a pending login/signup delay, if any.
    ///
    /// The cancelled operation returns [`AuthError::Cancelled`] and
    /// leaves the session anonymous. Future operations are unaffected.
    pub fn cancel_pending(&self) {
        let mut pending = self.pending.lock();
        pending.cancel();
        *pending = CancellationToken::new();
    }

    /// The current user, if authenticated.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        match &self.inner.lock().state {
            SessionState::Anonymous => None,
            SessionState::Authenticated(user) => Some(user.clone()),
        }
    }

    /// Whether a user is signed in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self.inner.lock().state, SessionState::Authenticated(_))
    }

    /// Whether a login/signup is mid-delay, for spinner display.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.inner.lock().loading
    }

    /// Subscribe to session change notifications.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changed.subscribe()
    }

    fn validate_credentials(email: &str, password: &SecretString) -> Result<Email, AuthError> {
        if email.trim().is_empty() {
            return Err(AuthError::MissingEmail);
        }
        if password.expose_secret().trim().is_empty() {
            return Err(AuthError::MissingPassword);
        }
        Ok(Email::parse(email.trim())?)
    }

    /// Shared tail of login/signup: delay, then install the user.
    async fn authenticate(&self, name: String, email: Email) -> Result<User, AuthError> {
        let token = self.pending.lock().clone();

        self.set_loading(true);

        tokio::select! {
            () = token.cancelled() => {
                self.set_loading(false);
                tracing::debug!("authentication cancelled mid-delay");
                return Err(AuthError::Cancelled);
            }
            () = tokio::time::sleep(self.delay) => {}
        }

        let user = User::synthesize(name, email);
        {
            let mut inner = self.inner.lock();
            inner.state = SessionState::Authenticated(user.clone());
            inner.loading = false;
        }
        self.notify();
        tracing::info!(user = %user.id, "session established");
        Ok(user)
    }

    fn set_loading(&self, loading: bool) {
        self.inner.lock().loading = loading;
        self.notify();
    }

    fn notify(&self) {
        self.changed.send_modify(|rev| *rev += 1);
    }
}
