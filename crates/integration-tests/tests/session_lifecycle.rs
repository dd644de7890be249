//! Simulated auth flows on a paused clock.
//!
//! Every test runs under `start_paused = true`: tokio advances the
//! clock past the artificial delays instead of sleeping, so the
//! 1.5-second simulated latency costs nothing here.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;

use austoc_integration_tests::{init_tracing, test_state};
use austoc_storefront::session::{AuthError, SessionContainer};
use austoc_storefront::views::auth::{LoginForm, SignupForm, fields};

fn password(s: &str) -> SecretString {
    SecretString::from(s.to_owned())
}

// ============================================================================
// Login / Logout
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_login_round_trip() {
    let state = test_state();
    let session = state.session();

    let user = session
        .login("margaux@austoc.shop", &password("velvet-orchid"))
        .await
        .unwrap();

    assert_eq!(user.name, "margaux");
    assert_eq!(user.email.domain(), "austoc.shop");
    assert!(user.avatar.is_some());
    assert!(session.is_authenticated());

    session.logout();
    assert!(session.current_user().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_signup_then_relogin_generates_fresh_identity() {
    let state = test_state();
    let session = state.session();

    let first = session
        .signup("Margaux Delacroix", "margaux@austoc.shop", &password("velvet-orchid"))
        .await
        .unwrap();
    session.logout();

    let second = session
        .login("margaux@austoc.shop", &password("velvet-orchid"))
        .await
        .unwrap();

    // The simulation has no user database: every sign-in synthesizes
    // a fresh record.
    assert_ne!(first.id, second.id);
    assert_eq!(first.email, second.email);
}

// ============================================================================
// Loading Flag & Cancellation
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_loading_flag_spans_the_delay() {
    init_tracing();
    let session = Arc::new(SessionContainer::new(Duration::from_millis(1500)));

    let pending = {
        let session = Arc::clone(&session);
        tokio::spawn(async move { session.login("a@b.c", &password("secret")).await })
    };

    tokio::task::yield_now().await;
    assert!(session.is_loading());
    assert!(!session.is_authenticated());

    pending.await.unwrap().unwrap();
    assert!(!session.is_loading());
    assert!(session.is_authenticated());
}

#[tokio::test(start_paused = true)]
async fn test_unmount_mid_delay_cancels_cleanly() {
    let state = test_state();

    let pending = {
        let state = state.clone();
        tokio::spawn(async move {
            state
                .session()
                .login("a@b.c", &password("secret"))
                .await
        })
    };

    tokio::task::yield_now().await;
    state.shutdown();

    let result = pending.await.unwrap();
    assert!(matches!(result, Err(AuthError::Cancelled)));
    assert!(!state.session().is_authenticated());
    assert!(!state.session().is_loading());
}

// ============================================================================
// Form Validation Ahead of the Container
// ============================================================================

#[test]
fn test_invalid_forms_never_reach_the_session() {
    let state = test_state();

    let form = LoginForm {
        email: "not-an-email".to_owned(),
        password: password("12345"),
    };
    let errors = form.validate();
    assert_eq!(errors.get(fields::EMAIL), Some("Email is invalid"));
    assert_eq!(
        errors.get(fields::PASSWORD),
        Some("Password must be at least 6 characters")
    );

    let form = SignupForm {
        name: String::new(),
        email: "margaux@austoc.shop".to_owned(),
        password: password("velvet-orchid"),
    };
    assert_eq!(form.validate().get(fields::NAME), Some("Name is required"));

    // The form recovered locally; the session was never touched.
    assert!(!state.session().is_authenticated());
    assert!(!state.session().is_loading());
}

// ============================================================================
// Startup Gate
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_startup_gate_opens_after_delay() {
    let state = test_state();
    assert!(!state.is_ready());

    let gate = state.start();
    let mut ready = state.ready_changed();
    ready.changed().await.unwrap();

    assert!(state.is_ready());
    gate.await.unwrap();
}
