//! Auth form models and validation.
//!
//! Validation failures here are data, not errors: the form surfaces
//! them as inline field messages and never hands an invalid submission
//! to the session container.

use secrecy::{ExposeSecret, SecretString};

use austoc_core::Email;

/// Minimum password length the forms accept.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Field names used in [`FieldErrors`].
pub mod fields {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
}

/// Login form data.
#[derive(Debug)]
pub struct LoginForm {
    pub email: String,
    pub password: SecretString,
}

/// Signup form data.
#[derive(Debug)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: SecretString,
}

/// Per-field validation messages, keyed by the `fields` constants.
#[derive(Debug, Clone, Default)]
pub struct FieldErrors {
    errors: Vec<(&'static str, String)>,
}

impl FieldErrors {
    /// Whether validation passed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The message for a field, if it failed.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, message)| message.as_str())
    }

    /// All (field, message) pairs in display order.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(name, msg)| (*name, msg.as_str()))
    }

    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push((field, message.into()));
    }
}

impl LoginForm {
    /// Validate the form, returning any field messages.
    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        validate_email(&self.email, &mut errors);
        validate_password(&self.password, &mut errors);
        errors
    }
}

impl SignupForm {
    /// Validate the form, returning any field messages.
    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        if self.name.trim().is_empty() {
            errors.push(fields::NAME, "Name is required");
        }
        validate_email(&self.email, &mut errors);
        validate_password(&self.password, &mut errors);
        errors
    }
}

fn validate_email(email: &str, errors: &mut FieldErrors) {
    if email.trim().is_empty() {
        errors.push(fields::EMAIL, "Email is required");
    } else if Email::parse(email.trim()).is_err() {
        errors.push(fields::EMAIL, "Email is invalid");
    }
}

fn validate_password(password: &SecretString, errors: &mut FieldErrors) {
    let password = password.expose_secret();
    if password.trim().is_empty() {
        errors.push(fields::PASSWORD, "Password is required");
    } else if password.len() < MIN_PASSWORD_LENGTH {
        errors.push(
            fields::PASSWORD,
            format!("Password must be at least {MIN_PASSWORD_LENGTH} characters"),
        );
    }
}
