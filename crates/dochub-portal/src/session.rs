//! Login session and credential form validation.
//!
//! The gate only enforces form validity (this is a portal front end, not
//! an authentication service). Validation reports every failed field so
//! the UI can annotate both inputs at once.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use tracing::info;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Shape check only: something, an @, something, a dot, something.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email regex compiles"));

#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CredentialIssue {
    #[error("Email is required")]
    EmailMissing,
    #[error("Please enter a valid email")]
    EmailInvalid,
    #[error("Password is required")]
    PasswordMissing,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
}

/// Validate a credential form, returning every failed field.
pub fn validate_credentials(credentials: &Credentials) -> Vec<CredentialIssue> {
    let mut issues = Vec::new();
    if credentials.email.is_empty() {
        issues.push(CredentialIssue::EmailMissing);
    } else if !EMAIL_RE.is_match(&credentials.email) {
        issues.push(CredentialIssue::EmailInvalid);
    }
    if credentials.password.is_empty() {
        issues.push(CredentialIssue::PasswordMissing);
    } else if credentials.password.len() < MIN_PASSWORD_LEN {
        issues.push(CredentialIssue::PasswordTooShort);
    }
    issues
}

/// Signed-in state for one portal session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the form and sign in. On failure the session is unchanged
    /// and the caller gets the per-field issues back.
    pub fn log_in(&mut self, credentials: &Credentials) -> Result<(), Vec<CredentialIssue>> {
        let issues = validate_credentials(credentials);
        if !issues.is_empty() {
            return Err(issues);
        }
        info!(user = %credentials.email, "user signed in");
        self.user = Some(credentials.email.clone());
        Ok(())
    }

    pub fn log_out(&mut self) {
        if let Some(user) = self.user.take() {
            info!(%user, "user signed out");
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }
}
