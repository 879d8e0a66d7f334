//! Account service trait — the only path from the form to the backend.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of a created or authenticated account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors produced by account service operations.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    /// The HTTP request to the backend failed.
    #[error("account request failed: {0}")]
    Request(String),

    /// The backend returned a non-success HTTP status.
    #[error("account response error: status {status}")]
    Response { status: u16, body: String },

    /// The backend response body could not be deserialized.
    #[error("account response parse failed: {0}")]
    Parse(String),

    /// Sign-in was attempted for an email with no account.
    #[error("user not found")]
    UserNotFound,

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Async account operations. Enables mocking in tests.
#[async_trait::async_trait]
pub trait AccountService: Send + Sync {
    /// Create (or re-use) the account for `email` and start its login.
    ///
    /// # Errors
    ///
    /// Returns an [`AccountError`] if any backend call fails.
    async fn create_account(&self, full_name: &str, email: &str) -> Result<AccountId, AccountError>;

    /// Start login for an existing account.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::UserNotFound`] when no account matches, or
    /// another [`AccountError`] if a backend call fails.
    async fn sign_in_user(&self, email: &str) -> Result<AccountId, AccountError>;
}
