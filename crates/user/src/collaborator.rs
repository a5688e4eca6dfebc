//! Services the authentication actions call but do not implement.
//!
//! Each action receives its collaborators explicitly: the user store and
//! password verifier live on [`crate::Command`], the session handle is passed
//! per request.

use async_trait::async_trait;

pub use issuetrack_shared::user::User;

/// Lookup and creation of accounts.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Returns `None` when no account is registered for `email`.
    async fn get_user_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;

    /// Creates an account from the submitted plain password.
    ///
    /// Hashing is the store's job. Returns `None` when the account could not
    /// be created without that being an error, such as a concurrent
    /// registration of the same email.
    async fn create_user(&self, email: &str, password: &str) -> anyhow::Result<Option<User>>;
}

/// Checks a submitted password against a stored digest.
#[async_trait]
pub trait PasswordVerifier: Send + Sync {
    /// A mismatch is `Ok(false)`, never an error.
    async fn verify_password(&self, password: &str, digest: &str) -> anyhow::Result<bool>;
}

/// Request-scoped handle on the caller's session.
#[async_trait]
pub trait SessionContext: Send {
    async fn create_session(&mut self, user_id: &str) -> anyhow::Result<()>;

    async fn delete_session(&mut self) -> anyhow::Result<()>;
}
