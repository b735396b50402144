//! Driving port for registering users.

use async_trait::async_trait;

use crate::domain::{Error, User, Username};

/// Use-case port behind `POST /api/users`.
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Register a user under a fresh identifier and return the stored record.
    async fn create_user(&self, username: Username) -> Result<User, Error>;
}
