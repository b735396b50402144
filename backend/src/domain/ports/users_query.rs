//! Driving port for reading users.

use async_trait::async_trait;

use crate::domain::{Error, User};

/// Use-case port behind `GET /api/users`.
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return every user.
    ///
    /// An empty store is reported as [`crate::domain::ErrorCode::NotFound`].
    async fn list_users(&self) -> Result<Vec<User>, Error>;
}
