//! Driving port for reading exercise logs.

use async_trait::async_trait;

use crate::domain::{Error, ExerciseLog, LogRequest, UserId};

/// Use-case port behind `GET /api/users/{_id}/logs`.
#[async_trait]
pub trait ExerciseLogQuery: Send + Sync {
    /// Return the user's exercises within the requested bounds.
    async fn fetch_log(
        &self,
        user_id: &UserId,
        request: LogRequest,
    ) -> Result<ExerciseLog, Error>;
}
