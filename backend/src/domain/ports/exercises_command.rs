//! Driving port for logging exercises.

use async_trait::async_trait;

use crate::domain::{Error, Exercise, User, UserId};

/// Input for [`ExercisesCommand::log_exercise`].
///
/// `duration` and `date` hold the client's text and are validated only after
/// the user lookup succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogExerciseRequest {
    pub user_id: UserId,
    pub description: String,
    /// Decimal minutes. Blank or absent leaves the duration unset.
    pub duration: Option<String>,
    /// Defaults to the current date when blank or absent.
    pub date: Option<String>,
}

/// Outcome of a successful log: the owner and the stored exercise.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedExercise {
    pub user: User,
    pub exercise: Exercise,
}

/// Use-case port behind `POST /api/users/{_id}/exercises`.
#[async_trait]
pub trait ExercisesCommand: Send + Sync {
    /// Store an exercise for an existing user.
    async fn log_exercise(&self, request: LogExerciseRequest) -> Result<LoggedExercise, Error>;
}
