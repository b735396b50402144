//! Service implementing every driving port on top of the repositories.
//!
//! Each operation issues one or two independent repository calls. The
//! user-existence check and the exercise insert are not atomic.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, error};

use crate::domain::ports::{
    ExerciseLogQuery, ExercisePersistenceError, ExerciseRepository, ExercisesCommand,
    LogExerciseRequest, LoggedExercise, UserPersistenceError, UserRepository, UsersCommand,
    UsersQuery,
};
use crate::domain::{
    Error, Exercise, ExerciseDate, ExerciseFilter, ExerciseLog, ExerciseValidationError,
    LogRequest, Minutes, User, UserId, Username,
};

const NO_USERS_MESSAGE: &str = "No users found";
const USER_NOT_FOUND_MESSAGE: &str = "User not found";

/// Exercise tracker use-cases backed by a user and an exercise repository.
#[derive(Clone)]
pub struct ExerciseTrackerService<U, E> {
    users: Arc<U>,
    exercises: Arc<E>,
    clock: Arc<dyn Clock>,
}

impl<U, E> ExerciseTrackerService<U, E> {
    /// Create a service over the given repositories.
    ///
    /// `clock` supplies the default date for exercises logged without one.
    pub fn new(users: Arc<U>, exercises: Arc<E>, clock: Arc<dyn Clock>) -> Self {
        Self {
            users,
            exercises,
            clock,
        }
    }
}

fn map_user_error(failure: UserPersistenceError) -> Error {
    let mapped = Error::internal(failure.to_string());
    error!(
        error = %failure,
        trace_id = mapped.trace_id().unwrap_or_default(),
        "user repository failed"
    );
    mapped
}

fn map_exercise_error(failure: ExercisePersistenceError) -> Error {
    let mapped = Error::internal(failure.to_string());
    error!(
        error = %failure,
        trace_id = mapped.trace_id().unwrap_or_default(),
        "exercise repository failed"
    );
    mapped
}

fn map_validation_error(failure: ExerciseValidationError) -> Error {
    debug!(error = %failure, "request rejected");
    Error::internal(failure.to_string())
}

impl<U, E> ExerciseTrackerService<U, E>
where
    U: UserRepository,
    E: ExerciseRepository,
{
    async fn require_user(&self, user_id: &UserId) -> Result<User, Error> {
        self.users
            .find_by_id(user_id)
            .await
            .map_err(map_user_error)?
            .ok_or_else(|| {
                debug!(user_id = %user_id, "user lookup missed");
                Error::not_found(USER_NOT_FOUND_MESSAGE)
            })
    }
}

#[async_trait]
impl<U, E> UsersQuery for ExerciseTrackerService<U, E>
where
    U: UserRepository,
    E: ExerciseRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        let users = self.users.list_all().await.map_err(map_user_error)?;
        if users.is_empty() {
            return Err(Error::not_found(NO_USERS_MESSAGE));
        }
        Ok(users)
    }
}

#[async_trait]
impl<U, E> UsersCommand for ExerciseTrackerService<U, E>
where
    U: UserRepository,
    E: ExerciseRepository,
{
    async fn create_user(&self, username: Username) -> Result<User, Error> {
        let user = User::register(username);
        self.users.insert(&user).await.map_err(map_user_error)?;
        debug!(user_id = %user.id(), "user registered");
        Ok(user)
    }
}

#[async_trait]
impl<U, E> ExercisesCommand for ExerciseTrackerService<U, E>
where
    U: UserRepository,
    E: ExerciseRepository,
{
    async fn log_exercise(&self, request: LogExerciseRequest) -> Result<LoggedExercise, Error> {
        let LogExerciseRequest {
            user_id,
            description,
            duration,
            date,
        } = request;

        let user = self.require_user(&user_id).await?;
        let duration = Minutes::parse_optional(duration.as_deref()).map_err(map_validation_error)?;
        let date = ExerciseDate::parse_optional(date.as_deref())
            .map_err(map_validation_error)?
            .unwrap_or_else(|| ExerciseDate::today(self.clock.as_ref()));
        let exercise = Exercise::record(*user.id(), description, duration, date);
        self.exercises
            .insert(&exercise)
            .await
            .map_err(map_exercise_error)?;
        debug!(user_id = %user.id(), exercise_id = %exercise.id(), "exercise logged");
        Ok(LoggedExercise { user, exercise })
    }
}

#[async_trait]
impl<U, E> ExerciseLogQuery for ExerciseTrackerService<U, E>
where
    U: UserRepository,
    E: ExerciseRepository,
{
    async fn fetch_log(
        &self,
        user_id: &UserId,
        request: LogRequest,
    ) -> Result<ExerciseLog, Error> {
        let user = self.require_user(user_id).await?;
        let query = request.into_query().map_err(map_validation_error)?;
        let filter = ExerciseFilter::for_user(*user.id(), &query);
        let entries = self
            .exercises
            .find_matching(&filter)
            .await
            .map_err(map_exercise_error)?;
        Ok(ExerciseLog::new(user, entries))
    }
}

#[cfg(test)]
#[path = "exercise_tracker_service_tests.rs"]
mod tests;
