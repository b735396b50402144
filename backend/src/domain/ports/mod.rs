//! Domain ports for the hexagonal boundary.
//!
//! Driving ports (`UsersQuery`, `UsersCommand`, `ExercisesCommand`,
//! `ExerciseLogQuery`) are what HTTP handlers call. Driven ports
//! (`UserRepository`, `ExerciseRepository`) are what storage adapters
//! implement.

mod macros;
pub(crate) use macros::define_port_error;

mod exercise_log_query;
mod exercise_repository;
mod exercises_command;
mod user_repository;
mod users_command;
mod users_query;

pub use exercise_log_query::ExerciseLogQuery;
#[cfg(test)]
pub use exercise_repository::MockExerciseRepository;
pub use exercise_repository::{ExercisePersistenceError, ExerciseRepository};
pub use exercises_command::{ExercisesCommand, LogExerciseRequest, LoggedExercise};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
pub use users_command::UsersCommand;
pub use users_query::UsersQuery;
