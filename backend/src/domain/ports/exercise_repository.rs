//! Driven port for exercise persistence.

use async_trait::async_trait;

use crate::domain::{Exercise, ExerciseFilter};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by exercise repository adapters.
    pub enum ExercisePersistenceError {
        /// The store could not be reached.
        Connection => "exercise repository connection failed: {message}",
        /// A read or write failed during execution.
        Query => "exercise repository query failed: {message}",
    }
}

/// Storage operations needed for exercises.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// Persist a newly logged exercise.
    async fn insert(&self, exercise: &Exercise) -> Result<(), ExercisePersistenceError>;

    /// Return exercises matching `filter`, at most `filter.limit()` of them.
    async fn find_matching(
        &self,
        filter: &ExerciseFilter,
    ) -> Result<Vec<Exercise>, ExercisePersistenceError>;
}
