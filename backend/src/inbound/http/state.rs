//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see driving ports, so
//! they can be exercised without a database.

use std::sync::Arc;

use crate::domain::ports::{ExerciseLogQuery, ExercisesCommand, UsersCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users_query: Arc<dyn UsersQuery>,
    pub users_command: Arc<dyn UsersCommand>,
    pub exercises: Arc<dyn ExercisesCommand>,
    pub exercise_log: Arc<dyn ExerciseLogQuery>,
}

impl HttpState {
    pub fn new(
        users_query: Arc<dyn UsersQuery>,
        users_command: Arc<dyn UsersCommand>,
        exercises: Arc<dyn ExercisesCommand>,
        exercise_log: Arc<dyn ExerciseLogQuery>,
    ) -> Self {
        Self {
            users_query,
            users_command,
            exercises,
            exercise_log,
        }
    }

    /// Route every port to one implementation.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use exercise_tracker::domain::ExerciseTrackerService;
    /// use exercise_tracker::inbound::http::state::HttpState;
    /// use exercise_tracker::outbound::memory::{InMemoryExerciseRepository, InMemoryUserRepository};
    /// use mockable::DefaultClock;
    ///
    /// let service = ExerciseTrackerService::new(
    ///     Arc::new(InMemoryUserRepository::new()),
    ///     Arc::new(InMemoryExerciseRepository::new()),
    ///     Arc::new(DefaultClock),
    /// );
    /// let _state = HttpState::from_service(Arc::new(service));
    /// ```
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: UsersQuery + UsersCommand + ExercisesCommand + ExerciseLogQuery + 'static,
    {
        Self::new(service.clone(), service.clone(), service.clone(), service)
    }
}
