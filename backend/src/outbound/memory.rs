//! In-memory repositories.
//!
//! Used when no database URL is configured and by HTTP tests. Records are
//! kept in insertion order and live only as long as the process.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    ExercisePersistenceError, ExerciseRepository, UserPersistenceError, UserRepository,
};
use crate::domain::{Exercise, ExerciseFilter, User, UserId};

fn lock<'a, T, E>(
    store: &'a Mutex<Vec<T>>,
    poisoned: impl FnOnce(&'static str) -> E,
) -> Result<MutexGuard<'a, Vec<T>>, E> {
    store.lock().map_err(|_| poisoned("in-memory store lock poisoned"))
}

/// [`UserRepository`] backed by a vector.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        lock(&self.users, UserPersistenceError::query)?.push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let users = lock(&self.users, UserPersistenceError::query)?;
        Ok(users.iter().find(|user| user.id() == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(lock(&self.users, UserPersistenceError::query)?.clone())
    }
}

/// [`ExerciseRepository`] backed by a vector.
#[derive(Debug, Default)]
pub struct InMemoryExerciseRepository {
    exercises: Mutex<Vec<Exercise>>,
}

impl InMemoryExerciseRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ExerciseRepository for InMemoryExerciseRepository {
    async fn insert(&self, exercise: &Exercise) -> Result<(), ExercisePersistenceError> {
        lock(&self.exercises, ExercisePersistenceError::query)?.push(exercise.clone());
        Ok(())
    }

    async fn find_matching(
        &self,
        filter: &ExerciseFilter,
    ) -> Result<Vec<Exercise>, ExercisePersistenceError> {
        let exercises = lock(&self.exercises, ExercisePersistenceError::query)?;
        let limit = usize::try_from(filter.limit()).unwrap_or(usize::MAX);
        Ok(exercises
            .iter()
            .filter(|exercise| filter.matches(exercise))
            .take(limit)
            .cloned()
            .collect())
    }
}
