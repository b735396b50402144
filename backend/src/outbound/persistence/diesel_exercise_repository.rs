//! PostgreSQL-backed `ExerciseRepository`.
//!
//! Logs are ordered by date, then by insertion sequence, so repeated reads of
//! the same data return the same page.

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ExercisePersistenceError, ExerciseRepository};
use crate::domain::{Exercise, ExerciseDate, ExerciseFilter, ExerciseId, Minutes, UserId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{ExerciseRow, NewExerciseRow};
use super::pool::{DbPool, PoolError};
use super::schema::exercises;

/// Diesel implementation of [`ExerciseRepository`].
#[derive(Clone)]
pub struct DieselExerciseRepository {
    pool: DbPool,
}

impl DieselExerciseRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> ExercisePersistenceError {
    map_pool_error(error, ExercisePersistenceError::connection)
}

fn diesel_error(error: diesel::result::Error) -> ExercisePersistenceError {
    map_diesel_error(
        error,
        ExercisePersistenceError::query,
        ExercisePersistenceError::connection,
    )
}

fn row_to_exercise(row: ExerciseRow) -> Result<Exercise, ExercisePersistenceError> {
    let duration = row.duration.map(Minutes::new).transpose().map_err(|err| {
        tracing::warn!(exercise_id = %row.id, "stored duration rejected");
        ExercisePersistenceError::query(err.to_string())
    })?;
    Ok(Exercise::from_parts(
        ExerciseId::from_uuid(row.id),
        UserId::from_uuid(row.user_id),
        row.description,
        duration,
        ExerciseDate::from_naive(row.performed_on),
    ))
}

#[async_trait]
impl ExerciseRepository for DieselExerciseRepository {
    async fn insert(&self, exercise: &Exercise) -> Result<(), ExercisePersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = NewExerciseRow {
            id: *exercise.id().as_uuid(),
            user_id: *exercise.user_id().as_uuid(),
            description: exercise.description(),
            duration: exercise.duration().map(Minutes::value),
            performed_on: exercise.date().as_naive(),
        };

        diesel::insert_into(exercises::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(diesel_error)
    }

    async fn find_matching(
        &self,
        filter: &ExerciseFilter,
    ) -> Result<Vec<Exercise>, ExercisePersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let mut query = exercises::table
            .filter(exercises::user_id.eq(*filter.user_id().as_uuid()))
            .select(ExerciseRow::as_select())
            .into_boxed::<Pg>();
        if let Some(from) = filter.from() {
            query = query.filter(exercises::performed_on.ge(from.as_naive()));
        }
        if let Some(to) = filter.to() {
            query = query.filter(exercises::performed_on.le(to.as_naive()));
        }

        let rows: Vec<ExerciseRow> = query
            .order((exercises::performed_on.asc(), exercises::seq.asc()))
            .limit(i64::from(filter.limit()))
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;

        rows.into_iter().map(row_to_exercise).collect()
    }
}
