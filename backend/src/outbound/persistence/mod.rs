//! PostgreSQL persistence adapters.
//!
//! Repositories translate between Diesel rows and domain records and hold no
//! business logic. Row structs and table definitions stay private to this
//! module.
//!
//! ```ignore
//! use exercise_tracker::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/exercises")).await?;
//! let users = DieselUserRepository::new(pool);
//! ```

mod diesel_exercise_repository;
mod diesel_user_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_exercise_repository::DieselExerciseRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{
    MIGRATIONS, MigrationError, apply_pending_migrations, run_pending_migrations,
};
pub use pool::{DbPool, PoolConfig, PoolError};
