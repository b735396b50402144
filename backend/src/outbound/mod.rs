//! Outbound adapters implementing the driven ports.
//!
//! - `persistence`: PostgreSQL repositories using Diesel.
//! - `memory`: process-local repositories for database-less runs and tests.
//!
//! Adapters translate between domain records and storage representations and
//! contain no business logic.

pub mod memory;
pub mod persistence;
