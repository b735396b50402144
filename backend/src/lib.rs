//! Exercise tracker service library.
//!
//! A small REST service for registering users, logging exercises against
//! them, and reading back date-filtered exercise logs.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
