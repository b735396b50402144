//! Domain records, errors, ports, and the service implementing the ports.
//!
//! Public surface:
//! - `User`, `UserId`, `Username`: registered users.
//! - `Exercise`, `ExerciseDate`, `Minutes`: logged exercises.
//! - `LogRequest`, `LogQuery`, `ExerciseFilter`, `ExerciseLog`: date-filtered logs.
//! - `Error`, `ErrorCode`: the two failure categories exposed to callers.
//! - `ExerciseTrackerService`: implementation of every driving port.

pub mod error;
pub mod exercise;
pub mod exercise_log;
pub mod exercise_tracker_service;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::error::{Error, ErrorCode};
pub use self::exercise::{
    DISPLAY_DATE_FORMAT, Exercise, ExerciseDate, ExerciseId, ExerciseValidationError, Minutes,
};
pub use self::exercise_log::{
    DEFAULT_LOG_LIMIT, ExerciseFilter, ExerciseLog, LogQuery, LogRequest,
};
pub use self::exercise_tracker_service::ExerciseTrackerService;
pub use self::trace_id::TraceId;
pub use self::user::{User, UserId, UserValidationError, Username};

/// Response header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
