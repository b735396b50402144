//! Date-filtered exercise logs.

use crate::domain::{Exercise, ExerciseDate, ExerciseValidationError, User, UserId};

/// Number of log entries returned when the caller gives no usable limit.
pub const DEFAULT_LOG_LIMIT: u32 = 500;

/// Caller-supplied bounds for a log request.
///
/// Both bounds are inclusive. A missing bound leaves that side open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogQuery {
    pub from: Option<ExerciseDate>,
    pub to: Option<ExerciseDate>,
    pub limit: Option<u32>,
}

impl LogQuery {
    /// Interpret a raw `limit` query value.
    ///
    /// Non-numeric, zero, and negative values all mean "no limit given", so
    /// the default applies. Fractional values are truncated.
    ///
    /// # Examples
    /// ```
    /// use exercise_tracker::domain::LogQuery;
    ///
    /// assert_eq!(LogQuery::parse_limit("3"), Some(3));
    /// assert_eq!(LogQuery::parse_limit("2.9"), Some(2));
    /// assert_eq!(LogQuery::parse_limit("0"), None);
    /// assert_eq!(LogQuery::parse_limit("many"), None);
    /// ```
    pub fn parse_limit(raw: &str) -> Option<u32> {
        let value: f64 = raw.trim().parse().ok()?;
        if !value.is_finite() || value < 1.0 {
            return None;
        }
        let truncated = value.trunc().min(f64::from(u32::MAX));
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "value is clamped to [1, u32::MAX] and already truncated"
        )]
        let limit = truncated as u32;
        Some(limit)
    }

    /// The effective cap on returned entries.
    pub fn effective_limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LOG_LIMIT)
    }
}

/// Log parameters exactly as the client sent them.
///
/// Validation is deferred until the owner is known to exist, so an unknown
/// user is reported before a malformed bound.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogRequest {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

impl LogRequest {
    /// Validate the date bounds and interpret the limit.
    pub fn into_query(self) -> Result<LogQuery, ExerciseValidationError> {
        Ok(LogQuery {
            from: ExerciseDate::parse_optional(self.from.as_deref())?,
            to: ExerciseDate::parse_optional(self.to.as_deref())?,
            limit: self.limit.as_deref().and_then(LogQuery::parse_limit),
        })
    }
}

/// Store-level selection of one user's exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseFilter {
    user_id: UserId,
    from: Option<ExerciseDate>,
    to: Option<ExerciseDate>,
    limit: u32,
}

impl ExerciseFilter {
    /// Build the filter for `user_id` from a log request.
    pub fn for_user(user_id: UserId, query: &LogQuery) -> Self {
        Self {
            user_id,
            from: query.from,
            to: query.to,
            limit: query.effective_limit(),
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn from(&self) -> Option<ExerciseDate> {
        self.from
    }

    pub fn to(&self) -> Option<ExerciseDate> {
        self.to
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Whether `exercise` satisfies the owner and date bounds. The limit is
    /// applied by the caller.
    pub fn matches(&self, exercise: &Exercise) -> bool {
        exercise.user_id() == &self.user_id
            && self.from.is_none_or(|from| exercise.date() >= from)
            && self.to.is_none_or(|to| exercise.date() <= to)
    }
}

/// A user together with the exercises selected for their log.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseLog {
    user: User,
    entries: Vec<Exercise>,
}

impl ExerciseLog {
    pub fn new(user: User, entries: Vec<Exercise>) -> Self {
        Self { user, entries }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn entries(&self) -> &[Exercise] {
        &self.entries
    }

    /// Number of entries in the log.
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}
