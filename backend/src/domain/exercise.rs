//! Exercise records and the value types they are built from.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use mockable::Clock;
use serde::{Serialize, Serializer};
use uuid::Uuid;

use crate::domain::UserId;

/// Rendering used for exercise dates in every response, e.g. `Wed Jan 01 2020`.
pub const DISPLAY_DATE_FORMAT: &str = "%a %b %d %Y";

/// Input layouts accepted for calendar dates, tried in order after RFC 3339.
const INPUT_DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", DISPLAY_DATE_FORMAT];

/// Largest magnitude at which every whole `f64` is still exactly an integer.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Rejected exercise field values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExerciseValidationError {
    #[error("date `{input}` is not a recognised calendar date")]
    UnrecognisedDate { input: String },
    #[error("duration `{input}` is not a number")]
    UnrecognisedDuration { input: String },
    #[error("duration must be a finite number of minutes")]
    NonFiniteDuration,
}

/// Opaque exercise identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExerciseId(Uuid);

impl ExerciseId {
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Exercise duration in minutes.
///
/// Whole values serialise as JSON integers so `30` round-trips as `30` rather
/// than `30.0`.
///
/// # Examples
/// ```
/// use exercise_tracker::domain::Minutes;
///
/// let minutes = Minutes::parse(" 45 ").expect("numeric text");
/// assert_eq!(minutes.to_string(), "45");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Minutes(f64);

impl Minutes {
    /// Validate that `value` is finite.
    pub fn new(value: f64) -> Result<Self, ExerciseValidationError> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(ExerciseValidationError::NonFiniteDuration)
        }
    }

    /// Parse a decimal number of minutes from client text.
    pub fn parse(input: &str) -> Result<Self, ExerciseValidationError> {
        let value: f64 = input.trim().parse().map_err(|_| {
            ExerciseValidationError::UnrecognisedDuration {
                input: input.to_owned(),
            }
        })?;
        Self::new(value)
    }

    /// Parse an optional duration. Blank text counts as absent.
    pub fn parse_optional(input: Option<&str>) -> Result<Option<Self>, ExerciseValidationError> {
        non_blank(input).map(Self::parse).transpose()
    }

    pub fn value(self) -> f64 {
        self.0
    }

    fn as_whole(self) -> Option<i64> {
        if self.0.fract() == 0.0 && self.0.abs() <= MAX_EXACT_INTEGER {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "value is whole and within the exactly representable range"
            )]
            let whole = self.0 as i64;
            Some(whole)
        } else {
            None
        }
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_whole() {
            Some(whole) => write!(f, "{whole}"),
            None => write!(f, "{}", self.0),
        }
    }
}

impl Serialize for Minutes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_whole() {
            Some(whole) => serializer.serialize_i64(whole),
            None => serializer.serialize_f64(self.0),
        }
    }
}

fn non_blank(input: Option<&str>) -> Option<&str> {
    input.map(str::trim).filter(|value| !value.is_empty())
}

/// Calendar date of an exercise, without a time component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExerciseDate(NaiveDate);

impl ExerciseDate {
    /// Parse a client-supplied date.
    ///
    /// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (reduced to their UTC date),
    /// ISO timestamps without an offset, and the `Www Mmm DD YYYY` rendering the
    /// service itself emits.
    ///
    /// # Examples
    /// ```
    /// use exercise_tracker::domain::ExerciseDate;
    ///
    /// let date = ExerciseDate::parse("2020-01-01").expect("iso date");
    /// assert_eq!(date.to_string(), "Wed Jan 01 2020");
    /// ```
    pub fn parse(input: &str) -> Result<Self, ExerciseValidationError> {
        let trimmed = input.trim();
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self(timestamp.with_timezone(&Utc).date_naive()));
        }
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(Self(timestamp.date()));
        }
        INPUT_DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
            .map(Self)
            .ok_or_else(|| ExerciseValidationError::UnrecognisedDate {
                input: input.to_owned(),
            })
    }

    /// Parse an optional date. Blank text counts as absent.
    pub fn parse_optional(input: Option<&str>) -> Result<Option<Self>, ExerciseValidationError> {
        non_blank(input).map(Self::parse).transpose()
    }

    /// The current UTC calendar date according to `clock`.
    pub fn today(clock: &dyn Clock) -> Self {
        Self(clock.utc().date_naive())
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for ExerciseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_DATE_FORMAT))
    }
}

/// A logged exercise belonging to one user.
#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    id: ExerciseId,
    user_id: UserId,
    description: String,
    duration: Option<Minutes>,
    date: ExerciseDate,
}

impl Exercise {
    /// Create a new exercise with a generated identifier.
    pub fn record(
        user_id: UserId,
        description: impl Into<String>,
        duration: Option<Minutes>,
        date: ExerciseDate,
    ) -> Self {
        Self::from_parts(ExerciseId::random(), user_id, description, duration, date)
    }

    /// Rebuild an exercise loaded from storage.
    pub fn from_parts(
        id: ExerciseId,
        user_id: UserId,
        description: impl Into<String>,
        duration: Option<Minutes>,
        date: ExerciseDate,
    ) -> Self {
        Self {
            id,
            user_id,
            description: description.into(),
            duration,
            date,
        }
    }

    pub fn id(&self) -> &ExerciseId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn duration(&self) -> Option<Minutes> {
        self.duration
    }

    pub fn date(&self) -> ExerciseDate {
        self.date
    }
}
