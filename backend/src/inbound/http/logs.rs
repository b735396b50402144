//! Exercise log handler.
//!
//! ```text
//! GET /api/users/{_id}/logs?from=2020-01-01&to=2020-12-31&limit=10
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Error, Exercise, ExerciseLog, LogRequest, Minutes};
use crate::inbound::http::ApiResult;
use crate::inbound::http::exercises::parse_user_id;
use crate::inbound::http::state::HttpState;

/// Raw query parameters. Values stay strings so blank and non-numeric input
/// can fall back to defaults instead of failing extraction.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LogParams {
    /// Inclusive lower date bound, e.g. `2020-01-01`.
    pub from: Option<String>,
    /// Inclusive upper date bound.
    pub to: Option<String>,
    /// Maximum entries; defaults to 500.
    pub limit: Option<String>,
}

impl From<LogParams> for LogRequest {
    fn from(params: LogParams) -> Self {
        let LogParams { from, to, limit } = params;
        Self { from, to, limit }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LogEntryResponse {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub duration: Option<Minutes>,
    /// Rendered as `Wed Jan 01 2020`.
    pub date: String,
}

impl From<&Exercise> for LogEntryResponse {
    fn from(exercise: &Exercise) -> Self {
        Self {
            description: exercise.description().to_owned(),
            duration: exercise.duration(),
            date: exercise.date().to_string(),
        }
    }
}

/// A user's filtered exercise log.
#[derive(Debug, Serialize, ToSchema)]
pub struct LogResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    /// Always equal to the length of `log`.
    pub count: usize,
    pub log: Vec<LogEntryResponse>,
}

impl From<&ExerciseLog> for LogResponse {
    fn from(log: &ExerciseLog) -> Self {
        Self {
            id: log.user().id().to_string(),
            username: log.user().username().to_string(),
            count: log.count(),
            log: log.entries().iter().map(LogEntryResponse::from).collect(),
        }
    }
}

/// Fetch a user's exercises between optional dates.
#[utoipa::path(
    get,
    path = "/api/users/{_id}/logs",
    params(("_id" = String, Path, description = "User identifier"), LogParams),
    responses(
        (status = 200, description = "Exercise log", body = LogResponse),
        (status = 404, description = "User not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["exercises"],
    operation_id = "getLogs"
)]
#[get("/api/users/{_id}/logs")]
pub async fn get_logs(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    params: web::Query<LogParams>,
) -> ApiResult<web::Json<LogResponse>> {
    let user_id = parse_user_id(&path.into_inner())?;
    let request = LogRequest::from(params.into_inner());
    let log = state.exercise_log.fetch_log(&user_id, request).await?;
    Ok(web::Json(LogResponse::from(&log)))
}
