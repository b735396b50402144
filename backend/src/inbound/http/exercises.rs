//! Exercise logging handler.
//!
//! ```text
//! POST /api/users/{_id}/exercises {"description":"run","duration":30,"date":"2020-01-01"}
//! ```

use actix_web::{Either, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{LogExerciseRequest, LoggedExercise};
use crate::domain::{Error, Minutes, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::coerce::{ScalarText, text, text_or_empty};
use crate::inbound::http::state::HttpState;

/// Body for `POST /api/users/{_id}/exercises`.
///
/// Fields are read as text and validated by the service once the user is
/// known to exist.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateExerciseRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: Option<ScalarText>,
    /// Minutes; numeric strings are accepted. May be omitted.
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub duration: Option<ScalarText>,
    /// Calendar date such as `2020-01-01`. Empty or missing means today.
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub date: Option<ScalarText>,
}

/// The stored exercise together with its owner.
#[derive(Debug, Serialize, ToSchema)]
pub struct ExerciseResponse {
    /// Owner's identifier.
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub description: String,
    /// Omitted when the exercise was logged without one.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub duration: Option<Minutes>,
    /// Rendered as `Wed Jan 01 2020`.
    pub date: String,
}

impl From<LoggedExercise> for ExerciseResponse {
    fn from(logged: LoggedExercise) -> Self {
        let LoggedExercise { user, exercise } = logged;
        Self {
            id: user.id().to_string(),
            username: user.username().to_string(),
            description: exercise.description().to_owned(),
            duration: exercise.duration(),
            date: exercise.date().to_string(),
        }
    }
}

/// Parse a `{_id}` path segment. Malformed identifiers are internal errors.
pub(crate) fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    UserId::new(raw).map_err(|err| Error::internal(format!("invalid user id `{raw}`: {err}")))
}

/// Log an exercise for an existing user.
#[utoipa::path(
    post,
    path = "/api/users/{_id}/exercises",
    params(("_id" = String, Path, description = "User identifier")),
    request_body(
        content = CreateExerciseRequest,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "Exercise stored", body = ExerciseResponse),
        (status = 404, description = "User not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["exercises"],
    operation_id = "createExercise"
)]
#[post("/api/users/{_id}/exercises")]
pub async fn create_exercise(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: Either<web::Json<CreateExerciseRequest>, web::Form<CreateExerciseRequest>>,
) -> ApiResult<web::Json<ExerciseResponse>> {
    let user_id = parse_user_id(&path.into_inner())?;
    let CreateExerciseRequest {
        description,
        duration,
        date,
    } = match payload {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    };

    let logged = state
        .exercises
        .log_exercise(LogExerciseRequest {
            user_id,
            description: text_or_empty(description),
            duration: text(duration),
            date: text(date),
        })
        .await?;
    Ok(web::Json(ExerciseResponse::from(logged)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{create_user, read_json, test_app};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn malformed_user_ids_are_internal_errors() {
        let error = parse_user_id("not-a-uuid").expect_err("rejected");
        assert_eq!(error.code(), crate::domain::ErrorCode::InternalError);
    }

    #[actix_web::test]
    async fn logs_exercise_for_existing_user() {
        let app = actix_test::init_service(test_app()).await;
        let id = create_user(&app, "fcc").await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri(&format!("/api/users/{id}/exercises"))
                .set_json(json!({"description": "run", "duration": 30, "date": "2020-01-01"}))
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            read_json(res).await,
            json!({
                "_id": id,
                "username": "fcc",
                "description": "run",
                "duration": 30,
                "date": "Wed Jan 01 2020"
            })
        );
    }

    #[actix_web::test]
    async fn form_posts_coerce_duration_and_default_date() {
        let app = actix_test::init_service(test_app()).await;
        let id = create_user(&app, "fcc").await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri(&format!("/api/users/{id}/exercises"))
                .set_form([("description", "swim"), ("duration", "12.5"), ("date", "")])
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        let body = read_json(res).await;
        assert_eq!(body["duration"], 12.5);
        assert_eq!(body["date"], crate::inbound::http::test_utils::today());
    }

    #[actix_web::test]
    async fn missing_duration_is_omitted_from_response() {
        let app = actix_test::init_service(test_app()).await;
        let id = create_user(&app, "fcc").await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri(&format!("/api/users/{id}/exercises"))
                .set_json(json!({"description": "run", "date": "2020-01-01"}))
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            read_json(res).await,
            json!({
                "_id": id,
                "username": "fcc",
                "description": "run",
                "date": "Wed Jan 01 2020"
            })
        );
    }

    #[rstest]
    #[case::valid(json!({"description": "run", "duration": 30}))]
    #[case::missing_duration(json!({"description": "run"}))]
    #[case::non_numeric_duration(json!({"description": "run", "duration": "long"}))]
    #[case::bad_date(json!({"description": "run", "duration": 30, "date": "someday"}))]
    #[actix_web::test]
    async fn unknown_user_is_not_found_before_input_checks(#[case] body: serde_json::Value) {
        let app = actix_test::init_service(test_app()).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri(&format!("/api/users/{}/exercises", UserId::random()))
                .set_json(body)
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(read_json(res).await["message"], "User not found");
    }

    #[rstest]
    #[case::malformed_id("not-a-uuid", json!({"description": "run", "duration": 30}))]
    #[case::non_numeric_duration("", json!({"description": "run", "duration": "long"}))]
    #[case::compound_duration("", json!({"description": "run", "duration": {"minutes": 30}}))]
    #[case::bad_date("", json!({"description": "run", "duration": 30, "date": "someday"}))]
    #[actix_web::test]
    async fn invalid_input_is_an_internal_error(
        #[case] override_id: &str,
        #[case] body: serde_json::Value,
    ) {
        let app = actix_test::init_service(test_app()).await;
        let id = if override_id.is_empty() {
            create_user(&app, "fcc").await
        } else {
            override_id.to_owned()
        };

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri(&format!("/api/users/{id}/exercises"))
                .set_json(body)
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_json(res).await;
        assert_eq!(body["code"], "internal_error");
        assert_eq!(body["message"], "Internal server error");
    }
}
