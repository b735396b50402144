//! User handlers.
//!
//! ```text
//! GET  /api/users
//! POST /api/users {"username":"fcc"}
//! ```

use actix_web::{Either, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, User, Username};
use crate::inbound::http::ApiResult;
use crate::inbound::http::coerce::{ScalarText, text_or_empty};
use crate::inbound::http::state::HttpState;

/// Body for `POST /api/users`, as JSON or a urlencoded form.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    /// Missing usernames are stored as an empty string. Numbers and booleans
    /// are kept as their text.
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub username: Option<ScalarText>,
}

/// A user as returned by the API.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            username: user.username().to_string(),
        }
    }
}

/// List every registered user.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Registered users", body = [UserResponse]),
        (status = 404, description = "No users found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/api/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state.users_query.list_users().await?;
    Ok(web::Json(users.iter().map(UserResponse::from).collect()))
}

/// Register a user under the given username.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body(
        content = CreateUserRequest,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "User created", body = UserResponse),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/api/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: Either<web::Json<CreateUserRequest>, web::Form<CreateUserRequest>>,
) -> ApiResult<web::Json<UserResponse>> {
    let request = match payload {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    };
    let user = state
        .users_command
        .create_user(Username::new(text_or_empty(request.username)))
        .await?;
    Ok(web::Json(UserResponse::from(&user)))
}
