use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::user::models::User;
use crate::user::errors::UserError;

pub mod fallback;
pub mod get_current_user;
pub mod get_user;
pub mod health_check;
pub mod list_users;
pub mod login;

/// Successful response: the payload is serialized as-is, without an envelope.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    NotFound(String),
    MethodNotAllowed(String),
    Unauthorized(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::InternalServerError(msg)
            | ApiError::BadRequest(msg)
            | ApiError::NotFound(msg)
            | ApiError::MethodNotAllowed(msg)
            | ApiError::Unauthorized(msg) => msg,
        };

        (status, Json(ApiErrorBody::new(status, message))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) | UserError::NotFoundByUsername(_) => {
                ApiError::NotFound(err.to_string())
            }
            UserError::InvalidUserId(_) => ApiError::BadRequest(err.to_string()),
            UserError::IdAlreadyExists(_)
            | UserError::UsernameAlreadyExists(_)
            | UserError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

/// Envelope for every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub status: u16,
    pub content: String,
}

impl ApiErrorBody {
    pub fn new(status: StatusCode, content: String) -> Self {
        Self {
            status: status.as_u16(),
            content,
        }
    }
}

/// Public view of a user. The password is never part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponseData {
    pub id: i64,
    pub name: String,
}

impl From<&User> for UserResponseData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.value(),
            name: user.username.as_str().to_string(),
        }
    }
}
