use auth::AuthenticationError;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::models::Username;

const INVALID_CREDENTIALS: &str = "invalid credentials";

/// Exchanges a username and password for a bearer token.
///
/// Unknown users and wrong passwords produce the same 401 so the response
/// does not reveal which usernames exist.
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let Json(body) = body.map_err(|rejection| {
        ApiError::BadRequest(format!("invalid request body: {}", rejection.body_text()))
    })?;

    let username = Username::new(body.username);

    let user = state
        .user_service
        .get_user_by_username(&username)
        .await
        .map_err(|e| match e {
            UserError::NotFoundByUsername(_) => {
                tracing::info!(username = %username, "Login rejected: unknown user");
                ApiError::Unauthorized(INVALID_CREDENTIALS.to_string())
            }
            _ => ApiError::from(e),
        })?;

    let result = state
        .authenticator
        .authenticate(&body.password, &user.password, user.username.as_str())
        .map_err(|e| match e {
            AuthenticationError::InvalidCredentials => {
                tracing::info!(user_id = %user.id, "Login rejected: wrong password");
                ApiError::Unauthorized(INVALID_CREDENTIALS.to_string())
            }
            AuthenticationError::JwtError(err) => {
                tracing::error!(user_id = %user.id, error = %err, "Token generation failed");
                ApiError::InternalServerError("authentication failed".to_string())
            }
        })?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            token: result.access_token,
        },
    ))
}

/// Login credentials. Never stored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
}
