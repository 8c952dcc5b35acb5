use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::UserResponseData;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<UserResponseData>>, ApiError> {
    state
        .user_service
        .list_users()
        .await
        .map_err(ApiError::from)
        .map(|users| {
            ApiSuccess::new(
                StatusCode::OK,
                users.iter().map(UserResponseData::from).collect(),
            )
        })
}
