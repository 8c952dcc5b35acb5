use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::UserResponseData;
use crate::inbound::http::middleware::CurrentUser;

/// Returns the user the bearer token belongs to.
pub async fn get_current_user(
    current_user: Option<Extension<CurrentUser>>,
) -> Result<ApiSuccess<UserResponseData>, ApiError> {
    // Only reachable without an identity if the route was mounted outside the auth layer
    let Extension(CurrentUser(user)) = current_user.ok_or_else(|| {
        tracing::error!("Authenticated user missing from request extensions");
        ApiError::InternalServerError("error getting current user".to_string())
    })?;

    Ok(ApiSuccess::new(StatusCode::OK, (&user).into()))
}
