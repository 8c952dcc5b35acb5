use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

const BEARER_PREFIX: &str = "Bearer ";

/// Extension type holding the user resolved from the bearer token.
///
/// Present in request extensions only after `authenticate` succeeded.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Middleware that validates the bearer token, resolves its subject to a
/// stored user and adds that user to request extensions.
///
/// Any failure short-circuits with 401 and the wrapped handler never runs.
/// A valid token whose subject no longer exists is rejected exactly like a
/// forged one.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token_from_header(&req)?;

    let subject = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Token validation failed");
        ApiError::Unauthorized("invalid token".to_string())
    })?;

    let user = state
        .user_service
        .get_user_by_username(&Username::new(subject))
        .await
        .map_err(|e| match e {
            UserError::NotFoundByUsername(_) => {
                tracing::warn!("Token subject does not resolve to a user");
                ApiError::Unauthorized("invalid token".to_string())
            }
            _ => ApiError::from(e),
        })?;

    tracing::debug!(user_id = %user.id, "Request authenticated");

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, ApiError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthorized("not authenticated".to_string()))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::Unauthorized("invalid authorization header".to_string()))?;

    auth_str
        .strip_prefix(BEARER_PREFIX)
        .ok_or_else(|| ApiError::Unauthorized("invalid authorization header".to_string()))
}
