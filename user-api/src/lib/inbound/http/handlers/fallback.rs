use axum::http::Method;
use axum::http::Uri;

use super::ApiError;

/// Fallback for unmatched paths, so they share the error envelope.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed(format!("method {} not allowed for {}", method, uri.path()))
}
