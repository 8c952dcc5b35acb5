use axum::http::StatusCode;

use super::ApiSuccess;

pub async fn health_check() -> ApiSuccess<&'static str> {
    ApiSuccess::new(StatusCode::OK, "healthy")
}
