use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::fallback::method_not_allowed;
use super::handlers::fallback::not_found;
use super::handlers::get_current_user::get_current_user;
use super::handlers::get_user::get_user;
use super::handlers::health_check::health_check;
use super::handlers::list_users::list_users;
use super::handlers::login::login;
use super::middleware::authenticate as auth_middleware;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::user::InMemoryUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<InMemoryUserRepository>>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    user_service: Arc<UserService<InMemoryUserRepository>>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        user_service,
        authenticator,
    };

    // Each method router falls back to a 405 in the error envelope
    let public_routes = Router::new()
        .route("/auth/login", post(login).fallback(method_not_allowed))
        .route("/healthz", get(health_check).fallback(method_not_allowed));

    let protected_routes = Router::new()
        .route("/auth/me", get(get_current_user).fallback(method_not_allowed))
        .route("/users", get(list_users).fallback(method_not_allowed))
        .route("/users/:id", get(get_user).fallback(method_not_allowed))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            // Headers are left out: they carry bearer tokens
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    // Outermost first: tracing wraps CORS, which wraps routing
    let middleware_stack = ServiceBuilder::new()
        .layer(trace_layer)
        .layer(CorsLayer::permissive());

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .fallback(not_found)
        .layer(middleware_stack)
        .with_state(state)
}
