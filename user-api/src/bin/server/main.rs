use std::sync::Arc;

use auth::Authenticator;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use user_api::config::Config;
use user_api::domain::user::service::UserService;
use user_api::inbound::http::router::create_router;
use user_api::outbound::repositories::InMemoryUserRepository;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "user_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "user-api",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_expiration_hours = ?config.jwt.expiration_hours,
        seeded_users = config.users.len(),
        "Configuration loaded"
    );

    let authenticator = Arc::new(
        Authenticator::new(config.jwt.secret.as_bytes())
            .with_expiration_hours(config.jwt.expiration_hours),
    );
    let user_repository = Arc::new(InMemoryUserRepository::new(config.seed_users())?);
    let user_service = Arc::new(UserService::new(user_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(user_service, authenticator);

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");

    Ok(())
}
