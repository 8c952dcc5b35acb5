#![allow(dead_code)]

use std::sync::Arc;

use auth::Authenticator;
use serde_json::json;
use user_api::domain::user::models::User;
use user_api::domain::user::models::UserId;
use user_api::domain::user::models::Username;
use user_api::domain::user::service::UserService;
use user_api::inbound::http::router::create_router;
use user_api::outbound::repositories::InMemoryUserRepository;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
    pub authenticator: Authenticator,
}

impl TestApp {
    /// Spawn the application seeded with the single user Olly
    pub async fn spawn() -> Self {
        Self::spawn_with_users(vec![User::new(
            UserId(1),
            Username::new("Olly"),
            "password",
        )])
        .await
    }

    /// Spawn the application in a background task with the given seed users
    pub async fn spawn_with_users(users: Vec<User>) -> Self {
        Self::spawn_with(users, Authenticator::new(JWT_SECRET)).await
    }

    /// Spawn the application with the given seed users and server-side authenticator
    pub async fn spawn_with(users: Vec<User>, server_authenticator: Authenticator) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let user_repository =
            Arc::new(InMemoryUserRepository::new(users).expect("Invalid seed users"));
        let user_service = Arc::new(UserService::new(user_repository));
        let router = create_router(user_service, Arc::new(server_authenticator));

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            api_client: reqwest::Client::new(),
            // Same key as the server, for minting tokens directly in tests
            authenticator: Authenticator::new(JWT_SECRET),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(&format!("{}{}", self.address, path))
    }

    /// Helper to make DELETE request
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(&format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(&format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// POST /auth/login with the given credentials
    pub async fn login(&self, username: &str, password: &str) -> reqwest::Response {
        self.post("/auth/login")
            .json(&json!({
                "username": username,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Log in and return the issued token
    pub async fn token_for(&self, username: &str, password: &str) -> String {
        let response = self.login(username, password).await;
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["token"]
            .as_str()
            .expect("Missing token in login response")
            .to_string()
    }
}
