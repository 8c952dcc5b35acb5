use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub users: Vec<UserConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime; tokens never expire when unset
    #[serde(default)]
    pub expiration_hours: Option<i64>,
}

/// Seed record for the in-memory user store.
#[derive(Debug, Deserialize, Clone)]
pub struct UserConfig {
    pub id: i64,
    pub name: String,
    pub password: String,
}

impl From<&UserConfig> for User {
    fn from(config: &UserConfig) -> Self {
        User::new(
            UserId(config.id),
            Username::new(config.name.clone()),
            config.password.clone(),
        )
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (JWT__SECRET, SERVER__HTTP_PORT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::default().separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Reject settings that deserialize but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(hours) = self.jwt.expiration_hours {
            if hours <= 0 {
                return Err(ConfigError::Message(format!(
                    "jwt.expiration_hours must be positive, got {}",
                    hours
                )));
            }
        }

        Ok(())
    }

    /// Users to seed the store with.
    pub fn seed_users(&self) -> Vec<User> {
        self.users.iter().map(User::from).collect()
    }
}
