use std::env;

use auth::jwt::config::MAX_TTL_SECONDS;
use auth::TokenConfig;
use chrono::Duration;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_seconds: i64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[redacted]")
            .field("expiration_seconds", &self.expiration_seconds)
            .finish()
    }
}

impl JwtConfig {
    /// Convert into the signing configuration injected into the token service.
    ///
    /// # Errors
    /// * `Message` - Expiration is not between 1 second and `auth::jwt::config::MAX_TTL_SECONDS`
    pub fn token_config(&self) -> Result<TokenConfig, ConfigError> {
        let ttl = Some(self.expiration_seconds)
            .filter(|seconds| (1..=MAX_TTL_SECONDS).contains(seconds))
            .and_then(Duration::try_seconds)
            .ok_or_else(|| {
                ConfigError::Message(format!(
                    "jwt.expiration_seconds must be between 1 and {} seconds, got {}",
                    MAX_TTL_SECONDS, self.expiration_seconds
                ))
            })?;

        Ok(TokenConfig::new(self.secret.clone(), ttl))
    }
}

impl Config {
    /// Load configuration from defaults, files and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (JWT__SECRET, JWT__EXPIRATION_SECONDS, SERVER__HTTP_PORT)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    /// 4. Built-in defaults (placeholder secret, 15 minute tokens, port 8080)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .set_default("server.http_port", 8080)?
            .set_default("jwt.secret", auth::jwt::config::DEFAULT_SECRET)?
            .set_default("jwt.expiration_seconds", auth::jwt::config::DEFAULT_TTL_SECONDS)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::default().separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        Ok(config)
    }
}
