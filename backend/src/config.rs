use std::env;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a number, got '{0}'")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Directory holding `index.html`, `pkg/` and `assets/`.
    pub static_files_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: port
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?,
            static_files_path: env::var("STATIC_FILES_PATH")
                .unwrap_or_else(|_| "./dist".to_string()),
        })
    }
}
