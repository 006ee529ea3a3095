//! Configuration for Basis API

use core_config::{cors::CorsConfig, server::ServerConfig, FromEnv};

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let cors = CorsConfig::from_env()?;

        Ok(Self {
            server,
            cors,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        temp_env::with_vars(
            [
                ("HOST", None::<&str>),
                ("PORT", None),
                ("APP_ENV", None),
                ("CORS_ALLOWED_ORIGIN", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.server.address(), "0.0.0.0:8000");
                assert_eq!(config.environment, Environment::Development);
                assert!(config.cors.is_permissive());
            },
        );
    }
}
