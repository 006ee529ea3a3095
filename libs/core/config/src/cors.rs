use crate::{ConfigError, FromEnv};
use http::HeaderValue;
use std::env;

/// CORS configuration for HTTP APIs.
///
/// Origins are read from the `CORS_ALLOWED_ORIGIN` environment variable as a
/// comma-separated list. When the variable is unset the configuration is
/// permissive (any origin) - set an explicit list in deployed environments.
///
/// Examples:
/// - `CORS_ALLOWED_ORIGIN=http://localhost:3000,http://localhost:5173`
/// - `CORS_ALLOWED_ORIGIN=https://app.example.com`
#[derive(Clone, Debug, Default)]
pub struct CorsConfig {
    allowed_origins: Vec<HeaderValue>,
}

impl CorsConfig {
    /// Configuration that allows any origin.
    pub fn permissive() -> Self {
        Self {
            allowed_origins: Vec::new(),
        }
    }

    /// Configuration restricted to the given origins.
    pub fn with_origins(origins: Vec<HeaderValue>) -> Self {
        Self {
            allowed_origins: origins,
        }
    }

    /// True when no explicit origin list was configured.
    pub fn is_permissive(&self) -> bool {
        self.allowed_origins.is_empty()
    }

    /// The configured origin list (empty when permissive).
    pub fn origins(&self) -> &[HeaderValue] {
        &self.allowed_origins
    }
}

impl FromEnv for CorsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let raw = match env::var("CORS_ALLOWED_ORIGIN") {
            Ok(raw) => raw,
            Err(_) => return Ok(Self::permissive()),
        };

        let origins = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<HeaderValue>()
                    .map_err(|e| ConfigError::ParseError {
                        key: "CORS_ALLOWED_ORIGIN".to_string(),
                        details: format!("invalid origin '{}': {}", s, e),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if origins.is_empty() {
            return Err(ConfigError::ParseError {
                key: "CORS_ALLOWED_ORIGIN".to_string(),
                details: "set but contains no usable origins".to_string(),
            });
        }

        Ok(Self::with_origins(origins))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_config_unset_is_permissive() {
        temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || {
            let config = CorsConfig::from_env().unwrap();
            assert!(config.is_permissive());
            assert!(config.origins().is_empty());
        });
    }

    #[test]
    fn test_cors_config_single_origin() {
        temp_env::with_var("CORS_ALLOWED_ORIGIN", Some("http://localhost:3000"), || {
            let config = CorsConfig::from_env().unwrap();
            assert!(!config.is_permissive());
            assert_eq!(config.origins().len(), 1);
            assert_eq!(config.origins()[0], "http://localhost:3000");
        });
    }

    #[test]
    fn test_cors_config_multiple_origins_with_whitespace() {
        temp_env::with_var(
            "CORS_ALLOWED_ORIGIN",
            Some("http://localhost:3000, https://app.example.com"),
            || {
                let config = CorsConfig::from_env().unwrap();
                assert_eq!(config.origins().len(), 2);
                assert_eq!(config.origins()[1], "https://app.example.com");
            },
        );
    }

    #[test]
    fn test_cors_config_rejects_empty_list() {
        temp_env::with_var("CORS_ALLOWED_ORIGIN", Some(" , "), || {
            let result = CorsConfig::from_env();
            assert!(result.is_err());
            assert!(result.unwrap_err().to_string().contains("CORS_ALLOWED_ORIGIN"));
        });
    }

    #[test]
    fn test_cors_config_rejects_invalid_header_value() {
        temp_env::with_var("CORS_ALLOWED_ORIGIN", Some("http://bad\norigin"), || {
            assert!(CorsConfig::from_env().is_err());
        });
    }
}
