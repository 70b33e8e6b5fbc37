//! Service configuration loaded from environment variables.
//!
//! Variables use the `RECS_` prefix; a bare `PORT` is honored as a fallback
//! for the listen port. Defaults apply when a variable is absent, and every
//! loaded value is validated before the server starts.

use crate::error::RecommenderError;
use crate::vectorizer::DEFAULT_MAX_FEATURES;
use std::env;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5001;

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Listen host (`RECS_HOST`).
    pub host: String,
    /// Listen port (`RECS_PORT`, falling back to `PORT`).
    pub port: u16,
    /// Vocabulary cap for the TF-IDF vectorizer (`RECS_MAX_FEATURES`).
    pub max_features: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_features: DEFAULT_MAX_FEATURES,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from the environment, applying defaults for
    /// missing variables and validating the result.
    pub fn from_env() -> Result<Self, RecommenderError> {
        let defaults = Self::default();

        let host = env::var("RECS_HOST").unwrap_or(defaults.host);
        let port = match env::var("RECS_PORT").or_else(|_| env::var("PORT")) {
            Ok(value) => value.parse().map_err(|_| {
                RecommenderError::Configuration(format!("invalid port value: {value}"))
            })?,
            Err(_) => defaults.port,
        };
        let max_features = match env::var("RECS_MAX_FEATURES") {
            Ok(value) => value.parse().map_err(|_| {
                RecommenderError::Configuration(format!("invalid RECS_MAX_FEATURES value: {value}"))
            })?,
            Err(_) => defaults.max_features,
        };

        let config = Self {
            host,
            port,
            max_features,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), RecommenderError> {
        if self.host.is_empty() {
            return Err(RecommenderError::Configuration(
                "RECS_HOST must not be empty".to_string(),
            ));
        }
        if self.port == 0 {
            return Err(RecommenderError::Configuration(
                "port must be non-zero".to_string(),
            ));
        }
        if self.max_features == 0 {
            return Err(RecommenderError::Configuration(
                "RECS_MAX_FEATURES must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ServiceConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.port, 5001);
        assert_eq!(config.max_features, 1000);
    }

    #[test]
    fn zero_feature_cap_is_rejected() {
        let config = ServiceConfig {
            max_features: 0,
            ..ServiceConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_port_is_rejected() {
        let config = ServiceConfig {
            port: 0,
            ..ServiceConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
