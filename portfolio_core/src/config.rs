//! Application configuration loaded from defaults, an optional `config.toml`
//! and `APP_*` environment variables.

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::contact::validation::validate_email;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub shutdown_timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Address the rendered contact notification is addressed to.
    pub recipient: String,
    pub subject_prefix: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            cors: CorsConfig::default(),
            contact: ContactConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            shutdown_timeout_seconds: 10,
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            recipient: "keerthigro123@gmail.com".to_string(),
            subject_prefix: None,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?);

        if std::path::Path::new("config.toml").exists() {
            builder = builder.add_source(File::with_name("config"));
        }

        builder = builder.add_source(
            Environment::with_prefix("APP")
                .separator("_")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        app_config.validate()?;

        Ok(app_config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("Server port cannot be 0".to_string()));
        }

        if let Err(err) = validate_email(&self.contact.recipient) {
            return Err(match err.code.as_ref() {
                "email_required" => {
                    ConfigError::Message("Contact recipient cannot be empty".to_string())
                }
                _ => ConfigError::Message(format!(
                    "Contact recipient '{}' is not a valid email address",
                    self.contact.recipient
                )),
            });
        }

        if self.cors.allowed_origins.is_empty() {
            return Err(ConfigError::Message(
                "At least one CORS origin must be allowed".to_string(),
            ));
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        config.validate().unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
    }

    #[test]
    fn zero_port_is_rejected() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn malformed_recipient_is_rejected() {
        let mut config = AppConfig::default();
        config.contact.recipient = "not-an-email".to_string();
        assert!(config.validate().is_err());
    }
}
