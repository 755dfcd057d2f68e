use std::sync::Arc;
use crate::config::errors::ApplicationError;
use crate::config::EnvironmentProvider;

/// Where a loaded setting came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValueSource {
    EnvironmentVariable { name: String },
    Default,
}

#[derive(Debug, Clone)]
pub struct ConfigValue {
    pub value: String,
    pub source: ConfigValueSource,
}

/// Configuration specification with environment override → default priority
pub struct ConfigSpec {
    env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    env_override: Option<String>,
    default_value: Option<String>,
    min_length: Option<usize>,
    validator: Option<fn(&str) -> Result<(), String>>,
}

impl ConfigSpec {
    pub fn new(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Self {
        Self {
            env_provider,
            env_override: None,
            default_value: None,
            min_length: None,
            validator: None,
        }
    }

    pub fn env_override(mut self, name: &str) -> Self {
        self.env_override = Some(name.to_string());
        self
    }

    pub fn default_value(mut self, value: &str) -> Self {
        self.default_value = Some(value.to_string());
        self
    }

    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    pub fn validator(mut self, f: fn(&str) -> Result<(), String>) -> Self {
        self.validator = Some(f);
        self
    }

    fn setting_name(&self) -> &str {
        self.env_override.as_deref().unwrap_or("<unnamed>")
    }

    /// Load a setting value with source tracking
    ///
    /// The environment variable wins over the default. Both are validated.
    pub fn load_setting_with_source(&self) -> Result<ConfigValue, ApplicationError> {
        if let Some(env_var) = &self.env_override {
            if let Some(value) = self.env_provider.get_var(env_var) {
                self.validate_value(&value)?;
                return Ok(ConfigValue {
                    value,
                    source: ConfigValueSource::EnvironmentVariable {
                        name: env_var.clone(),
                    },
                });
            }
        }

        match &self.default_value {
            Some(value) => {
                self.validate_value(value)?;
                Ok(ConfigValue {
                    value: value.clone(),
                    source: ConfigValueSource::Default,
                })
            }
            None => Err(ApplicationError::InvalidSetting {
                setting_name: self.setting_name().to_string(),
                reason: "No value provided and no default configured".to_string(),
            }),
        }
    }

    fn validate_value(&self, value: &str) -> Result<(), ApplicationError> {
        if let Some(min) = self.min_length {
            if value.len() < min {
                return Err(ApplicationError::InvalidSetting {
                    setting_name: self.setting_name().to_string(),
                    reason: format!("Value must be at least {} characters", min),
                });
            }
        }

        if let Some(validator) = self.validator {
            validator(value).map_err(|reason| ApplicationError::InvalidSetting {
                setting_name: self.setting_name().to_string(),
                reason,
            })?;
        }

        Ok(())
    }

    /// Parse a port number (1-65535)
    pub fn parse_port(value: &str, setting_name: &str) -> Result<u16, ApplicationError> {
        let port = value.trim().parse::<u16>()
            .map_err(|e| ApplicationError::ParseError {
                setting_name: setting_name.to_string(),
                error: format!("Expected port number (1-65535), got '{}': {}", value, e),
            })?;

        if port == 0 {
            return Err(ApplicationError::InvalidSetting {
                setting_name: setting_name.to_string(),
                reason: "Port number must be between 1 and 65535".to_string(),
            });
        }

        Ok(port)
    }

    /// Validate a port value is within the given range
    pub fn validate_port_range(value: &str, min: u16, max: u16) -> Result<(), String> {
        let parsed = value.trim().parse::<u16>()
            .map_err(|_| format!("Expected port number between {} and {}", min, max))?;

        if parsed < min || parsed > max {
            return Err(format!("Port {} is outside valid range {}-{}", parsed, min, max));
        }

        Ok(())
    }

    /// Validate a bind address: an IP address or `localhost`
    pub fn validate_host_address(value: &str) -> Result<(), String> {
        if value.is_empty() {
            return Err("Host address cannot be empty".to_string());
        }

        if value == "localhost" || value.parse::<std::net::IpAddr>().is_ok() {
            return Ok(());
        }

        Err(format!("Invalid host address: {}", value))
    }

    /// Validate an http(s) base URL
    pub fn validate_http_url(value: &str) -> Result<(), String> {
        let rest = value
            .strip_prefix("http://")
            .or_else(|| value.strip_prefix("https://"))
            .ok_or_else(|| format!("URL must start with http:// or https://: {}", value))?;

        if rest.is_empty() {
            return Err("URL is missing a host".to_string());
        }

        Ok(())
    }
}
