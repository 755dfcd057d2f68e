use std::fmt;
use std::sync::Arc;
use crate::config::errors::ApplicationError;
use crate::config::config_spec::ConfigSpec;
use crate::config::EnvironmentProvider;

/// Infrastructure settings read once at startup
pub struct BootstrapSettings {
    database_url: String,
    server_host: String,
    server_port: u16,
    api_url: String,
}

impl BootstrapSettings {
    /// Load bootstrap settings through the given environment provider
    pub fn from_env_provider(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Result<Self, ApplicationError> {
        let database_url_spec = ConfigSpec::new(env_provider.clone())
            .env_override("DATABASE_URL")
            .default_value("sqlite://items.db?mode=rwc")
            .min_length(1);

        let host_spec = ConfigSpec::new(env_provider.clone())
            .env_override("HOST")
            .default_value("0.0.0.0")
            .validator(ConfigSpec::validate_host_address);

        let port_spec = ConfigSpec::new(env_provider.clone())
            .env_override("PORT")
            .default_value("3000")
            .validator(|value| ConfigSpec::validate_port_range(value, 1, 65535));

        let api_url_spec = ConfigSpec::new(env_provider)
            .env_override("ITEMBOOK_API_URL")
            .default_value("http://localhost:3000")
            .validator(ConfigSpec::validate_http_url);

        let database_url = database_url_spec.load_setting_with_source()?.value;
        let server_host = host_spec.load_setting_with_source()?.value;
        let port_value = port_spec.load_setting_with_source()?.value;
        let server_port = ConfigSpec::parse_port(&port_value, "PORT")?;
        let api_url = api_url_spec
            .load_setting_with_source()?
            .value
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            database_url,
            server_host,
            server_port,
            api_url,
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, ApplicationError> {
        use crate::config::SystemEnvironment;
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Base URL the terminal client sends requests to, without a trailing slash
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

impl fmt::Debug for BootstrapSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapSettings")
            .field("database_url", &self.database_url)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("api_url", &self.api_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockEnvironment;
    use std::collections::HashMap;

    fn create_test_env(vars: HashMap<String, String>) -> Arc<MockEnvironment> {
        Arc::new(MockEnvironment::new(vars))
    }

    #[test]
    fn test_bootstrap_settings_with_all_vars() {
        let env_vars = HashMap::from([
            ("DATABASE_URL".to_string(), "sqlite://test.db".to_string()),
            ("HOST".to_string(), "127.0.0.1".to_string()),
            ("PORT".to_string(), "8080".to_string()),
            ("ITEMBOOK_API_URL".to_string(), "http://127.0.0.1:8080/".to_string()),
        ]);

        let settings = BootstrapSettings::from_env_provider(create_test_env(env_vars)).unwrap();

        assert_eq!(settings.database_url(), "sqlite://test.db");
        assert_eq!(settings.server_host(), "127.0.0.1");
        assert_eq!(settings.server_port(), 8080);
        assert_eq!(settings.server_address(), "127.0.0.1:8080");
        assert_eq!(settings.api_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_bootstrap_settings_with_defaults() {
        let settings = BootstrapSettings::from_env_provider(create_test_env(HashMap::new())).unwrap();

        assert_eq!(settings.database_url(), "sqlite://items.db?mode=rwc");
        assert_eq!(settings.server_address(), "0.0.0.0:3000");
        assert_eq!(settings.api_url(), "http://localhost:3000");
    }

    #[test]
    fn test_bootstrap_settings_rejects_invalid_port() {
        let env_vars = HashMap::from([("PORT".to_string(), "not-a-port".to_string())]);

        let result = BootstrapSettings::from_env_provider(create_test_env(env_vars));
        assert!(result.is_err());
    }

    #[test]
    fn test_bootstrap_settings_rejects_invalid_host() {
        let env_vars = HashMap::from([("HOST".to_string(), "bad host".to_string())]);

        let result = BootstrapSettings::from_env_provider(create_test_env(env_vars));
        assert!(result.is_err());
    }

    #[test]
    fn test_bootstrap_settings_rejects_non_http_api_url() {
        let env_vars = HashMap::from([("ITEMBOOK_API_URL".to_string(), "localhost:3000".to_string())]);

        let result = BootstrapSettings::from_env_provider(create_test_env(env_vars));
        assert!(result.is_err());
    }
}
