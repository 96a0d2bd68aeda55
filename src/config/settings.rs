use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::config::errors::ApplicationError;
use crate::config::{EnvironmentProvider, SystemEnvironment};

/// What `GET /default/{value}` does with its path value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GetMode {
    /// Look the value up and return the stored parameter
    #[default]
    Lookup,
    /// Store the value as a new parameter
    Store,
}

impl FromStr for GetMode {
    type Err = ApplicationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "lookup" => Ok(GetMode::Lookup),
            "store" => Ok(GetMode::Store),
            other => Err(ApplicationError::invalid(
                "APP_DEFAULT_GET_MODE",
                format!("Expected 'lookup' or 'store', got '{}'", other),
            )),
        }
    }
}

/// Process-wide settings, loaded once at startup and read-only afterwards
#[derive(Clone)]
pub struct Settings {
    allowed_origins: Vec<String>,
    server_host: String,
    server_port: u16,
    secret_key: String,
    get_mode: GetMode,
    database_url: String,
}

impl Settings {
    /// Load settings from the given environment provider
    ///
    /// `DATABASE_URL`, when present, is used verbatim; otherwise a Postgres URL
    /// is assembled from the `POSTGRES_*` variables.
    pub fn from_env_provider(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Result<Self, ApplicationError> {
        let env = env_provider.as_ref();

        let allowed_origins = parse_origins(&read_or(env, "APP_ALLOWED_ORIGINS", "[]"))?;

        let server_host = read_or(env, "APP_HOST", "0.0.0.0");
        if server_host.trim().is_empty() {
            return Err(ApplicationError::invalid("APP_HOST", "Host address cannot be empty"));
        }

        let server_port = parse_port(&read_or(env, "APP_PORT", "8000"), "APP_PORT")?;

        let secret_key = env
            .get_var("APP_SECRET_KEY")
            .ok_or_else(|| ApplicationError::MissingSetting { setting_name: "APP_SECRET_KEY".to_string() })?;
        if secret_key.is_empty() {
            return Err(ApplicationError::invalid("APP_SECRET_KEY", "Secret key cannot be empty"));
        }

        let get_mode = read_or(env, "APP_DEFAULT_GET_MODE", "lookup").parse()?;

        let database_url = match env.get_var("DATABASE_URL").filter(|url| !url.is_empty()) {
            Some(url) => url,
            None => {
                let username = read_or(env, "POSTGRES_USERNAME", "postgres");
                let password = read_or(env, "POSTGRES_PASSWORD", "");
                let host = read_or(env, "POSTGRES_HOST", "localhost");
                let port = parse_port(&read_or(env, "POSTGRES_PORT", "5432"), "POSTGRES_PORT")?;
                let database = read_or(env, "POSTGRES_DATABASE", "postgres");
                postgres_url(&username, &password, &host, port, &database)
            }
        };

        Ok(Self {
            allowed_origins,
            server_host,
            server_port,
            secret_key,
            get_mode,
            database_url,
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, ApplicationError> {
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    pub fn get_mode(&self) -> GetMode {
        self.get_mode
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
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("allowed_origins", &self.allowed_origins)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("secret_key", &"<redacted>")
            .field("get_mode", &self.get_mode)
            .field("database_url", &"<redacted>")
            .finish()
    }
}

fn read_or(env: &(dyn EnvironmentProvider + Send + Sync), key: &str, default: &str) -> String {
    env.get_var(key).unwrap_or_else(|| default.to_string())
}

fn parse_origins(raw: &str) -> Result<Vec<String>, ApplicationError> {
    serde_json::from_str::<Vec<String>>(raw).map_err(|e| {
        ApplicationError::invalid("APP_ALLOWED_ORIGINS", format!("Expected a JSON array of strings: {}", e))
    })
}

fn parse_port(value: &str, setting_name: &str) -> Result<u16, ApplicationError> {
    let port: u32 = value.trim().parse().map_err(|_| {
        ApplicationError::invalid(
            setting_name,
            format!("Expected port number between 1 and 65535, got '{}'", value),
        )
    })?;

    if port == 0 || port > 65535 {
        return Err(ApplicationError::invalid(
            setting_name,
            format!("Port {} is outside valid range 1-65535", port),
        ));
    }

    Ok(port as u16)
}

fn postgres_url(username: &str, password: &str, host: &str, port: u16, database: &str) -> String {
    format!("postgres://{}:{}@{}:{}/{}", username, password, host, port, database)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapEnvironment;

    fn load(vars: &[(&str, &str)]) -> Result<Settings, ApplicationError> {
        Settings::from_env_provider(Arc::new(MapEnvironment::empty().with_vars(vars)))
    }

    #[test]
    fn test_settings_with_defaults() {
        let settings = load(&[("APP_SECRET_KEY", "secret")]).unwrap();

        assert!(settings.allowed_origins().is_empty());
        assert_eq!(settings.server_host(), "0.0.0.0");
        assert_eq!(settings.server_port(), 8000);
        assert_eq!(settings.server_address(), "0.0.0.0:8000");
        assert_eq!(settings.secret_key(), "secret");
        assert_eq!(settings.get_mode(), GetMode::Lookup);
        assert_eq!(settings.database_url(), "postgres://postgres:@localhost:5432/postgres");
    }

    #[test]
    fn test_settings_with_all_vars() {
        let settings = load(&[
            ("APP_SECRET_KEY", "secret"),
            ("APP_ALLOWED_ORIGINS", r#"["http://localhost:3000", "https://example.com"]"#),
            ("APP_HOST", "127.0.0.1"),
            ("APP_PORT", "8080"),
            ("APP_DEFAULT_GET_MODE", "store"),
            ("POSTGRES_USERNAME", "app"),
            ("POSTGRES_PASSWORD", "pw"),
            ("POSTGRES_HOST", "db"),
            ("POSTGRES_PORT", "6543"),
            ("POSTGRES_DATABASE", "params"),
        ])
        .unwrap();

        assert_eq!(
            settings.allowed_origins(),
            &["http://localhost:3000".to_string(), "https://example.com".to_string()]
        );
        assert_eq!(settings.server_address(), "127.0.0.1:8080");
        assert_eq!(settings.get_mode(), GetMode::Store);
        assert_eq!(settings.database_url(), "postgres://app:pw@db:6543/params");
    }

    #[test]
    fn test_database_url_override_wins() {
        let settings = load(&[
            ("APP_SECRET_KEY", "secret"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("POSTGRES_HOST", "db"),
        ])
        .unwrap();

        assert_eq!(settings.database_url(), "sqlite::memory:");
    }

    #[test]
    fn test_missing_secret_key_fails() {
        let result = load(&[]);

        assert_eq!(
            result.unwrap_err(),
            ApplicationError::MissingSetting { setting_name: "APP_SECRET_KEY".to_string() }
        );
    }

    #[test]
    fn test_empty_secret_key_fails() {
        match load(&[("APP_SECRET_KEY", "")]).unwrap_err() {
            ApplicationError::InvalidSetting { setting_name, .. } => assert_eq!(setting_name, "APP_SECRET_KEY"),
            other => panic!("Expected InvalidSetting for APP_SECRET_KEY, got: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_port() {
        match load(&[("APP_SECRET_KEY", "secret"), ("APP_PORT", "not_a_number")]).unwrap_err() {
            ApplicationError::InvalidSetting { setting_name, reason } => {
                assert_eq!(setting_name, "APP_PORT");
                assert!(reason.contains("Expected port number between 1 and 65535"));
            }
            other => panic!("Expected InvalidSetting for APP_PORT, got: {:?}", other),
        }
    }

    #[test]
    fn test_zero_and_out_of_range_port() {
        for port in ["0", "65536"] {
            match load(&[("APP_SECRET_KEY", "secret"), ("APP_PORT", port)]).unwrap_err() {
                ApplicationError::InvalidSetting { setting_name, reason } => {
                    assert_eq!(setting_name, "APP_PORT");
                    assert!(reason.contains("outside valid range"));
                }
                other => panic!("Expected InvalidSetting for APP_PORT, got: {:?}", other),
            }
        }
    }

    #[test]
    fn test_origins_must_be_json_array() {
        match load(&[("APP_SECRET_KEY", "secret"), ("APP_ALLOWED_ORIGINS", "http://localhost")]).unwrap_err() {
            ApplicationError::InvalidSetting { setting_name, .. } => assert_eq!(setting_name, "APP_ALLOWED_ORIGINS"),
            other => panic!("Expected InvalidSetting for APP_ALLOWED_ORIGINS, got: {:?}", other),
        }
    }

    #[test]
    fn test_get_mode_parsing() {
        assert_eq!("lookup".parse::<GetMode>().unwrap(), GetMode::Lookup);
        assert_eq!(" STORE ".parse::<GetMode>().unwrap(), GetMode::Store);
        assert!("delete".parse::<GetMode>().is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let settings = load(&[("APP_SECRET_KEY", "very-secret-value")]).unwrap();
        let debug = format!("{:?}", settings);

        assert!(!debug.contains("very-secret-value"));
        assert!(debug.contains("<redacted>"));
    }
}
