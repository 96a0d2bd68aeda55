use std::collections::HashMap;

/// Trait for providing environment variable access
///
/// Settings read through this trait so tests can inject values without
/// mutating the process-global environment.
pub trait EnvironmentProvider {
    fn get_var(&self, key: &str) -> Option<String>;
}

/// Production environment provider that reads from system environment
pub struct SystemEnvironment;

impl EnvironmentProvider for SystemEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Environment provider backed by an in-memory map
#[derive(Debug, Default, Clone)]
pub struct MapEnvironment {
    vars: HashMap<String, String>,
}

impl MapEnvironment {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_vars(mut self, vars: &[(&str, &str)]) -> Self {
        for (key, value) in vars {
            self.vars.insert(key.to_string(), value.to_string());
        }
        self
    }
}

impl EnvironmentProvider for MapEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_environment_provider() {
        let provider = SystemEnvironment;

        unsafe {
            std::env::set_var("DEFAULT_PARAM_TEST_VAR_12345", "test_value");
        }

        assert_eq!(provider.get_var("DEFAULT_PARAM_TEST_VAR_12345"), Some("test_value".to_string()));
        assert_eq!(provider.get_var("NON_EXISTENT_VAR_98765"), None);

        unsafe {
            std::env::remove_var("DEFAULT_PARAM_TEST_VAR_12345");
        }
    }

    #[test]
    fn test_map_environment_provider() {
        let provider = MapEnvironment::empty()
            .with_var("APP_PORT", "9000")
            .with_vars(&[("APP_HOST", "127.0.0.1"), ("APP_SECRET_KEY", "s3cret")]);

        assert_eq!(provider.get_var("APP_PORT"), Some("9000".to_string()));
        assert_eq!(provider.get_var("APP_HOST"), Some("127.0.0.1".to_string()));
        assert_eq!(provider.get_var("APP_SECRET_KEY"), Some("s3cret".to_string()));
        assert_eq!(provider.get_var("NON_EXISTENT"), None);
    }

    #[test]
    fn test_map_environment_empty() {
        let provider = MapEnvironment::empty();

        assert_eq!(provider.get_var("ANY_KEY"), None);
    }
}
