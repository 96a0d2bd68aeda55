// Test utilities shared across unit tests
// Only compiled when running tests

use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::app_data::AppData;
use crate::config::{MapEnvironment, SessionProvider, Settings};

pub const TEST_SECRET: &str = "test-secret-key";

/// Creates a migrated in-memory SQLite database
///
/// The pool is pinned to one connection that never idles out; every
/// connection to `sqlite::memory:` would otherwise get its own empty database.
///
/// Intentionally duplicated in `tests/common/mod.rs`: unit tests cannot reach
/// the integration-test helpers and vice versa.
pub async fn setup_test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(std::time::Duration::from_secs(3600))
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Creates a session provider over a fresh test database
pub async fn setup_test_sessions() -> SessionProvider {
    SessionProvider::new(setup_test_db().await)
}

/// Creates settings for tests with the given extra variables
pub fn test_settings(vars: &[(&str, &str)]) -> Settings {
    let env = MapEnvironment::empty()
        .with_var("APP_SECRET_KEY", TEST_SECRET)
        .with_var("DATABASE_URL", "sqlite::memory:")
        .with_vars(vars);

    Settings::from_env_provider(Arc::new(env)).expect("Failed to load test settings")
}

/// Creates AppData over a fresh test database
pub async fn setup_test_app_data(vars: &[(&str, &str)]) -> Arc<AppData> {
    let sessions = Arc::new(setup_test_sessions().await);
    Arc::new(AppData::init(Arc::new(test_settings(vars)), sessions))
}
