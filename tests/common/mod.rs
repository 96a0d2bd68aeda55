// Common test utilities for integration tests
#![allow(dead_code)]

use std::sync::Arc;

use default_param_backend::config::{MapEnvironment, SessionProvider, Settings};
use default_param_backend::types::db::request_log;
use default_param_backend::AppData;
use migration::{Migrator, MigratorTrait};
use poem::test::TestResponse;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, EntityTrait, QueryOrder};

pub const TEST_SECRET: &str = "integration-secret";

/// Creates a migrated in-memory SQLite database on a single pinned connection
///
/// Intentionally duplicated in `src/test/utils.rs`: unit tests cannot reach
/// these integration-test helpers and vice versa.
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

pub fn test_settings(vars: &[(&str, &str)]) -> Arc<Settings> {
    let env = MapEnvironment::empty()
        .with_var("APP_SECRET_KEY", TEST_SECRET)
        .with_var("DATABASE_URL", "sqlite::memory:")
        .with_vars(vars);

    Arc::new(Settings::from_env_provider(Arc::new(env)).expect("Failed to load test settings"))
}

/// Creates AppData over the given database
pub fn app_data_for(db: DatabaseConnection, vars: &[(&str, &str)]) -> Arc<AppData> {
    Arc::new(AppData::init(test_settings(vars), Arc::new(SessionProvider::new(db))))
}

/// Creates a fresh database and AppData over it
pub async fn setup_test_app_data(vars: &[(&str, &str)]) -> (DatabaseConnection, Arc<AppData>) {
    let db = setup_test_db().await;
    let app_data = app_data_for(db.clone(), vars);
    (db, app_data)
}

/// All request audit rows in insertion order
pub async fn request_logs(db: &DatabaseConnection) -> Vec<request_log::Model> {
    request_log::Entity::find()
        .order_by_asc(request_log::Column::Id)
        .all(db)
        .await
        .expect("Failed to read request logs")
}

pub async fn body_json(resp: TestResponse) -> serde_json::Value {
    resp.0
        .into_body()
        .into_json()
        .await
        .expect("Response body is not JSON")
}
