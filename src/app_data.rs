use std::sync::Arc;

use crate::config::{SessionProvider, Settings};
use crate::stores::RequestLogStore;

/// Centralized application data
///
/// Everything here is created once in main.rs and shared read-only across
/// requests.
///
/// ```text
/// main.rs
///   ↓
/// Settings::from_env()  → settings (Arc<Settings>)
/// SessionProvider::connect() → sessions (Arc<SessionProvider>)
///   ↓
/// AppData::init()
///   └─ request_log_store (Arc<RequestLogStore>)
///   ↓ wrapped in Arc<AppData>
///   ├─ DefaultApi::new(app_data)
///   ├─ ApiKeyGuard::new(settings)
///   └─ RequestLogger::new(request_log_store)
/// ```
pub struct AppData {
    pub settings: Arc<Settings>,
    pub sessions: Arc<SessionProvider>,
    pub request_log_store: Arc<RequestLogStore>,
}

impl AppData {
    /// Initialize all application data
    ///
    /// The session provider should be connected and migrated before calling this.
    pub fn init(settings: Arc<Settings>, sessions: Arc<SessionProvider>) -> Self {
        tracing::info!("Initializing AppData...");

        let request_log_store = Arc::new(RequestLogStore::new(sessions.clone()));

        tracing::info!("AppData initialization complete");

        Self {
            settings,
            sessions,
            request_log_store,
        }
    }
}
