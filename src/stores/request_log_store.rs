use std::sync::Arc;

use sea_orm::Set;

use crate::config::SessionProvider;
use crate::errors::InternalError;
use crate::stores::repository::Repository;
use crate::types::db::request_log;
use crate::types::internal::RequestLogEntry;

/// Repository for request audit rows
///
/// Every write runs in its own session, independent of any session the
/// request handler used, so the audit row and the handler's work commit or
/// fail separately.
pub struct RequestLogStore {
    sessions: Arc<SessionProvider>,
    repository: Repository<request_log::Entity>,
}

impl RequestLogStore {
    pub fn new(sessions: Arc<SessionProvider>) -> Self {
        Self {
            sessions,
            repository: Repository::returning_empty(),
        }
    }

    /// Persist one request audit row and commit it
    ///
    /// # Errors
    ///
    /// Returns `InternalError` if the session cannot be opened, the insert
    /// fails or the commit fails
    pub async fn record(&self, entry: RequestLogEntry) -> Result<request_log::Model, InternalError> {
        let row = request_log::ActiveModel {
            method: Set(entry.method),
            endpoint: Set(entry.endpoint),
            status_code: Set(i32::from(entry.status_code)),
            client_ip: Set(entry.client_ip),
            proxy_ip: Set(entry.proxy_ip),
            ..Default::default()
        };

        let mut session = self.sessions.session();
        let stored = self.repository.add(session.connection().await?, row).await?;
        session.commit().await?;

        Ok(stored)
    }
}

impl std::fmt::Debug for RequestLogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestLogStore")
            .field("sessions", &"<session_provider>")
            .finish()
    }
}
