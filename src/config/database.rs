use sea_orm::{ConnectOptions, Database, DatabaseConnection, DatabaseTransaction, TransactionTrait};
use migration::{Migrator, MigratorTrait};

use crate::config::Settings;
use crate::errors::InternalError;
use crate::errors::internal::DatabaseError;

/// Owner of the process-wide connection pool
///
/// Built once at startup and shared by `Arc`. Every unit of work asks it for a
/// fresh [`Session`]; the pool itself is only closed at shutdown.
#[derive(Debug, Clone)]
pub struct SessionProvider {
    db: DatabaseConnection,
}

impl SessionProvider {
    /// Wrap an already established connection pool
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Connect to the database configured in `settings`
    ///
    /// Does NOT run migrations - call `migrate()` separately.
    pub async fn connect(settings: &Settings) -> Result<Self, InternalError> {
        let mut options = ConnectOptions::new(settings.database_url());
        options.sqlx_logging(false);

        let db = Database::connect(options)
            .await
            .map_err(|source| DatabaseError::Connect { source })?;

        tracing::debug!("Connected to database");

        Ok(Self::new(db))
    }

    /// Create any missing tables
    pub async fn migrate(&self) -> Result<(), InternalError> {
        Migrator::up(&self.db, None)
            .await
            .map_err(|e| InternalError::database("run_migrations", e))?;

        tracing::debug!("Database migrations completed");

        Ok(())
    }

    /// Open a new scoped session
    ///
    /// No connection is taken from the pool until the session is first used.
    pub fn session(&self) -> Session {
        Session {
            db: self.db.clone(),
            txn: None,
        }
    }

    /// Raw pool handle, for read-only inspection outside a unit of work
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Close the pool for every holder; called once at process shutdown
    pub async fn close(&self) -> Result<(), InternalError> {
        self.db
            .clone()
            .close()
            .await
            .map_err(|e| InternalError::database("close_pool", e))
    }
}

/// One unit of work bound to one transaction
///
/// The transaction begins lazily on the first call to [`Session::connection`].
/// Dropping a session without calling [`Session::commit`] rolls the
/// transaction back and returns its connection to the pool.
pub struct Session {
    db: DatabaseConnection,
    txn: Option<DatabaseTransaction>,
}

impl Session {
    /// Transaction for this session, started on first use
    pub async fn connection(&mut self) -> Result<&DatabaseTransaction, InternalError> {
        let txn = match self.txn.take() {
            Some(txn) => txn,
            None => self
                .db
                .begin()
                .await
                .map_err(|source| DatabaseError::TransactionBegin { source })?,
        };

        Ok(self.txn.insert(txn))
    }

    /// Whether any statement has been issued through this session
    pub fn is_started(&self) -> bool {
        self.txn.is_some()
    }

    /// Commit the session's transaction, if one was started
    pub async fn commit(self) -> Result<(), InternalError> {
        if let Some(txn) = self.txn {
            txn.commit()
                .await
                .map_err(|source| DatabaseError::TransactionCommit { source })?;
        }

        Ok(())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("started", &self.txn.is_some())
            .finish()
    }
}
