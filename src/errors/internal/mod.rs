use thiserror::Error;

pub mod database;
pub mod record;

pub use database::DatabaseError;
pub use record::RecordError;

/// Internal error type for store, session and keeper operations
///
/// Database errors are shared by every layer; record errors come from the
/// generic repository.
/// Not exposed via API - endpoints must convert to DefaultError.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Record(#[from] RecordError),
}

impl InternalError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation { operation: operation.to_string(), source })
    }

    /// True when the error is a repository not-found under the `Raise` policy
    pub fn is_not_found(&self) -> bool {
        matches!(self, InternalError::Record(RecordError::NotFound { .. }))
    }
}
