use thiserror::Error;

/// Errors raised by the generic repository
#[derive(Error, Debug)]
pub enum RecordError {
    /// No row matched the query under the `Raise` not-found policy
    #[error("No {entity} found for the query: {conditions}")]
    NotFound {
        entity: String,
        conditions: String,
    },
}

impl RecordError {
    pub fn not_found(entity: impl Into<String>, conditions: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            conditions: conditions.into(),
        }
    }
}
