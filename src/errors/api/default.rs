use crate::errors::internal::{DatabaseError, InternalError};
use crate::types::dto::common::MessageResponse;
use poem_openapi::{ApiResponse, payload::Json};
use std::fmt;

/// Error responses for the default parameter endpoints
#[derive(ApiResponse, Debug)]
#[oai(bad_request_handler = "unprocessable_request")]
pub enum DefaultError {
    /// API key missing or wrong
    #[oai(status = 401)]
    Unauthorized(Json<MessageResponse>),

    /// Request path, query or body failed validation
    #[oai(status = 422)]
    Unprocessable(Json<MessageResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<MessageResponse>),
}

/// Converts request parse and validation failures into a 422
fn unprocessable_request(err: poem::Error) -> DefaultError {
    tracing::debug!("Rejected request payload: {}", err);
    DefaultError::unprocessable(err.to_string())
}

impl DefaultError {
    pub fn unauthorized() -> Self {
        DefaultError::Unauthorized(Json(MessageResponse::new("Unauthorized")))
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        DefaultError::Unprocessable(Json(MessageResponse::new(message)))
    }

    /// Convert InternalError to DefaultError
    ///
    /// Internal error details are logged but not exposed to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Database(DatabaseError::Operation { operation, .. }) => {
                tracing::error!("Database error in {}: {}", operation, err);
            }
            InternalError::Database(_) => {
                tracing::error!("Database session error: {}", err);
            }
            InternalError::Record(_) => {
                tracing::error!("Unhandled record error: {}", err);
            }
        }
        Self::internal_server_error()
    }

    fn internal_server_error() -> Self {
        DefaultError::InternalError(Json(MessageResponse::new("An internal error occurred")))
    }

    pub fn message(&self) -> String {
        match self {
            DefaultError::Unauthorized(json) => json.0.message.clone(),
            DefaultError::Unprocessable(json) => json.0.message.clone(),
            DefaultError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl From<InternalError> for DefaultError {
    fn from(err: InternalError) -> Self {
        Self::from_internal_error(err)
    }
}

impl fmt::Display for DefaultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
