use poem_openapi::Object;

/// Message body shared by every default-parameter response and error
#[derive(Object, Debug, Clone, PartialEq)]
pub struct MessageResponse {
    /// Human-readable message
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
