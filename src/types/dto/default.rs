use poem_openapi::{ApiResponse, Object, payload::Json};

use super::common::MessageResponse;

/// Request body for creating a stored parameter
#[derive(Object, Debug, Clone)]
pub struct CreateParameterRequest {
    /// Parameter value to store (must not be empty)
    #[oai(validator(min_length = 1))]
    pub query_parameter: String,
}

/// Outcomes produced by the parameter keepers
#[derive(ApiResponse, Debug)]
pub enum DefaultResponse {
    /// Parameter saved, or the serialized parameter that matched a lookup
    #[oai(status = 200)]
    Ok(Json<serde_json::Value>),

    /// No matching parameter, or no parameter passed in store mode
    #[oai(status = 404)]
    NotFound(Json<MessageResponse>),

    /// Required parameter missing
    #[oai(status = 422)]
    Unprocessable(Json<MessageResponse>),
}

impl DefaultResponse {
    /// Create a 200 confirmation that `value` was stored under `id`
    pub fn saved(value: &str, id: i32) -> Self {
        DefaultResponse::Ok(Json(serde_json::json!({
            "message": format!("Saved {} param with ID {}", value, id),
        })))
    }

    /// Create a 200 response carrying a serialized entity
    pub fn found(fields: serde_json::Map<String, serde_json::Value>) -> Self {
        DefaultResponse::Ok(Json(serde_json::Value::Object(fields)))
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        DefaultResponse::NotFound(Json(MessageResponse::new(message)))
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        DefaultResponse::Unprocessable(Json(MessageResponse::new(message)))
    }

    /// HTTP status code of this outcome
    pub fn status_code(&self) -> u16 {
        match self {
            DefaultResponse::Ok(_) => 200,
            DefaultResponse::NotFound(_) => 404,
            DefaultResponse::Unprocessable(_) => 422,
        }
    }

    /// Message carried by this outcome, if it is a message body
    pub fn message(&self) -> Option<String> {
        match self {
            DefaultResponse::Ok(json) => json
                .0
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string),
            DefaultResponse::NotFound(json) => Some(json.0.message.clone()),
            DefaultResponse::Unprocessable(json) => Some(json.0.message.clone()),
        }
    }
}
