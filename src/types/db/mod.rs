// Database entities - SeaORM models
pub mod application_log;
pub mod fields;
pub mod request_log;
pub mod stored_parameter;

pub use fields::{FieldMap, FieldValue};
