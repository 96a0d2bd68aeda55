// API-facing error types
pub mod default;

pub use default::DefaultError;
