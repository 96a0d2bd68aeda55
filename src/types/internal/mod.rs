// Internal types shared between layers
pub mod request_log;

pub use request_log::RequestLogEntry;
