// Stores layer - Data access and repository pattern
pub mod repository;
pub mod request_log_store;

pub use repository::{NotFoundPolicy, Predicates, Repository};
pub use request_log_store::RequestLogStore;
