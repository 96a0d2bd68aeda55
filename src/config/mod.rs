mod env_provider;
mod errors;
mod logging;
mod settings;
pub mod database;

pub use env_provider::{EnvironmentProvider, MapEnvironment, SystemEnvironment};
pub use errors::ApplicationError;
pub use logging::{init_logging, init_logging_with, LoggingConfig, LoggingError};
pub use settings::{GetMode, Settings};
pub use database::{Session, SessionProvider};
