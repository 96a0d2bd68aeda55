// Library exports for integration tests and external use

pub mod api;
pub mod app_data;
pub mod config;
pub mod errors;
pub mod keepers;
pub mod stores;
pub mod types;

#[cfg(test)]
mod test;

pub use app_data::AppData;
