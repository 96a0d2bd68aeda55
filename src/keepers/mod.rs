// Keepers layer - Use-case functions
//
// Each keeper takes a session by value, performs one unit of work on it and
// commits before building its response.
pub mod parameter_keeper;

pub use parameter_keeper::{create_parameter, get_parameter, save_parameter};
