//! Application configuration module
//!
//! Settings loaded from the environment plus column and key constants
//! shared by the domain and storage layers.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
