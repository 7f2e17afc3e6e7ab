//! Configuration module - harness settings
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - Configuration struct definitions
//! - `loader` - File system loading and parsing

mod defaults;
mod loader;
mod types;

pub use defaults::{
    DEFAULT_LOG_FILTER, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT,
    MIN_WINDOW_WIDTH,
};
pub use loader::{config_path, load_config, load_config_from, read_config};
pub use types::Config;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
