//! Default configuration values
//!
//! All constants used throughout the config module are defined here.

/// Config file location, tilde-expanded at load time
pub const DEFAULT_CONFIG_PATH: &str = "~/.button-kit/config.json";

/// Default window size for the demo and storybook windows
pub const DEFAULT_WINDOW_WIDTH: f32 = 1200.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// Smallest window size accepted from config
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;

/// Default tracing filter when neither RUST_LOG nor config sets one
pub const DEFAULT_LOG_FILTER: &str = "info,gpui=warn";
