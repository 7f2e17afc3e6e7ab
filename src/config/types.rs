//! Configuration type definitions

use serde::{Deserialize, Serialize};

use super::defaults::*;

/// Harness configuration shared by the demo and storybook binaries
///
/// Every field is optional; getters fall back to the constants in
/// `defaults`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Story id opened when the storybook starts (CLI `--story` wins)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_story: Option<String>,
    /// Window width in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_width: Option<f32>,
    /// Window height in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_height: Option<f32>,
    /// tracing EnvFilter directive, used when RUST_LOG is unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl Config {
    /// Window width, clamped to MIN_WINDOW_WIDTH
    pub fn get_window_width(&self) -> f32 {
        self.window_width
            .filter(|w| w.is_finite())
            .unwrap_or(DEFAULT_WINDOW_WIDTH)
            .max(MIN_WINDOW_WIDTH)
    }

    /// Window height, clamped to MIN_WINDOW_HEIGHT
    pub fn get_window_height(&self) -> f32 {
        self.window_height
            .filter(|h| h.is_finite())
            .unwrap_or(DEFAULT_WINDOW_HEIGHT)
            .max(MIN_WINDOW_HEIGHT)
    }

    pub fn get_log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
