//! Harness error types
//!
//! The button component itself never fails: unknown variant, size, or kind
//! names degrade to defaults. Errors here come from the demo and storybook
//! harness (config files, windows).

use thiserror::Error;
use tracing::{error, warn};

/// Domain-specific errors for button-kit
#[derive(Error, Debug)]
pub enum ButtonKitError {
    #[error("Failed to read config '{path}': {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Window operation failed: {0}")]
    Window(String),
}

impl ButtonKitError {
    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigRead { path, .. } => format!("Could not read config from {}", path),
            Self::ConfigParse(e) => format!("Invalid config format: {}", e),
            Self::Window(msg) => msg.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ButtonKitError>;

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and user doesn't need to know.
///
/// # Examples
///
/// ```ignore
/// use button_kit::error::ResultExt;
///
/// let config = read_config(&path).warn_on_err();
/// ```
pub trait ResultExt<T> {
    /// Log error with caller location and return None. Use for recoverable failures.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None. Use for expected failures.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_ext_passes_ok_through() {
        let ok: std::result::Result<u32, String> = Ok(7);
        assert_eq!(ok.log_err(), Some(7));
    }

    #[test]
    fn test_result_ext_swallows_err() {
        let err: std::result::Result<u32, String> = Err("nope".into());
        assert_eq!(err.warn_on_err(), None);
    }

    #[test]
    fn test_user_messages() {
        let err = ButtonKitError::Window("no display".into());
        assert_eq!(err.user_message(), "no display");

        let parse = serde_json::from_str::<u32>("x").unwrap_err();
        let err = ButtonKitError::from(parse);
        assert!(err.user_message().starts_with("Invalid config format"));
        assert!(err.to_string().starts_with("Failed to parse config"));
    }
}
