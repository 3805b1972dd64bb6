//! # Error Types
//!
//! Structured error types for easel_core. Every failure during shell
//! initialization is fatal and carries enough context (the missing key or
//! unreadable path) to diagnose the broken resource bundle.
//!
//! ## Example
//!
//! ```rust
//! use easel_core::errors::{ShellError, ShellResult};
//!
//! fn require_title(title: Option<&str>) -> ShellResult<&str> {
//!     title.ok_or_else(|| ShellError::missing_property("APP_TITLE"))
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for easel_core operations
pub type ShellResult<T> = Result<T, ShellError>;

/// Structured error type for shell operations.
///
/// Each variant names the resource that could not be resolved, so startup
/// diagnostics can point at the exact property key or asset path.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ShellError {
    /// A required property key is absent from the resource bundle
    #[error("Missing required property: {key}")]
    MissingProperty { key: String },

    /// An icon asset could not be loaded or decoded
    #[error("Image load failed for '{path}': {reason}")]
    ImageLoad { path: String, reason: String },

    /// No usable window geometry could be determined
    #[error("Window initialization failed: {reason}")]
    WindowInit { reason: String },

    /// File I/O error (document save/load in the reference controller)
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },
}

impl ShellError {
    /// Create a MissingProperty error
    pub fn missing_property(key: impl Into<String>) -> Self {
        ShellError::MissingProperty { key: key.into() }
    }

    /// Create an ImageLoad error
    pub fn image_load(path: impl Into<String>, reason: impl Into<String>) -> Self {
        ShellError::ImageLoad {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a WindowInit error
    pub fn window_init(reason: impl Into<String>) -> Self {
        ShellError::WindowInit {
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ShellError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a Serialization error
    pub fn serialization(reason: impl Into<String>) -> Self {
        ShellError::Serialization {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ShellError::MissingProperty { .. } => "MISSING_PROPERTY",
            ShellError::ImageLoad { .. } => "IMAGE_LOAD",
            ShellError::WindowInit { .. } => "WINDOW_INIT",
            ShellError::FileError { .. } => "FILE_ERROR",
            ShellError::Serialization { .. } => "SERIALIZATION",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = ShellError::missing_property("SAVE_TOOLTIP");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: ShellError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ShellError::missing_property("APP_TITLE").error_code(),
            "MISSING_PROPERTY"
        );
        assert_eq!(
            ShellError::image_load("logo.png", "not embedded").error_code(),
            "IMAGE_LOAD"
        );
        assert_eq!(
            ShellError::window_init("zero height").error_code(),
            "WINDOW_INIT"
        );
        assert_eq!(
            ShellError::file_error("write", "a.esl", "denied").error_code(),
            "FILE_ERROR"
        );
        assert_eq!(
            ShellError::serialization("bad json").error_code(),
            "SERIALIZATION"
        );
    }

    #[test]
    fn test_error_display_names_resource() {
        let error = ShellError::missing_property("NEW_ICON");
        assert!(error.to_string().contains("NEW_ICON"));
    }
}
