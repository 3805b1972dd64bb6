//! # Resource Provider
//!
//! Boundary trait for the external resource bundle (localized strings and
//! icon paths) plus a JSON-backed adapter. Providers are injected explicitly
//! at construction; nothing in the shell reaches into process-wide state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{ShellError, ShellResult};

/// Key for the window title string.
pub const APP_TITLE: &str = "APP_TITLE";
/// Key for the application logo asset name.
pub const APP_LOGO: &str = "APP_LOGO";
/// Key for the grid checkbox label.
pub const GRID_LABEL: &str = "GRID_LABEL";
/// Key for the snap checkbox label.
pub const SNAP_LABEL: &str = "SNAP_LABEL";
/// Key for the document file extension (without the dot).
pub const WORK_FILE_EXT: &str = "WORK_FILE_EXT";
/// Key for the file-dialog description of the document format.
pub const WORK_FILE_EXT_DESC: &str = "WORK_FILE_EXT_DESC";
/// Optional key for a fixed window width in logical pixels.
pub const WINDOW_WIDTH: &str = "WINDOW_WIDTH";
/// Optional key for a fixed window height in logical pixels.
pub const WINDOW_HEIGHT: &str = "WINDOW_HEIGHT";

/// Maps a symbolic key to a localized string or icon path.
///
/// Implemented by the hosting application's configuration layer; consumed by
/// the control registry and window shell during initialization.
pub trait ResourceProvider {
    /// Resolve a property key, failing with
    /// [`ShellError::MissingProperty`] if the key is unknown.
    fn get_property(&self, key: &str) -> ShellResult<String>;
}

/// Resource provider backed by a flat JSON object of string properties.
///
/// ## Example
///
/// ```rust
/// use easel_core::resources::{PropertiesProvider, ResourceProvider};
///
/// let provider = PropertiesProvider::from_json_str(r#"{"APP_TITLE": "Easel"}"#).unwrap();
/// assert_eq!(provider.get_property("APP_TITLE").unwrap(), "Easel");
/// assert!(provider.get_property("NO_SUCH_KEY").is_err());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertiesProvider {
    properties: HashMap<String, String>,
}

impl PropertiesProvider {
    /// Build a provider from an existing key/value map.
    pub fn from_map(properties: HashMap<String, String>) -> Self {
        PropertiesProvider { properties }
    }

    /// Parse a provider from a JSON object of string values.
    pub fn from_json_str(json: &str) -> ShellResult<Self> {
        let properties: HashMap<String, String> = serde_json::from_str(json)
            .map_err(|e| ShellError::serialization(e.to_string()))?;
        Ok(PropertiesProvider { properties })
    }

    /// Insert or replace a property.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key.into(), value.into());
    }

    /// Remove a property, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.properties.remove(key)
    }

    /// Resolve a key only if present, without raising an error.
    pub fn get_optional(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Number of properties in the bundle.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the bundle holds no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl ResourceProvider for PropertiesProvider {
    fn get_property(&self, key: &str) -> ShellResult<String> {
        self.properties
            .get(key)
            .cloned()
            .ok_or_else(|| ShellError::missing_property(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_str() {
        let provider =
            PropertiesProvider::from_json_str(r#"{"APP_TITLE": "Easel", "APP_LOGO": "logo.png"}"#)
                .unwrap();
        assert_eq!(provider.len(), 2);
        assert_eq!(provider.get_property(APP_TITLE).unwrap(), "Easel");
        assert_eq!(provider.get_property(APP_LOGO).unwrap(), "logo.png");
    }

    #[test]
    fn test_missing_key_names_the_key() {
        let provider = PropertiesProvider::default();
        let err = provider.get_property("SAVE_ICON").unwrap_err();
        assert_eq!(
            err,
            ShellError::MissingProperty {
                key: "SAVE_ICON".to_string()
            }
        );
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let err = PropertiesProvider::from_json_str("{not json").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION");
    }

    #[test]
    fn test_insert_and_remove() {
        let mut provider = PropertiesProvider::default();
        provider.insert(GRID_LABEL, "grid");
        assert_eq!(provider.get_property(GRID_LABEL).unwrap(), "grid");
        assert_eq!(provider.remove(GRID_LABEL), Some("grid".to_string()));
        assert!(provider.get_property(GRID_LABEL).is_err());
    }
}
