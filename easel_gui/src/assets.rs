//! Embedded application assets
//!
//! The resource bundle (property strings and the window logo) ships inside
//! the binary via rust-embed. Asset lookups surface as structured shell
//! errors so a broken bundle aborts startup with the offending name.

use easel_core::{PropertiesProvider, ShellError, ShellResult};
use iced::window;
use rust_embed::RustEmbed;

/// Name of the embedded default property bundle.
pub const PROPERTIES_FILE: &str = "app.properties.json";

#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Assets;

/// Load raw image bytes for an embedded asset.
pub fn load_image(name: &str) -> ShellResult<Vec<u8>> {
    Assets::get(name)
        .map(|file| file.data.into_owned())
        .ok_or_else(|| ShellError::image_load(name, "asset not embedded"))
}

/// Decode an embedded image into a window icon.
pub fn window_icon(name: &str) -> ShellResult<window::Icon> {
    let bytes = load_image(name)?;
    window::icon::from_file_data(&bytes, None)
        .map_err(|e| ShellError::image_load(name, e.to_string()))
}

/// Parse the embedded default property bundle.
pub fn default_properties() -> ShellResult<PropertiesProvider> {
    let file = Assets::get(PROPERTIES_FILE)
        .ok_or_else(|| ShellError::file_error("read", PROPERTIES_FILE, "asset not embedded"))?;
    let text = std::str::from_utf8(&file.data)
        .map_err(|e| ShellError::serialization(e.to_string()))?;
    PropertiesProvider::from_json_str(text)
}
