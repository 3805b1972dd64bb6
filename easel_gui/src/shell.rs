//! Window Shell
//!
//! Builds the top-level window from the resource bundle: title, application
//! icon, and geometry. Construction is all-or-nothing; a missing property,
//! an unreadable icon asset, or unusable geometry aborts startup.

use easel_core::{resources, ResourceProvider, ShellError, ShellResult};
use iced::{window, Size};

use crate::assets;

/// Geometry used when the bundle does not pin a window size. Stands in for
/// the primary display's visual bounds, which iced cannot query before the
/// event loop starts.
const DEFAULT_SIZE: Size = Size::new(1280.0, 800.0);
const MIN_SIZE: Size = Size::new(960.0, 600.0);

/// The assembled top-level window: title, icon, and geometry, ready to hand
/// to the iced runtime. The content area between toolbar and status bar is
/// filled later by the hosting application's workspace.
#[derive(Debug)]
pub struct WindowShell {
    title: String,
    size: Size,
    icon: window::Icon,
}

impl WindowShell {
    /// Resolve title, logo, and geometry from the resource bundle. Called
    /// once at startup.
    pub fn build(provider: &dyn ResourceProvider) -> ShellResult<Self> {
        let title = provider.get_property(resources::APP_TITLE)?;
        let logo = provider.get_property(resources::APP_LOGO)?;
        let icon = assets::window_icon(&logo)?;
        let size = resolve_geometry(provider)?;

        tracing::info!(
            title = %title,
            width = size.width,
            height = size.height,
            "window shell built"
        );
        Ok(WindowShell { title, size, icon })
    }

    /// The window-bar title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Consume the shell into iced window settings.
    pub fn into_window_settings(self) -> window::Settings {
        window::Settings {
            size: self.size,
            min_size: Some(MIN_SIZE),
            icon: Some(self.icon),
            ..Default::default()
        }
    }
}

/// Resolve the window size. `WINDOW_WIDTH`/`WINDOW_HEIGHT` are optional
/// overrides; a present but non-positive or unparsable dimension is fatal.
fn resolve_geometry(provider: &dyn ResourceProvider) -> ShellResult<Size> {
    let width = dimension(provider, resources::WINDOW_WIDTH, DEFAULT_SIZE.width)?;
    let height = dimension(provider, resources::WINDOW_HEIGHT, DEFAULT_SIZE.height)?;
    Ok(Size::new(width, height))
}

fn dimension(provider: &dyn ResourceProvider, key: &str, fallback: f32) -> ShellResult<f32> {
    let raw = match provider.get_property(key) {
        Ok(raw) => raw,
        Err(_) => return Ok(fallback),
    };

    let value: f32 = raw
        .trim()
        .parse()
        .map_err(|_| ShellError::window_init(format!("{} is not a number: '{}'", key, raw)))?;
    if value <= 0.0 {
        return Err(ShellError::window_init(format!(
            "{} must be positive, got {}",
            key, value
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_core::resources::{APP_LOGO, APP_TITLE, WINDOW_HEIGHT, WINDOW_WIDTH};
    use easel_core::PropertiesProvider;

    fn bundle() -> PropertiesProvider {
        let mut provider = PropertiesProvider::default();
        provider.insert(APP_TITLE, "Easel");
        provider.insert(APP_LOGO, "logo.png");
        provider
    }

    #[test]
    fn test_build_resolves_title_and_icon() {
        let shell = WindowShell::build(&bundle()).unwrap();
        assert_eq!(shell.title(), "Easel");
        assert_eq!(shell.size, DEFAULT_SIZE);
    }

    #[test]
    fn test_build_fails_without_title() {
        let mut provider = bundle();
        provider.remove(APP_TITLE);
        let err = WindowShell::build(&provider).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_PROPERTY");
    }

    #[test]
    fn test_build_fails_on_unreadable_logo() {
        let mut provider = bundle();
        provider.insert(APP_LOGO, "missing.png");
        let err = WindowShell::build(&provider).unwrap_err();
        assert_eq!(err.error_code(), "IMAGE_LOAD");
    }

    #[test]
    fn test_configured_geometry_is_honored() {
        let mut provider = bundle();
        provider.insert(WINDOW_WIDTH, "1024");
        provider.insert(WINDOW_HEIGHT, "768");
        let size = resolve_geometry(&provider).unwrap();
        assert_eq!(size, Size::new(1024.0, 768.0));
    }

    #[test]
    fn test_non_positive_geometry_is_fatal() {
        let mut provider = bundle();
        provider.insert(WINDOW_WIDTH, "0");
        let err = resolve_geometry(&provider).unwrap_err();
        assert_eq!(err.error_code(), "WINDOW_INIT");
    }

    #[test]
    fn test_unparsable_geometry_is_fatal() {
        let mut provider = bundle();
        provider.insert(WINDOW_HEIGHT, "tall");
        let err = resolve_geometry(&provider).unwrap_err();
        assert_eq!(err.error_code(), "WINDOW_INIT");
    }
}
