//! Pluggable workspace slot
//!
//! The shell owns the toolbar and status bar; the region between them
//! belongs to the hosting application's workspace, which the shell treats as
//! opaque. Edit and view intents are forwarded through [`Workspace::apply`];
//! document content moves across the boundary only as JSON snapshots.

use iced::widget::{container, text};
use iced::{Element, Length};

use easel_core::Intent;

use crate::Message;

/// The content area contract between the shell and the hosted editor.
pub trait Workspace {
    /// Render the workspace region.
    fn view(&self) -> Element<'_, Message>;

    /// Apply an edit or view intent (select, resize, undo, zoom, ...).
    /// Returns `false` if the workspace could not perform the action.
    fn apply(&mut self, intent: Intent) -> bool;

    /// Capture the document content for saving.
    fn snapshot(&self) -> serde_json::Value;

    /// Replace the document content from a loaded snapshot.
    fn restore(&mut self, snapshot: serde_json::Value);

    /// Reset to an empty document.
    fn clear(&mut self);
}

/// Placeholder workspace used until the hosting application installs its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlankWorkspace;

impl Workspace for BlankWorkspace {
    fn view(&self) -> Element<'_, Message> {
        container(
            text("Create or load a diagram to begin editing")
                .size(14)
                .color([0.5, 0.5, 0.5]),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
    }

    fn apply(&mut self, intent: Intent) -> bool {
        tracing::debug!(intent = intent.name(), "blank workspace ignoring intent");
        true
    }

    fn snapshot(&self) -> serde_json::Value {
        serde_json::Value::Null
    }

    fn restore(&mut self, _snapshot: serde_json::Value) {}

    fn clear(&mut self) {}
}
