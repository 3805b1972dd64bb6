//! Status Bar (Bottom)
//!
//! Displays:
//! - Current file path
//! - Modified indicator (*)
//! - Outcome of the last action

use std::path::Path;

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use crate::Message;

/// Render the status bar
pub fn view_status_bar<'a>(
    current_file: Option<&'a Path>,
    is_modified: bool,
    status: &'a str,
) -> Element<'a, Message> {
    let file_info = match current_file {
        Some(path) => path.display().to_string(),
        None => "Untitled".to_string(),
    };

    let modified_indicator = if is_modified { " *" } else { "" };

    row![
        text(format!("{}{}", file_info, modified_indicator)).size(10),
        Space::new().width(Length::Fill),
        text(status).size(10),
    ]
    .padding(Padding::from([4, 8]))
    .into()
}
