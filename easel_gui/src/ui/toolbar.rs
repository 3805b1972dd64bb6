//! Toolbar component
//!
//! Renders the control registry's three zones. Buttons carry the icon label
//! and tooltip resolved at registry initialization; a disabled control keeps
//! its slot but takes no presses. The grid/snap checkboxes flip local
//! view-state flags and raise no intent.

use iced::widget::{button, checkbox, container, row, text, tooltip, Row, Space};
use iced::{Alignment, Element, Length, Padding};

use easel_core::{Control, ControlId, ControlRegistry, Toggle, Zone};

use crate::Message;

/// Render the full toolbar from the registry.
pub fn view_toolbar(registry: &ControlRegistry) -> Element<'_, Message> {
    row![
        view_zone(registry, Zone::Left),
        Space::new().width(16),
        view_zone(registry, Zone::Mid),
        Space::new().width(16),
        view_zone(registry, Zone::Right),
        Space::new().width(Length::Fill),
    ]
    .padding(Padding::from([4, 0]))
    .align_y(Alignment::Center)
    .into()
}

/// Render one zone's controls in creation order.
fn view_zone(registry: &ControlRegistry, zone: Zone) -> Element<'_, Message> {
    let mut controls: Row<'_, Message> = row![].spacing(4).align_y(Alignment::Center);
    for control in registry.controls_in(zone) {
        controls = controls.push(view_control(control));
    }
    controls.into()
}

fn view_control(control: &Control) -> Element<'_, Message> {
    match control.id {
        ControlId::Action(intent) => {
            let btn = button(text(control.icon.as_str()).size(11))
                .on_press_maybe(control.enabled.then_some(Message::Toolbar(intent)))
                .padding(Padding::from([4, 8]))
                .style(button::secondary);

            tooltip(
                btn,
                container(text(control.tooltip.as_str()).size(10))
                    .padding(4)
                    .style(container::bordered_box),
                tooltip::Position::Bottom,
            )
            .into()
        }
        ControlId::Toggle(t) => {
            let on_toggle = match t {
                Toggle::Grid => Message::GridToggled,
                Toggle::Snap => Message::SnapToggled,
            };
            checkbox(control.checked)
                .label(control.icon.clone())
                .on_toggle(on_toggle)
                .text_size(11)
                .into()
        }
    }
}
