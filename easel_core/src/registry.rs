//! # Toolbar Control Registry
//!
//! Owns the full set of toolbar controls, their grouping into zones, and
//! their enablement state. Controls are created once by [`ControlRegistry::initialize`]
//! and live until shell teardown; the only state transition is
//! [`ControlRegistry::update_enablement`], driven by the externally reported
//! document-saved flag.
//!
//! Enablement is a latch for every control except Save: once
//! `update_enablement` has run, Save As and the rest stay enabled for the
//! registry's lifetime, while Save alone tracks the negation of the saved
//! flag.

use crate::dispatcher::{self, ActionDispatcher};
use crate::errors::ShellResult;
use crate::intent::{Intent, Toggle, Zone};
use crate::resources::ResourceProvider;

/// Identity of a toolbar control: either an intent-bound button or a local
/// view-state checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    Action(Intent),
    Toggle(Toggle),
}

/// A single interactive toolbar element.
///
/// `icon` and `tooltip` hold the strings resolved from the resource provider
/// at initialization. For toggles, `icon` doubles as the checkbox label and
/// `checked` carries the local flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    pub id: ControlId,
    pub icon: String,
    pub tooltip: String,
    pub enabled: bool,
    pub checked: bool,
    pub zone: Zone,
}

/// The toolbar control registry.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlRegistry {
    controls: Vec<Control>,
}

impl ControlRegistry {
    /// Construct every control for the three zones, resolving all icon and
    /// tooltip strings up front.
    ///
    /// All-or-nothing: any missing resource key aborts with
    /// [`ShellError::MissingProperty`](crate::errors::ShellError::MissingProperty)
    /// and yields no partially-built registry.
    pub fn initialize(provider: &dyn ResourceProvider) -> ShellResult<Self> {
        let mut controls = Vec::with_capacity(Intent::ALL.len() + Toggle::ALL.len());

        for intent in Intent::ALL {
            let icon = provider.get_property(intent.icon_key())?;
            let tooltip = provider.get_property(intent.tooltip_key())?;
            controls.push(Control {
                id: ControlId::Action(*intent),
                icon,
                tooltip,
                enabled: !intent.starts_disabled(),
                checked: false,
                zone: intent.zone(),
            });
        }

        for toggle in Toggle::ALL {
            let label = provider.get_property(toggle.label_key())?;
            controls.push(Control {
                id: ControlId::Toggle(*toggle),
                icon: label.clone(),
                tooltip: label,
                enabled: true,
                checked: false,
                zone: Zone::Right,
            });
        }

        tracing::debug!(controls = controls.len(), "toolbar control registry initialized");
        Ok(ControlRegistry { controls })
    }

    /// Every property key `initialize` resolves, in resolution order.
    pub fn required_keys() -> Vec<&'static str> {
        Intent::ALL
            .iter()
            .flat_map(|i| [i.icon_key(), i.tooltip_key()])
            .chain(Toggle::ALL.iter().map(|t| t.label_key()))
            .collect()
    }

    /// Apply the externally reported document-saved state.
    ///
    /// Save tracks `!saved`; every other control latches to enabled and
    /// never re-disables, even when a later document is saved again.
    pub fn update_enablement(&mut self, saved: bool) {
        for control in &mut self.controls {
            control.enabled = match control.id {
                ControlId::Action(Intent::Save) => !saved,
                _ => true,
            };
        }
        tracing::debug!(saved, "toolbar enablement updated");
    }

    /// Forward an activated control's intent to the dispatcher.
    ///
    /// Returns the dispatcher's success flag, or `false` without forwarding
    /// when the control is disabled. Never mutates registry state;
    /// enablement changes arrive only via [`Self::update_enablement`].
    pub fn dispatch(&self, intent: Intent, dispatcher: &mut dyn ActionDispatcher) -> bool {
        if !self.is_enabled(intent) {
            tracing::warn!(intent = intent.name(), "ignoring activation of disabled control");
            return false;
        }
        tracing::debug!(intent = intent.name(), "forwarding toolbar intent");
        dispatcher::forward(dispatcher, intent)
    }

    /// Enabled flag of an intent-bound control.
    pub fn is_enabled(&self, intent: Intent) -> bool {
        self.control(ControlId::Action(intent))
            .map(|c| c.enabled)
            .unwrap_or(false)
    }

    /// Checked flag of a toggle control.
    pub fn is_checked(&self, toggle: Toggle) -> bool {
        self.control(ControlId::Toggle(toggle))
            .map(|c| c.checked)
            .unwrap_or(false)
    }

    /// Set a toggle's local flag. Toggles never reach the dispatcher.
    pub fn set_checked(&mut self, toggle: Toggle, checked: bool) {
        if let Some(control) = self.control_mut(ControlId::Toggle(toggle)) {
            control.checked = checked;
            tracing::debug!(toggle = toggle.name(), checked, "toggle flipped");
        }
    }

    /// All controls in creation order.
    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    /// Controls belonging to one zone, in creation order.
    pub fn controls_in(&self, zone: Zone) -> impl Iterator<Item = &Control> {
        self.controls.iter().filter(move |c| c.zone == zone)
    }

    fn control(&self, id: ControlId) -> Option<&Control> {
        self.controls.iter().find(|c| c.id == id)
    }

    fn control_mut(&mut self, id: ControlId) -> Option<&mut Control> {
        self.controls.iter_mut().find(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatcher::testing::RecordingDispatcher;
    use crate::errors::ShellError;
    use crate::resources::PropertiesProvider;

    fn test_provider() -> PropertiesProvider {
        let mut provider = PropertiesProvider::default();
        for key in ControlRegistry::required_keys() {
            provider.insert(key, format!("value for {}", key));
        }
        provider
    }

    #[test]
    fn test_fresh_registry_enablement() {
        let registry = ControlRegistry::initialize(&test_provider()).unwrap();
        assert!(!registry.is_enabled(Intent::Save));
        assert!(!registry.is_enabled(Intent::SaveAs));
        assert!(registry.is_enabled(Intent::New));
        assert!(registry.is_enabled(Intent::Load));
        assert!(registry.is_enabled(Intent::Exit));
        assert!(registry.is_enabled(Intent::Undo));
    }

    #[test]
    fn test_editing_began_enables_save_controls() {
        let mut registry = ControlRegistry::initialize(&test_provider()).unwrap();
        registry.update_enablement(false);
        assert!(registry.is_enabled(Intent::Save));
        assert!(registry.is_enabled(Intent::SaveAs));
    }

    #[test]
    fn test_save_as_latches_when_document_saved_again() {
        let mut registry = ControlRegistry::initialize(&test_provider()).unwrap();
        registry.update_enablement(false);
        registry.update_enablement(true);
        assert!(!registry.is_enabled(Intent::Save));
        assert!(registry.is_enabled(Intent::SaveAs));
    }

    #[test]
    fn test_save_tracks_negation_over_any_sequence() {
        let mut registry = ControlRegistry::initialize(&test_provider()).unwrap();
        for saved in [true, false, false, true, false, true, true] {
            registry.update_enablement(saved);
            assert_eq!(registry.is_enabled(Intent::Save), !saved);
        }
    }

    #[test]
    fn test_non_save_controls_stay_enabled_after_first_update() {
        let mut registry = ControlRegistry::initialize(&test_provider()).unwrap();
        registry.update_enablement(false);
        for saved in [true, false, true, true] {
            registry.update_enablement(saved);
            for intent in Intent::ALL {
                if *intent != Intent::Save {
                    assert!(registry.is_enabled(*intent), "{} re-disabled", intent);
                }
            }
        }
    }

    #[test]
    fn test_missing_key_aborts_initialization() {
        for key in ControlRegistry::required_keys() {
            let mut provider = test_provider();
            provider.remove(key);
            let err = ControlRegistry::initialize(&provider).unwrap_err();
            assert_eq!(
                err,
                ShellError::MissingProperty {
                    key: key.to_string()
                }
            );
        }
    }

    #[test]
    fn test_dispatch_forwards_exactly_once_without_mutation() {
        let registry = ControlRegistry::initialize(&test_provider()).unwrap();
        let mut dispatcher = RecordingDispatcher::default();

        let before = registry.clone();
        assert!(registry.dispatch(Intent::New, &mut dispatcher));
        assert_eq!(dispatcher.received, vec![Intent::New]);
        assert_eq!(registry, before);
    }

    #[test]
    fn test_disabled_control_does_not_dispatch() {
        let registry = ControlRegistry::initialize(&test_provider()).unwrap();
        let mut dispatcher = RecordingDispatcher::default();

        assert!(!registry.dispatch(Intent::Save, &mut dispatcher));
        assert!(dispatcher.received.is_empty());
    }

    #[test]
    fn test_zone_grouping_and_order() {
        let registry = ControlRegistry::initialize(&test_provider()).unwrap();

        let left: Vec<ControlId> = registry.controls_in(Zone::Left).map(|c| c.id).collect();
        assert_eq!(left.len(), 7);
        assert_eq!(left[0], ControlId::Action(Intent::New));
        assert_eq!(left[6], ControlId::Action(Intent::Exit));

        let mid: Vec<ControlId> = registry.controls_in(Zone::Mid).map(|c| c.id).collect();
        assert_eq!(mid.len(), 7);
        assert_eq!(mid[0], ControlId::Action(Intent::Select));

        let right: Vec<ControlId> = registry.controls_in(Zone::Right).map(|c| c.id).collect();
        assert_eq!(
            right,
            vec![
                ControlId::Action(Intent::ZoomIn),
                ControlId::Action(Intent::ZoomOut),
                ControlId::Toggle(Toggle::Grid),
                ControlId::Toggle(Toggle::Snap),
            ]
        );
    }

    #[test]
    fn test_toggles_are_local_flags() {
        let mut registry = ControlRegistry::initialize(&test_provider()).unwrap();
        assert!(!registry.is_checked(Toggle::Grid));
        registry.set_checked(Toggle::Grid, true);
        assert!(registry.is_checked(Toggle::Grid));
        assert!(!registry.is_checked(Toggle::Snap));

        // Flipping a toggle moves no intent through the dispatcher; there is
        // no dispatch path for toggles at all, so the registry's control
        // count and enablement are untouched.
        assert_eq!(registry.controls().len(), 20);
        assert!(!registry.is_enabled(Intent::Save));
    }

    #[test]
    fn test_controls_resolve_provider_strings() {
        let registry = ControlRegistry::initialize(&test_provider()).unwrap();
        let save = registry
            .controls()
            .iter()
            .find(|c| c.id == ControlId::Action(Intent::Save))
            .unwrap();
        assert_eq!(save.icon, "value for SAVE_ICON");
        assert_eq!(save.tooltip, "value for SAVE_TOOLTIP");
    }
}
