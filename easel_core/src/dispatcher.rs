//! # Action Dispatcher
//!
//! Capability trait for the external collaborator that executes toolbar
//! intents: one method per intent, each reporting success or failure as a
//! plain `bool`. Dispatch-side failures are reported by convention, never
//! thrown through the shell.
//!
//! After completing a save-affecting action the collaborator reports the new
//! document state, and the shell calls
//! [`ControlRegistry::update_enablement`](crate::registry::ControlRegistry::update_enablement);
//! forwarding an intent never mutates registry state by itself.

use crate::intent::Intent;

/// Receives high-level intents raised by toolbar controls.
///
/// Each method executes one action and returns `true` on success. The
/// explicit intent-to-method mapping lives in [`forward`], constructed once
/// rather than as ad hoc per-control callbacks.
pub trait ActionDispatcher {
    fn on_new(&mut self) -> bool;
    fn on_load(&mut self) -> bool;
    fn on_save(&mut self) -> bool;
    fn on_save_as(&mut self) -> bool;
    fn on_photo(&mut self) -> bool;
    fn on_code(&mut self) -> bool;
    fn on_exit(&mut self) -> bool;
    fn on_select(&mut self) -> bool;
    fn on_resize(&mut self) -> bool;
    fn on_add_class(&mut self) -> bool;
    fn on_add_interface(&mut self) -> bool;
    fn on_remove(&mut self) -> bool;
    fn on_undo(&mut self) -> bool;
    fn on_redo(&mut self) -> bool;
    fn on_zoom_in(&mut self) -> bool;
    fn on_zoom_out(&mut self) -> bool;
}

/// Forward an intent to the dispatcher method bound to it.
pub fn forward(dispatcher: &mut dyn ActionDispatcher, intent: Intent) -> bool {
    match intent {
        Intent::New => dispatcher.on_new(),
        Intent::Load => dispatcher.on_load(),
        Intent::Save => dispatcher.on_save(),
        Intent::SaveAs => dispatcher.on_save_as(),
        Intent::Photo => dispatcher.on_photo(),
        Intent::Code => dispatcher.on_code(),
        Intent::Exit => dispatcher.on_exit(),
        Intent::Select => dispatcher.on_select(),
        Intent::Resize => dispatcher.on_resize(),
        Intent::AddClass => dispatcher.on_add_class(),
        Intent::AddInterface => dispatcher.on_add_interface(),
        Intent::Remove => dispatcher.on_remove(),
        Intent::Undo => dispatcher.on_undo(),
        Intent::Redo => dispatcher.on_redo(),
        Intent::ZoomIn => dispatcher.on_zoom_in(),
        Intent::ZoomOut => dispatcher.on_zoom_out(),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Dispatcher that records every intent it receives and always succeeds.
    #[derive(Debug, Default)]
    pub struct RecordingDispatcher {
        pub received: Vec<Intent>,
    }

    impl ActionDispatcher for RecordingDispatcher {
        fn on_new(&mut self) -> bool {
            self.received.push(Intent::New);
            true
        }
        fn on_load(&mut self) -> bool {
            self.received.push(Intent::Load);
            true
        }
        fn on_save(&mut self) -> bool {
            self.received.push(Intent::Save);
            true
        }
        fn on_save_as(&mut self) -> bool {
            self.received.push(Intent::SaveAs);
            true
        }
        fn on_photo(&mut self) -> bool {
            self.received.push(Intent::Photo);
            true
        }
        fn on_code(&mut self) -> bool {
            self.received.push(Intent::Code);
            true
        }
        fn on_exit(&mut self) -> bool {
            self.received.push(Intent::Exit);
            true
        }
        fn on_select(&mut self) -> bool {
            self.received.push(Intent::Select);
            true
        }
        fn on_resize(&mut self) -> bool {
            self.received.push(Intent::Resize);
            true
        }
        fn on_add_class(&mut self) -> bool {
            self.received.push(Intent::AddClass);
            true
        }
        fn on_add_interface(&mut self) -> bool {
            self.received.push(Intent::AddInterface);
            true
        }
        fn on_remove(&mut self) -> bool {
            self.received.push(Intent::Remove);
            true
        }
        fn on_undo(&mut self) -> bool {
            self.received.push(Intent::Undo);
            true
        }
        fn on_redo(&mut self) -> bool {
            self.received.push(Intent::Redo);
            true
        }
        fn on_zoom_in(&mut self) -> bool {
            self.received.push(Intent::ZoomIn);
            true
        }
        fn on_zoom_out(&mut self) -> bool {
            self.received.push(Intent::ZoomOut);
            true
        }
    }
}
