//! # Easel GUI Application
//!
//! Generic application shell for a desktop diagram editor: main window,
//! file-action toolbar, and a pluggable workspace slot. Built with Iced
//! 0.14 using the Elm architecture (State, Message, Update, View).
//!
//! The shell owns the toolbar control registry and the window; the hosting
//! application supplies the workspace that fills the content area. All
//! initialization failures (missing property keys, unreadable assets,
//! unusable geometry) abort startup with a diagnostic naming the resource.

mod assets;
mod controller;
mod shell;
mod ui;
mod workspace;

use easel_core::{ControlRegistry, Intent, ShellError, Toggle};
use iced::widget::{column, container, stack};
use iced::{Element, Length, Task};

use controller::{AppController, NativeDialogs, ShellDispatcher};
use shell::WindowShell;
use ui::modal::ModalType;
use workspace::{BlankWorkspace, Workspace};

/// Messages raised by the shell's controls.
#[derive(Debug, Clone)]
pub enum Message {
    /// A toolbar button was activated
    Toolbar(Intent),
    /// The grid checkbox was flipped
    GridToggled(bool),
    /// The snap checkbox was flipped
    SnapToggled(bool),
    /// The hosted workspace edited the document
    WorkspaceEdited,
    /// Unsaved-changes modal: save, then continue the parked action
    ModalSave,
    /// Unsaved-changes modal: discard edits, continue the parked action
    ModalDontSave,
    /// Unsaved-changes modal: abandon the parked action
    ModalCancel,
}

pub fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting Easel");

    let provider = assets::default_properties().unwrap_or_else(|e| abort_startup(e));
    let registry = ControlRegistry::initialize(&provider).unwrap_or_else(|e| abort_startup(e));
    let controller = AppController::new(&provider).unwrap_or_else(|e| abort_startup(e));
    let window_shell = WindowShell::build(&provider).unwrap_or_else(|e| abort_startup(e));

    let title = window_shell.title().to_string();
    let window = window_shell.into_window_settings();

    iced::application(
        move || App::new(registry.clone(), controller.clone(), title.clone()),
        App::update,
        App::view,
    )
    .title(App::title)
    .window(window)
    .run()
}

/// Initialization is non-recoverable: log the structured error and stop.
fn abort_startup(error: ShellError) -> ! {
    tracing::error!(code = error.error_code(), "startup aborted: {}", error);
    eprintln!("easel: {}", error);
    std::process::exit(1)
}

/// Top-level shell state.
struct App {
    title: String,
    registry: ControlRegistry,
    controller: AppController,
    workspace: Box<dyn Workspace>,
    picker: NativeDialogs,
    modal: Option<ModalType>,
    status: String,
}

impl App {
    fn new(registry: ControlRegistry, controller: AppController, title: String) -> Self {
        App {
            title,
            registry,
            controller,
            workspace: Box::new(BlankWorkspace),
            picker: NativeDialogs,
            modal: None,
            status: String::from("Ready"),
        }
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Toolbar(intent) => {
                {
                    let mut dispatcher = ShellDispatcher {
                        controller: &mut self.controller,
                        workspace: self.workspace.as_mut(),
                        picker: &self.picker,
                    };
                    self.registry.dispatch(intent, &mut dispatcher);
                }
                self.after_action()
            }
            Message::GridToggled(checked) => {
                self.registry.set_checked(Toggle::Grid, checked);
                Task::none()
            }
            Message::SnapToggled(checked) => {
                self.registry.set_checked(Toggle::Snap, checked);
                Task::none()
            }
            Message::WorkspaceEdited => {
                self.controller.mark_modified();
                self.after_action()
            }
            Message::ModalSave => {
                self.modal = None;
                self.controller
                    .confirm_save_then_continue(self.workspace.as_mut(), &self.picker);
                self.after_action()
            }
            Message::ModalDontSave => {
                self.modal = None;
                self.controller
                    .discard_then_continue(self.workspace.as_mut(), &self.picker);
                self.after_action()
            }
            Message::ModalCancel => {
                self.modal = None;
                self.controller.cancel_pending();
                self.after_action()
            }
        }
    }

    /// Shell-side follow-up to any dispatched action: surface a parked
    /// action as a modal, apply the controller's document-state report to
    /// the registry, and honor a confirmed exit.
    fn after_action(&mut self) -> Task<Message> {
        if let Some(action) = self.controller.pending_action() {
            self.modal = Some(ModalType::UnsavedChanges { action });
        }
        if let Some(saved) = self.controller.take_enablement_report() {
            self.registry.update_enablement(saved);
        }
        self.status = self.controller.status().to_string();

        if self.controller.take_exit_request() {
            tracing::info!("exit confirmed, closing shell");
            return iced::exit();
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let content = column![
            ui::toolbar::view_toolbar(&self.registry),
            container(self.workspace.view())
                .width(Length::Fill)
                .height(Length::Fill),
            ui::status_bar::view_status_bar(
                self.controller.current_file(),
                !self.controller.document_saved(),
                &self.status,
            ),
        ];

        let base = container(content).width(Length::Fill).height(Length::Fill);

        if let Some(modal) = &self.modal {
            stack![base, ui::modal::view_backdrop(), ui::modal::view_modal(modal)].into()
        } else {
            base.into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let provider = assets::default_properties().unwrap();
        let registry = ControlRegistry::initialize(&provider).unwrap();
        let controller = AppController::new(&provider).unwrap();
        App::new(registry, controller, String::from("Easel"))
    }

    #[test]
    fn test_fresh_shell_enablement() {
        let app = test_app();
        assert!(!app.registry.is_enabled(Intent::Save));
        assert!(!app.registry.is_enabled(Intent::SaveAs));
        assert!(app.registry.is_enabled(Intent::New));
        assert!(app.registry.is_enabled(Intent::Exit));
    }

    #[test]
    fn test_new_intent_enables_save_controls() {
        let mut app = test_app();
        let _ = app.update(Message::Toolbar(Intent::New));
        assert!(app.registry.is_enabled(Intent::Save));
        assert!(app.registry.is_enabled(Intent::SaveAs));
        assert!(app.modal.is_none());
    }

    #[test]
    fn test_disabled_save_activation_changes_nothing() {
        let mut app = test_app();
        let _ = app.update(Message::Toolbar(Intent::Save));
        assert!(!app.registry.is_enabled(Intent::Save));
        assert!(!app.registry.is_enabled(Intent::SaveAs));
    }

    #[test]
    fn test_exit_with_unsaved_edits_raises_modal() {
        let mut app = test_app();
        let _ = app.update(Message::Toolbar(Intent::New));
        let _ = app.update(Message::Toolbar(Intent::Exit));
        assert!(matches!(
            app.modal,
            Some(ModalType::UnsavedChanges {
                action: controller::PendingAction::Exit
            })
        ));

        // Cancelling keeps the document and its unsaved state.
        let _ = app.update(Message::ModalCancel);
        assert!(app.modal.is_none());
        assert!(!app.controller.document_saved());
    }

    #[test]
    fn test_toggles_do_not_touch_enablement() {
        let mut app = test_app();
        let _ = app.update(Message::GridToggled(true));
        let _ = app.update(Message::SnapToggled(true));
        assert!(app.registry.is_checked(Toggle::Grid));
        assert!(app.registry.is_checked(Toggle::Snap));
        assert!(!app.registry.is_enabled(Intent::Save));
        assert!(!app.registry.is_enabled(Intent::SaveAs));
    }

    #[test]
    fn test_workspace_edit_reports_unsaved() {
        let mut app = test_app();
        let _ = app.update(Message::WorkspaceEdited);
        assert!(app.registry.is_enabled(Intent::Save));
        assert!(!app.controller.document_saved());
    }
}
