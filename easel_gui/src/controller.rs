//! File-lifecycle controller
//!
//! The reference [`ActionDispatcher`] implementation: file intents (new,
//! load, save, save as, exit) are handled here against the hosted
//! workspace's JSON snapshot; every other intent is forwarded to the
//! workspace itself.
//!
//! New, load, and exit guard unsaved work: instead of acting immediately
//! they park a [`PendingAction`] which the shell surfaces as a confirmation
//! modal. The modal's outcome resumes or cancels the parked action.
//!
//! After any completed action the controller records the new document state;
//! the shell drains it with [`AppController::take_enablement_report`] and
//! applies it to the control registry. Dispatching never touches the
//! registry directly.

use std::fs;
use std::path::{Path, PathBuf};

use easel_core::{resources, ActionDispatcher, Intent, ResourceProvider, ShellError, ShellResult};

use crate::workspace::Workspace;

/// Actions parked while the unsaved-changes modal is up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    NewDocument,
    LoadDocument,
    Exit,
}

impl std::fmt::Display for PendingAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PendingAction::NewDocument => write!(f, "create a new diagram"),
            PendingAction::LoadDocument => write!(f, "load another diagram"),
            PendingAction::Exit => write!(f, "exit"),
        }
    }
}

/// Picks document paths for the save and load dialogs.
///
/// The shell passes [`NativeDialogs`]; tests substitute canned paths so the
/// dialog-cancel branches run headless.
pub trait PathPicker {
    fn pick_save_path(&self, description: &str, extension: &str) -> Option<PathBuf>;
    fn pick_load_path(&self, description: &str, extension: &str) -> Option<PathBuf>;
}

/// Native file dialogs via rfd.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeDialogs;

impl PathPicker for NativeDialogs {
    fn pick_save_path(&self, description: &str, extension: &str) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .add_filter(description, &[extension])
            .save_file()
    }

    fn pick_load_path(&self, description: &str, extension: &str) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .add_filter(description, &[extension])
            .pick_file()
    }
}

/// Tracks the current document file and saved state, and executes the file
/// intents against it.
#[derive(Debug, Clone)]
pub struct AppController {
    current_file: Option<PathBuf>,
    saved: bool,
    file_ext: String,
    file_ext_desc: String,
    pending: Option<PendingAction>,
    exit_requested: bool,
    report: Option<bool>,
    status: String,
}

impl AppController {
    /// Build a controller from the resource bundle's file-format properties.
    pub fn new(provider: &dyn ResourceProvider) -> ShellResult<Self> {
        Ok(AppController {
            current_file: None,
            saved: true,
            file_ext: provider.get_property(resources::WORK_FILE_EXT)?,
            file_ext_desc: provider.get_property(resources::WORK_FILE_EXT_DESC)?,
            pending: None,
            exit_requested: false,
            report: None,
            status: String::from("Ready"),
        })
    }

    /// Whether the current document has no unsaved edits.
    pub fn document_saved(&self) -> bool {
        self.saved
    }

    /// Path of the document on disk, once it has one.
    pub fn current_file(&self) -> Option<&Path> {
        self.current_file.as_deref()
    }

    /// Human-readable outcome of the most recent action.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Record that the workspace edited the document.
    pub fn mark_modified(&mut self) {
        self.saved = false;
        self.report = Some(false);
    }

    /// Action parked behind the unsaved-changes confirmation, if any.
    pub fn pending_action(&self) -> Option<PendingAction> {
        self.pending
    }

    /// Drain the exit flag set by a confirmed exit intent.
    pub fn take_exit_request(&mut self) -> bool {
        std::mem::take(&mut self.exit_requested)
    }

    /// Drain the document-state report of the last completed action. The
    /// shell feeds this to `ControlRegistry::update_enablement`; no report
    /// means no action completed and enablement stays untouched.
    pub fn take_enablement_report(&mut self) -> Option<bool> {
        self.report.take()
    }

    /// Resolve the parked action by saving first. An unsaved or cancelled
    /// save abandons the parked action.
    pub fn confirm_save_then_continue(
        &mut self,
        workspace: &mut dyn Workspace,
        picker: &dyn PathPicker,
    ) -> bool {
        if !self.handle_save(&*workspace, picker) {
            self.pending = None;
            return false;
        }
        self.continue_pending(workspace, picker)
    }

    /// Resolve the parked action by discarding unsaved edits. The discard
    /// happens through the action itself (a new or loaded document replaces
    /// the edits); a cancelled or failed action leaves the document
    /// unsaved, keeping the exit guard armed.
    pub fn discard_then_continue(
        &mut self,
        workspace: &mut dyn Workspace,
        picker: &dyn PathPicker,
    ) -> bool {
        self.continue_pending(workspace, picker)
    }

    /// Abandon the parked action.
    pub fn cancel_pending(&mut self) {
        self.pending = None;
        self.status = String::from("Cancelled");
    }

    fn continue_pending(&mut self, workspace: &mut dyn Workspace, picker: &dyn PathPicker) -> bool {
        match self.pending.take() {
            Some(PendingAction::NewDocument) => {
                self.start_new(workspace);
                true
            }
            Some(PendingAction::LoadDocument) => {
                match picker.pick_load_path(&self.file_ext_desc, &self.file_ext) {
                    Some(path) => self.load_from(&path, workspace),
                    None => {
                        self.status = String::from("Load cancelled");
                        false
                    }
                }
            }
            Some(PendingAction::Exit) => {
                self.exit_requested = true;
                true
            }
            None => true,
        }
    }

    fn handle_new(&mut self, workspace: &mut dyn Workspace) -> bool {
        if !self.saved {
            self.pending = Some(PendingAction::NewDocument);
            return true;
        }
        self.start_new(workspace);
        true
    }

    fn start_new(&mut self, workspace: &mut dyn Workspace) {
        workspace.clear();
        self.current_file = None;
        self.saved = false;
        self.report = Some(false);
        self.status = String::from("New diagram");
        tracing::info!("new document started");
    }

    fn handle_load(&mut self, workspace: &mut dyn Workspace, picker: &dyn PathPicker) -> bool {
        if !self.saved {
            self.pending = Some(PendingAction::LoadDocument);
            return true;
        }
        match picker.pick_load_path(&self.file_ext_desc, &self.file_ext) {
            Some(path) => self.load_from(&path, workspace),
            None => {
                self.status = String::from("Load cancelled");
                false
            }
        }
    }

    pub(crate) fn load_from(&mut self, path: &Path, workspace: &mut dyn Workspace) -> bool {
        match read_snapshot(path) {
            Ok(snapshot) => {
                workspace.restore(snapshot);
                self.current_file = Some(path.to_path_buf());
                self.saved = false;
                self.report = Some(false);
                self.status = format!("Loaded {}", path.display());
                tracing::info!(path = %path.display(), "document loaded");
                true
            }
            Err(e) => {
                self.status = e.to_string();
                tracing::error!(path = %path.display(), error = %e, "load failed");
                false
            }
        }
    }

    fn handle_save(&mut self, workspace: &dyn Workspace, picker: &dyn PathPicker) -> bool {
        let path = match &self.current_file {
            Some(path) => path.clone(),
            None => match picker.pick_save_path(&self.file_ext_desc, &self.file_ext) {
                Some(path) => path,
                None => {
                    self.status = String::from("Save cancelled");
                    return false;
                }
            },
        };
        self.save_to(&path, workspace)
    }

    fn handle_save_as(&mut self, workspace: &dyn Workspace, picker: &dyn PathPicker) -> bool {
        match picker.pick_save_path(&self.file_ext_desc, &self.file_ext) {
            Some(path) => self.save_to(&path, workspace),
            None => {
                self.status = String::from("Save cancelled");
                false
            }
        }
    }

    pub(crate) fn save_to(&mut self, path: &Path, workspace: &dyn Workspace) -> bool {
        match write_snapshot(path, &workspace.snapshot()) {
            Ok(()) => {
                self.current_file = Some(path.to_path_buf());
                self.saved = true;
                self.report = Some(true);
                self.status = format!("Saved {}", path.display());
                tracing::info!(path = %path.display(), "document saved");
                true
            }
            Err(e) => {
                self.status = e.to_string();
                tracing::error!(path = %path.display(), error = %e, "save failed");
                false
            }
        }
    }

    fn handle_exit(&mut self) -> bool {
        if !self.saved {
            self.pending = Some(PendingAction::Exit);
            return true;
        }
        self.exit_requested = true;
        true
    }
}

/// Dispatcher view over the controller and the hosted workspace: file
/// intents go to the controller, edit and view intents to the workspace.
pub struct ShellDispatcher<'a> {
    pub controller: &'a mut AppController,
    pub workspace: &'a mut dyn Workspace,
    pub picker: &'a dyn PathPicker,
}

impl ActionDispatcher for ShellDispatcher<'_> {
    fn on_new(&mut self) -> bool {
        self.controller.handle_new(self.workspace)
    }
    fn on_load(&mut self) -> bool {
        self.controller.handle_load(self.workspace, self.picker)
    }
    fn on_save(&mut self) -> bool {
        self.controller.handle_save(&*self.workspace, self.picker)
    }
    fn on_save_as(&mut self) -> bool {
        self.controller.handle_save_as(&*self.workspace, self.picker)
    }
    fn on_exit(&mut self) -> bool {
        self.controller.handle_exit()
    }
    fn on_photo(&mut self) -> bool {
        self.workspace.apply(Intent::Photo)
    }
    fn on_code(&mut self) -> bool {
        self.workspace.apply(Intent::Code)
    }
    fn on_select(&mut self) -> bool {
        self.workspace.apply(Intent::Select)
    }
    fn on_resize(&mut self) -> bool {
        self.workspace.apply(Intent::Resize)
    }
    fn on_add_class(&mut self) -> bool {
        self.workspace.apply(Intent::AddClass)
    }
    fn on_add_interface(&mut self) -> bool {
        self.workspace.apply(Intent::AddInterface)
    }
    fn on_remove(&mut self) -> bool {
        self.workspace.apply(Intent::Remove)
    }
    fn on_undo(&mut self) -> bool {
        self.workspace.apply(Intent::Undo)
    }
    fn on_redo(&mut self) -> bool {
        self.workspace.apply(Intent::Redo)
    }
    fn on_zoom_in(&mut self) -> bool {
        self.workspace.apply(Intent::ZoomIn)
    }
    fn on_zoom_out(&mut self) -> bool {
        self.workspace.apply(Intent::ZoomOut)
    }
}

/// Atomic snapshot write: write to `<path>.tmp`, then rename over the target.
fn write_snapshot(path: &Path, snapshot: &serde_json::Value) -> ShellResult<()> {
    let json = serde_json::to_string_pretty(snapshot)
        .map_err(|e| ShellError::serialization(e.to_string()))?;

    let tmp_path = tmp_path_for(path);
    fs::write(&tmp_path, json).map_err(|e| {
        ShellError::file_error("write", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        ShellError::file_error("rename", path.display().to_string(), e.to_string())
    })
}

fn read_snapshot(path: &Path) -> ShellResult<serde_json::Value> {
    let text = fs::read_to_string(path)
        .map_err(|e| ShellError::file_error("read", path.display().to_string(), e.to_string()))?;
    serde_json::from_str(&text).map_err(|e| ShellError::serialization(e.to_string()))
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_owned();
    os.push(".tmp");
    PathBuf::from(os)
}
