//! # Intents, Toggles, and Zones
//!
//! The vocabulary of the toolbar: every clickable control is bound to an
//! [`Intent`] forwarded to the action dispatcher, except the two [`Toggle`]
//! checkboxes, which are local view-state flags and never reach the
//! dispatcher. Controls render grouped into three [`Zone`]s.

/// A named high-level user action forwarded to the action dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    New,
    Load,
    Save,
    SaveAs,
    Photo,
    Code,
    Exit,
    Select,
    Resize,
    AddClass,
    AddInterface,
    Remove,
    Undo,
    Redo,
    ZoomIn,
    ZoomOut,
}

impl Intent {
    /// All intents in toolbar render order (left zone, then mid, then right).
    pub const ALL: &'static [Intent] = &[
        Intent::New,
        Intent::Load,
        Intent::Save,
        Intent::SaveAs,
        Intent::Photo,
        Intent::Code,
        Intent::Exit,
        Intent::Select,
        Intent::Resize,
        Intent::AddClass,
        Intent::AddInterface,
        Intent::Remove,
        Intent::Undo,
        Intent::Redo,
        Intent::ZoomIn,
        Intent::ZoomOut,
    ];

    /// Property key for this intent's icon resource.
    pub fn icon_key(&self) -> &'static str {
        match self {
            Intent::New => "NEW_ICON",
            Intent::Load => "LOAD_ICON",
            Intent::Save => "SAVE_ICON",
            Intent::SaveAs => "SAVE_AS_ICON",
            Intent::Photo => "PHOTO_ICON",
            Intent::Code => "CODE_ICON",
            Intent::Exit => "EXIT_ICON",
            Intent::Select => "SELECT_ICON",
            Intent::Resize => "RESIZE_ICON",
            Intent::AddClass => "ADD_CLASS_ICON",
            Intent::AddInterface => "ADD_INTERFACE_ICON",
            Intent::Remove => "REMOVE_ICON",
            Intent::Undo => "UNDO_ICON",
            Intent::Redo => "REDO_ICON",
            Intent::ZoomIn => "ZOOM_IN_ICON",
            Intent::ZoomOut => "ZOOM_OUT_ICON",
        }
    }

    /// Property key for this intent's tooltip resource.
    pub fn tooltip_key(&self) -> &'static str {
        match self {
            Intent::New => "NEW_TOOLTIP",
            Intent::Load => "LOAD_TOOLTIP",
            Intent::Save => "SAVE_TOOLTIP",
            Intent::SaveAs => "SAVE_AS_TOOLTIP",
            Intent::Photo => "PHOTO_TOOLTIP",
            Intent::Code => "CODE_TOOLTIP",
            Intent::Exit => "EXIT_TOOLTIP",
            Intent::Select => "SELECT_TOOLTIP",
            Intent::Resize => "RESIZE_TOOLTIP",
            Intent::AddClass => "ADD_CLASS_TOOLTIP",
            Intent::AddInterface => "ADD_INTERFACE_TOOLTIP",
            Intent::Remove => "REMOVE_TOOLTIP",
            Intent::Undo => "UNDO_TOOLTIP",
            Intent::Redo => "REDO_TOOLTIP",
            Intent::ZoomIn => "ZOOM_IN_TOOLTIP",
            Intent::ZoomOut => "ZOOM_OUT_TOOLTIP",
        }
    }

    /// Toolbar zone this intent's control renders in.
    pub fn zone(&self) -> Zone {
        match self {
            Intent::New
            | Intent::Load
            | Intent::Save
            | Intent::SaveAs
            | Intent::Photo
            | Intent::Code
            | Intent::Exit => Zone::Left,
            Intent::Select
            | Intent::Resize
            | Intent::AddClass
            | Intent::AddInterface
            | Intent::Remove
            | Intent::Undo
            | Intent::Redo => Zone::Mid,
            Intent::ZoomIn | Intent::ZoomOut => Zone::Right,
        }
    }

    /// Whether this intent's control starts disabled. Only Save and Save As
    /// do, since a fresh shell has no unsaved work to write.
    pub fn starts_disabled(&self) -> bool {
        matches!(self, Intent::Save | Intent::SaveAs)
    }

    /// Stable lowercase name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Intent::New => "new",
            Intent::Load => "load",
            Intent::Save => "save",
            Intent::SaveAs => "save_as",
            Intent::Photo => "photo",
            Intent::Code => "code",
            Intent::Exit => "exit",
            Intent::Select => "select",
            Intent::Resize => "resize",
            Intent::AddClass => "add_class",
            Intent::AddInterface => "add_interface",
            Intent::Remove => "remove",
            Intent::Undo => "undo",
            Intent::Redo => "redo",
            Intent::ZoomIn => "zoom_in",
            Intent::ZoomOut => "zoom_out",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A local view-state checkbox. Toggles carry no dispatcher binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Toggle {
    Grid,
    Snap,
}

impl Toggle {
    /// Both toggles in render order.
    pub const ALL: &'static [Toggle] = &[Toggle::Grid, Toggle::Snap];

    /// Property key for the checkbox label.
    pub fn label_key(&self) -> &'static str {
        match self {
            Toggle::Grid => "GRID_LABEL",
            Toggle::Snap => "SNAP_LABEL",
        }
    }

    /// Stable lowercase name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Toggle::Grid => "grid",
            Toggle::Snap => "snap",
        }
    }
}

/// A grouping of controls rendered contiguously in the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    /// File operations (new, load, save, save as, photo, code, exit)
    Left,
    /// Edit operations (select, resize, add class/interface, remove, undo, redo)
    Mid,
    /// View operations (zoom in/out) plus the grid and snap toggles
    Right,
}

impl Zone {
    /// All zones in render order.
    pub const ALL: &'static [Zone] = &[Zone::Left, Zone::Mid, Zone::Right];
}
