// SPDX-License-Identifier: MPL-2.0
//! Application messages and launch flags.

use crate::domain::library::PhotoId;
use crate::ui::overlay::OverlayEvent;
use std::path::PathBuf;

/// Launch parameters parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Override for the library data directory (useful for portable setups).
    pub library_dir: Option<PathBuf>,
    /// Image files passed on the command line, imported at startup.
    pub photo_paths: Vec<PathBuf>,
}

#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    ToggleFavorite(PhotoId),
    RemovePhoto(PhotoId),
    AddPhotosPressed,
    PhotosPicked(Vec<PathBuf>),
    OpenEditor(PhotoId),
    ToggleThemeMode,
    Editor(EditorMessage),
}

#[derive(Debug, Clone)]
pub enum EditorMessage {
    Overlay(OverlayEvent),
    RotateLeft,
    RotateRight,
    FlipHorizontal,
    FlipVertical,
    ApplyCrop,
    Save,
    /// Completion of a background save: the photo and its new file on
    /// success, a printable reason otherwise.
    Saved(Result<(PhotoId, PathBuf), String>),
    Close,
}
