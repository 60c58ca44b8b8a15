use bevy::prelude::*;
use std::path::PathBuf;

use crate::core::scanner::scan_models;

/// State behind the modal file picker: visibility, the scanned file list and
/// the last selection. Widgets in `ui::file_picker` mirror this resource.
#[derive(Resource, Debug, Clone, Default)]
pub struct FilePicker {
    pub visible: bool,
    pub files: Vec<String>,
    pub selected: Option<usize>,
    pub dir: PathBuf,
}

impl FilePicker {
    /// Creates a picker for `dir` and performs the initial scan.
    pub fn new(dir: impl Into<PathBuf>, visible: bool) -> Self {
        let mut picker = Self {
            visible,
            dir: dir.into(),
            ..default()
        };
        picker.refresh();
        picker
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Rescans the directory, replacing the file list wholesale. The
    /// selection follows its file name, not its old position.
    pub fn refresh(&mut self) {
        let previous = self
            .selected
            .and_then(|index| self.files.get(index))
            .cloned();

        self.files = scan_models(&self.dir);
        self.selected = previous.and_then(|name| self.files.iter().position(|file| *file == name));
    }

    /// Records the selection and hides the dialog. Returns the chosen file
    /// name, or `None` when `index` is out of range.
    pub fn select(&mut self, index: usize) -> Option<String> {
        let file_name = self.files.get(index)?.clone();
        self.selected = Some(index);
        self.visible = false;
        Some(file_name)
    }
}
