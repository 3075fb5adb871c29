//! Upload screen state: staged files and recipient selection.
//!
//! Staged files are session-local and append-only, so positional
//! references (the preview index) are safe here — unlike documents, a
//! staged file has no cross-view identity to preserve.

use std::collections::BTreeSet;

use dochub_core::SelectionEngine;
use dochub_model::{DepartmentId, Employee, OrgTree};

/// File extensions accepted by the upload input.
pub const ACCEPTED_EXTENSIONS: [&str; 13] = [
    "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "txt", "jpg", "jpeg", "png", "gif", "bmp",
];

/// A file queued for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    pub name: String,
    pub size_bytes: u64,
    /// MIME type as reported by the picker; empty when unknown.
    pub content_type: String,
}

impl StagedFile {
    /// Check the file's extension against the accept list,
    /// case-insensitively.
    pub fn is_accepted(&self) -> bool {
        match self.name.rsplit_once('.') {
            Some((_, extension)) => {
                let extension = extension.to_lowercase();
                ACCEPTED_EXTENSIONS.contains(&extension.as_str())
            }
            None => false,
        }
    }
}

/// Render a byte count the way the upload list shows it: `0 Bytes`, then
/// binary units with up to two decimals and trailing zeros trimmed
/// (`1 KB`, `1.5 KB`, `2.34 MB`).
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let exponent = (bytes.ilog2() / 10).min(UNITS.len() as u32 - 1);
    let scaled = bytes as f64 / 1024f64.powi(exponent as i32);
    let rounded = (scaled * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[exponent as usize])
}

/// State behind the upload screen.
pub struct UploadState {
    staged: Vec<StagedFile>,
    preview: Option<usize>,
    selection: SelectionEngine,
    /// Expanded department rows in the sidebar. Purely a view concern,
    /// independent of selection correctness.
    expanded: BTreeSet<DepartmentId>,
}

impl UploadState {
    pub fn new(tree: OrgTree) -> Self {
        Self {
            staged: Vec::new(),
            preview: None,
            selection: SelectionEngine::new(tree),
            expanded: BTreeSet::new(),
        }
    }

    pub fn stage_files(&mut self, files: impl IntoIterator<Item = StagedFile>) {
        self.staged.extend(files);
    }

    pub fn staged(&self) -> &[StagedFile] {
        &self.staged
    }

    /// Open the preview modal for a staged file. Out-of-range indices are
    /// ignored.
    pub fn open_preview(&mut self, index: usize) -> bool {
        if index < self.staged.len() {
            self.preview = Some(index);
            true
        } else {
            false
        }
    }

    pub fn close_preview(&mut self) {
        self.preview = None;
    }

    pub fn preview(&self) -> Option<&StagedFile> {
        self.preview.map(|index| &self.staged[index])
    }

    pub fn selection(&self) -> &SelectionEngine {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionEngine {
        &mut self.selection
    }

    pub fn toggle_expanded(&mut self, id: &DepartmentId) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.clone());
        }
    }

    pub fn is_expanded(&self, id: &DepartmentId) -> bool {
        self.expanded.contains(id)
    }

    /// Selected employees resolved to tree order, ready for the share
    /// action.
    pub fn recipients(&self) -> Vec<&Employee> {
        self.selection
            .tree()
            .departments()
            .iter()
            .flat_map(|department| &department.employees)
            .filter(|employee| self.selection.is_selected(&employee.id))
            .collect()
    }
}
