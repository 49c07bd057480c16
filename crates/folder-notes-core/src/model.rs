use serde::{Deserialize, Serialize};

use crate::filter::FilterKind;
use crate::outline::{OutlineError, OutlineScan};
use crate::utils::{basename_of, parent_folder};

/// Host-assigned note path, slash separated.
pub type NotePath = String;

/// One candidate note file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRecord {
    pub path: NotePath,
    /// File name without extension
    pub basename: String,
}

impl NoteRecord {
    pub fn new(path: impl Into<String>, basename: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            basename: basename.into(),
        }
    }

    /// Build a record from a path alone, deriving the basename.
    pub fn from_path(path: impl Into<String>) -> Self {
        let path = path.into();
        let basename = basename_of(&path).to_string();
        Self { path, basename }
    }

    pub fn folder(&self) -> &str {
        parent_folder(&self.path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingEntry {
    pub level: usize,
    pub label: String,
    /// `#` followed by the label
    pub anchor: String,
    pub note_path: NotePath,
}

impl HeadingEntry {
    pub fn new(level: usize, label: String, note_path: &str) -> Self {
        let anchor = format!("#{}", label);
        Self {
            level,
            label,
            anchor,
            note_path: note_path.to_string(),
        }
    }

    /// Link text the host resolves into a jump target: `path#label`
    pub fn anchor_path(&self) -> String {
        format!("{}{}", self.note_path, self.anchor)
    }
}

/// Outline attached to a display entry
#[derive(Debug, Clone, PartialEq)]
pub enum OutlineState {
    /// Outlines are not shown for this note
    Hidden,
    /// Requested, content read still outstanding
    Pending,
    Loaded(OutlineScan),
    /// Read or scan failed; renders as a single error marker
    Failed(OutlineError),
}

impl OutlineState {
    pub fn headings(&self) -> &[HeadingEntry] {
        match self {
            OutlineState::Loaded(scan) => scan.headings.as_slice(),
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayEntry {
    pub note: NoteRecord,
    pub is_current: bool,
    pub outline: OutlineState,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationLinks {
    pub previous: Option<NoteRecord>,
    pub next: Option<NoteRecord>,
}

/// Ready-to-render result of one pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayList {
    pub folder: NotePath,
    pub entries: Vec<DisplayEntry>,
    /// Notes dropped by the note count bound
    pub hidden_notes: usize,
    /// Present only when navigation links are enabled
    pub navigation: Option<NavigationLinks>,
}

impl DisplayList {
    pub fn current(&self) -> Option<&DisplayEntry> {
        self.entries.iter().find(|e| e.is_current)
    }

    pub fn entry_mut(&mut self, path: &str) -> Option<&mut DisplayEntry> {
        self.entries.iter_mut().find(|e| e.note.path == path)
    }

    /// Paths whose outline still has to be loaded, in display order
    pub fn outline_targets(&self) -> Vec<NotePath> {
        self.entries
            .iter()
            .filter(|e| e.outline == OutlineState::Pending)
            .map(|e| e.note.path.clone())
            .collect()
    }
}

/// Outcome of one refresh: either a list or the reason there is none
#[derive(Debug, Clone, PartialEq)]
pub enum ListOutcome {
    NoActiveNote,
    /// Active note sits at the vault root; listing is refused
    RootFolder,
    FolderEmpty {
        folder: NotePath,
    },
    FilteredEmpty {
        folder: NotePath,
        cause: FilterKind,
        filter_text: String,
    },
    Ready(DisplayList),
}

impl ListOutcome {
    pub fn display_list(&self) -> Option<&DisplayList> {
        match self {
            ListOutcome::Ready(list) => Some(list),
            _ => None,
        }
    }

    pub fn display_list_mut(&mut self) -> Option<&mut DisplayList> {
        match self {
            ListOutcome::Ready(list) => Some(list),
            _ => None,
        }
    }

    /// Guidance text for every outcome that has no list
    pub fn message(&self) -> Option<String> {
        match self {
            ListOutcome::NoActiveNote => {
                Some("Open a note to list the notes in its folder".to_string())
            }
            ListOutcome::RootFolder => Some("Notes at the vault root are not listed".to_string()),
            ListOutcome::FolderEmpty { .. } => Some("No notes in this folder".to_string()),
            ListOutcome::FilteredEmpty {
                cause: FilterKind::Include,
                filter_text,
                ..
            } => Some(format!(
                "No notes found in the current folder that include \"{}\"",
                filter_text
            )),
            ListOutcome::FilteredEmpty {
                cause: FilterKind::Exclude,
                filter_text,
                ..
            } => Some(format!(
                "No notes found in the current folder that do not include \"{}\"",
                filter_text
            )),
            ListOutcome::Ready(_) => None,
        }
    }
}
