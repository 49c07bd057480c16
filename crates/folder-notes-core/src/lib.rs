//! Folder Notes Core Library
//!
//! Builds the list of notes that share a folder with the active note:
//! candidate selection, title filters, sequence ordering and heading outlines.
//! No IO dependencies beyond the `vfs` note source, pure logic only.
//!

pub mod config;
pub mod filter;
pub mod model;
pub mod outline;
pub mod processor;
pub mod sort;
pub mod utils;
pub mod vfs;

pub use config::{DisplayStyle, OutlineLimits, PanelSettings, SettingsError};
pub use filter::{FilterConfig, FilterKind, FilterOutcome};
pub use model::{
    DisplayEntry, DisplayList, HeadingEntry, ListOutcome, NavigationLinks, NoteRecord,
    OutlineState,
};
pub use outline::{extract_headings, OutlineError, OutlineScan};
pub use processor::NoteListProcessor;
pub use sort::compute_sort_key;
pub use utils::{parent_folder, pretty_title};
