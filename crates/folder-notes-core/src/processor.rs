use log::{debug, warn};

use crate::config::PanelSettings;
use crate::filter::{apply_text_filters, select_candidates, FilterConfig, FilterKind, FilterOutcome};
use crate::model::{
    DisplayEntry, DisplayList, ListOutcome, NavigationLinks, NoteRecord, OutlineState,
};
use crate::outline::{extract_headings, OutlineError, OutlineScan};
use crate::sort::sort_notes;
use crate::utils::parent_folder;
use crate::vfs::NoteSource;

/// Turns a folder listing plus settings into a [`DisplayList`].
///
/// Every run starts from scratch; nothing is cached between refreshes.
#[derive(Debug, Clone, Default)]
pub struct NoteListProcessor {
    settings: PanelSettings,
}

impl NoteListProcessor {
    pub fn new(settings: PanelSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &PanelSettings {
        &self.settings
    }

    /// Build the list for `active_path` with every requested outline left `Pending`.
    pub fn process(&self, active_path: Option<&str>, all_notes: &[NoteRecord]) -> ListOutcome {
        let Some(active_path) = active_path else {
            return ListOutcome::NoActiveNote;
        };

        let folder = parent_folder(active_path);
        if folder.is_empty() {
            debug!("refusing to list vault root for {}", active_path);
            return ListOutcome::RootFolder;
        }

        let filters = FilterConfig::from_settings(&self.settings);
        let candidates = select_candidates(all_notes, folder, filters.include_subfolders);
        debug!("{} candidates in {}", candidates.len(), folder);
        if candidates.is_empty() {
            return ListOutcome::FolderEmpty {
                folder: folder.to_string(),
            };
        }

        let mut notes =
            match apply_text_filters(candidates, &filters.include_words, &filters.exclude_words) {
                FilterOutcome::NoMatches(cause) => {
                    return ListOutcome::FilteredEmpty {
                        folder: folder.to_string(),
                        cause,
                        filter_text: self.filter_text(cause).to_string(),
                    };
                }
                outcome => outcome.into_notes(),
            };

        sort_notes(&mut notes);
        ListOutcome::Ready(self.build_display_list(notes, active_path))
    }

    fn filter_text(&self, kind: FilterKind) -> &str {
        match kind {
            FilterKind::Include => self.settings.include_title_filter.trim(),
            FilterKind::Exclude => self.settings.exclude_titles_filter.trim(),
        }
    }

    /// Mark the current note and decide which outlines are requested.
    ///
    /// `sorted` must already be in display order; it is not reordered.
    pub fn build_display_list(&self, sorted: Vec<NoteRecord>, current_path: &str) -> DisplayList {
        let navigation = self
            .settings
            .show_navigation_links
            .then(|| navigation_links(&sorted, current_path));

        let max_notes = self.settings.limits.max_notes;
        let hidden_notes = sorted.len().saturating_sub(max_notes);

        let entries = sorted
            .into_iter()
            .take(max_notes)
            .map(|note| {
                let is_current = note.path == current_path;
                let outline = if self.settings.show_all_outlines
                    || (self.settings.show_current_outline && is_current)
                {
                    OutlineState::Pending
                } else {
                    OutlineState::Hidden
                };
                DisplayEntry {
                    note,
                    is_current,
                    outline,
                }
            })
            .collect();

        DisplayList {
            folder: parent_folder(current_path).to_string(),
            entries,
            hidden_notes,
            navigation,
        }
    }

    /// Scan one note's content with the configured caps
    pub fn scan_outline(&self, content: &str, note_path: &str) -> OutlineScan {
        let limits = &self.settings.limits;
        extract_headings(
            content,
            note_path,
            limits.max_headings,
            limits.max_content_bytes,
        )
    }

    /// Read and scan every pending outline synchronously.
    pub fn fill_outlines(&self, list: &mut DisplayList, source: &dyn NoteSource) {
        for path in list.outline_targets() {
            let state = match source.read_content(&path) {
                Ok(content) => OutlineState::Loaded(self.scan_outline(&content, &path)),
                Err(e) => {
                    warn!("failed to read {}: {}", path, e);
                    OutlineState::Failed(OutlineError::ReadFailed {
                        path: path.clone(),
                        message: e.to_string(),
                    })
                }
            };
            if let Some(entry) = list.entry_mut(&path) {
                entry.outline = state;
            }
        }
    }

    /// Full pipeline against a synchronous source, outlines included.
    pub fn run(&self, active_path: Option<&str>, source: &dyn NoteSource) -> ListOutcome {
        let notes = source.list_notes();
        let mut outcome = self.process(active_path, &notes);
        if let Some(list) = outcome.display_list_mut() {
            self.fill_outlines(list, source);
        }
        outcome
    }
}

fn navigation_links(sorted: &[NoteRecord], current_path: &str) -> NavigationLinks {
    let Some(idx) = sorted.iter().position(|n| n.path == current_path) else {
        return NavigationLinks::default();
    };
    NavigationLinks {
        previous: idx.checked_sub(1).map(|i| sorted[i].clone()),
        next: sorted.get(idx + 1).cloned(),
    }
}
