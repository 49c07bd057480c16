use std::sync::Arc;

use folder_notes_core::{
    pretty_title, ListOutcome, NavigationLinks, NoteListProcessor, NoteRecord, OutlineError,
    OutlineScan, OutlineState, PanelSettings,
};
use log::{debug, info, warn};
use tokio::task::JoinHandle;

use crate::host::Host;
use crate::state::PanelState;

pub const PANEL_TITLE: &str = "Current Folder Notes";

/// One listed note as the panel shows it
#[derive(Debug, Clone, PartialEq)]
pub struct ViewEntry {
    pub note: NoteRecord,
    /// Display title, title-cased and marked when current
    pub title: String,
    pub is_current: bool,
    pub outline: OutlineState,
}

/// Previous or next note link beside the list
#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub note: NoteRecord,
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewNavigation {
    pub previous: Option<NavLink>,
    pub next: Option<NavLink>,
}

impl ViewNavigation {
    fn new(links: NavigationLinks, settings: &PanelSettings) -> Self {
        let link = |note: NoteRecord| NavLink {
            title: display_title(&note.basename, settings),
            note,
        };
        Self {
            previous: links.previous.map(link),
            next: links.next.map(link),
        }
    }
}

fn display_title(basename: &str, settings: &PanelSettings) -> String {
    if settings.pretty_title_case {
        pretty_title(basename)
    } else {
        basename.to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelBody {
    /// Guidance or empty-state text in place of a list
    Message(String),
    Notes {
        entries: Vec<ViewEntry>,
        hidden_notes: usize,
        navigation: Option<ViewNavigation>,
    },
}

/// What the panel currently displays
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    /// Refresh that produced this view
    pub generation: u64,
    pub title: &'static str,
    pub style_classes: Vec<&'static str>,
    pub body: PanelBody,
}

impl PanelView {
    pub fn new(
        generation: u64,
        outcome: ListOutcome,
        settings: &PanelSettings,
        is_mobile: bool,
    ) -> Self {
        let body = match outcome {
            ListOutcome::Ready(list) => PanelBody::Notes {
                entries: list
                    .entries
                    .into_iter()
                    .map(|entry| {
                        let mut title = display_title(&entry.note.basename, settings);
                        if entry.is_current {
                            title.insert_str(0, "> ");
                        }
                        ViewEntry {
                            note: entry.note,
                            title,
                            is_current: entry.is_current,
                            outline: entry.outline,
                        }
                    })
                    .collect(),
                hidden_notes: list.hidden_notes,
                navigation: list
                    .navigation
                    .map(|links| ViewNavigation::new(links, settings)),
            },
            other => PanelBody::Message(other.message().unwrap_or_default()),
        };

        Self {
            generation,
            title: PANEL_TITLE,
            style_classes: settings.style_classes(is_mobile),
            body,
        }
    }

    pub fn entries(&self) -> &[ViewEntry] {
        match &self.body {
            PanelBody::Notes { entries, .. } => entries.as_slice(),
            PanelBody::Message(_) => &[],
        }
    }

    pub fn message(&self) -> Option<&str> {
        match &self.body {
            PanelBody::Message(text) => Some(text.as_str()),
            PanelBody::Notes { .. } => None,
        }
    }

    pub fn entry(&self, path: &str) -> Option<&ViewEntry> {
        self.entries().iter().find(|e| e.note.path == path)
    }

    pub(crate) fn set_outline(&mut self, path: &str, outline: OutlineState) {
        if let PanelBody::Notes { entries, .. } = &mut self.body {
            if let Some(entry) = entries.iter_mut().find(|e| e.note.path == path) {
                entry.outline = outline;
            }
        }
    }
}

/// Handle on one refresh; outlines fill in after the list is published
pub struct RefreshTicket {
    pub generation: u64,
    pub outlines: Option<JoinHandle<()>>,
}

impl RefreshTicket {
    /// Wait for this refresh's outline loading to finish or be discarded
    pub async fn wait(self) {
        if let Some(handle) = self.outlines {
            if let Err(e) = handle.await {
                warn!("outline task for refresh {} failed: {}", self.generation, e);
            }
        }
    }
}

/// The single folder-notes panel
pub struct Panel {
    host: Arc<dyn Host>,
    state: PanelState,
}

impl Panel {
    pub fn new(host: Arc<dyn Host>) -> Self {
        Self::with_settings(host, PanelSettings::default())
    }

    pub fn with_settings(host: Arc<dyn Host>, settings: PanelSettings) -> Self {
        Self {
            host,
            state: PanelState::new(settings),
        }
    }

    pub fn host(&self) -> &Arc<dyn Host> {
        &self.host
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub async fn settings(&self) -> PanelSettings {
        self.state.settings.read().await.clone()
    }

    pub async fn view(&self) -> Option<PanelView> {
        self.state.view.read().await.clone()
    }

    /// Load persisted settings; absent or unreadable settings leave defaults.
    pub async fn load_settings(&self) {
        let loaded = match self.host.load_settings().await {
            Ok(Some(value)) => match PanelSettings::from_json(value) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!("ignoring stored settings: {}", e);
                    PanelSettings::default()
                }
            },
            Ok(None) => PanelSettings::default(),
            Err(e) => {
                warn!("could not load settings: {}", e);
                PanelSettings::default()
            }
        };
        *self.state.settings.write().await = loaded;
    }

    /// Recompute and publish the list, then fill outlines in the background.
    ///
    /// A newer refresh supersedes this one: its view is not published if a
    /// later generation already exists, and its outline task stops as soon as
    /// it notices.
    pub async fn refresh(&self) -> RefreshTicket {
        let generation = self.state.next_generation();
        let settings = self.settings().await;

        let active = self.host.active_note().await;
        let notes = self.host.list_notes().await;

        let processor = NoteListProcessor::new(settings.clone());
        let outcome = processor.process(active.as_deref(), &notes);
        let targets = outcome
            .display_list()
            .map(|list| list.outline_targets())
            .unwrap_or_default();
        let view = PanelView::new(generation, outcome, &settings, self.host.is_mobile());

        {
            let mut slot = self.state.view.write().await;
            if !self.state.is_current(generation) {
                debug!("refresh {} superseded before publishing", generation);
                return RefreshTicket {
                    generation,
                    outlines: None,
                };
            }
            *slot = Some(view);
        }
        info!(
            "refresh {} published for {:?} ({} outlines pending)",
            generation,
            active,
            targets.len()
        );

        let outlines = (!targets.is_empty()).then(|| {
            tokio::spawn(fill_outlines(
                self.host.clone(),
                self.state.clone(),
                processor,
                generation,
                targets,
            ))
        });

        RefreshTicket {
            generation,
            outlines,
        }
    }
}

async fn fill_outlines(
    host: Arc<dyn Host>,
    state: PanelState,
    processor: NoteListProcessor,
    generation: u64,
    targets: Vec<String>,
) {
    for path in targets {
        if !state.is_current(generation) {
            debug!("discarding outlines of stale refresh {}", generation);
            return;
        }

        let outline = load_outline(&*host, &processor, &path).await;

        let mut slot = state.view.write().await;
        match slot.as_mut() {
            Some(view) if view.generation == generation && state.is_current(generation) => {
                view.set_outline(&path, outline);
            }
            _ => {
                debug!("discarding outlines of stale refresh {}", generation);
                return;
            }
        }
    }
}

async fn load_outline(host: &dyn Host, processor: &NoteListProcessor, path: &str) -> OutlineState {
    let content = match host.read_content(path).await {
        Ok(content) => content,
        Err(e) => {
            warn!("outline unavailable for {}: {}", path, e);
            return OutlineState::Failed(OutlineError::ReadFailed {
                path: path.to_string(),
                message: e.to_string(),
            });
        }
    };

    let scanner = processor.clone();
    scan_blocking(path, move |owned| scanner.scan_outline(&content, owned)).await
}

/// Run a scan on the blocking pool; a panicking scan becomes the error marker.
async fn scan_blocking<F>(path: &str, scan: F) -> OutlineState
where
    F: FnOnce(&str) -> OutlineScan + Send + 'static,
{
    let owned = path.to_string();
    match tokio::task::spawn_blocking(move || scan(&owned)).await {
        Ok(scan) => OutlineState::Loaded(scan),
        Err(e) => {
            warn!("error processing headings in {}: {}", path, e);
            OutlineState::Failed(OutlineError::Scan {
                path: path.to_string(),
                message: e.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_panicking_scan_becomes_error_marker() {
        let outline = scan_blocking("s/T1.md", |_| panic!("malformed content")).await;
        assert!(matches!(
            outline,
            OutlineState::Failed(OutlineError::Scan { ref path, .. }) if path == "s/T1.md"
        ));
    }

    #[tokio::test]
    async fn test_scan_result_is_loaded() {
        let outline = scan_blocking("s/T1.md", |path| {
            folder_notes_core::extract_headings("# One\n", path, 10, 100)
        })
        .await;
        assert_eq!(outline.headings()[0].anchor_path(), "s/T1.md#One");
    }
}
