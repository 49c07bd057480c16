use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use folder_notes_core::PanelSettings;
use tokio::sync::RwLock;

use crate::panel::PanelView;

/// Shared state for one panel
/// Must be Send + Sync
#[derive(Clone, Default)]
pub struct PanelState {
    pub settings: Arc<RwLock<PanelSettings>>,
    /// The currently displayed view, if any refresh has published yet
    pub view: Arc<RwLock<Option<PanelView>>>,
    /// Bumped by every refresh; older refreshes compare against it and give up
    pub generation: Arc<AtomicU64>,
}

impl PanelState {
    pub fn new(settings: PanelSettings) -> Self {
        Self {
            settings: Arc::new(RwLock::new(settings)),
            ..Self::default()
        }
    }

    pub(crate) fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    pub(crate) fn is_current(&self, generation: u64) -> bool {
        self.current_generation() == generation
    }
}
