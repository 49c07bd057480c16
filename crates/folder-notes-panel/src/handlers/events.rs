use log::{debug, warn};

use crate::scheduler::{RefreshHandle, RefreshReason};

/// Workspace and vault notifications from the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// A note was opened in the editor; `None` when the last one closed
    FileOpen(Option<String>),
    Created(String),
    Deleted(String),
    Renamed { from: String, to: String },
}

impl HostEvent {
    fn reason(&self) -> RefreshReason {
        match self {
            HostEvent::FileOpen(_) => RefreshReason::ActiveNoteChanged,
            HostEvent::Created(_) => RefreshReason::NoteCreated,
            HostEvent::Deleted(_) => RefreshReason::NoteDeleted,
            HostEvent::Renamed { .. } => RefreshReason::NoteRenamed,
        }
    }
}

/// Translate a host event into a debounced refresh request.
pub fn handle_host_event(refresh: &RefreshHandle, event: HostEvent) {
    debug!("host event: {:?}", event);
    if !refresh.request(event.reason()) {
        warn!("refresh scheduler stopped; dropped {:?}", event);
    }
}
