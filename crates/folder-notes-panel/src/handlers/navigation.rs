use folder_notes_core::{HeadingEntry, NoteRecord};

use crate::error::HostError;
use crate::host::{Host, NavigationRequest};

/// A note title was clicked
pub async fn handle_note_click(host: &dyn Host, note: &NoteRecord) -> Result<(), HostError> {
    host.open_link(NavigationRequest {
        path: note.path.clone(),
        anchor: None,
    })
    .await
}

/// A heading in an outline was clicked
pub async fn handle_heading_click(host: &dyn Host, heading: &HeadingEntry) -> Result<(), HostError> {
    host.open_link(NavigationRequest {
        path: heading.note_path.clone(),
        anchor: Some(heading.anchor.clone()),
    })
    .await
}
