//! Folder Notes Panel Library
//!
//! Host integration layer: turns host events into debounced core refreshes and
//! keeps the single panel view up to date.

use std::sync::Arc;

mod error;
pub mod handlers;
mod host;
mod panel;
mod registry;
mod render;
mod scheduler;
mod state;


pub use error::HostError;
pub use host::{Host, LocalHost, NavigationRequest};
pub use panel::{
    NavLink, Panel, PanelBody, PanelView, RefreshTicket, ViewEntry, ViewNavigation, PANEL_TITLE,
};
pub use registry::{PanelRegistry, Registration, SurfaceId};
pub use render::render_text;
pub use scheduler::{RefreshHandle, RefreshReason, RefreshScheduler};
pub use state::PanelState;

/// Create a panel with settings loaded from the host, plus its refresh channel.
///
/// The returned scheduler must be driven (`tokio::spawn(scheduler.start())`)
/// for refresh requests to run.
pub async fn create_panel(host: Arc<dyn Host>) -> (Arc<Panel>, RefreshHandle, RefreshScheduler) {
    let panel = Arc::new(Panel::new(host));
    panel.load_settings().await;
    let (handle, scheduler) = scheduler::refresh_channel(panel.clone());
    (panel, handle, scheduler)
}
