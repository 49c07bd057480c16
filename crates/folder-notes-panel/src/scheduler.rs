use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time::{sleep_until, Instant};

use crate::panel::Panel;

/// Why a refresh was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshReason {
    ActiveNoteChanged,
    NoteCreated,
    NoteDeleted,
    NoteRenamed,
    SettingsChanged,
    Manual,
}

/// Cloneable sender side of the refresh channel
#[derive(Clone)]
pub struct RefreshHandle {
    sender: UnboundedSender<RefreshReason>,
}

impl RefreshHandle {
    /// Queue a refresh; returns false once the scheduler has stopped.
    pub fn request(&self, reason: RefreshReason) -> bool {
        self.sender.send(reason).is_ok()
    }
}

/// Runs a panel refresh once requests have been quiet for the debounce window.
pub struct RefreshScheduler {
    panel: Arc<Panel>,
    receiver: UnboundedReceiver<RefreshReason>,
}

pub(crate) fn refresh_channel(panel: Arc<Panel>) -> (RefreshHandle, RefreshScheduler) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (
        RefreshHandle { sender },
        RefreshScheduler { panel, receiver },
    )
}

impl RefreshScheduler {
    /// Drive the scheduler until every [`RefreshHandle`] is dropped.
    ///
    /// A request still waiting out its window when the channel closes runs
    /// before returning. Returns the number of refreshes executed.
    pub async fn start(mut self) -> usize {
        info!("refresh scheduler started");

        let mut deadline: Option<Instant> = None;
        let mut refreshes = 0;

        loop {
            // Read settings for each iteration
            let debounce = {
                let settings = self.panel.state().settings.read().await;
                Duration::from_millis(settings.limits.refresh_debounce_ms)
            };

            tokio::select! {
                request = self.receiver.recv() => match request {
                    Some(reason) => {
                        debug!("refresh requested: {:?}", reason);
                        deadline = Some(Instant::now() + debounce);
                    }
                    None => {
                        if deadline.is_some() {
                            self.panel.refresh().await;
                            refreshes += 1;
                        }
                        break;
                    }
                },
                _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    deadline = None;
                    self.panel.refresh().await;
                    refreshes += 1;
                }
            }
        }

        info!("refresh scheduler stopped after {} refreshes", refreshes);
        refreshes
    }
}
