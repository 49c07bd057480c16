use std::sync::Arc;

use async_trait::async_trait;
use folder_notes_core::vfs::NoteSource;
use folder_notes_core::NoteRecord;
use log::{info, warn};
use tokio::sync::RwLock;

use crate::error::HostError;

/// Request for the host to open a note, optionally at a heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub path: String,
    /// `#label` of a heading inside the note
    pub anchor: Option<String>,
}

impl NavigationRequest {
    pub fn link_text(&self) -> String {
        match &self.anchor {
            Some(anchor) => format!("{}{}", self.path, anchor),
            None => self.path.clone(),
        }
    }
}

/// Everything the panel needs from the application hosting it.
#[async_trait]
pub trait Host: Send + Sync {
    /// Path of the note open in the editor, if any
    async fn active_note(&self) -> Option<String>;

    async fn list_notes(&self) -> Vec<NoteRecord>;

    async fn read_content(&self, path: &str) -> Result<String, HostError>;

    async fn open_link(&self, request: NavigationRequest) -> Result<(), HostError>;

    /// Persisted settings blob; `None` on first run
    async fn load_settings(&self) -> Result<Option<serde_json::Value>, HostError>;

    async fn save_settings(&self, settings: serde_json::Value) -> Result<(), HostError>;

    fn is_mobile(&self) -> bool {
        false
    }
}

/// Host backed by a synchronous [`NoteSource`], e.g. a folder on disk.
///
/// Active note and settings are held in memory; navigation requests are
/// recorded rather than opened.
pub struct LocalHost<S: NoteSource + 'static> {
    source: Arc<S>,
    active: RwLock<Option<String>>,
    settings: RwLock<Option<serde_json::Value>>,
    navigations: RwLock<Vec<NavigationRequest>>,
}

impl<S: NoteSource + 'static> LocalHost<S> {
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(source),
            active: RwLock::new(None),
            settings: RwLock::new(None),
            navigations: RwLock::new(Vec::new()),
        }
    }

    pub async fn set_active(&self, path: Option<String>) {
        *self.active.write().await = path;
    }

    pub async fn navigations(&self) -> Vec<NavigationRequest> {
        self.navigations.read().await.clone()
    }
}

#[async_trait]
impl<S: NoteSource + 'static> Host for LocalHost<S> {
    async fn active_note(&self) -> Option<String> {
        self.active.read().await.clone()
    }

    async fn list_notes(&self) -> Vec<NoteRecord> {
        let source = self.source.clone();
        tokio::task::spawn_blocking(move || source.list_notes())
            .await
            .unwrap_or_else(|e| {
                warn!("listing notes failed: {}", e);
                Vec::new()
            })
    }

    async fn read_content(&self, path: &str) -> Result<String, HostError> {
        let source = self.source.clone();
        let owned = path.to_string();
        tokio::task::spawn_blocking(move || source.read_content(&owned))
            .await
            .map_err(|e| HostError::Unavailable(e.to_string()))?
            .map_err(|source| HostError::Read {
                path: path.to_string(),
                source,
            })
    }

    async fn open_link(&self, request: NavigationRequest) -> Result<(), HostError> {
        info!("open {}", request.link_text());
        self.navigations.write().await.push(request);
        Ok(())
    }

    async fn load_settings(&self) -> Result<Option<serde_json::Value>, HostError> {
        Ok(self.settings.read().await.clone())
    }

    async fn save_settings(&self, settings: serde_json::Value) -> Result<(), HostError> {
        *self.settings.write().await = Some(settings);
        Ok(())
    }
}
