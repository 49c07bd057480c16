use folder_notes_core::{PanelSettings, SettingsError};
use log::{info, warn};

use crate::panel::Panel;
use crate::scheduler::{RefreshHandle, RefreshReason};

/// Apply settings edited by the user, persist them and schedule a refresh.
///
/// Settings that fail to parse are rejected and the previous ones stay.
pub async fn handle_settings_changed(
    panel: &Panel,
    refresh: &RefreshHandle,
    value: serde_json::Value,
) -> Result<(), SettingsError> {
    let new_settings = match PanelSettings::from_json(value) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("failed to parse updated settings: {}", e);
            return Err(e);
        }
    };

    let persisted = new_settings.to_json()?;
    *panel.state().settings.write().await = new_settings;

    if let Err(e) = panel.host().save_settings(persisted).await {
        warn!("failed to persist settings: {}", e);
    }
    info!("panel settings updated");

    refresh.request(RefreshReason::SettingsChanged);
    Ok(())
}
