//! Sync panel Tauri commands
//!
//! Events emitted:
//! - sync:finished - {} - the simulated sync completed

use chrono::Utc;
use serde::Serialize;
use tauri::State;

use crate::services::ActivityEntry;
use crate::state::PopupState;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncStatusResponse {
    pub is_syncing: bool,
    pub recent_activity: Vec<ActivityEntry>,
}

/// Start a simulated sync; `false` if one is already running
#[tauri::command]
pub async fn start_sync(popup: State<'_, PopupState>) -> Result<bool, String> {
    popup.sync.start_sync().map_err(|e| e.to_string())
}

#[tauri::command]
pub fn get_sync_status(popup: State<'_, PopupState>) -> SyncStatusResponse {
    SyncStatusResponse {
        is_syncing: popup.sync.is_syncing(),
        recent_activity: popup.sync.recent_activity(Utc::now()),
    }
}
