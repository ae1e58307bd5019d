//! Tauri commands for the persisted settings

use tauri::State;

use crate::settings::{SettingsPatch, StoredSettings};
use crate::state::{PopupSnapshot, PopupState};

/// Settings, usage and view for the first render
#[tauri::command]
pub fn get_popup_state(popup: State<'_, PopupState>) -> PopupSnapshot {
    popup.snapshot()
}

#[tauri::command]
pub fn get_settings(popup: State<'_, PopupState>) -> StoredSettings {
    popup.settings.current()
}

/// Merge a partial update into the settings and persist it
#[tauri::command]
pub fn update_settings(
    popup: State<'_, PopupState>,
    patch: SettingsPatch,
) -> Result<StoredSettings, String> {
    Ok(popup.update_settings(patch))
}
