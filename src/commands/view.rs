//! Tauri commands for switching between the main view and settings

use tauri::State;

use crate::state::PopupState;
use crate::view::{SettingsTab, View};

#[tauri::command]
pub fn get_view(popup: State<'_, PopupState>) -> View {
    popup.view()
}

#[tauri::command]
pub fn open_settings(popup: State<'_, PopupState>) -> View {
    popup.open_settings()
}

#[tauri::command]
pub fn close_settings(popup: State<'_, PopupState>) -> View {
    popup.close_settings()
}

#[tauri::command]
pub fn set_settings_tab(popup: State<'_, PopupState>, tab: SettingsTab) -> View {
    popup.select_settings_tab(tab)
}
