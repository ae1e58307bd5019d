//! Tauri commands for the repository and webhook lists

use tauri::{AppHandle, State};
use tauri_plugin_opener::OpenerExt;

use crate::error::NexusError;
use crate::integrations::{Repository, WebhookConfig};
use crate::state::PopupState;
use crate::utils::lock;

#[tauri::command]
pub fn list_repositories(popup: State<'_, PopupState>) -> Vec<Repository> {
    lock(&popup.integrations).repositories().to_vec()
}

/// Add a repository by URL; `None` if the URL is blank
#[tauri::command]
pub fn add_repository(popup: State<'_, PopupState>, url: String) -> Option<Repository> {
    lock(&popup.integrations).add_repository(&url)
}

#[tauri::command]
pub fn toggle_repository(popup: State<'_, PopupState>, id: String) -> bool {
    lock(&popup.integrations).toggle_repository(&id)
}

#[tauri::command]
pub fn remove_repository(popup: State<'_, PopupState>, id: String) -> bool {
    lock(&popup.integrations).remove_repository(&id)
}

/// Open a repository's URL in the system browser
#[tauri::command]
pub fn open_repository(
    app: AppHandle,
    popup: State<'_, PopupState>,
    id: String,
) -> Result<(), String> {
    let url = lock(&popup.integrations)
        .repository(&id)
        .map(|repo| repo.url.clone())
        .ok_or_else(|| format!("Repository not found: {}", id))?;

    app.opener()
        .open_url(url.as_str(), None::<&str>)
        .map_err(|e| {
            NexusError::Open {
                url: url.clone(),
                reason: e.to_string(),
            }
            .to_string()
        })
}

#[tauri::command]
pub fn list_webhooks(popup: State<'_, PopupState>) -> Vec<WebhookConfig> {
    lock(&popup.integrations).webhooks().to_vec()
}

/// Add a webhook; `None` unless both name and URL are filled
#[tauri::command]
pub fn add_webhook(
    popup: State<'_, PopupState>,
    name: String,
    url: String,
) -> Option<WebhookConfig> {
    lock(&popup.integrations).add_webhook(&name, &url)
}

#[tauri::command]
pub fn toggle_webhook(popup: State<'_, PopupState>, id: String) -> bool {
    lock(&popup.integrations).toggle_webhook(&id)
}

#[tauri::command]
pub fn remove_webhook(popup: State<'_, PopupState>, id: String) -> bool {
    lock(&popup.integrations).remove_webhook(&id)
}
