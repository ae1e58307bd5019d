//! Chat Tauri commands
//!
//! Events emitted:
//! - chat:reply - ChatMessage - the simulated reply landed in the log

use tauri::State;

use crate::services::ChatMessage;
use crate::state::PopupState;

/// Send a chat message. Async so the reply timer runs on Tauri's runtime.
#[tauri::command]
pub async fn send_chat_message(
    popup: State<'_, PopupState>,
    message: String,
) -> Result<Option<ChatMessage>, String> {
    popup.send_chat_message(&message).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn get_chat_messages(popup: State<'_, PopupState>) -> Vec<ChatMessage> {
    popup.chat.messages()
}

#[tauri::command]
pub fn clear_chat(popup: State<'_, PopupState>) {
    popup.chat.clear();
}
