//! Tauri command handlers (IPC surface of the popup)

pub mod billing;
pub mod chat;
pub mod integrations;
pub mod settings;
pub mod sync;
pub mod view;
