//! Nexus popup core
//!
//! State model of the Nexus sync popup: the persisted settings record, plan
//! quotas and usage, license activation, the main/settings view switch, and
//! the simulated chat and sync panels. With the `desktop` feature the crate
//! also hosts the Tauri application that exposes all of it as commands.

pub mod billing;
pub mod config;
pub mod error;
pub mod integrations;
pub mod services;
pub mod settings;
pub mod state;
pub mod storage;
pub mod timer;
mod utils;
pub mod view;

#[cfg(feature = "desktop")]
mod commands;

pub use config::NexusConfig;
pub use error::{NexusError, StorageError};
pub use state::PopupState;

use tracing_subscriber::EnvFilter;

/// Initialize tracing with RUST_LOG env filter
///
/// Default: warn for most crates, info for the popup core.
/// Use RUST_LOG=debug for per-operation logs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,nexus_lib=info")),
        )
        .try_init();
}

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use std::sync::Arc;
    use tauri::{Emitter, Manager, RunEvent};

    let config = NexusConfig::from_env();
    init_tracing();
    tracing::info!(?config, "Starting Nexus");

    let app = tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_store::Builder::new().build())
        .setup(move |app| {
            let store = storage::open_app_store(app.handle(), &config);
            let popup = PopupState::new(&config, store);

            let handle = app.handle().clone();
            popup
                .chat
                .set_reply_listener(Arc::new(move |reply: &services::ChatMessage| {
                    if let Err(e) = handle.emit("chat:reply", reply) {
                        tracing::warn!("Failed to emit chat reply: {}", e);
                    }
                }));

            let handle = app.handle().clone();
            popup.sync.set_finished_listener(Arc::new(move || {
                if let Err(e) = handle.emit("sync:finished", serde_json::json!({})) {
                    tracing::warn!("Failed to emit sync finished: {}", e);
                }
            }));

            app.manage(popup);
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Settings commands
            commands::settings::get_popup_state,
            commands::settings::get_settings,
            commands::settings::update_settings,
            // Billing commands
            commands::billing::list_plans,
            commands::billing::select_plan,
            commands::billing::get_usage,
            commands::billing::activate_license,
            commands::billing::get_license_form,
            commands::billing::edit_license_key,
            commands::billing::toggle_license_visibility,
            // View commands
            commands::view::get_view,
            commands::view::open_settings,
            commands::view::close_settings,
            commands::view::set_settings_tab,
            // Integration commands
            commands::integrations::list_repositories,
            commands::integrations::add_repository,
            commands::integrations::toggle_repository,
            commands::integrations::remove_repository,
            commands::integrations::open_repository,
            commands::integrations::list_webhooks,
            commands::integrations::add_webhook,
            commands::integrations::toggle_webhook,
            commands::integrations::remove_webhook,
            // Chat commands
            commands::chat::send_chat_message,
            commands::chat::get_chat_messages,
            commands::chat::clear_chat,
            // Sync commands
            commands::sync::start_sync,
            commands::sync::get_sync_status,
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(|handle, event| {
        if let RunEvent::Exit = event {
            if let Some(popup) = handle.try_state::<PopupState>() {
                popup.shutdown();
            }
        }
    });
}
