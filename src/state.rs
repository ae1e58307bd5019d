//! The popup's state, constructed once at startup and shared with every command

use serde::Serialize;
use std::sync::{Arc, Mutex};

use crate::billing::{ActivationOutcome, LicenseForm, PlanId, UsageSummary};
use crate::config::NexusConfig;
use crate::error::Result;
use crate::integrations::IntegrationsState;
use crate::services::{ChatMessage, ChatPanel, SyncPanel};
use crate::settings::{SettingsPatch, SettingsStore, StoredSettings};
use crate::storage::{KeyValueStore, SettingsSlot};
use crate::utils::lock;
use crate::view::{SettingsTab, View, ViewRouter};

/// Everything the main view needs for its first render
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopupSnapshot {
    pub settings: StoredSettings,
    pub usage: UsageSummary,
    pub view: View,
    pub is_syncing: bool,
}

pub struct PopupState {
    pub settings: SettingsStore,
    pub router: Mutex<ViewRouter>,
    pub license: Mutex<LicenseForm>,
    pub integrations: Mutex<IntegrationsState>,
    pub chat: ChatPanel,
    pub sync: SyncPanel,
}

impl PopupState {
    pub fn new(config: &NexusConfig, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            settings: SettingsStore::initialize(SettingsSlot::new(store)),
            router: Mutex::new(ViewRouter::new()),
            license: Mutex::new(LicenseForm::new()),
            integrations: Mutex::new(IntegrationsState::default()),
            chat: ChatPanel::new(config.reply_delay),
            sync: SyncPanel::new(config.sync_duration),
        }
    }

    pub fn snapshot(&self) -> PopupSnapshot {
        let settings = self.settings.current();
        let usage = UsageSummary::for_plan(settings.selected_plan, settings.used_messages);
        PopupSnapshot {
            settings,
            usage,
            view: self.view(),
            is_syncing: self.sync.is_syncing(),
        }
    }

    pub fn usage(&self) -> UsageSummary {
        let settings = self.settings.current();
        UsageSummary::for_plan(settings.selected_plan, settings.used_messages)
    }

    pub fn update_settings(&self, patch: SettingsPatch) -> StoredSettings {
        self.settings.update(patch)
    }

    pub fn select_plan(&self, plan: PlanId) -> StoredSettings {
        tracing::info!(plan = %plan, "Plan selected");
        self.settings.update(SettingsPatch::plan(plan))
    }

    pub fn license_form(&self) -> LicenseForm {
        lock(&self.license).clone()
    }

    /// Replace the typed key, clearing earlier feedback
    pub fn edit_license_key(&self, key: String) -> LicenseForm {
        let mut form = lock(&self.license);
        form.edit(key);
        form.clone()
    }

    pub fn toggle_license_visibility(&self) -> LicenseForm {
        let mut form = lock(&self.license);
        form.toggle_visibility();
        form.clone()
    }

    /// Type `key` into the license form and submit it
    pub fn activate_license(&self, key: &str) -> ActivationOutcome {
        let mut form = lock(&self.license);
        form.edit(key);
        let status = form.submit(&self.settings);
        ActivationOutcome {
            status,
            settings: self.settings.current(),
        }
    }

    pub fn view(&self) -> View {
        lock(&self.router).current()
    }

    pub fn open_settings(&self) -> View {
        lock(&self.router).open_settings()
    }

    pub fn close_settings(&self) -> View {
        lock(&self.router).close()
    }

    pub fn select_settings_tab(&self, tab: SettingsTab) -> View {
        let mut router = lock(&self.router);
        router.select_tab(tab);
        router.current()
    }

    /// Send a chat message; each accepted message counts against the plan quota
    pub fn send_chat_message(&self, text: &str) -> Result<Option<ChatMessage>> {
        let sent = self.chat.send(text)?;
        if sent.is_some() {
            self.settings.record_message();
        }
        Ok(sent)
    }

    /// Cancel every pending delayed task
    pub fn shutdown(&self) {
        self.chat.shutdown();
        self.sync.shutdown();
        tracing::info!("Popup state shut down");
    }
}
