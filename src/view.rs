//! Top-level view switching between the main panel and the settings screen

use serde::{Deserialize, Serialize};

/// Tabs of the settings screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsTab {
    #[default]
    Repos,
    Webhooks,
}

/// The view currently presented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "camelCase")]
pub enum View {
    #[default]
    Main,
    Settings { tab: SettingsTab },
}

/// Two-state router: `Main` and `Settings`, starting on `Main`
#[derive(Debug, Default)]
pub struct ViewRouter {
    view: View,
}

impl ViewRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> View {
        self.view
    }

    pub fn is_main(&self) -> bool {
        matches!(self.view, View::Main)
    }

    /// Footer "settings" signal. The screen always opens on the repositories tab.
    pub fn open_settings(&mut self) -> View {
        if self.is_main() {
            self.view = View::Settings {
                tab: SettingsTab::default(),
            };
            tracing::debug!("Opened settings");
        }
        self.view
    }

    /// Settings "back" signal; returns to `Main` from any tab
    pub fn close(&mut self) -> View {
        self.view = View::Main;
        self.view
    }

    /// Switch settings tab; ignored while on `Main`
    pub fn select_tab(&mut self, tab: SettingsTab) -> bool {
        match &mut self.view {
            View::Settings { tab: current } => {
                *current = tab;
                true
            }
            View::Main => false,
        }
    }
}
