//! Persisted settings record and its typed partial update

use serde::{Deserialize, Serialize};

use crate::billing::PlanId;

/// Message counter a fresh install starts with
pub const DEFAULT_USED_MESSAGES: u32 = 3;

/// The settings record stored in the `nexus_settings` slot
///
/// Missing fields take their default value; an unknown plan identifier
/// deserializes to `free`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoredSettings {
    pub selected_plan: PlanId,
    pub is_activated: bool,
    pub license_key: String,
    pub used_messages: u32,
}

impl Default for StoredSettings {
    fn default() -> Self {
        Self {
            selected_plan: PlanId::Free,
            is_activated: false,
            license_key: String::new(),
            used_messages: DEFAULT_USED_MESSAGES,
        }
    }
}

impl StoredSettings {
    /// Field-wise merge: fields present in `patch` replace ours, the rest are kept
    pub fn merged(&self, patch: SettingsPatch) -> Self {
        Self {
            selected_plan: patch.selected_plan.unwrap_or(self.selected_plan),
            is_activated: patch.is_activated.unwrap_or(self.is_activated),
            license_key: patch
                .license_key
                .unwrap_or_else(|| self.license_key.clone()),
            used_messages: patch.used_messages.unwrap_or(self.used_messages),
        }
    }
}

/// Partial update of [`StoredSettings`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_plan: Option<PlanId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_activated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_messages: Option<u32>,
}

impl SettingsPatch {
    pub fn plan(plan: PlanId) -> Self {
        Self {
            selected_plan: Some(plan),
            ..Self::default()
        }
    }

    pub fn activation(license_key: impl Into<String>) -> Self {
        Self {
            is_activated: Some(true),
            license_key: Some(license_key.into()),
            ..Self::default()
        }
    }

    pub fn used_messages(used: u32) -> Self {
        Self {
            used_messages: Some(used),
            ..Self::default()
        }
    }
}
