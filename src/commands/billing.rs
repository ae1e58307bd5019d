//! Tauri commands for plans, usage and license activation

use tauri::State;

use crate::billing::{offers, ActivationOutcome, LicenseForm, PlanId, PlanOffer, UsageSummary};
use crate::settings::StoredSettings;
use crate::state::PopupState;

/// The plan cards in display order
#[tauri::command]
pub fn list_plans() -> Vec<PlanOffer> {
    offers()
}

/// Select a plan; unknown identifiers arrive here as `free`
#[tauri::command]
pub fn select_plan(popup: State<'_, PopupState>, plan: PlanId) -> Result<StoredSettings, String> {
    Ok(popup.select_plan(plan))
}

/// Usage against the selected plan's quota
#[tauri::command]
pub fn get_usage(popup: State<'_, PopupState>) -> UsageSummary {
    popup.usage()
}

/// Submit a license key
#[tauri::command]
pub fn activate_license(
    popup: State<'_, PopupState>,
    license_key: String,
) -> Result<ActivationOutcome, String> {
    Ok(popup.activate_license(&license_key))
}

#[tauri::command]
pub fn get_license_form(popup: State<'_, PopupState>) -> LicenseForm {
    popup.license_form()
}

/// Store the typed key without submitting it
#[tauri::command]
pub fn edit_license_key(popup: State<'_, PopupState>, license_key: String) -> LicenseForm {
    popup.edit_license_key(license_key)
}

#[tauri::command]
pub fn toggle_license_visibility(popup: State<'_, PopupState>) -> LicenseForm {
    popup.toggle_license_visibility()
}
