//! Usage figures for the plan progress bars
//!
//! Pure functions over the selected plan and the consumed message counter.

use serde::Serialize;

use super::types::PlanId;

/// Usage snapshot handed to the progress displays
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageSummary {
    pub used: u32,
    pub total: u32,
    pub remaining: u32,
    pub exhausted: bool,
    /// `used / total`, unclamped
    pub raw_ratio: f64,
    /// `used / total` clamped to `0..=1`
    pub ratio: f64,
    /// Progress bar width in percent, clamped to 100
    pub percent: f64,
    /// "X/Y" text shown next to the bar
    pub label: String,
}

impl UsageSummary {
    /// Compute usage against the quota of `plan`
    pub fn for_plan(plan: PlanId, used: u32) -> Self {
        let total = plan.message_limit();
        let raw_ratio = used as f64 / total as f64;
        let percent = (used as f64 * 100.0 / total as f64).clamp(0.0, 100.0);

        Self {
            used,
            total,
            remaining: total.saturating_sub(used),
            exhausted: used >= total,
            raw_ratio,
            ratio: raw_ratio.clamp(0.0, 1.0),
            percent,
            label: format!("{}/{}", used, total),
        }
    }
}
