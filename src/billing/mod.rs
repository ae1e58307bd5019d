//! Plans, usage and license activation
//!
//! This module handles:
//! - Subscription tier identifiers and the static plan catalog
//! - Usage figures against the plan quota
//! - The length-based license activation form

mod license;
mod plans;
mod types;
mod usage;

pub use license::{
    is_acceptable_key, ActivationOutcome, ActivationStatus, LicenseForm, MIN_LICENSE_KEY_LEN,
};
pub use plans::{catalog, offers};
pub use types::{Plan, PlanId, PlanOffer, UnknownPlan};
pub use usage::UsageSummary;
