//! Billing data types

use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Subscription tier identifier
///
/// Serialized in lowercase. Deserialization is lenient: an unrecognized
/// identifier, or a value that is not a string at all, falls back to `Free`
/// instead of failing the whole record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanId {
    #[default]
    Free,
    Pro,
    Plus,
    Premium,
}

impl PlanId {
    pub const ALL: [PlanId; 4] = [PlanId::Free, PlanId::Pro, PlanId::Plus, PlanId::Premium];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Pro => "pro",
            Self::Plus => "plus",
            Self::Premium => "premium",
        }
    }

    /// Monthly message quota for this tier
    pub fn message_limit(&self) -> u32 {
        match self {
            Self::Free => 5,
            Self::Pro => 250,
            Self::Plus => 500,
            Self::Premium => 1000,
        }
    }

    /// Parse an identifier, falling back to `Free` when it is unknown
    pub fn parse_or_free(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|_| {
            tracing::warn!(plan = raw, "Unknown plan identifier, falling back to free");
            Self::Free
        })
    }
}

impl std::fmt::Display for PlanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by the strict `FromStr` parser
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown plan identifier: {0}")]
pub struct UnknownPlan(pub String);

impl FromStr for PlanId {
    type Err = UnknownPlan;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(Self::Free),
            "pro" => Ok(Self::Pro),
            "plus" => Ok(Self::Plus),
            "premium" => Ok(Self::Premium),
            other => Err(UnknownPlan(other.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for PlanId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(raw) => Ok(Self::parse_or_free(&raw)),
            other => {
                tracing::warn!(plan = %other, "Non-string plan identifier, falling back to free");
                Ok(Self::Free)
            }
        }
    }
}

/// A catalog entry
#[derive(Debug, Clone)]
pub struct Plan {
    pub id: PlanId,
    pub name: &'static str,
    pub messages: u32,
    /// Monthly price in centavos (BRL); `None` for the free tier
    pub price_cents: Option<u32>,
    pub popular: bool,
    pub features: &'static [&'static str],
}

impl Plan {
    /// Price label in the popup's locale, e.g. `R$ 29,80`
    pub fn price_label(&self) -> Option<String> {
        self.price_cents
            .map(|cents| format!("R$ {},{:02}", cents / 100, cents % 100))
    }

    /// Features listed on the plan card (the grid shows at most three)
    pub fn headline_features(&self) -> &'static [&'static str] {
        &self.features[..self.features.len().min(3)]
    }
}

/// A plan card in the picker
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanOffer {
    pub id: PlanId,
    pub name: &'static str,
    pub messages: u32,
    pub price_label: Option<String>,
    pub popular: bool,
    pub features: &'static [&'static str],
    /// Paid tiers show a subscribe button
    pub checkout: bool,
}

impl From<&Plan> for PlanOffer {
    fn from(plan: &Plan) -> Self {
        Self {
            id: plan.id,
            name: plan.name,
            messages: plan.messages,
            price_label: plan.price_label(),
            popular: plan.popular,
            features: plan.headline_features(),
            checkout: plan.price_cents.is_some(),
        }
    }
}
