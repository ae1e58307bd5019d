//! Static plan catalog

use super::types::{Plan, PlanId, PlanOffer};

static PLANS: [Plan; 4] = [
    Plan {
        id: PlanId::Free,
        name: "Gratuito",
        messages: 5,
        price_cents: None,
        popular: false,
        features: &["5 sincronizações/mês", "Suporte básico", "1 repositório"],
    },
    Plan {
        id: PlanId::Pro,
        name: "Pro",
        messages: 250,
        price_cents: Some(2980),
        popular: false,
        features: &[
            "250 sincronizações/mês",
            "Suporte prioritário",
            "5 repositórios",
            "Webhooks",
        ],
    },
    Plan {
        id: PlanId::Plus,
        name: "Plus",
        messages: 500,
        price_cents: Some(4990),
        popular: true,
        features: &[
            "500 sincronizações/mês",
            "Suporte 24/7",
            "15 repositórios",
            "Webhooks",
            "API Access",
        ],
    },
    Plan {
        id: PlanId::Premium,
        name: "Premium",
        messages: 1000,
        price_cents: Some(7980),
        popular: false,
        features: &[
            "1000 sincronizações/mês",
            "Suporte dedicado",
            "Repositórios ilimitados",
            "Webhooks",
            "API Access",
            "White-label",
        ],
    },
];

/// All plans in display order
pub fn catalog() -> &'static [Plan] {
    &PLANS
}

/// The catalog as rendered by the plan picker
pub fn offers() -> Vec<PlanOffer> {
    catalog().iter().map(PlanOffer::from).collect()
}
