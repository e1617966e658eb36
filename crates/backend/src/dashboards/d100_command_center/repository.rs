//! Static catalog of analytics domains and previous-period baselines.

use contracts::shared::analytics::DomainInfo;

/// (id, label) of every analytics domain, in menu order
pub const DOMAINS: &[(&str, &str)] = &[
    ("overview", "Vue d'ensemble"),
    ("performance", "Performance"),
    ("chantiers", "Chantiers"),
    ("actions", "Plan d'actions"),
    ("risks", "Risques"),
    ("decisions", "Décisions"),
    ("realtime", "Temps réel"),
];

/// KPI values of the previous period, used to compute trends
const PREVIOUS_PERIOD: &[(&str, f64)] = &[
    ("bc_pending", 7.0),
    ("bc_pending_amount", 98_000.0),
    ("bc_validation_rate", 66.7),
    ("bc_validated_amount", 84_200.0),
    ("rh_pending", 6.0),
    ("rh_approval_rate", 70.0),
    ("gov_critical", 1.0),
];

pub fn list_domains() -> Vec<DomainInfo> {
    DOMAINS
        .iter()
        .map(|(id, label)| DomainInfo {
            id: id.to_string(),
            label: label.to_string(),
        })
        .collect()
}

pub fn domain_label(id: &str) -> Option<&'static str> {
    DOMAINS
        .iter()
        .find(|(domain_id, _)| *domain_id == id)
        .map(|(_, label)| *label)
}

pub fn previous_value(kpi_id: &str) -> Option<f64> {
    PREVIOUS_PERIOD
        .iter()
        .find(|(id, _)| *id == kpi_id)
        .map(|(_, v)| *v)
}
