use chrono::NaiveDate;
use contracts::domain::a102_governance::{GovernanceItem, GovernanceKind, Severity};
use once_cell::sync::Lazy;

// (id, kind, title, owner, severity, due_on, status)
type Row = (
    &'static str,
    GovernanceKind,
    &'static str,
    &'static str,
    Severity,
    Option<&'static str>,
    &'static str,
);

const ROWS: &[Row] = &[
    ("GOV-R01", GovernanceKind::Raci, "Validation des BC > 50 k€ : A = Directeur BMO", "Direction BMO", Severity::Medium, None, "active"),
    ("GOV-R02", GovernanceKind::Raci, "Réception des ouvrages : R = Conducteur de travaux", "Pôle Travaux", Severity::Low, None, "active"),
    ("GOV-R03", GovernanceKind::Raci, "Suivi budgétaire mensuel : R = Contrôle de gestion", "Contrôle de gestion", Severity::Medium, None, "active"),
    ("GOV-A01", GovernanceKind::Alert, "Dépassement budget lot gros œuvre Jaurès (+12 %)", "A. Benali", Severity::Critical, Some("2025-03-10"), "open"),
    ("GOV-A02", GovernanceKind::Alert, "Retard livraison menuiseries, planning impacté", "K. Traoré", Severity::High, Some("2025-03-14"), "open"),
    ("GOV-A03", GovernanceKind::Alert, "Certificat de sous-traitant expiré", "Service juridique", Severity::Critical, Some("2025-03-05"), "in_progress"),
    ("GOV-A04", GovernanceKind::Alert, "Écart de métré sur armatures", "M. Lefèvre", Severity::Medium, Some("2025-02-28"), "closed"),
    ("GOV-D01", GovernanceKind::Decision, "Arbitrage variante fondations Pont de la Sèvre", "Comité BMO", Severity::High, Some("2025-03-20"), "open"),
    ("GOV-D02", GovernanceKind::Decision, "Choix du fournisseur béton 2025", "Comité BMO", Severity::Medium, Some("2025-02-15"), "closed"),
    ("GOV-D03", GovernanceKind::Decision, "Report de la réception du bâtiment B", "Direction BMO", Severity::Critical, Some("2025-03-12"), "open"),
];

static ITEMS: Lazy<Vec<GovernanceItem>> = Lazy::new(|| {
    ROWS.iter()
        .map(|&(id, kind, title, owner, severity, due_on, status)| GovernanceItem {
            id: id.to_string(),
            kind,
            title: title.to_string(),
            owner: owner.to_string(),
            severity,
            due_on: due_on.and_then(|d| d.parse::<NaiveDate>().ok()),
            status: status.to_string(),
        })
        .collect()
});

pub async fn list_all() -> anyhow::Result<Vec<GovernanceItem>> {
    Ok(ITEMS.clone())
}
