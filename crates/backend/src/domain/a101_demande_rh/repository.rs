use chrono::NaiveDate;
use contracts::domain::a101_demande_rh::{DemandeKind, DemandeRh, DemandeStatus};
use once_cell::sync::Lazy;

// (id, employee, department, kind, status, submitted_on, amount, days, reason)
type Row = (
    &'static str,
    &'static str,
    &'static str,
    DemandeKind,
    DemandeStatus,
    &'static str,
    Option<f64>,
    Option<u32>,
    &'static str,
);

const ROWS: &[Row] = &[
    ("RH-0301", "Awa Koné", "Travaux", DemandeKind::Conge, DemandeStatus::Pending, "2025-03-02", None, Some(5), "Congés annuels"),
    ("RH-0302", "Julien Martin", "Études", DemandeKind::Conge, DemandeStatus::Approved, "2025-02-20", None, Some(10), "Congés d'été anticipés"),
    ("RH-0303", "Sofia Haddad", "Achats", DemandeKind::Conge, DemandeStatus::Pending, "2025-03-05", None, Some(2), "Événement familial"),
    ("RH-0304", "Thomas Petit", "Travaux", DemandeKind::Depense, DemandeStatus::Pending, "2025-03-04", Some(186.4), None, "Repas équipe chantier Jaurès"),
    ("RH-0305", "Awa Koné", "Travaux", DemandeKind::Depense, DemandeStatus::Approved, "2025-02-25", Some(64.0), None, "Péages visite fournisseur"),
    ("RH-0306", "Nadia Rami", "Direction", DemandeKind::Depense, DemandeStatus::Rejected, "2025-02-27", Some(420.0), None, "Hôtel sans ordre de mission"),
    ("RH-0307", "Julien Martin", "Études", DemandeKind::Deplacement, DemandeStatus::Pending, "2025-03-06", Some(350.0), Some(2), "Réunion maîtrise d'œuvre à Lyon"),
    ("RH-0308", "Thomas Petit", "Travaux", DemandeKind::Deplacement, DemandeStatus::Approved, "2025-02-18", Some(120.0), Some(1), "Réception béton usine"),
    ("RH-0309", "Sofia Haddad", "Achats", DemandeKind::Avance, DemandeStatus::Pending, "2025-03-03", Some(800.0), None, "Avance sur frais de déménagement"),
    ("RH-0310", "Marc Dubois", "Sécurité", DemandeKind::Avance, DemandeStatus::Approved, "2025-02-10", Some(500.0), None, "Avance exceptionnelle"),
];

static DEMANDES: Lazy<Vec<DemandeRh>> = Lazy::new(|| {
    ROWS.iter()
        .map(
            |&(id, employee, department, kind, status, submitted_on, amount, days, reason)| DemandeRh {
                id: id.to_string(),
                employee: employee.to_string(),
                department: department.to_string(),
                kind,
                status,
                submitted_on: submitted_on.parse::<NaiveDate>().unwrap_or_default(),
                amount,
                days,
                reason: reason.to_string(),
            },
        )
        .collect()
});

pub async fn list_all() -> anyhow::Result<Vec<DemandeRh>> {
    Ok(DEMANDES.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_dates_parse() {
        for row in ROWS {
            assert!(row.5.parse::<NaiveDate>().is_ok(), "bad date in {}", row.0);
        }
    }

    #[test]
    fn test_every_kind_is_seeded() {
        for kind in [
            DemandeKind::Conge,
            DemandeKind::Depense,
            DemandeKind::Deplacement,
            DemandeKind::Avance,
        ] {
            assert!(ROWS.iter().any(|r| r.3 == kind), "no {:?} request", kind);
        }
    }
}
