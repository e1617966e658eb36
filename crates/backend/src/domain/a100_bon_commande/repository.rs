use chrono::NaiveDate;
use contracts::domain::a100_bon_commande::{BcStatus, BonCommande};
use once_cell::sync::Lazy;

// (id, supplier, site, description, amount, status, issued_on, requested_by, urgent)
type Row = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    f64,
    BcStatus,
    &'static str,
    &'static str,
    bool,
);

const ROWS: &[Row] = &[
    ("BC-2025-0141", "Lafarge Béton", "Résidence Les Tilleuls", "Béton prêt à l'emploi C25/30, 120 m³", 14_880.0, BcStatus::Pending, "2025-03-03", "K. Traoré", false),
    ("BC-2025-0142", "Point.P", "Résidence Les Tilleuls", "Parpaings et mortier, lot 2", 3_420.5, BcStatus::Pending, "2025-03-04", "K. Traoré", true),
    ("BC-2025-0143", "Kiloutou", "Pont de la Sèvre", "Location nacelle 18 m, 3 semaines", 6_150.0, BcStatus::Pending, "2025-03-05", "M. Lefèvre", false),
    ("BC-2025-0144", "Schneider Electric", "Groupe scolaire Jaurès", "Tableaux électriques TGBT", 58_300.0, BcStatus::Pending, "2025-03-06", "A. Benali", true),
    ("BC-2025-0145", "Saint-Gobain", "Groupe scolaire Jaurès", "Menuiseries aluminium, bâtiment B", 42_760.0, BcStatus::Pending, "2025-03-07", "A. Benali", false),
    ("BC-2025-0131", "Lafarge Béton", "Pont de la Sèvre", "Béton fibré pour tablier", 27_400.0, BcStatus::Validated, "2025-02-18", "M. Lefèvre", false),
    ("BC-2025-0132", "Hilti", "Résidence Les Tilleuls", "Chevilles chimiques et outillage", 1_890.0, BcStatus::Validated, "2025-02-19", "K. Traoré", false),
    ("BC-2025-0133", "Loxam", "Groupe scolaire Jaurès", "Location grue mobile 2 jours", 4_800.0, BcStatus::Validated, "2025-02-21", "A. Benali", true),
    ("BC-2025-0134", "ArcelorMittal", "Pont de la Sèvre", "Armatures HA, 14 t", 61_250.0, BcStatus::Validated, "2025-02-24", "M. Lefèvre", false),
    ("BC-2025-0135", "Rexel", "Groupe scolaire Jaurès", "Câblage courant faible", 7_340.0, BcStatus::Validated, "2025-02-26", "A. Benali", false),
    ("BC-2025-0136", "Bigmat", "Résidence Les Tilleuls", "Isolation laine de roche, surcommande", 9_980.0, BcStatus::Rejected, "2025-02-27", "K. Traoré", false),
    ("BC-2025-0137", "Kiloutou", "Pont de la Sèvre", "Location compresseur sans devis comparatif", 2_100.0, BcStatus::Rejected, "2025-02-28", "M. Lefèvre", false),
];

static DOCUMENTS: Lazy<Vec<BonCommande>> = Lazy::new(|| {
    ROWS.iter()
        .map(
            |&(id, supplier, site, description, amount, status, issued_on, requested_by, urgent)| BonCommande {
                id: id.to_string(),
                supplier: supplier.to_string(),
                site: site.to_string(),
                description: description.to_string(),
                amount,
                currency: "€".to_string(),
                status,
                issued_on: issued_on.parse::<NaiveDate>().unwrap_or_default(),
                requested_by: requested_by.to_string(),
                urgent,
            },
        )
        .collect()
});

pub async fn list_all() -> anyhow::Result<Vec<BonCommande>> {
    Ok(DOCUMENTS.clone())
}

pub async fn get_by_id(id: &str) -> anyhow::Result<Option<BonCommande>> {
    Ok(DOCUMENTS.iter().find(|d| d.id == id).cloned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_dates_parse() {
        for row in ROWS {
            assert!(row.6.parse::<NaiveDate>().is_ok(), "bad date in {}", row.0);
        }
    }

    #[test]
    fn test_seed_ids_unique() {
        let mut ids: Vec<_> = ROWS.iter().map(|r| r.0).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), ROWS.len());
    }
}
