use super::repository;
use contracts::domain::a101_demande_rh::{DemandeKind, DemandeRh};

/// HR requests, most recent first, optionally restricted to one kind
pub async fn list(kind: Option<DemandeKind>) -> anyhow::Result<Vec<DemandeRh>> {
    let mut demandes: Vec<DemandeRh> = repository::list_all()
        .await?
        .into_iter()
        .filter(|d| kind.map_or(true, |k| d.kind == k))
        .collect();
    demandes.sort_by(|a, b| b.submitted_on.cmp(&a.submitted_on));
    Ok(demandes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_by_kind() {
        let conges = list(Some(DemandeKind::Conge)).await.unwrap();
        assert_eq!(conges.len(), 3);
        assert!(conges.iter().all(|d| d.kind == DemandeKind::Conge));
        assert_eq!(list(None).await.unwrap().len(), 10);
    }
}
