use super::repository;
use contracts::domain::a100_bon_commande::{BcStatus, BonCommande};

/// Purchase orders, newest first, optionally restricted to one status
pub async fn list(status: Option<BcStatus>) -> anyhow::Result<Vec<BonCommande>> {
    let mut docs: Vec<BonCommande> = repository::list_all()
        .await?
        .into_iter()
        .filter(|d| status.map_or(true, |s| d.status == s))
        .collect();
    docs.sort_by(|a, b| b.issued_on.cmp(&a.issued_on));
    Ok(docs)
}

pub async fn get(id: &str) -> anyhow::Result<Option<BonCommande>> {
    repository::get_by_id(id).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_by_status() {
        let pending = list(Some(BcStatus::Pending)).await.unwrap();
        assert!(!pending.is_empty());
        assert!(pending.iter().all(|d| d.status == BcStatus::Pending));

        let all = list(None).await.unwrap();
        assert!(all.len() > pending.len());
        assert!(all.windows(2).all(|w| w[0].issued_on >= w[1].issued_on));
    }

    #[tokio::test]
    async fn test_get_unknown() {
        assert!(get("BC-0000").await.unwrap().is_none());
        assert!(get("BC-2025-0141").await.unwrap().is_some());
    }
}
