use crate::shared::api_utils::fetch_json;
use contracts::domain::a100_bon_commande::{BcStatus, BonCommande};

/// List purchase orders, optionally restricted to one status.
pub async fn get_documents(status: Option<BcStatus>) -> Result<Vec<BonCommande>, String> {
    let path = match status {
        Some(status) => format!("/api/bc/documents?status={}", status.code()),
        None => "/api/bc/documents".to_string(),
    };
    fetch_json(&path).await
}
