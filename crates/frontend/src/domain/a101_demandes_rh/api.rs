use crate::shared::api_utils::fetch_json;
use contracts::domain::a101_demande_rh::{DemandeKind, DemandeRh};

/// List HR requests, optionally restricted to one kind.
pub async fn get_demandes(kind: Option<DemandeKind>) -> Result<Vec<DemandeRh>, String> {
    let path = match kind {
        Some(kind) => format!("/api/rh/demandes?kind={}", kind.code()),
        None => "/api/rh/demandes".to_string(),
    };
    fetch_json(&path).await
}
