use crate::shared::api_utils::fetch_json;
use contracts::domain::a102_governance::{GovernanceItem, GovernanceKind};

pub async fn get_items(kind: Option<GovernanceKind>) -> Result<Vec<GovernanceItem>, String> {
    let path = match kind {
        Some(kind) => format!("/api/governance/items?kind={}", kind.code()),
        None => "/api/governance/items".to_string(),
    };
    fetch_json(&path).await
}
