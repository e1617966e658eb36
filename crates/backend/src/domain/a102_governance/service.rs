use super::repository;
use contracts::domain::a102_governance::{GovernanceItem, GovernanceKind};

/// Governance items, most severe first, optionally restricted to one kind
pub async fn list(kind: Option<GovernanceKind>) -> anyhow::Result<Vec<GovernanceItem>> {
    let mut items: Vec<GovernanceItem> = repository::list_all()
        .await?
        .into_iter()
        .filter(|i| kind.map_or(true, |k| i.kind == k))
        .collect();
    items.sort_by(|a, b| b.severity.cmp(&a.severity).then_with(|| a.id.cmp(&b.id)));
    Ok(items)
}
