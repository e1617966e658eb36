use axum::{extract::Query, Json};
use contracts::domain::a102_governance::{GovernanceItem, GovernanceKind};
use serde::Deserialize;

use crate::domain::a102_governance::service;
use crate::shared::api_error::{ApiError, ApiResult};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub kind: Option<String>,
}

/// GET /api/governance/items?kind=alert
pub async fn list(Query(query): Query<ListQuery>) -> ApiResult<Vec<GovernanceItem>> {
    let kind = match query.kind.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(code) => Some(
            GovernanceKind::from_code(code)
                .ok_or_else(|| ApiError::BadRequest(format!("Unknown kind: {}", code)))?,
        ),
        None => None,
    };
    let items = service::list(kind).await?;
    tracing::info!("A102 Governance: returning {} items (kind: {:?})", items.len(), kind);
    Ok(Json(items))
}
