use axum::{extract::Query, Json};
use contracts::domain::a101_demande_rh::{DemandeKind, DemandeRh};
use serde::Deserialize;

use crate::domain::a101_demande_rh::service;
use crate::shared::api_error::{ApiError, ApiResult};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub kind: Option<String>,
}

/// GET /api/rh/demandes?kind=conge
pub async fn list(Query(query): Query<ListQuery>) -> ApiResult<Vec<DemandeRh>> {
    let kind = match query.kind.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(code) => Some(
            DemandeKind::from_code(code)
                .ok_or_else(|| ApiError::BadRequest(format!("Unknown kind: {}", code)))?,
        ),
        None => None,
    };
    let demandes = service::list(kind).await?;
    tracing::info!("A101 RH: returning {} requests (kind: {:?})", demandes.len(), kind);
    Ok(Json(demandes))
}
