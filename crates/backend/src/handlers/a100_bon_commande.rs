use axum::{
    extract::{Path, Query},
    Json,
};
use contracts::domain::a100_bon_commande::{BcStatus, BonCommande};
use serde::Deserialize;

use crate::domain::a100_bon_commande::service;
use crate::shared::api_error::{ApiError, ApiResult};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub status: Option<String>,
}

/// GET /api/bc/documents?status=pending
pub async fn list(Query(query): Query<ListQuery>) -> ApiResult<Vec<BonCommande>> {
    let status = match query.status.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(code) => Some(
            BcStatus::from_code(code)
                .ok_or_else(|| ApiError::BadRequest(format!("Unknown status: {}", code)))?,
        ),
        None => None,
    };
    let docs = service::list(status).await?;
    tracing::info!("A100 BC: returning {} documents (status: {:?})", docs.len(), status);
    Ok(Json(docs))
}

/// GET /api/bc/documents/:id
pub async fn get_by_id(Path(id): Path<String>) -> ApiResult<BonCommande> {
    service::get(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Document not found: {}", id)))
}
