use axum::{extract::Path, Json};
use contracts::shared::analytics::{DomainInfo, DomainSummaryResponse};

use crate::dashboards::d100_command_center::service;
use crate::shared::api_error::{ApiError, ApiResult};

const DOMAIN_ID_REQUIRED: &str = "Domain ID is required";

/// GET /api/analytics/domains
pub async fn list_domains() -> Json<Vec<DomainInfo>> {
    Json(service::list_domains())
}

/// GET /api/analytics/domains/:domain_id/summary
pub async fn get_domain_summary(Path(domain_id): Path<String>) -> ApiResult<DomainSummaryResponse> {
    let domain_id = domain_id.trim();
    if domain_id.is_empty() {
        return Err(ApiError::BadRequest(DOMAIN_ID_REQUIRED.to_string()));
    }
    tracing::info!("D100 Command center: summary for domain '{}'", domain_id);

    match service::get_domain_summary(domain_id).await? {
        Some(response) => {
            tracing::info!(
                "D100 Command center: returning {} KPIs for '{}'",
                response.summary.kpis.len(),
                domain_id
            );
            Ok(Json(response))
        }
        None => Err(ApiError::NotFound(format!("Domain not found: {}", domain_id))),
    }
}

/// GET /api/analytics/domains//summary
///
/// The router cannot bind an empty path segment to `:domain_id`, so the
/// empty-id form gets its own route.
pub async fn missing_domain_id() -> ApiError {
    ApiError::BadRequest(DOMAIN_ID_REQUIRED.to_string())
}
