use crate::shared::api_utils::fetch_json;
use contracts::shared::analytics::DomainSummaryResponse;

/// Fetch the KPI summary of one analytics domain
pub async fn get_domain_summary(domain_id: &str) -> Result<DomainSummaryResponse, String> {
    let path = format!(
        "/api/analytics/domains/{}/summary",
        urlencoding::encode(domain_id)
    );
    fetch_json(&path).await
}
