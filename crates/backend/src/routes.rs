use axum::{routing::get, Router};

use crate::handlers;

/// Every route of the application
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // D100 COMMAND CENTER ANALYTICS
        // ========================================
        .route(
            "/api/analytics/domains",
            get(handlers::d100_command_center::list_domains),
        )
        .route(
            "/api/analytics/domains//summary",
            get(handlers::d100_command_center::missing_domain_id),
        )
        .route(
            "/api/analytics/domains/:domain_id/summary",
            get(handlers::d100_command_center::get_domain_summary),
        )
        // ========================================
        // A100 VALIDATION BC
        // ========================================
        .route("/api/bc/documents", get(handlers::a100_bon_commande::list))
        .route(
            "/api/bc/documents/:id",
            get(handlers::a100_bon_commande::get_by_id),
        )
        // ========================================
        // A101 DEMANDES RH
        // ========================================
        .route("/api/rh/demandes", get(handlers::a101_demande_rh::list))
        // ========================================
        // A102 GOVERNANCE
        // ========================================
        .route(
            "/api/governance/items",
            get(handlers::a102_governance::list),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use contracts::domain::a100_bon_commande::BonCommande;
    use contracts::shared::analytics::{DomainInfo, DomainSummaryResponse};
    use contracts::shared::api_error::ApiErrorBody;
    use serde::de::DeserializeOwned;
    use tower::util::ServiceExt;

    async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
        let response = configure_routes()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    async fn get_json<T: DeserializeOwned>(uri: &str) -> (StatusCode, T) {
        let (status, body) = get(uri).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"ok");
    }

    #[tokio::test]
    async fn test_domain_summary() {
        let (status, resp): (_, DomainSummaryResponse) =
            get_json("/api/analytics/domains/overview/summary").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(resp.domain_id, "overview");
        assert!(!resp.summary.kpis.is_empty());
    }

    #[tokio::test]
    async fn test_domain_summary_wire_format() {
        let (status, body) = get("/api/analytics/domains/risks/summary").await;
        assert_eq!(status, StatusCode::OK);
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["domainId"], "risks");
        assert!(value["summary"]["kpis"].is_array());
        assert!(value["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_empty_domain_id_is_bad_request() {
        let (status, body): (_, ApiErrorBody) = get_json("/api/analytics/domains//summary").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, ApiErrorBody::new("Domain ID is required"));
    }

    #[tokio::test]
    async fn test_blank_domain_id_is_bad_request() {
        let (status, body): (_, ApiErrorBody) =
            get_json("/api/analytics/domains/%20/summary").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Domain ID is required");
    }

    #[tokio::test]
    async fn test_unknown_domain_is_not_found() {
        let (status, body): (_, ApiErrorBody) =
            get_json("/api/analytics/domains/nope/summary").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "Domain not found: nope");
    }

    #[tokio::test]
    async fn test_list_domains() {
        let (status, domains): (_, Vec<DomainInfo>) = get_json("/api/analytics/domains").await;
        assert_eq!(status, StatusCode::OK);
        assert!(domains.iter().any(|d| d.id == "chantiers"));
    }

    #[tokio::test]
    async fn test_bc_documents_filtered_by_status() {
        let (status, docs): (_, Vec<BonCommande>) =
            get_json("/api/bc/documents?status=rejected").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(docs.len(), 2);

        let (status, body): (_, ApiErrorBody) = get_json("/api/bc/documents?status=lost").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Unknown status: lost");
    }

    #[tokio::test]
    async fn test_bc_document_by_id() {
        let (status, doc): (_, BonCommande) = get_json("/api/bc/documents/BC-2025-0144").await;
        assert_eq!(status, StatusCode::OK);
        assert!(doc.urgent);

        let (status, _) = get("/api/bc/documents/BC-1999-0001").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_rh_and_governance_lists() {
        let (status, body) = get("/api/rh/demandes?kind=avance").await;
        assert_eq!(status, StatusCode::OK);
        let list: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(list.as_array().unwrap().len(), 2);

        let (status, body) = get("/api/governance/items?kind=raci").await;
        assert_eq!(status, StatusCode::OK);
        let list: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(list.as_array().unwrap().len(), 3);

        let (status, _) = get("/api/governance/items?kind=x").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
