use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// KPI values
// ---------------------------------------------------------------------------

/// Visual status of a KPI (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KpiStatus {
    Good,
    Warning,
    Bad,
    Neutral,
}

/// How to format the numeric value on the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum KpiFormat {
    Money { currency: String },
    Percent { decimals: u8 },
    Integer,
    Days,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiValue {
    pub id: String,
    pub label: String,
    pub value: f64,
    pub format: KpiFormat,
    /// Change relative to the previous period, in percent.
    #[serde(default)]
    pub trend_percent: Option<f64>,
    pub status: KpiStatus,
}

// ---------------------------------------------------------------------------
// Domain summaries
// ---------------------------------------------------------------------------

/// Analytics domain descriptor, as listed by `GET /api/analytics/domains`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainInfo {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainSummary {
    pub title: String,
    pub kpis: Vec<KpiValue>,
    /// Short free-text bullet points shown under the KPI grid.
    #[serde(default)]
    pub highlights: Vec<String>,
}

/// `GET /api/analytics/domains/{domainId}/summary`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainSummaryResponse {
    pub summary: DomainSummary,
    pub domain_id: String,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_response_wire_names() {
        let resp = DomainSummaryResponse {
            summary: DomainSummary {
                title: "Vue globale".into(),
                kpis: vec![],
                highlights: vec![],
            },
            domain_id: "overview".into(),
            timestamp: DateTime::parse_from_rfc3339("2025-01-15T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        };
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["domainId"], "overview");
        assert!(value.get("summary").is_some());
        assert_eq!(value["timestamp"], "2025-01-15T10:00:00Z");
    }

    #[test]
    fn test_kpi_format_is_tagged() {
        let fmt = KpiFormat::Money {
            currency: "EUR".into(),
        };
        let value = serde_json::to_value(&fmt).unwrap();
        assert_eq!(value["kind"], "money");
        assert_eq!(value["currency"], "EUR");
    }
}
