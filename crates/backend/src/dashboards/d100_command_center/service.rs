use anyhow::Result;
use chrono::Utc;
use contracts::domain::a100_bon_commande::{BcStatus, BonCommande};
use contracts::domain::a101_demande_rh::{DemandeRh, DemandeStatus};
use contracts::domain::a102_governance::{GovernanceItem, GovernanceKind, Severity};
use contracts::shared::analytics::{
    DomainInfo, DomainSummary, DomainSummaryResponse, KpiFormat, KpiStatus, KpiValue,
};
use std::collections::BTreeMap;

use super::repository;
use crate::domain::{a100_bon_commande, a101_demande_rh, a102_governance};

const CLOSED: &str = "closed";

/// Snapshot of the mock datasets a summary is computed from
struct Snapshot {
    documents: Vec<BonCommande>,
    demandes: Vec<DemandeRh>,
    items: Vec<GovernanceItem>,
}

impl Snapshot {
    async fn load() -> Result<Self> {
        Ok(Self {
            documents: a100_bon_commande::service::list(None).await?,
            demandes: a101_demande_rh::service::list(None).await?,
            items: a102_governance::service::list(None).await?,
        })
    }

    fn bc(&self, status: BcStatus) -> impl Iterator<Item = &BonCommande> {
        self.documents.iter().filter(move |d| d.status == status)
    }

    fn rh(&self, status: DemandeStatus) -> impl Iterator<Item = &DemandeRh> {
        self.demandes.iter().filter(move |d| d.status == status)
    }

    fn open_items(&self) -> impl Iterator<Item = &GovernanceItem> {
        self.items.iter().filter(|i| i.status != CLOSED)
    }

    fn bc_validation_rate(&self) -> f64 {
        rate(self.bc(BcStatus::Validated).count(), self.bc(BcStatus::Rejected).count())
    }

    fn rh_approval_rate(&self) -> f64 {
        rate(
            self.rh(DemandeStatus::Approved).count(),
            self.rh(DemandeStatus::Rejected).count(),
        )
    }
}

fn rate(accepted: usize, refused: usize) -> f64 {
    let decided = accepted + refused;
    if decided == 0 {
        0.0
    } else {
        accepted as f64 * 100.0 / decided as f64
    }
}

fn money() -> KpiFormat {
    KpiFormat::Money {
        currency: "€".to_string(),
    }
}

/// Builds a KPI, deriving the trend from the previous-period baseline.
fn kpi(id: &str, label: &str, value: f64, format: KpiFormat, status: KpiStatus) -> KpiValue {
    let trend_percent = repository::previous_value(id)
        .filter(|prev| *prev != 0.0)
        .map(|prev| (value - prev) / prev * 100.0);
    KpiValue {
        id: id.to_string(),
        label: label.to_string(),
        value,
        format,
        trend_percent,
        status,
    }
}

/// Good above `good`, warning above `warning`, bad otherwise.
fn threshold_status(value: f64, good: f64, warning: f64) -> KpiStatus {
    if value >= good {
        KpiStatus::Good
    } else if value >= warning {
        KpiStatus::Warning
    } else {
        KpiStatus::Bad
    }
}

fn count_status(count: usize) -> KpiStatus {
    if count == 0 {
        KpiStatus::Good
    } else {
        KpiStatus::Bad
    }
}

fn overview(s: &Snapshot) -> DomainSummary {
    let pending = s.bc(BcStatus::Pending).count();
    let pending_amount: f64 = s.bc(BcStatus::Pending).map(|d| d.amount).sum();
    let rh_pending = s.rh(DemandeStatus::Pending).count();
    let critical = s
        .open_items()
        .filter(|i| i.severity == Severity::Critical)
        .count();

    let mut highlights = Vec::new();
    let urgent = s.bc(BcStatus::Pending).filter(|d| d.urgent).count();
    if urgent > 0 {
        highlights.push(format!("{} bon(s) de commande urgent(s) à valider", urgent));
    }
    if critical > 0 {
        highlights.push(format!("{} point(s) de gouvernance critique(s) ouvert(s)", critical));
    }
    highlights.push(format!("{} demande(s) RH en attente", rh_pending));

    DomainSummary {
        title: "Vue d'ensemble BMO".to_string(),
        kpis: vec![
            kpi("bc_pending", "BC en attente", pending as f64, KpiFormat::Integer, KpiStatus::Neutral),
            kpi("bc_pending_amount", "Montant BC en attente", pending_amount, money(), KpiStatus::Neutral),
            kpi("rh_pending", "Demandes RH en attente", rh_pending as f64, KpiFormat::Integer, KpiStatus::Neutral),
            kpi("gov_critical", "Points critiques", critical as f64, KpiFormat::Integer, count_status(critical)),
        ],
        highlights,
    }
}

fn performance(s: &Snapshot) -> DomainSummary {
    let validation_rate = s.bc_validation_rate();
    let approval_rate = s.rh_approval_rate();
    let validated_amount: f64 = s.bc(BcStatus::Validated).map(|d| d.amount).sum();

    DomainSummary {
        title: "Performance des circuits de validation".to_string(),
        kpis: vec![
            kpi(
                "bc_validation_rate",
                "Taux de validation BC",
                validation_rate,
                KpiFormat::Percent { decimals: 1 },
                threshold_status(validation_rate, 80.0, 60.0),
            ),
            kpi("bc_validated_amount", "Montant BC validés", validated_amount, money(), KpiStatus::Neutral),
            kpi(
                "rh_approval_rate",
                "Taux d'approbation RH",
                approval_rate,
                KpiFormat::Percent { decimals: 1 },
                threshold_status(approval_rate, 70.0, 50.0),
            ),
        ],
        highlights: vec![],
    }
}

/// One KPI per construction site: total amount ordered (all statuses but rejected).
fn chantiers(s: &Snapshot) -> DomainSummary {
    let mut by_site: BTreeMap<&str, f64> = BTreeMap::new();
    for doc in s.documents.iter().filter(|d| d.status != BcStatus::Rejected) {
        *by_site.entry(doc.site.as_str()).or_insert(0.0) += doc.amount;
    }
    let kpis = by_site
        .into_iter()
        .enumerate()
        .map(|(i, (site, amount))| {
            kpi(&format!("site_{}", i + 1), site, amount, money(), KpiStatus::Neutral)
        })
        .collect();

    DomainSummary {
        title: "Engagements par chantier".to_string(),
        kpis,
        highlights: vec![],
    }
}

fn actions(s: &Snapshot) -> DomainSummary {
    let in_progress = s.items.iter().filter(|i| i.status == "in_progress").count();
    let urgent = s.bc(BcStatus::Pending).filter(|d| d.urgent).count();
    let open_decisions = s
        .open_items()
        .filter(|i| i.kind == GovernanceKind::Decision)
        .count();

    DomainSummary {
        title: "Plan d'actions".to_string(),
        kpis: vec![
            kpi("actions_in_progress", "Actions en cours", in_progress as f64, KpiFormat::Integer, KpiStatus::Neutral),
            kpi("bc_urgent", "BC urgents", urgent as f64, KpiFormat::Integer, count_status(urgent)),
            kpi("decisions_open", "Décisions à prendre", open_decisions as f64, KpiFormat::Integer, KpiStatus::Warning),
        ],
        highlights: s
            .open_items()
            .filter(|i| i.status == "in_progress")
            .map(|i| format!("{} ({})", i.title, i.owner))
            .collect(),
    }
}

fn risks(s: &Snapshot) -> DomainSummary {
    let open_alerts: Vec<&GovernanceItem> = s
        .open_items()
        .filter(|i| i.kind == GovernanceKind::Alert)
        .collect();
    let count = |severity: Severity| open_alerts.iter().filter(|i| i.severity == severity).count();
    let critical = count(Severity::Critical);
    let high = count(Severity::High);

    DomainSummary {
        title: "Cartographie des risques".to_string(),
        kpis: vec![
            kpi("alerts_open", "Alertes ouvertes", open_alerts.len() as f64, KpiFormat::Integer, KpiStatus::Neutral),
            kpi("alerts_critical", "Critiques", critical as f64, KpiFormat::Integer, count_status(critical)),
            kpi(
                "alerts_high",
                "Hautes",
                high as f64,
                KpiFormat::Integer,
                if high > 0 { KpiStatus::Warning } else { KpiStatus::Good },
            ),
        ],
        highlights: open_alerts
            .iter()
            .filter(|i| i.severity >= Severity::High)
            .map(|i| i.title.clone())
            .collect(),
    }
}

fn decisions(s: &Snapshot) -> DomainSummary {
    let all: Vec<&GovernanceItem> = s
        .items
        .iter()
        .filter(|i| i.kind == GovernanceKind::Decision)
        .collect();
    let open: Vec<&&GovernanceItem> = all.iter().filter(|i| i.status != CLOSED).collect();

    DomainSummary {
        title: "Arbitrages".to_string(),
        kpis: vec![
            kpi("decisions_open", "En attente d'arbitrage", open.len() as f64, KpiFormat::Integer, KpiStatus::Warning),
            kpi(
                "decisions_closed",
                "Arbitrées",
                (all.len() - open.len()) as f64,
                KpiFormat::Integer,
                KpiStatus::Good,
            ),
        ],
        highlights: open.iter().map(|i| i.title.clone()).collect(),
    }
}

fn realtime(s: &Snapshot) -> DomainSummary {
    let queue = s.bc(BcStatus::Pending).count() + s.rh(DemandeStatus::Pending).count();
    let latest = s.documents.iter().max_by_key(|d| d.issued_on);

    DomainSummary {
        title: "Flux en temps réel".to_string(),
        kpis: vec![kpi(
            "queue",
            "Éléments en file de validation",
            queue as f64,
            KpiFormat::Integer,
            if queue > 10 { KpiStatus::Warning } else { KpiStatus::Neutral },
        )],
        highlights: latest
            .map(|d| format!("Dernier BC reçu : {} ({})", d.id, d.supplier))
            .into_iter()
            .collect(),
    }
}

pub fn list_domains() -> Vec<DomainInfo> {
    repository::list_domains()
}

/// Summary of one analytics domain; `None` when the domain does not exist
pub async fn get_domain_summary(domain_id: &str) -> Result<Option<DomainSummaryResponse>> {
    if repository::domain_label(domain_id).is_none() {
        return Ok(None);
    }
    let snapshot = Snapshot::load().await?;
    let summary = match domain_id {
        "overview" => overview(&snapshot),
        "performance" => performance(&snapshot),
        "chantiers" => chantiers(&snapshot),
        "actions" => actions(&snapshot),
        "risks" => risks(&snapshot),
        "decisions" => decisions(&snapshot),
        "realtime" => realtime(&snapshot),
        other => anyhow::bail!("domain '{}' is listed but has no summary builder", other),
    };

    Ok(Some(DomainSummaryResponse {
        summary,
        domain_id: domain_id.to_string(),
        timestamp: Utc::now(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_every_listed_domain_has_a_summary() {
        for domain in list_domains() {
            let resp = get_domain_summary(&domain.id).await.unwrap();
            let resp = resp.unwrap_or_else(|| panic!("no summary for {}", domain.id));
            assert_eq!(resp.domain_id, domain.id);
            assert!(!resp.summary.kpis.is_empty(), "empty KPIs for {}", domain.id);
        }
    }

    #[tokio::test]
    async fn test_unknown_domain_is_none() {
        assert!(get_domain_summary("unknown").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_overview_figures() {
        let resp = get_domain_summary("overview").await.unwrap().unwrap();
        let pending = resp.summary.kpis.iter().find(|k| k.id == "bc_pending").unwrap();
        assert_eq!(pending.value, 5.0);
        // 5 pending against a baseline of 7
        let trend = pending.trend_percent.unwrap();
        assert!((trend - (-200.0 / 7.0)).abs() < 1e-9);
    }

    #[test]
    fn test_rate() {
        assert_eq!(rate(0, 0), 0.0);
        assert_eq!(rate(3, 1), 75.0);
    }

    #[test]
    fn test_threshold_status() {
        assert_eq!(threshold_status(85.0, 80.0, 60.0), KpiStatus::Good);
        assert_eq!(threshold_status(80.0, 80.0, 60.0), KpiStatus::Good);
        assert_eq!(threshold_status(70.0, 80.0, 60.0), KpiStatus::Warning);
        assert_eq!(threshold_status(10.0, 80.0, 60.0), KpiStatus::Bad);
    }
}
