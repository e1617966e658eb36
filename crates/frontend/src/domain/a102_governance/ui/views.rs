use crate::domain::a102_governance::nav::GovernanceMain;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::format_date;
use crate::shared::navigation::NavKey;
use chrono::{NaiveDate, Utc};
use contracts::domain::a102_governance::{GovernanceItem, GovernanceKind, Severity};
use contracts::shared::analytics::{KpiFormat, KpiStatus, KpiValue};
use leptos::prelude::*;

type Nav = NavKey<GovernanceMain>;

pub const CLOSED_STATUS: &str = "closed";

fn empty_state() -> AnyView {
    view! { <div class="view-empty">"Aucun élément"</div> }.into_any()
}

pub fn is_open(item: &GovernanceItem) -> bool {
    item.status != CLOSED_STATUS
}

pub fn is_overdue(item: &GovernanceItem, today: NaiveDate) -> bool {
    is_open(item) && item.due_on.is_some_and(|due| due < today)
}

pub fn overview_kpis(items: &[GovernanceItem], today: NaiveDate) -> Vec<KpiValue> {
    let open_alerts = items
        .iter()
        .filter(|i| i.kind == GovernanceKind::Alert && is_open(i))
        .count();
    let critical = items
        .iter()
        .filter(|i| i.severity == Severity::Critical && is_open(i))
        .count();
    let overdue = items.iter().filter(|i| is_overdue(i, today)).count();
    let pending_decisions = items
        .iter()
        .filter(|i| i.kind == GovernanceKind::Decision && is_open(i))
        .count();

    let kpi = |id: &str, label: &str, value: usize, bad: bool| KpiValue {
        id: id.into(),
        label: label.into(),
        value: value as f64,
        format: KpiFormat::Integer,
        trend_percent: None,
        status: if bad && value > 0 {
            KpiStatus::Bad
        } else {
            KpiStatus::Neutral
        },
    };

    vec![
        kpi("open_alerts", "Alertes ouvertes", open_alerts, false),
        kpi("critical", "Points critiques", critical, true),
        kpi("overdue", "Échéances dépassées", overdue, true),
        kpi("pending_decisions", "Décisions en attente", pending_decisions, false),
    ]
}

pub fn render_overview(_nav: &Nav, data: Option<&Vec<GovernanceItem>>) -> AnyView {
    let Some(items) = data else {
        return empty_state();
    };
    let cards = overview_kpis(items, Utc::now().date_naive())
        .into_iter()
        .map(|kpi| view! { <StatCard kpi=kpi /> })
        .collect_view();
    view! { <div class="stat-grid">{cards}</div> }.into_any()
}

fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => "badge",
        Severity::Medium => "badge badge--info",
        Severity::High => "badge badge--warning",
        Severity::Critical => "badge badge--error",
    }
}

/// Items of the category, most severe first. `open` and `critical`
/// branches narrow the list.
pub fn select_items<'a>(nav: &Nav, items: &'a [GovernanceItem]) -> Vec<&'a GovernanceItem> {
    let mut visible: Vec<&GovernanceItem> = items
        .iter()
        .filter(|i| match nav.effective_sub() {
            "open" => is_open(i),
            "critical" => i.severity == Severity::Critical,
            _ => true,
        })
        .collect();
    visible.sort_by(|a, b| b.severity.cmp(&a.severity).then_with(|| a.due_on.cmp(&b.due_on)));
    visible
}

pub fn render_list(nav: &Nav, data: Option<&Vec<GovernanceItem>>) -> AnyView {
    let Some(items) = data else {
        return empty_state();
    };
    let visible = select_items(nav, items);
    if visible.is_empty() {
        return empty_state();
    }
    let today = Utc::now().date_naive();

    let rows = visible
        .into_iter()
        .map(|item| {
            let due = item.due_on.map(format_date).unwrap_or_else(|| "-".to_string());
            let overdue = is_overdue(item, today);
            view! {
                <tr class=if overdue { "row--overdue" } else { "" }>
                    <td><code>{item.id.clone()}</code></td>
                    <td>{item.title.clone()}</td>
                    <td>{item.owner.clone()}</td>
                    <td><span class=severity_class(item.severity)>{item.severity.display_name()}</span></td>
                    <td>{due}</td>
                    <td>{item.status.clone()}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Réf."</th>
                    <th>"Intitulé"</th>
                    <th>"Responsable"</th>
                    <th>"Criticité"</th>
                    <th>"Échéance"</th>
                    <th>"Statut"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(kind: GovernanceKind, severity: Severity, status: &str, due_day: Option<u32>) -> GovernanceItem {
        GovernanceItem {
            id: format!("G-{:?}-{:?}", kind, severity),
            kind,
            title: "t".into(),
            owner: "o".into(),
            severity,
            due_on: due_day.map(|d| NaiveDate::from_ymd_opt(2025, 6, d).unwrap()),
            status: status.into(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_overview_kpis() {
        let items = vec![
            item(GovernanceKind::Alert, Severity::Critical, "open", Some(10)),
            item(GovernanceKind::Alert, Severity::Low, CLOSED_STATUS, Some(1)),
            item(GovernanceKind::Decision, Severity::Medium, "open", Some(20)),
            item(GovernanceKind::Raci, Severity::Critical, CLOSED_STATUS, None),
        ];
        let kpis = overview_kpis(&items, today());
        let value = |id: &str| kpis.iter().find(|k| k.id == id).unwrap().value;
        assert_eq!(value("open_alerts"), 1.0);
        assert_eq!(value("critical"), 1.0);
        assert_eq!(value("overdue"), 1.0);
        assert_eq!(value("pending_decisions"), 1.0);
    }

    #[test]
    fn test_due_today_is_not_overdue() {
        let due_today = item(GovernanceKind::Alert, Severity::High, "open", Some(15));
        assert!(!is_overdue(&due_today, today()));
    }

    #[test]
    fn test_critical_branch_sorted_by_due_date() {
        let items = vec![
            item(GovernanceKind::Alert, Severity::Critical, "open", Some(20)),
            item(GovernanceKind::Alert, Severity::High, "open", Some(1)),
            item(GovernanceKind::Alert, Severity::Critical, CLOSED_STATUS, Some(5)),
        ];
        let nav = NavKey::new(GovernanceMain::Alerts, Some("critical"), None);
        let selected = select_items(&nav, &items);
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].due_on, NaiveDate::from_ymd_opt(2025, 6, 5));

        let open = select_items(&NavKey::main_only(GovernanceMain::Alerts), &items);
        assert_eq!(open.len(), 2);
        assert_eq!(open[0].severity, Severity::Critical);
    }
}
