use crate::domain::a101_demandes_rh::nav::RhMain;
use crate::shared::components::stat_card::{format_value, StatCard};
use crate::shared::date_utils::format_date;
use crate::shared::navigation::NavKey;
use contracts::domain::a101_demande_rh::{DemandeKind, DemandeRh, DemandeStatus};
use contracts::shared::analytics::{KpiFormat, KpiStatus, KpiValue};
use leptos::prelude::*;

type Nav = NavKey<RhMain>;

fn empty_state() -> AnyView {
    view! { <div class="view-empty">"Aucune demande"</div> }.into_any()
}

fn pending_of(demandes: &[DemandeRh], kind: DemandeKind) -> impl Iterator<Item = &DemandeRh> {
    demandes
        .iter()
        .filter(move |d| d.kind == kind && d.status == DemandeStatus::Pending)
}

pub fn overview_kpis(demandes: &[DemandeRh]) -> Vec<KpiValue> {
    let pending_total = demandes
        .iter()
        .filter(|d| d.status == DemandeStatus::Pending)
        .count();
    let leave_days: u32 = pending_of(demandes, DemandeKind::Conge)
        .filter_map(|d| d.days)
        .sum();
    let expenses: f64 = pending_of(demandes, DemandeKind::Depense)
        .filter_map(|d| d.amount)
        .sum();
    let advances: f64 = pending_of(demandes, DemandeKind::Avance)
        .filter_map(|d| d.amount)
        .sum();

    vec![
        KpiValue {
            id: "pending".into(),
            label: "Demandes en attente".into(),
            value: pending_total as f64,
            format: KpiFormat::Integer,
            trend_percent: None,
            status: if pending_total > 10 {
                KpiStatus::Warning
            } else {
                KpiStatus::Neutral
            },
        },
        KpiValue {
            id: "leave_days".into(),
            label: "Jours de congé demandés".into(),
            value: f64::from(leave_days),
            format: KpiFormat::Days,
            trend_percent: None,
            status: KpiStatus::Neutral,
        },
        KpiValue {
            id: "expenses".into(),
            label: "Notes de frais à rembourser".into(),
            value: expenses,
            format: KpiFormat::Money {
                currency: "€".into(),
            },
            trend_percent: None,
            status: KpiStatus::Neutral,
        },
        KpiValue {
            id: "advances".into(),
            label: "Avances demandées".into(),
            value: advances,
            format: KpiFormat::Money {
                currency: "€".into(),
            },
            trend_percent: None,
            status: KpiStatus::Neutral,
        },
    ]
}

pub fn render_overview(_nav: &Nav, data: Option<&Vec<DemandeRh>>) -> AnyView {
    let Some(demandes) = data else {
        return empty_state();
    };
    let cards = overview_kpis(demandes)
        .into_iter()
        .map(|kpi| view! { <StatCard kpi=kpi /> })
        .collect_view();
    view! { <div class="stat-grid">{cards}</div> }.into_any()
}

/// Amount or duration column, whichever the request carries.
pub fn quantity_label(d: &DemandeRh) -> String {
    match (d.amount, d.days) {
        (Some(amount), _) => format_value(
            amount,
            &KpiFormat::Money {
                currency: "€".into(),
            },
        ),
        (None, Some(days)) => format!("{} j", days),
        (None, None) => "-".to_string(),
    }
}

fn status_class(status: DemandeStatus) -> &'static str {
    match status {
        DemandeStatus::Pending => "badge badge--warning",
        DemandeStatus::Approved => "badge badge--success",
        DemandeStatus::Rejected => "badge badge--error",
    }
}

/// Requests of the category; the `pending` branch hides decided ones.
pub fn render_list(nav: &Nav, data: Option<&Vec<DemandeRh>>) -> AnyView {
    let Some(demandes) = data else {
        return empty_state();
    };
    let pending_only = nav.effective_sub() == "pending";
    let mut visible: Vec<&DemandeRh> = demandes
        .iter()
        .filter(|d| !pending_only || d.status == DemandeStatus::Pending)
        .collect();
    if visible.is_empty() {
        return empty_state();
    }
    visible.sort_by(|a, b| b.submitted_on.cmp(&a.submitted_on));

    let rows = visible
        .into_iter()
        .map(|d| {
            view! {
                <tr>
                    <td><code>{d.id.clone()}</code></td>
                    <td>{format_date(d.submitted_on)}</td>
                    <td>{d.employee.clone()}</td>
                    <td>{d.department.clone()}</td>
                    <td>{d.kind.display_name()}</td>
                    <td class="num">{quantity_label(d)}</td>
                    <td>{d.reason.clone()}</td>
                    <td><span class=status_class(d.status)>{d.status.display_name()}</span></td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"N°"</th>
                    <th>"Déposée le"</th>
                    <th>"Collaborateur"</th>
                    <th>"Service"</th>
                    <th>"Type"</th>
                    <th>"Montant / durée"</th>
                    <th>"Motif"</th>
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
    use chrono::NaiveDate;

    fn demande(kind: DemandeKind, status: DemandeStatus, amount: Option<f64>, days: Option<u32>) -> DemandeRh {
        DemandeRh {
            id: "RH-1".into(),
            employee: "A. Koné".into(),
            department: "Travaux".into(),
            kind,
            status,
            submitted_on: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            amount,
            days,
            reason: "-".into(),
        }
    }

    #[test]
    fn test_overview_counts_pending_only() {
        let list = vec![
            demande(DemandeKind::Conge, DemandeStatus::Pending, None, Some(5)),
            demande(DemandeKind::Conge, DemandeStatus::Approved, None, Some(10)),
            demande(DemandeKind::Depense, DemandeStatus::Pending, Some(120.0), None),
            demande(DemandeKind::Avance, DemandeStatus::Pending, Some(300.0), None),
            demande(DemandeKind::Avance, DemandeStatus::Rejected, Some(900.0), None),
        ];
        let kpis = overview_kpis(&list);
        let value = |id: &str| kpis.iter().find(|k| k.id == id).unwrap().value;
        assert_eq!(value("pending"), 3.0);
        assert_eq!(value("leave_days"), 5.0);
        assert_eq!(value("expenses"), 120.0);
        assert_eq!(value("advances"), 300.0);
    }

    #[test]
    fn test_quantity_label() {
        let leave = demande(DemandeKind::Conge, DemandeStatus::Pending, None, Some(3));
        assert_eq!(quantity_label(&leave), "3 j");
        let none = demande(DemandeKind::Deplacement, DemandeStatus::Pending, None, None);
        assert_eq!(quantity_label(&none), "-");
        let expense = demande(DemandeKind::Depense, DemandeStatus::Pending, Some(45.5), None);
        assert_eq!(quantity_label(&expense), "45,50 €");
    }
}
