use crate::dashboards::d100_command_center::nav::DashboardMain;
use crate::shared::components::stat_card::{format_value, StatCard};
use crate::shared::date_utils::format_datetime;
use crate::shared::navigation::NavKey;
use contracts::shared::analytics::DomainSummaryResponse;
use leptos::prelude::*;

type Nav = NavKey<DashboardMain>;

fn empty_state() -> AnyView {
    view! { <div class="view-empty">"Aucune donnée disponible"</div> }.into_any()
}

fn updated_at(resp: &DomainSummaryResponse) -> impl IntoView {
    view! {
        <div class="view-meta">
            "Domaine "
            <code>{resp.domain_id.clone()}</code>
            " · mis à jour le "
            {format_datetime(&resp.timestamp)}
        </div>
    }
}

/// KPI grid of a domain summary.
pub fn render_summary(_nav: &Nav, data: Option<&DomainSummaryResponse>) -> AnyView {
    let Some(resp) = data else {
        return empty_state();
    };
    let cards = resp
        .summary
        .kpis
        .iter()
        .cloned()
        .map(|kpi| view! { <StatCard kpi=kpi /> })
        .collect_view();

    view! {
        <section class="dashboard-summary">
            <h3 class="dashboard-summary__title">{resp.summary.title.clone()}</h3>
            <div class="stat-grid">{cards}</div>
            {updated_at(resp)}
        </section>
    }
    .into_any()
}

pub fn render_highlights(_nav: &Nav, data: Option<&DomainSummaryResponse>) -> AnyView {
    let Some(resp) = data else {
        return empty_state();
    };
    if resp.summary.highlights.is_empty() {
        return empty_state();
    }
    let items = resp
        .summary
        .highlights
        .iter()
        .map(|h| view! { <li>{h.clone()}</li> })
        .collect_view();

    view! {
        <section class="dashboard-highlights">
            <ul class="dashboard-highlights__list">{items}</ul>
            {updated_at(resp)}
        </section>
    }
    .into_any()
}

/// KPI table sorted by absolute trend, largest movement first.
pub fn render_trends(_nav: &Nav, data: Option<&DomainSummaryResponse>) -> AnyView {
    let Some(resp) = data else {
        return empty_state();
    };
    let mut kpis: Vec<_> = resp
        .summary
        .kpis
        .iter()
        .filter(|k| k.trend_percent.is_some())
        .collect();
    kpis.sort_by(|a, b| {
        let a = a.trend_percent.unwrap_or_default().abs();
        let b = b.trend_percent.unwrap_or_default().abs();
        b.total_cmp(&a)
    });

    let rows = kpis
        .into_iter()
        .map(|kpi| {
            let trend = kpi.trend_percent.unwrap_or_default();
            let trend_text = format!("{:+.1}%", trend).replace('.', ",");
            let trend_class = if trend >= 0.0 {
                "trend trend--up"
            } else {
                "trend trend--down"
            };
            view! {
                <tr>
                    <td>{kpi.label.clone()}</td>
                    <td class="num">{format_value(kpi.value, &kpi.format)}</td>
                    <td class=trend_class>{trend_text}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Indicateur"</th>
                    <th>"Valeur"</th>
                    <th>"Évolution"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
    .into_any()
}

pub const DECISION_STEPS: &[(&str, &str)] = &[
    ("Instruction", "Le porteur documente le besoin et les options chiffrées."),
    ("Revue", "Le contrôle de gestion vérifie budget et conformité."),
    ("Arbitrage", "Le comité BMO tranche et consigne la décision."),
    ("Suivi", "L'action est inscrite au plan et suivie jusqu'à clôture."),
];

/// Static guide of the decision circuit; no data needed.
pub fn render_decision_guide(_nav: &Nav, _data: Option<&DomainSummaryResponse>) -> AnyView {
    let steps = DECISION_STEPS
        .iter()
        .enumerate()
        .map(|(i, (title, text))| {
            view! {
                <li class="guide-step">
                    <span class="guide-step__index">{i + 1}</span>
                    <strong>{*title}</strong>
                    <p>{*text}</p>
                </li>
            }
        })
        .collect_view();

    view! { <ol class="guide">{steps}</ol> }.into_any()
}
