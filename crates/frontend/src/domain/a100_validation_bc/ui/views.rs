use super::filter_bar::BcFilterBar;
use crate::domain::a100_validation_bc::filters::BcFilterState;
use crate::domain::a100_validation_bc::nav::BcMain;
use crate::shared::components::stat_card::{format_value, StatCard};
use crate::shared::date_utils::format_date;
use crate::shared::navigation::NavKey;
use contracts::domain::a100_bon_commande::{BcStatus, BonCommande};
use contracts::shared::analytics::{KpiFormat, KpiStatus, KpiValue};
use leptos::prelude::*;

type Nav = NavKey<BcMain>;

/// Orders at or above this amount need a second signature.
pub const DOUBLE_SIGNATURE_THRESHOLD: f64 = 50_000.0;

pub const VALIDATION_RULES: &[(&str, &str)] = &[
    ("Moins de 5 000 €", "Validation par le conducteur de travaux"),
    ("5 000 € à 50 000 €", "Validation par le directeur de chantier"),
    ("50 000 € et plus", "Double signature : direction de chantier et BMO"),
    ("Commande urgente", "Traitement sous 24 h, justification obligatoire"),
];

fn empty_state() -> AnyView {
    view! { <div class="view-empty">"Aucun bon de commande"</div> }.into_any()
}

fn money(amount: f64, currency: &str) -> String {
    format_value(
        amount,
        &KpiFormat::Money {
            currency: currency.to_string(),
        },
    )
}

/// Headline figures computed from the full document list.
pub fn overview_kpis(docs: &[BonCommande]) -> Vec<KpiValue> {
    let count = |status: BcStatus| docs.iter().filter(|d| d.status == status).count();
    let pending = count(BcStatus::Pending);
    let validated = count(BcStatus::Validated);
    let rejected = count(BcStatus::Rejected);
    let urgent = docs
        .iter()
        .filter(|d| d.status == BcStatus::Pending && d.urgent)
        .count();
    let pending_amount: f64 = docs
        .iter()
        .filter(|d| d.status == BcStatus::Pending)
        .map(|d| d.amount)
        .sum();
    let decided = validated + rejected;
    let validation_rate = if decided == 0 {
        0.0
    } else {
        validated as f64 * 100.0 / decided as f64
    };

    vec![
        KpiValue {
            id: "pending".into(),
            label: "BC en attente".into(),
            value: pending as f64,
            format: KpiFormat::Integer,
            trend_percent: None,
            status: if urgent > 0 {
                KpiStatus::Warning
            } else {
                KpiStatus::Neutral
            },
        },
        KpiValue {
            id: "pending_amount".into(),
            label: "Montant en attente".into(),
            value: pending_amount,
            format: KpiFormat::Money {
                currency: "€".into(),
            },
            trend_percent: None,
            status: KpiStatus::Neutral,
        },
        KpiValue {
            id: "urgent".into(),
            label: "Urgents".into(),
            value: urgent as f64,
            format: KpiFormat::Integer,
            trend_percent: None,
            status: if urgent > 0 {
                KpiStatus::Bad
            } else {
                KpiStatus::Good
            },
        },
        KpiValue {
            id: "validation_rate".into(),
            label: "Taux de validation".into(),
            value: validation_rate,
            format: KpiFormat::Percent { decimals: 1 },
            trend_percent: None,
            status: if validation_rate >= 80.0 {
                KpiStatus::Good
            } else {
                KpiStatus::Warning
            },
        },
    ]
}

pub fn render_overview(_nav: &Nav, data: Option<&Vec<BonCommande>>) -> AnyView {
    let Some(docs) = data else {
        return empty_state();
    };
    let cards = overview_kpis(docs)
        .into_iter()
        .map(|kpi| view! { <StatCard kpi=kpi /> })
        .collect_view();
    view! { <div class="stat-grid">{cards}</div> }.into_any()
}

fn document_rows(docs: Vec<BonCommande>) -> impl IntoView {
    docs.into_iter()
        .map(|doc| {
            let amount = money(doc.amount, &doc.currency);
            let needs_double = doc.amount >= DOUBLE_SIGNATURE_THRESHOLD;
            view! {
                <tr class=if doc.urgent { "row--urgent" } else { "" }>
                    <td>
                        <code>{doc.id}</code>
                        {doc.urgent.then(|| view! { <span class="badge badge--error">"Urgent"</span> })}
                    </td>
                    <td>{format_date(doc.issued_on)}</td>
                    <td>{doc.supplier}</td>
                    <td>{doc.site}</td>
                    <td>{doc.description}</td>
                    <td class="num">
                        {amount}
                        {needs_double.then(|| view! { <span class="badge badge--warning">"2 sign."</span> })}
                    </td>
                    <td>{doc.requested_by}</td>
                    <td>{doc.status.display_name()}</td>
                </tr>
            }
        })
        .collect_view()
}

fn document_table(rows: impl IntoView) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Référence"</th>
                    <th>"Date"</th>
                    <th>"Fournisseur"</th>
                    <th>"Chantier"</th>
                    <th>"Objet"</th>
                    <th>"Montant HT"</th>
                    <th>"Demandeur"</th>
                    <th>"Statut"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}

/// Filterable document list; the `urgent` branch keeps urgent orders only.
pub fn render_list(nav: &Nav, data: Option<&Vec<BonCommande>>) -> AnyView {
    let Some(docs) = data else {
        return empty_state();
    };
    let urgent_only = nav.effective_sub() == "urgent";
    let docs: Vec<BonCommande> = docs
        .iter()
        .filter(|d| !urgent_only || d.urgent)
        .cloned()
        .collect();
    let filters = use_context::<RwSignal<BcFilterState>>();

    let rows = move || {
        let state = filters.map(|f| f.get()).unwrap_or_default();
        let visible = state.apply(&docs);
        let total = visible.len();
        view! {
            <div class="view-meta">{format!("{} document(s)", total)}</div>
            {document_table(document_rows(visible))}
        }
    };

    view! {
        <BcFilterBar />
        {rows}
    }
    .into_any()
}

/// Decided orders, most recent first.
pub fn render_journal(_nav: &Nav, data: Option<&Vec<BonCommande>>) -> AnyView {
    let Some(docs) = data else {
        return empty_state();
    };
    let mut decided: Vec<BonCommande> = docs
        .iter()
        .filter(|d| d.status != BcStatus::Pending)
        .cloned()
        .collect();
    if decided.is_empty() {
        return empty_state();
    }
    decided.sort_by(|a, b| b.issued_on.cmp(&a.issued_on));
    document_table(document_rows(decided)).into_any()
}

pub fn render_rules(_nav: &Nav, _data: Option<&Vec<BonCommande>>) -> AnyView {
    let rows = VALIDATION_RULES
        .iter()
        .map(|(scope, rule)| {
            view! {
                <tr>
                    <td>{*scope}</td>
                    <td>{*rule}</td>
                </tr>
            }
        })
        .collect_view();
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Périmètre"</th>
                    <th>"Règle"</th>
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

    fn doc(status: BcStatus, amount: f64, urgent: bool) -> BonCommande {
        BonCommande {
            id: "BC".into(),
            supplier: "S".into(),
            site: "C".into(),
            description: "D".into(),
            amount,
            currency: "€".into(),
            status,
            issued_on: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            requested_by: "R".into(),
            urgent,
        }
    }

    fn value(kpis: &[KpiValue], id: &str) -> f64 {
        kpis.iter().find(|k| k.id == id).unwrap().value
    }

    #[test]
    fn test_overview_kpis() {
        let docs = vec![
            doc(BcStatus::Pending, 1_000.0, true),
            doc(BcStatus::Pending, 500.0, false),
            doc(BcStatus::Validated, 10.0, false),
            doc(BcStatus::Validated, 10.0, false),
            doc(BcStatus::Validated, 10.0, false),
            doc(BcStatus::Rejected, 10.0, false),
        ];
        let kpis = overview_kpis(&docs);
        assert_eq!(value(&kpis, "pending"), 2.0);
        assert_eq!(value(&kpis, "pending_amount"), 1_500.0);
        assert_eq!(value(&kpis, "urgent"), 1.0);
        assert_eq!(value(&kpis, "validation_rate"), 75.0);
        let urgent = kpis.iter().find(|k| k.id == "urgent").unwrap();
        assert_eq!(urgent.status, KpiStatus::Bad);
    }

    #[test]
    fn test_overview_kpis_without_decisions() {
        let kpis = overview_kpis(&[]);
        assert_eq!(value(&kpis, "validation_rate"), 0.0);
        assert_eq!(value(&kpis, "pending"), 0.0);
    }
}
