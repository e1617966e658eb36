use super::api;
use super::nav::DashboardMain;
use super::ui::views::{render_decision_guide, render_highlights, render_summary, render_trends};
use crate::shared::navigation::{LoaderFuture, MainCategory, NavKey, ViewEntry, ViewRegistry};
use chrono::Duration;
use contracts::shared::analytics::DomainSummaryResponse;
use leptos::prelude::AnyView;
use once_cell::sync::Lazy;

pub type DashboardRegistry = ViewRegistry<DashboardMain, DomainSummaryResponse, AnyView>;

/// Analytics domain backing a dashboard view.
pub fn domain_for(nav: &NavKey<DashboardMain>) -> &'static str {
    match (nav.main, nav.effective_sub()) {
        (DashboardMain::Performance, "chantiers") => "chantiers",
        (main, _) => main.id(),
    }
}

fn load_summary(nav: NavKey<DashboardMain>) -> LoaderFuture<DomainSummaryResponse> {
    Box::pin(async move { api::get_domain_summary(domain_for(&nav)).await })
}

fn summary(title: &'static str) -> ViewEntry<DashboardMain, DomainSummaryResponse, AnyView> {
    ViewEntry::loaded("summary", title, load_summary, render_summary)
}

static REGISTRY: Lazy<DashboardRegistry> = Lazy::new(|| {
    use DashboardMain::*;
    ViewRegistry::new()
        .register(
            Overview,
            "summary",
            "dashboard",
            summary("Vue d'ensemble").with_ttl(Duration::seconds(60)),
        )
        .register(
            Overview,
            "summary",
            "highlights",
            ViewEntry::loaded("highlights", "Faits marquants", load_summary, render_highlights)
                .with_ttl(Duration::seconds(60)),
        )
        .register(Performance, "kpis", "dashboard", summary("Indicateurs de performance"))
        .register(
            Performance,
            "kpis",
            "trends",
            ViewEntry::loaded("trends", "Tendances", load_summary, render_trends),
        )
        .register(Performance, "chantiers", "dashboard", summary("Chantiers"))
        .register(Actions, "summary", "dashboard", summary("Plan d'actions"))
        .register(Risks, "summary", "dashboard", summary("Cartographie des risques"))
        .register(Decisions, "summary", "dashboard", summary("Arbitrages"))
        .register(
            Decisions,
            "summary",
            "guide",
            ViewEntry::pure("guide", "Circuit de décision", render_decision_guide),
        )
        .register(
            Realtime,
            "live",
            "dashboard",
            summary("Temps réel").with_ttl(Duration::seconds(10)),
        )
});

pub fn registry() -> &'static DashboardRegistry {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d100_command_center::nav::NAV_TREE;
    use crate::shared::navigation::{leaf_keys, LoadPlan, NavigationState, ViewInvoker};
    use chrono::Utc;

    #[test]
    fn test_every_menu_leaf_is_registered() {
        for nav in leaf_keys(NAV_TREE) {
            assert!(registry().contains(&nav), "missing view for {}", nav.resolve());
        }
        assert_eq!(registry().len(), leaf_keys(NAV_TREE).len());
    }

    #[test]
    fn test_main_defaults_resolve_to_registered_views() {
        for main in DashboardMain::all() {
            let nav = NavKey::main_only(*main);
            assert!(registry().contains(&nav), "no default view for {:?}", main);
        }
    }

    #[test]
    fn test_overview_defaults_match_explicit_triple() {
        let implicit = NavKey::new(DashboardMain::Overview, None, None).resolve();
        let explicit = NavKey::full(DashboardMain::Overview, "summary", "dashboard").resolve();
        assert_eq!(implicit, explicit);
        assert_eq!(implicit.as_str(), "dashboard::overview::summary::dashboard");
        let entry = registry().lookup(&implicit).expect("overview registered");
        assert_eq!(entry.title, "Vue d'ensemble");
    }

    #[test]
    fn test_unknown_leaf_is_not_found() {
        let mut state = NavigationState::<DashboardMain, DomainSummaryResponse>::default();
        state.navigate(
            DashboardMain::Performance,
            Some("nonexistent"),
            Some("nonexistent"),
        );
        let mut invoker = ViewInvoker::new();
        match invoker.begin(registry(), &state, false, Utc::now()) {
            LoadPlan::NotFound(key) => assert_eq!(
                key.as_str(),
                "dashboard::performance::nonexistent::nonexistent"
            ),
            _ => panic!("expected NotFound"),
        }
        assert!(invoker.state().not_found);
    }

    #[test]
    fn test_domain_mapping() {
        assert_eq!(domain_for(&NavKey::main_only(DashboardMain::Risks)), "risks");
        assert_eq!(
            domain_for(&NavKey::full(DashboardMain::Performance, "chantiers", "dashboard")),
            "chantiers"
        );
        assert_eq!(
            domain_for(&NavKey::main_only(DashboardMain::Performance)),
            "performance"
        );
    }

    #[test]
    fn test_decision_guide_is_pure() {
        let nav = NavKey::full(DashboardMain::Decisions, "summary", "guide");
        assert!(registry().lookup(&nav.resolve()).unwrap().is_pure());
    }
}
