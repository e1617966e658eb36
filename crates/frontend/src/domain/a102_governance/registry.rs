use super::api;
use super::nav::GovernanceMain;
use super::ui::views::{render_list, render_overview};
use crate::shared::navigation::{LoaderFuture, NavKey, ViewEntry, ViewRegistry};
use chrono::Duration;
use contracts::domain::a102_governance::GovernanceItem;
use leptos::prelude::AnyView;
use once_cell::sync::Lazy;

pub type GovernanceRegistry = ViewRegistry<GovernanceMain, Vec<GovernanceItem>, AnyView>;

fn load_items(nav: NavKey<GovernanceMain>) -> LoaderFuture<Vec<GovernanceItem>> {
    Box::pin(async move { api::get_items(nav.main.kind()).await })
}

static REGISTRY: Lazy<GovernanceRegistry> = Lazy::new(|| {
    use GovernanceMain::*;
    ViewRegistry::new()
        .register(
            Overview,
            "summary",
            "dashboard",
            ViewEntry::loaded("overview", "Synthèse gouvernance", load_items, render_overview),
        )
        .register(
            Raci,
            "matrix",
            "list",
            ViewEntry::loaded("raci", "Matrice RACI", load_items, render_list)
                .with_ttl(Duration::minutes(5)),
        )
        .register(
            Alerts,
            "open",
            "list",
            ViewEntry::loaded("alerts", "Alertes ouvertes", load_items, render_list)
                .with_ttl(Duration::seconds(15)),
        )
        .register(
            Alerts,
            "critical",
            "list",
            ViewEntry::loaded("critical", "Alertes critiques", load_items, render_list)
                .with_ttl(Duration::seconds(15)),
        )
        .register(
            Decisions,
            "journal",
            "list",
            ViewEntry::loaded("decisions", "Registre des décisions", load_items, render_list),
        )
});

pub fn registry() -> &'static GovernanceRegistry {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a102_governance::nav::NAV_TREE;
    use crate::shared::navigation::{leaf_keys, MainCategory};

    #[test]
    fn test_every_menu_leaf_is_registered() {
        let leaves = leaf_keys(NAV_TREE);
        for nav in &leaves {
            assert!(registry().contains(nav), "missing view for {}", nav.resolve());
        }
        assert_eq!(registry().len(), leaves.len());
    }

    #[test]
    fn test_main_defaults_resolve_to_registered_views() {
        for main in GovernanceMain::all() {
            assert!(registry().contains(&NavKey::main_only(*main)));
        }
    }

    #[test]
    fn test_alert_ttl_is_short() {
        let entry = registry()
            .lookup(&NavKey::main_only(GovernanceMain::Alerts).resolve())
            .unwrap();
        assert_eq!(entry.ttl(), Some(Duration::seconds(15)));
    }
}
