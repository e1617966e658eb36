use super::api;
use super::nav::RhMain;
use super::ui::views::{render_list, render_overview};
use crate::shared::navigation::{LoaderFuture, NavKey, ViewEntry, ViewRegistry};
use contracts::domain::a101_demande_rh::DemandeRh;
use leptos::prelude::AnyView;
use once_cell::sync::Lazy;

pub type RhRegistry = ViewRegistry<RhMain, Vec<DemandeRh>, AnyView>;

fn load_demandes(nav: NavKey<RhMain>) -> LoaderFuture<Vec<DemandeRh>> {
    Box::pin(async move { api::get_demandes(nav.main.kind()).await })
}

fn list(title: &'static str) -> ViewEntry<RhMain, Vec<DemandeRh>, AnyView> {
    ViewEntry::loaded("list", title, load_demandes, render_list)
}

static REGISTRY: Lazy<RhRegistry> = Lazy::new(|| {
    use RhMain::*;
    ViewRegistry::new()
        .register(
            Overview,
            "summary",
            "dashboard",
            ViewEntry::loaded("overview", "Synthèse RH", load_demandes, render_overview),
        )
        .register(Conges, "all", "list", list("Demandes de congé"))
        .register(Conges, "pending", "list", list("Congés à traiter"))
        .register(Depenses, "all", "list", list("Notes de frais"))
        .register(Depenses, "pending", "list", list("Notes de frais à traiter"))
        .register(Deplacements, "all", "list", list("Ordres de mission"))
        .register(Avances, "all", "list", list("Avances sur salaire"))
});

pub fn registry() -> &'static RhRegistry {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a101_demandes_rh::nav::NAV_TREE;
    use crate::shared::navigation::{leaf_keys, MainCategory};
    use contracts::domain::a101_demande_rh::DemandeKind;

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
        for main in RhMain::all() {
            assert!(registry().contains(&NavKey::main_only(*main)));
        }
    }

    #[test]
    fn test_pending_branch_key() {
        let key = NavKey::new(RhMain::Depenses, Some("pending"), None).resolve();
        assert_eq!(key.as_str(), "demandes-rh::depenses::pending::list");
        assert_eq!(RhMain::Depenses.kind(), Some(DemandeKind::Depense));
    }
}
