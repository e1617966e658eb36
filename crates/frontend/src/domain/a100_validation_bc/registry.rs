use super::api;
use super::nav::BcMain;
use super::ui::views::{render_journal, render_list, render_overview, render_rules};
use crate::shared::navigation::{LoaderFuture, NavKey, ViewEntry, ViewRegistry};
use contracts::domain::a100_bon_commande::BonCommande;
use leptos::prelude::AnyView;
use once_cell::sync::Lazy;

pub type BcRegistry = ViewRegistry<BcMain, Vec<BonCommande>, AnyView>;

fn load_documents(nav: NavKey<BcMain>) -> LoaderFuture<Vec<BonCommande>> {
    Box::pin(async move { api::get_documents(nav.main.status()).await })
}

fn list(title: &'static str) -> ViewEntry<BcMain, Vec<BonCommande>, AnyView> {
    ViewEntry::loaded("list", title, load_documents, render_list)
}

static REGISTRY: Lazy<BcRegistry> = Lazy::new(|| {
    use BcMain::*;
    ViewRegistry::new()
        .register(
            Overview,
            "summary",
            "dashboard",
            ViewEntry::loaded("overview", "Synthèse des validations", load_documents, render_overview),
        )
        .register(Pending, "all", "list", list("BC à valider"))
        .register(Pending, "urgent", "list", list("BC urgents"))
        .register(Validated, "all", "list", list("BC validés"))
        .register(Rejected, "all", "list", list("BC rejetés"))
        .register(
            Audit,
            "journal",
            "list",
            ViewEntry::loaded("journal", "Journal des décisions", load_documents, render_journal),
        )
        .register(
            Audit,
            "rules",
            "reference",
            ViewEntry::pure("rules", "Règles de validation", render_rules),
        )
});

pub fn registry() -> &'static BcRegistry {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a100_validation_bc::nav::NAV_TREE;
    use crate::shared::navigation::{leaf_keys, MainCategory};
    use contracts::domain::a100_bon_commande::BcStatus;

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
        for main in BcMain::all() {
            assert!(registry().contains(&NavKey::main_only(*main)));
        }
    }

    #[test]
    fn test_keys_are_namespaced() {
        let key = NavKey::main_only(BcMain::Audit).resolve();
        assert_eq!(key.as_str(), "validation-bc::audit::journal::list");
        let rules = NavKey::new(BcMain::Audit, Some("rules"), None).resolve();
        assert_eq!(rules.as_str(), "validation-bc::audit::rules::reference");
        assert!(registry().lookup(&rules).unwrap().is_pure());
    }

    #[test]
    fn test_status_per_category() {
        assert_eq!(BcMain::Pending.status(), Some(BcStatus::Pending));
        assert_eq!(BcMain::Rejected.status(), Some(BcStatus::Rejected));
        assert_eq!(BcMain::Audit.status(), None);
    }
}
