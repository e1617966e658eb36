use crate::dashboards::d100_command_center::nav::DashboardMain;
use crate::domain::a100_validation_bc::nav::BcMain;
use crate::domain::a101_demandes_rh::nav::RhMain;
use crate::domain::a102_governance::nav::GovernanceMain;
use crate::shared::navigation::{url_sync, NavigationContext};
use contracts::domain::a100_bon_commande::BonCommande;
use contracts::domain::a101_demande_rh::DemandeRh;
use contracts::domain::a102_governance::GovernanceItem;
use contracts::enums::ModuleId;
use contracts::shared::analytics::DomainSummaryResponse;
use leptos::prelude::Effect;
use leptos::prelude::*;
use web_sys::window;

/// Application-wide state, created once in `App` and provided as context.
///
/// Every module owns its own navigation store; nothing is shared between
/// them apart from the active module selector.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_module: RwSignal<ModuleId>,
    pub left_open: RwSignal<bool>,
    pub dashboard: NavigationContext<DashboardMain, DomainSummaryResponse>,
    pub validation_bc: NavigationContext<BcMain, Vec<BonCommande>>,
    pub demandes_rh: NavigationContext<RhMain, Vec<DemandeRh>>,
    pub governance: NavigationContext<GovernanceMain, Vec<GovernanceItem>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_module: RwSignal::new(ModuleId::default()),
            left_open: RwSignal::new(true),
            dashboard: NavigationContext::new(),
            validation_bc: NavigationContext::new(),
            demandes_rh: NavigationContext::new(),
            governance: NavigationContext::new(),
        }
    }

    pub fn open_module(&self, module: ModuleId) {
        if self.active_module.get_untracked() != module {
            leptos::logging::log!("🔷 open_module: '{}'", module.code());
            self.active_module.set(module);
        }
    }

    /// Query string of the active module's selection, tracked.
    pub fn search_string(&self) -> String {
        match self.active_module.get() {
            ModuleId::Dashboard => self.dashboard.search_string(),
            ModuleId::ValidationBc => self.validation_bc.search_string(),
            ModuleId::DemandesRh => self.demandes_rh.search_string(),
            ModuleId::Governance => self.governance.search_string(),
        }
    }

    /// Reads the URL once on mount, then mirrors the active selection into it.
    ///
    /// Later manual edits of the address bar are not observed.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let query = url_sync::parse_query(&search);
        let module = url_sync::module_from_query(&query);
        self.active_module.set(module);

        let hydrated = match module {
            ModuleId::Dashboard => self.dashboard.hydrate_from_query(&query),
            ModuleId::ValidationBc => self.validation_bc.hydrate_from_query(&query),
            ModuleId::DemandesRh => self.demandes_rh.hydrate_from_query(&query),
            ModuleId::Governance => self.governance.hydrate_from_query(&query),
        };
        if !hydrated && query.main.is_some() {
            leptos::logging::log!("ℹ️ ignoring unknown selection in URL: {}", search);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = this.search_string();

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // replaceState only; navigation never adds browser history entries
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
