use crate::dashboards::d100_command_center::ui::CommandCenterDashboard;
use crate::domain::a100_validation_bc::ui::ValidationBcPage;
use crate::domain::a101_demandes_rh::ui::DemandesRhPage;
use crate::domain::a102_governance::ui::GovernancePage;
use crate::layout::global_context::AppGlobalContext;
use contracts::enums::ModuleId;
use leptos::prelude::*;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <div data-zone="center" class="app-content" style="flex: 1; overflow: auto;">
            {children()}
        </div>
    }
}

/// Page of the active module. Switching modules keeps each module's
/// navigation state and cache, only the page is rebuilt.
#[component]
pub fn ModuleContent() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    move || match ctx.active_module.get() {
        ModuleId::Dashboard => view! { <CommandCenterDashboard /> }.into_any(),
        ModuleId::ValidationBc => view! { <ValidationBcPage /> }.into_any(),
        ModuleId::DemandesRh => view! { <DemandesRhPage /> }.into_any(),
        ModuleId::Governance => view! { <GovernancePage /> }.into_any(),
    }
}
