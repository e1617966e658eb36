pub mod views;

use crate::dashboards::d100_command_center::{nav::NAV_TREE, registry};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::module_page::render_module_page;
use leptos::prelude::*;

/// BMO command center: cross-domain KPIs, risks and decisions.
#[component]
pub fn CommandCenterDashboard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    render_module_page(ctx.dashboard, NAV_TREE, registry::registry())
}
