pub mod views;

use crate::domain::a102_governance::{nav::NAV_TREE, registry};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::module_page::render_module_page;
use leptos::prelude::*;

#[component]
pub fn GovernancePage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    render_module_page(ctx.governance, NAV_TREE, registry::registry())
}
