pub mod views;

use crate::domain::a101_demandes_rh::{nav::NAV_TREE, registry};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::module_page::render_module_page;
use leptos::prelude::*;

#[component]
pub fn DemandesRhPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    render_module_page(ctx.demandes_rh, NAV_TREE, registry::registry())
}
