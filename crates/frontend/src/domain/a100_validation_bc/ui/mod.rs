pub mod filter_bar;
pub mod views;

use crate::domain::a100_validation_bc::filters::create_state;
use crate::domain::a100_validation_bc::{nav::NAV_TREE, registry};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::module_page::render_module_page;
use leptos::prelude::*;

#[component]
pub fn ValidationBcPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    provide_context(create_state());
    render_module_page(ctx.validation_bc, NAV_TREE, registry::registry())
}
