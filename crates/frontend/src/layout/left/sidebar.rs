//! Sidebar: one group per module, expanded to its main categories.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::{icon, module_icon};
use crate::shared::navigation::{MainCategory, NavigationContext};
use contracts::enums::ModuleId;
use leptos::prelude::*;

fn main_items<M, D>(app: AppGlobalContext, nav: NavigationContext<M, D>) -> AnyView
where
    M: MainCategory,
    D: Send + Sync + 'static,
{
    M::all()
        .iter()
        .copied()
        .map(|main| {
            view! {
                <div
                    class="app-sidebar__item"
                    class:app-sidebar__item--active=move || {
                        app.active_module.get() == M::MODULE && nav.current().main == main
                    }
                    style:padding-left="10px"
                    on:click=move |_| {
                        app.open_module(M::MODULE);
                        nav.navigate(main, None, None);
                    }
                >
                    <div class="app-sidebar__item-content">
                        <span>{main.label()}</span>
                    </div>
                </div>
            }
        })
        .collect_view()
        .into_any()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-sidebar__content">
            {ModuleId::all().into_iter().map(|module| {
                let children = match module {
                    ModuleId::Dashboard => main_items(ctx, ctx.dashboard),
                    ModuleId::ValidationBc => main_items(ctx, ctx.validation_bc),
                    ModuleId::DemandesRh => main_items(ctx, ctx.demandes_rh),
                    ModuleId::Governance => main_items(ctx, ctx.governance),
                };
                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || ctx.active_module.get() == module
                            style:padding-left="12px"
                            on:click=move |_| ctx.open_module(module)
                        >
                            <div class="app-sidebar__item-content">
                                {module_icon(module)}
                                <span>{module.display_name()}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || ctx.active_module.get() == module
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>
                        <div
                            class="app-sidebar__children"
                            class:hidden=move || ctx.active_module.get() != module
                        >
                            {children}
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
