//! Three-level module page: main tabs, sub tabs, subSub tabs and the view host.

use crate::shared::components::page_header::PageHeader;
use crate::shared::navigation::{
    breadcrumb, render_view_host, MainCategory, NavKey, NavSection, NavigationContext,
    ViewRegistry,
};
use leptos::prelude::*;
use thaw::*;

fn tab_appearance(active: bool) -> ButtonAppearance {
    if active {
        ButtonAppearance::Primary
    } else {
        ButtonAppearance::Subtle
    }
}

pub fn render_module_page<M, D>(
    ctx: NavigationContext<M, D>,
    tree: &'static [NavSection<M>],
    registry: &'static ViewRegistry<M, D, AnyView>,
) -> AnyView
where
    M: MainCategory,
    D: Clone + Send + Sync + 'static,
{
    let current = Memo::new(move |_| ctx.current());
    let subtitle = Signal::derive(move || Some(breadcrumb(tree, &current.get()).join(" › ")));

    let main_tabs = M::all()
        .iter()
        .copied()
        .map(|main| {
            view! {
                <Button
                    size=ButtonSize::Small
                    appearance=move || tab_appearance(current.get().main == main)
                    on_click=move |_| ctx.navigate(main, None, None)
                >
                    {main.label()}
                </Button>
            }
        })
        .collect_view();

    let sub_tabs = move || {
        let nav = current.get();
        tree.iter()
            .filter(|section| section.main == nav.main)
            .flat_map(|section| section.branches.iter())
            .map(|branch| {
                let main = nav.main;
                let active = nav.effective_sub() == branch.id;
                view! {
                    <Button
                        size=ButtonSize::Small
                        appearance=tab_appearance(active)
                        on_click=move |_| ctx.navigate(main, Some(branch.id), None)
                    >
                        {branch.label}
                    </Button>
                }
            })
            .collect_view()
    };

    let leaf_tabs = move || {
        let nav = current.get();
        let branch = tree
            .iter()
            .filter(|section| section.main == nav.main)
            .flat_map(|section| section.branches.iter())
            .find(|branch| branch.id == nav.effective_sub());
        // Single-leaf branches need no third row.
        branch.filter(|b| b.leaves.len() > 1).map(|branch| {
            branch
                .leaves
                .iter()
                .map(|leaf| {
                    let target = NavKey::full(nav.main, branch.id, leaf.id);
                    let active = nav.effective_sub_sub() == leaf.id;
                    view! {
                        <Button
                            size=ButtonSize::Small
                            appearance=tab_appearance(active)
                            on_click=move |_| ctx.navigate_to(target.clone())
                        >
                            {leaf.label}
                        </Button>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="module-page">
            <PageHeader title=M::MODULE.display_name() subtitle=subtitle />
            <nav class="module-page__tabs">
                <Flex gap=FlexGap::Small class="module-page__tabs-main">{main_tabs}</Flex>
                <Flex gap=FlexGap::Small class="module-page__tabs-sub">{sub_tabs}</Flex>
                <Flex gap=FlexGap::Small class="module-page__tabs-leaf">{leaf_tabs}</Flex>
            </nav>
            {render_view_host(ctx, registry)}
        </div>
    }
    .into_any()
}
