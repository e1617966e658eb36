//! Render dispatch for registry-driven views.
//!
//! `render_view_host` watches the resolved key of a module, runs the
//! invoker on every change (and on manual refresh), spawns the loader when
//! needed and renders loading / error / not-found states around the view.

use super::context::NavigationContext;
use super::invoker::{LoadOutcome, LoadPlan, ViewInvoker, ViewLoadState};
use super::key::{MainCategory, ResolvedKey};
use super::registry::ViewRegistry;
use chrono::Utc;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Text of the fallback shown for keys without a registry entry.
pub fn not_found_message(key: &ResolvedKey) -> String {
    format!("Vue introuvable : {}", key)
}

fn loading_placeholder() -> impl IntoView {
    view! {
        <Flex gap=FlexGap::Small class="view-host__loading">
            <Spinner />
            <span>"Chargement..."</span>
        </Flex>
    }
}

/// Invoker state belonging to the view under `key`.
///
/// The body can re-render for a new key before the load effect has run
/// `begin` for it; until then the state still describes the previous view.
pub fn visible_state<'a, D>(
    state: &'a ViewLoadState<D>,
    key: &ResolvedKey,
) -> Option<&'a ViewLoadState<D>> {
    (state.key.as_ref() == Some(key)).then_some(state)
}

pub fn render_view_host<M, D>(
    ctx: NavigationContext<M, D>,
    registry: &'static ViewRegistry<M, D, AnyView>,
) -> AnyView
where
    M: MainCategory,
    D: Clone + Send + Sync + 'static,
{
    let key = Memo::new(move |_| ctx.state.with(|state| state.resolved_key()));
    let refresh = RwSignal::new(0u64);
    let invoker = RwSignal::new(ViewInvoker::<D>::new());

    Effect::new(move |previous_tick: Option<u64>| {
        key.track();
        let tick = refresh.get();
        let force = previous_tick.is_some_and(|prev| prev != tick);
        let now = Utc::now();

        let plan = ctx.state.with_untracked(|state| {
            invoker.try_update(|inv| inv.begin(registry, state, force, now))
        });

        match plan {
            Some(LoadPlan::Fetch {
                ticket,
                loader,
                nav,
            }) => {
                log!("⏳ loading view '{}' (generation {})", ticket.key, ticket.generation);
                spawn_local(async move {
                    let result = loader(nav).await;
                    let now = Utc::now();
                    // The module state outlives this host; the invoker may not.
                    let outcome = ctx.state.try_update(|state| {
                        if invoker.is_disposed() {
                            if let Ok(data) = result {
                                ticket.store(data, state.cache_mut(), now);
                            }
                            return LoadOutcome::Discarded;
                        }
                        invoker
                            .try_update(|inv| inv.complete(ticket, result, state.cache_mut(), now))
                            .unwrap_or(LoadOutcome::Discarded)
                    });
                    match outcome {
                        Some(LoadOutcome::Applied) => {}
                        Some(LoadOutcome::Failed(err)) => log!("⚠ view load failed: {}", err),
                        Some(LoadOutcome::Discarded) | None => {
                            log!("↩ discarded late result for a view no longer shown")
                        }
                    }
                });
            }
            Some(LoadPlan::NotFound(key)) => log!("❓ no view registered for '{}'", key),
            Some(LoadPlan::Cached(_)) | Some(LoadPlan::Pure) | None => {}
        }

        tick
    });

    on_cleanup(move || {
        invoker.try_update(|inv| inv.cancel());
    });

    let on_refresh = move |_| refresh.update(|n| *n += 1);
    let on_back = move |_| ctx.back();

    let title = move || {
        let key = key.get();
        registry
            .lookup(&key)
            .map(|entry| entry.title.to_string())
            .unwrap_or_default()
    };

    let body = move || {
        let nav = ctx.state.with(|state| state.current().clone());
        invoker.with(|inv| {
            let key = key.get();
            let Some(state) = visible_state(inv.state(), &key) else {
                return loading_placeholder().into_any();
            };
            let entry = match registry.lookup(&key) {
                Some(entry) if !state.not_found => entry,
                _ => {
                    return view! {
                        <div class="view-host__not-found">{not_found_message(&key)}</div>
                    }
                    .into_any();
                }
            };

            let error = state.error.clone().map(|err| {
                view! {
                    <div class="view-host__error">
                        <strong>"⚠ Erreur : "</strong>
                        {err}
                    </div>
                }
            });
            let loading = state.loading.then(loading_placeholder);
            let content = if state.loading && state.data.is_none() {
                None
            } else {
                Some(entry.render(&nav, state.data.as_ref()))
            };

            view! {
                {loading}
                {error}
                {content}
            }
            .into_any()
        })
    };

    view! {
        <div class="view-host">
            <div class="view-host__header">
                <h2 class="view-host__title">{title}</h2>
                <ButtonGroup>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        disabled=Signal::derive(move || !ctx.can_go_back())
                        on_click=on_back
                    >
                        "← Retour"
                    </Button>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Secondary
                        on_click=on_refresh
                    >
                        "↻ Actualiser"
                    </Button>
                </ButtonGroup>
            </div>
            <div class="view-host__content">{body}</div>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::super::key::test_support::TestMain;
    use super::super::key::NavKey;
    use super::*;

    #[test]
    fn test_not_found_message_names_key() {
        let key = NavKey::full(TestMain::Performance, "nonexistent", "nonexistent").resolve();
        let message = not_found_message(&key);
        assert!(message.contains("dashboard::performance::nonexistent::nonexistent"));
    }

    #[test]
    fn test_state_of_previous_view_is_hidden() {
        let previous = NavKey::full(TestMain::Overview, "summary", "dashboard").resolve();
        let next = NavKey::full(TestMain::Performance, "kpis", "dashboard").resolve();
        let state = ViewLoadState {
            key: Some(previous.clone()),
            data: Some("overview rows".to_string()),
            error: Some("HTTP error: 500".to_string()),
            ..ViewLoadState::default()
        };

        assert!(visible_state(&state, &next).is_none());
        let shown = visible_state(&state, &previous).unwrap();
        assert_eq!(shown.data.as_deref(), Some("overview rows"));
    }

    #[test]
    fn test_state_before_first_load_is_hidden() {
        let key = NavKey::main_only(TestMain::Overview).resolve();
        let state = ViewLoadState::<String>::default();
        assert!(visible_state(&state, &key).is_none());
    }
}
