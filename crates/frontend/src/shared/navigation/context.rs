//! Reactive wrapper around [`NavigationState`].
//!
//! One context per module is created at the application root and handed
//! down explicitly; nothing here is a global.

use super::key::{MainCategory, NavKey, ResolvedKey};
use super::state::NavigationState;
use super::url_sync;
use contracts::shared::navigation::NavQuery;
use leptos::logging::log;
use leptos::prelude::*;

pub struct NavigationContext<M: MainCategory, D: Send + Sync + 'static> {
    pub state: RwSignal<NavigationState<M, D>>,
}

impl<M: MainCategory, D: Send + Sync + 'static> Clone for NavigationContext<M, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: MainCategory, D: Send + Sync + 'static> Copy for NavigationContext<M, D> {}

impl<M: MainCategory, D: Send + Sync + 'static> NavigationContext<M, D> {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(NavigationState::default()),
        }
    }

    pub fn navigate(&self, main: M, sub: Option<&str>, sub_sub: Option<&str>) {
        self.navigate_to(NavKey::new(main, sub, sub_sub));
    }

    pub fn navigate_to(&self, next: NavKey<M>) {
        let key = next.resolve();
        // Skip the write entirely so subscribers see no transition.
        let unchanged = self
            .state
            .with_untracked(|state| state.resolved_key() == key);
        if unchanged {
            return;
        }
        self.state.update(|state| {
            state.navigate_to(next);
        });
        log!("🧭 navigate: {}", key);
    }

    pub fn back(&self) {
        self.state.update(|state| {
            state.back();
        });
    }

    /// Current selection, tracked.
    pub fn current(&self) -> NavKey<M> {
        self.state.with(|state| state.current().clone())
    }

    pub fn resolved_key(&self) -> ResolvedKey {
        self.state.with(|state| state.resolved_key())
    }

    pub fn can_go_back(&self) -> bool {
        self.state.with(|state| state.can_go_back())
    }

    /// Applies the mount-time URL selection as the initial one, without a
    /// history entry. Returns `true` when the query addressed this module
    /// with a valid `main`.
    pub fn hydrate_from_query(&self, query: &NavQuery) -> bool {
        match url_sync::nav_from_query::<M>(query) {
            Some(nav) => {
                log!("🧭 hydrate from URL: {}", nav.resolve());
                self.state.update(|state| state.replace_current(nav));
                true
            }
            None => false,
        }
    }

    /// `?module=..` string of the current selection, tracked.
    pub fn search_string(&self) -> String {
        self.state
            .with(|state| url_sync::to_search_string(state.current()))
    }
}

impl<M: MainCategory, D: Send + Sync + 'static> Default for NavigationContext<M, D> {
    fn default() -> Self {
        Self::new()
    }
}
