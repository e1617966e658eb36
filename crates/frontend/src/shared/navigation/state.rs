//! Navigation state of one module: current selection, history and cache.

use super::cache::{CacheEntry, TtlCache};
use super::key::{MainCategory, NavKey, ResolvedKey};

#[derive(Debug, Clone)]
pub struct NavigationState<M, D> {
    current: NavKey<M>,
    cache: TtlCache<D>,
    history: Vec<NavKey<M>>,
}

impl<M: MainCategory, D> NavigationState<M, D> {
    pub fn new(initial: NavKey<M>) -> Self {
        Self {
            current: initial,
            cache: TtlCache::new(),
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &NavKey<M> {
        &self.current
    }

    pub fn resolved_key(&self) -> ResolvedKey {
        self.current.resolve()
    }

    /// Replaces all three levels in one transition.
    ///
    /// Returns `false` without touching the history when the selection
    /// resolves to the view already shown.
    pub fn navigate(&mut self, main: M, sub: Option<&str>, sub_sub: Option<&str>) -> bool {
        self.navigate_to(NavKey::new(main, sub, sub_sub))
    }

    pub fn navigate_to(&mut self, next: NavKey<M>) -> bool {
        if next.same_view(&self.current) {
            return false;
        }
        let previous = std::mem::replace(&mut self.current, next);
        self.history.push(previous);
        true
    }

    /// Sets the initial selection, e.g. from the URL on mount. Leaves the
    /// history untouched so there is nothing to go back to.
    pub fn replace_current(&mut self, next: NavKey<M>) {
        self.current = next;
    }

    /// Pops the previous selection. Returns `false` on empty history.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn cache(&self) -> &TtlCache<D> {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut TtlCache<D> {
        &mut self.cache
    }

    pub fn get_cache(&self, key: &ResolvedKey) -> Option<&CacheEntry<D>> {
        self.cache.get(key)
    }

    pub fn set_cache(&mut self, key: ResolvedKey, entry: CacheEntry<D>) {
        self.cache.set(key, entry);
    }
}

impl<M: MainCategory, D> Default for NavigationState<M, D> {
    fn default() -> Self {
        Self::new(NavKey::main_only(M::first()))
    }
}

#[cfg(test)]
mod tests {
    use super::super::key::test_support::TestMain;
    use super::*;
    use chrono::Utc;

    type State = NavigationState<TestMain, String>;

    #[test]
    fn test_default_starts_on_first_category() {
        let state = State::default();
        assert_eq!(state.current().main, TestMain::Overview);
        assert!(!state.can_go_back());
        assert!(state.cache().is_empty());
    }

    #[test]
    fn test_navigate_replaces_all_levels() {
        let mut state = State::default();
        assert!(state.navigate(TestMain::Performance, Some("kpis"), Some("trends")));
        let current = state.current();
        assert_eq!(current.main, TestMain::Performance);
        assert_eq!(current.sub.as_deref(), Some("kpis"));
        assert_eq!(current.sub_sub.as_deref(), Some("trends"));
        assert!(state.can_go_back());
    }

    #[test]
    fn test_navigate_is_idempotent() {
        let mut state = State::default();
        assert!(state.navigate(TestMain::Performance, Some("kpis"), None));
        assert!(!state.navigate(TestMain::Performance, Some("kpis"), None));
        // Same effective view spelled with explicit defaults.
        assert!(!state.navigate(TestMain::Performance, Some("kpis"), Some("dashboard")));
        assert!(state.back());
        assert!(!state.can_go_back());
    }

    #[test]
    fn test_back_pops_history() {
        let mut state = State::default();
        state.navigate(TestMain::Performance, None, None);
        state.navigate(TestMain::Performance, Some("trends"), None);

        assert!(state.back());
        assert_eq!(state.current(), &NavKey::main_only(TestMain::Performance));
        assert!(state.back());
        assert_eq!(state.current().main, TestMain::Overview);
        assert!(!state.back());
        assert_eq!(state.current().main, TestMain::Overview);
    }

    #[test]
    fn test_replace_current_records_no_history() {
        let mut state = State::default();
        state.replace_current(NavKey::full(TestMain::Performance, "kpis", "trends"));
        assert_eq!(state.current().main, TestMain::Performance);
        assert!(!state.can_go_back());
        assert!(!state.back());
    }

    #[test]
    fn test_cache_survives_navigation() {
        let mut state = State::default();
        let key = state.resolved_key();
        state.set_cache(key.clone(), CacheEntry::new("kpi".into(), Utc::now(), None));
        state.navigate(TestMain::Performance, None, None);
        state.back();
        assert_eq!(state.get_cache(&key).map(|e| e.data.as_str()), Some("kpi"));
    }
}
