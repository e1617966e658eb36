//! Query-string codec for navigation state.
//!
//! The browser side (mount-time read, `replaceState` on change) lives in
//! `AppGlobalContext::init_router_integration`; this module only converts.

use super::key::{MainCategory, NavKey};
use contracts::enums::ModuleId;
use contracts::shared::navigation::NavQuery;

/// Parses `?module=..&main=..&sub=..&subSub=..`. Malformed input yields an
/// empty query.
pub fn parse_query(search: &str) -> NavQuery {
    serde_qs::from_str::<NavQuery>(search.trim_start_matches('?'))
        .unwrap_or_default()
        .normalized()
}

/// Module addressed by the query; absent or unknown means the dashboard.
pub fn module_from_query(query: &NavQuery) -> ModuleId {
    query
        .module
        .as_deref()
        .and_then(ModuleId::from_code)
        .unwrap_or_default()
}

/// Selection encoded in `query` for module `M`, if the query targets `M`
/// and names a known main category.
pub fn nav_from_query<M: MainCategory>(query: &NavQuery) -> Option<NavKey<M>> {
    if module_from_query(query) != M::MODULE {
        return None;
    }
    let main = M::from_id(query.main.as_deref()?)?;
    Some(NavKey::new(
        main,
        query.sub.as_deref(),
        query.sub_sub.as_deref(),
    ))
}

pub fn to_query<M: MainCategory>(nav: &NavKey<M>) -> NavQuery {
    NavQuery {
        module: Some(M::MODULE.code().to_string()),
        main: Some(nav.main.id().to_string()),
        sub: nav.sub.clone(),
        sub_sub: nav.sub_sub.clone(),
    }
}

/// `?module=..&main=..` form ready for `history.replaceState`.
pub fn to_search_string<M: MainCategory>(nav: &NavKey<M>) -> String {
    let query_string = serde_qs::to_string(&to_query(nav)).unwrap_or_default();
    format!("?{}", query_string)
}

#[cfg(test)]
mod tests {
    use super::super::key::test_support::TestMain;
    use super::*;

    #[test]
    fn test_round_trip_full_triple() {
        let nav = NavKey::full(TestMain::Performance, "kpis", "trends");
        let search = to_search_string(&nav);
        assert_eq!(
            search,
            "?module=dashboard&main=performance&sub=kpis&subSub=trends"
        );
        let back: NavKey<TestMain> = nav_from_query(&parse_query(&search)).unwrap();
        assert_eq!(back, nav);
    }

    #[test]
    fn test_round_trip_omits_missing_levels() {
        let nav = NavKey::main_only(TestMain::Overview);
        let search = to_search_string(&nav);
        assert_eq!(search, "?module=dashboard&main=overview");
        let back: NavKey<TestMain> = nav_from_query(&parse_query(&search)).unwrap();
        assert_eq!(back, nav);
    }

    #[test]
    fn test_missing_main_is_not_hydrated() {
        let query = parse_query("?sub=kpis");
        assert_eq!(nav_from_query::<TestMain>(&query), None);
    }

    #[test]
    fn test_unknown_main_is_not_hydrated() {
        let query = parse_query("?main=finance");
        assert_eq!(nav_from_query::<TestMain>(&query), None);
    }

    #[test]
    fn test_other_module_is_not_hydrated() {
        let query = parse_query("?module=validation-bc&main=overview");
        assert_eq!(module_from_query(&query), ModuleId::ValidationBc);
        assert_eq!(nav_from_query::<TestMain>(&query), None);
    }

    #[test]
    fn test_module_defaults_to_dashboard() {
        let query = parse_query("main=performance&sub=");
        assert_eq!(module_from_query(&query), ModuleId::Dashboard);
        let nav: NavKey<TestMain> = nav_from_query(&query).unwrap();
        assert_eq!(nav, NavKey::main_only(TestMain::Performance));
    }

    #[test]
    fn test_deep_link_starts_without_history() {
        let query = parse_query("module=dashboard&main=performance&sub=kpis");
        let mut state = super::super::state::NavigationState::<TestMain, ()>::default();
        state.replace_current(nav_from_query(&query).unwrap());
        assert_eq!(state.current().main, TestMain::Performance);
        assert_eq!(state.current().sub.as_deref(), Some("kpis"));
        assert!(!state.can_go_back());
    }

    #[test]
    fn test_garbage_query_is_empty() {
        assert_eq!(parse_query("?a[=&&"), NavQuery::default());
    }
}
