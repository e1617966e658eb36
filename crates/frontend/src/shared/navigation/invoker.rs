//! View loader invoker.
//!
//! Decides per navigation change whether a view renders from cache, renders
//! without data, or needs its loader. Every call to [`ViewInvoker::begin`]
//! opens a new generation; a loader result is only shown when its ticket
//! still carries the current generation.

use super::cache::{default_ttl, CacheEntry, TtlCache};
use super::key::{MainCategory, NavKey, ResolvedKey};
use super::registry::{LoaderFn, ViewRegistry};
use super::state::NavigationState;
use chrono::{DateTime, Duration, Utc};

/// What the host currently shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewLoadState<D> {
    pub key: Option<ResolvedKey>,
    pub not_found: bool,
    pub loading: bool,
    pub error: Option<String>,
    pub data: Option<D>,
}

impl<D> Default for ViewLoadState<D> {
    fn default() -> Self {
        Self {
            key: None,
            not_found: false,
            loading: false,
            error: None,
            data: None,
        }
    }
}

/// Identifies one loader invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    pub key: ResolvedKey,
    pub generation: u64,
    pub ttl: Duration,
}

impl LoadTicket {
    /// Writes loaded data to this ticket's cache slot.
    ///
    /// Works without the invoker that issued the ticket, so results that
    /// arrive after the host is gone still warm the cache.
    pub fn store<D>(&self, data: D, cache: &mut TtlCache<D>, now: DateTime<Utc>) {
        cache.set(self.key.clone(), CacheEntry::new(data, now, Some(self.ttl)));
    }
}

#[derive(Debug)]
pub enum LoadPlan<M, D> {
    NotFound(ResolvedKey),
    /// View without loader, render immediately.
    Pure,
    /// Fresh cache hit, no loader call.
    Cached(D),
    /// The caller must run `loader(nav)` and hand the result to
    /// [`ViewInvoker::complete`] together with `ticket`.
    Fetch {
        ticket: LoadTicket,
        loader: LoaderFn<M, D>,
        nav: NavKey<M>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Applied,
    Failed(String),
    /// Navigation moved on before the result arrived.
    Discarded,
}

#[derive(Debug, Clone)]
pub struct ViewInvoker<D> {
    generation: u64,
    default_ttl: Duration,
    state: ViewLoadState<D>,
}

impl<D: Clone> ViewInvoker<D> {
    pub fn new() -> Self {
        Self::with_default_ttl(default_ttl())
    }

    pub fn with_default_ttl(default_ttl: Duration) -> Self {
        Self {
            generation: 0,
            default_ttl,
            state: ViewLoadState::default(),
        }
    }

    pub fn state(&self) -> &ViewLoadState<D> {
        &self.state
    }

    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Starts a new generation for the current selection of `nav`.
    ///
    /// `force_refresh` skips the cache check; the loader result then
    /// overwrites the cached entry.
    pub fn begin<M: MainCategory, R>(
        &mut self,
        registry: &ViewRegistry<M, D, R>,
        nav: &NavigationState<M, D>,
        force_refresh: bool,
        now: DateTime<Utc>,
    ) -> LoadPlan<M, D> {
        self.generation += 1;
        let (key, entry) = registry.lookup_nav(nav.current());
        let same_key = self.state.key.as_ref() == Some(&key);

        let Some(entry) = entry else {
            self.state = ViewLoadState {
                key: Some(key.clone()),
                not_found: true,
                ..ViewLoadState::default()
            };
            return LoadPlan::NotFound(key);
        };

        let Some(loader) = entry.loader() else {
            self.state = ViewLoadState {
                key: Some(key),
                ..ViewLoadState::default()
            };
            return LoadPlan::Pure;
        };

        if !force_refresh {
            if let Some(cached) = nav.cache().get_fresh(&key, now, self.default_ttl) {
                self.state = ViewLoadState {
                    key: Some(key),
                    data: Some(cached.data.clone()),
                    ..ViewLoadState::default()
                };
                return LoadPlan::Cached(cached.data.clone());
            }
        }

        let data = if same_key { self.state.data.take() } else { None };
        self.state = ViewLoadState {
            key: Some(key.clone()),
            not_found: false,
            loading: true,
            error: None,
            data,
        };
        LoadPlan::Fetch {
            ticket: LoadTicket {
                key,
                generation: self.generation,
                ttl: entry.ttl().unwrap_or(self.default_ttl),
            },
            loader,
            nav: nav.current().clone(),
        }
    }

    /// Applies a loader result.
    ///
    /// Successful data is always written to the cache (slots of different
    /// keys are disjoint) but only shown when the ticket is current. A
    /// failure never touches the cache.
    pub fn complete(
        &mut self,
        ticket: LoadTicket,
        result: Result<D, String>,
        cache: &mut TtlCache<D>,
        now: DateTime<Utc>,
    ) -> LoadOutcome {
        let current = self.is_current(&ticket);
        match result {
            Ok(data) => {
                let shown = current.then(|| data.clone());
                ticket.store(data, cache, now);
                match shown {
                    Some(data) => {
                        self.state.loading = false;
                        self.state.error = None;
                        self.state.data = Some(data);
                        LoadOutcome::Applied
                    }
                    None => LoadOutcome::Discarded,
                }
            }
            Err(message) => {
                if !current {
                    return LoadOutcome::Discarded;
                }
                log::warn!("view loader failed for '{}': {}", ticket.key, message);
                self.state.loading = false;
                self.state.error = Some(message.clone());
                LoadOutcome::Failed(message)
            }
        }
    }

    /// Invalidates any in-flight ticket without starting a new load.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.state.loading = false;
    }
}

impl<D: Clone> Default for ViewInvoker<D> {
    fn default() -> Self {
        Self::new()
    }
}
