//! View registry - the single source of truth for resolved key → view.
//!
//! Every module builds one registry at startup, registering each
//! `(main, sub, subSub)` combination it supports. Anything else is
//! intentionally "not found".

use super::key::{MainCategory, NavKey, ResolvedKey};
use chrono::Duration;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

/// Future returned by a view loader. Runs on the UI thread, so not `Send`.
pub type LoaderFuture<D> = Pin<Box<dyn Future<Output = Result<D, String>>>>;

pub type LoaderFn<M, D> = fn(NavKey<M>) -> LoaderFuture<D>;

pub type RenderFn<M, D, R> = fn(&NavKey<M>, Option<&D>) -> R;

/// Static registration binding a key to a title, a renderer and an optional
/// data loader.
pub struct ViewEntry<M, D, R> {
    pub id: &'static str,
    pub title: &'static str,
    render: RenderFn<M, D, R>,
    loader: Option<LoaderFn<M, D>>,
    ttl: Option<Duration>,
}

impl<M, D, R> ViewEntry<M, D, R> {
    /// Entry without a loader: renders from static data only.
    pub fn pure(id: &'static str, title: &'static str, render: RenderFn<M, D, R>) -> Self {
        Self {
            id,
            title,
            render,
            loader: None,
            ttl: None,
        }
    }

    pub fn loaded(
        id: &'static str,
        title: &'static str,
        loader: LoaderFn<M, D>,
        render: RenderFn<M, D, R>,
    ) -> Self {
        Self {
            id,
            title,
            render,
            loader: Some(loader),
            ttl: None,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    pub fn is_pure(&self) -> bool {
        self.loader.is_none()
    }

    pub fn loader(&self) -> Option<LoaderFn<M, D>> {
        self.loader
    }

    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    pub fn render(&self, nav: &NavKey<M>, data: Option<&D>) -> R {
        (self.render)(nav, data)
    }
}

pub struct ViewRegistry<M, D, R> {
    entries: HashMap<ResolvedKey, ViewEntry<M, D, R>>,
}

impl<M: MainCategory, D, R> ViewRegistry<M, D, R> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Registers `entry` under the fully specified triple.
    ///
    /// A second registration for the same resolved key replaces the first.
    pub fn register(
        mut self,
        main: M,
        sub: &str,
        sub_sub: &str,
        entry: ViewEntry<M, D, R>,
    ) -> Self {
        let key = NavKey::full(main, sub, sub_sub).resolve();
        if self.entries.contains_key(&key) {
            log::warn!("view registry: duplicate registration for '{}'", key);
        }
        self.entries.insert(key, entry);
        self
    }

    pub fn lookup(&self, key: &ResolvedKey) -> Option<&ViewEntry<M, D, R>> {
        self.entries.get(key)
    }

    /// Resolves `nav` and looks it up in one go.
    pub fn lookup_nav(&self, nav: &NavKey<M>) -> (ResolvedKey, Option<&ViewEntry<M, D, R>>) {
        let key = nav.resolve();
        let entry = self.entries.get(&key);
        (key, entry)
    }

    pub fn contains(&self, nav: &NavKey<M>) -> bool {
        self.entries.contains_key(&nav.resolve())
    }

    /// Registered keys in sorted order.
    pub fn keys(&self) -> Vec<&ResolvedKey> {
        let mut keys: Vec<_> = self.entries.keys().collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<M: MainCategory, D, R> Default for ViewRegistry<M, D, R> {
    fn default() -> Self {
        Self::new()
    }
}
