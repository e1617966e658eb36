//! Hierarchical navigation shared by every module.
//!
//! - `key` - `(main, sub, subSub)` triple and its canonical resolved key
//! - `registry` - resolved key → `ViewEntry` (title, loader, renderer, TTL)
//! - `cache` - TTL cache of loader results
//! - `state` - selection, history and cache of one module
//! - `invoker` - cache check, loader dispatch, stale-result rejection
//! - `url_sync` - query-string codec
//! - `tree` - static 3-level menus
//! - `context` / `host` - Leptos wiring

pub mod cache;
pub mod context;
pub mod host;
pub mod invoker;
pub mod key;
pub mod registry;
pub mod state;
pub mod tree;
pub mod url_sync;

pub use cache::{default_ttl, CacheEntry, TtlCache, DEFAULT_TTL_SECS};
pub use context::NavigationContext;
pub use host::render_view_host;
pub use invoker::{LoadOutcome, LoadPlan, LoadTicket, ViewInvoker, ViewLoadState};
pub use key::{MainCategory, NavKey, ResolvedKey};
pub use registry::{LoaderFuture, ViewEntry, ViewRegistry};
pub use state::NavigationState;
pub use tree::{breadcrumb, leaf_keys, NavBranch, NavLeaf, NavSection};
