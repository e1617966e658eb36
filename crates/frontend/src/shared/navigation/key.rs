//! Navigation keys and their canonical string form.

use contracts::enums::ModuleId;
use std::fmt;
use std::hash::Hash;

/// Separator between the four segments of a resolved key.
pub const KEY_DELIMITER: &str = "::";

/// Top-level category enumeration of one module.
///
/// Each module declares its own enum and the defaults substituted for
/// missing inner levels.
pub trait MainCategory: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Module namespace prepended to every resolved key.
    const MODULE: ModuleId;

    fn all() -> &'static [Self];

    /// Identifier used in URLs and keys.
    fn id(self) -> &'static str;

    fn label(self) -> &'static str;

    fn default_sub(self) -> &'static str;

    fn default_sub_sub(self, sub: &str) -> &'static str;

    fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|m| m.id() == id)
    }

    /// First declared category, used for fresh stores.
    fn first() -> Self {
        Self::all()[0]
    }
}

/// The `(main, sub, subSub)` triple identifying a logical view.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NavKey<M> {
    pub main: M,
    pub sub: Option<String>,
    pub sub_sub: Option<String>,
}

impl<M: MainCategory> NavKey<M> {
    /// Blank levels count as absent, and `sub_sub` is dropped when `sub` is
    /// absent since it has no meaning on its own.
    pub fn new(main: M, sub: Option<&str>, sub_sub: Option<&str>) -> Self {
        let sub = sub.map(str::trim).filter(|s| !s.is_empty());
        let sub_sub = sub
            .and(sub_sub)
            .map(str::trim)
            .filter(|s| !s.is_empty());
        Self {
            main,
            sub: sub.map(str::to_string),
            sub_sub: sub_sub.map(str::to_string),
        }
    }

    pub fn main_only(main: M) -> Self {
        Self::new(main, None, None)
    }

    pub fn full(main: M, sub: &str, sub_sub: &str) -> Self {
        Self::new(main, Some(sub), Some(sub_sub))
    }

    pub fn effective_sub(&self) -> &str {
        self.sub.as_deref().unwrap_or_else(|| self.main.default_sub())
    }

    pub fn effective_sub_sub(&self) -> &str {
        match &self.sub_sub {
            Some(sub_sub) => sub_sub,
            None => self.main.default_sub_sub(self.effective_sub()),
        }
    }

    /// Canonical key: `{module}::{main}::{sub}::{subSub}` with defaults
    /// substituted. Segments are percent-encoded so a `:` inside an
    /// identifier can never forge a delimiter.
    pub fn resolve(&self) -> ResolvedKey {
        ResolvedKey(format!(
            "{module}{d}{main}{d}{sub}{d}{sub_sub}",
            module = M::MODULE.code(),
            main = urlencoding::encode(self.main.id()),
            sub = urlencoding::encode(self.effective_sub()),
            sub_sub = urlencoding::encode(self.effective_sub_sub()),
            d = KEY_DELIMITER,
        ))
    }

    /// True when both keys denote the same effective view.
    pub fn same_view(&self, other: &Self) -> bool {
        self.resolve() == other.resolve()
    }
}

/// Canonical lookup key shared by the view registry and the TTL cache.
///
/// Never parsed back into parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResolvedKey(String);

impl ResolvedKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResolvedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Small category enum mirroring the dashboard module.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum TestMain {
        Overview,
        Performance,
    }

    impl MainCategory for TestMain {
        const MODULE: ModuleId = ModuleId::Dashboard;

        fn all() -> &'static [Self] {
            &[TestMain::Overview, TestMain::Performance]
        }

        fn id(self) -> &'static str {
            match self {
                TestMain::Overview => "overview",
                TestMain::Performance => "performance",
            }
        }

        fn label(self) -> &'static str {
            self.id()
        }

        fn default_sub(self) -> &'static str {
            match self {
                TestMain::Overview => "summary",
                TestMain::Performance => "kpis",
            }
        }

        fn default_sub_sub(self, _sub: &str) -> &'static str {
            "dashboard"
        }
    }
}
