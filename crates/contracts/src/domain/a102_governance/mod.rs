pub mod aggregate;

pub use aggregate::{GovernanceItem, GovernanceKind, Severity};
