pub mod aggregate;

pub use aggregate::{DemandeKind, DemandeRh, DemandeStatus};
