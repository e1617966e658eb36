pub mod aggregate;

pub use aggregate::{BcStatus, BonCommande};
