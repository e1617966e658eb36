pub mod a100_validation_bc;
pub mod a101_demandes_rh;
pub mod a102_governance;
