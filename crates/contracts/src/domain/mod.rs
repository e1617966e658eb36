pub mod a100_bon_commande;
pub mod a101_demande_rh;
pub mod a102_governance;
