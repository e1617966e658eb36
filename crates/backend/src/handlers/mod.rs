// Aggregate handlers (a100-a102)
pub mod a100_bon_commande;
pub mod a101_demande_rh;
pub mod a102_governance;

// Dashboards
pub mod d100_command_center;
