use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of HR request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemandeKind {
    Conge,
    Depense,
    Deplacement,
    Avance,
}

impl DemandeKind {
    pub fn code(&self) -> &'static str {
        match self {
            DemandeKind::Conge => "conge",
            DemandeKind::Depense => "depense",
            DemandeKind::Deplacement => "deplacement",
            DemandeKind::Avance => "avance",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DemandeKind::Conge => "Congé",
            DemandeKind::Depense => "Note de frais",
            DemandeKind::Deplacement => "Déplacement",
            DemandeKind::Avance => "Avance sur salaire",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "conge" => Some(DemandeKind::Conge),
            "depense" => Some(DemandeKind::Depense),
            "deplacement" => Some(DemandeKind::Deplacement),
            "avance" => Some(DemandeKind::Avance),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemandeStatus {
    Pending,
    Approved,
    Rejected,
}

impl DemandeStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            DemandeStatus::Pending => "En attente",
            DemandeStatus::Approved => "Approuvée",
            DemandeStatus::Rejected => "Refusée",
        }
    }
}

/// HR request submitted by an employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemandeRh {
    pub id: String,
    pub employee: String,
    pub department: String,
    pub kind: DemandeKind,
    pub status: DemandeStatus,
    pub submitted_on: NaiveDate,
    /// Amount for expense, travel and advance requests
    #[serde(default)]
    pub amount: Option<f64>,
    /// Number of days for leave requests
    #[serde(default)]
    pub days: Option<u32>,
    pub reason: String,
}
