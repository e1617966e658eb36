use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Validation status of a purchase order (bon de commande)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BcStatus {
    Pending,
    Validated,
    Rejected,
}

impl BcStatus {
    pub fn code(&self) -> &'static str {
        match self {
            BcStatus::Pending => "pending",
            BcStatus::Validated => "validated",
            BcStatus::Rejected => "rejected",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BcStatus::Pending => "En attente",
            BcStatus::Validated => "Validé",
            BcStatus::Rejected => "Rejeté",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(BcStatus::Pending),
            "validated" => Some(BcStatus::Validated),
            "rejected" => Some(BcStatus::Rejected),
            _ => None,
        }
    }
}

/// Purchase order awaiting (or past) validation by the BMO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BonCommande {
    /// Business reference, e.g. "BC-2025-0142"
    pub id: String,
    pub supplier: String,
    /// Construction site the order is charged to
    pub site: String,
    pub description: String,
    /// Amount excluding tax
    pub amount: f64,
    pub currency: String,
    pub status: BcStatus,
    pub issued_on: NaiveDate,
    pub requested_by: String,
    #[serde(default)]
    pub urgent: bool,
}
