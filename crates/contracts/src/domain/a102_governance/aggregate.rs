use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GovernanceKind {
    /// Responsibility assignment (RACI matrix row)
    Raci,
    Alert,
    Decision,
}

impl GovernanceKind {
    pub fn code(&self) -> &'static str {
        match self {
            GovernanceKind::Raci => "raci",
            GovernanceKind::Alert => "alert",
            GovernanceKind::Decision => "decision",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "raci" => Some(GovernanceKind::Raci),
            "alert" => Some(GovernanceKind::Alert),
            "decision" => Some(GovernanceKind::Decision),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn display_name(&self) -> &'static str {
        match self {
            Severity::Low => "Faible",
            Severity::Medium => "Moyenne",
            Severity::High => "Haute",
            Severity::Critical => "Critique",
        }
    }
}

/// Item tracked by the governance board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernanceItem {
    pub id: String,
    pub kind: GovernanceKind,
    pub title: String,
    pub owner: String,
    pub severity: Severity,
    #[serde(default)]
    pub due_on: Option<NaiveDate>,
    /// Free-form workflow status ("ouvert", "en cours", "clos")
    pub status: String,
}
