use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level modules of the command center.
///
/// The code doubles as the namespace prefix of resolved navigation keys and
/// as the `module` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleId {
    Dashboard,
    ValidationBc,
    DemandesRh,
    Governance,
}

impl ModuleId {
    /// Stable code used in URLs and cache keys
    pub fn code(&self) -> &'static str {
        match self {
            ModuleId::Dashboard => "dashboard",
            ModuleId::ValidationBc => "validation-bc",
            ModuleId::DemandesRh => "demandes-rh",
            ModuleId::Governance => "governance",
        }
    }

    /// Human readable label for menus
    pub fn display_name(&self) -> &'static str {
        match self {
            ModuleId::Dashboard => "Tableau de bord",
            ModuleId::ValidationBc => "Validation BC",
            ModuleId::DemandesRh => "Demandes RH",
            ModuleId::Governance => "Gouvernance",
        }
    }

    pub fn all() -> [ModuleId; 4] {
        [
            ModuleId::Dashboard,
            ModuleId::ValidationBc,
            ModuleId::DemandesRh,
            ModuleId::Governance,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|m| m.code() == code)
    }
}

impl Default for ModuleId {
    fn default() -> Self {
        ModuleId::Dashboard
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for module in ModuleId::all() {
            assert_eq!(ModuleId::from_code(module.code()), Some(module));
        }
        assert_eq!(ModuleId::from_code("unknown"), None);
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&ModuleId::ValidationBc).unwrap();
        assert_eq!(json, "\"validation-bc\"");
    }
}
