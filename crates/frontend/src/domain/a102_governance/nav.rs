use crate::shared::navigation::{MainCategory, NavBranch, NavLeaf, NavSection};
use contracts::domain::a102_governance::GovernanceKind;
use contracts::enums::ModuleId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GovernanceMain {
    Overview,
    Raci,
    Alerts,
    Decisions,
}

impl GovernanceMain {
    pub fn kind(self) -> Option<GovernanceKind> {
        match self {
            GovernanceMain::Overview => None,
            GovernanceMain::Raci => Some(GovernanceKind::Raci),
            GovernanceMain::Alerts => Some(GovernanceKind::Alert),
            GovernanceMain::Decisions => Some(GovernanceKind::Decision),
        }
    }
}

impl MainCategory for GovernanceMain {
    const MODULE: ModuleId = ModuleId::Governance;

    fn all() -> &'static [Self] {
        &[
            GovernanceMain::Overview,
            GovernanceMain::Raci,
            GovernanceMain::Alerts,
            GovernanceMain::Decisions,
        ]
    }

    fn id(self) -> &'static str {
        match self {
            GovernanceMain::Overview => "overview",
            GovernanceMain::Raci => "raci",
            GovernanceMain::Alerts => "alerts",
            GovernanceMain::Decisions => "decisions",
        }
    }

    fn label(self) -> &'static str {
        match self {
            GovernanceMain::Overview => "Vue d'ensemble",
            GovernanceMain::Raci => "Matrice RACI",
            GovernanceMain::Alerts => "Alertes",
            GovernanceMain::Decisions => "Décisions",
        }
    }

    fn default_sub(self) -> &'static str {
        match self {
            GovernanceMain::Overview => "summary",
            GovernanceMain::Raci => "matrix",
            GovernanceMain::Alerts => "open",
            GovernanceMain::Decisions => "journal",
        }
    }

    fn default_sub_sub(self, _sub: &str) -> &'static str {
        match self {
            GovernanceMain::Overview => "dashboard",
            _ => "list",
        }
    }
}

const LIST_LEAF: NavLeaf = NavLeaf {
    id: "list",
    label: "Liste",
};

pub const NAV_TREE: &[NavSection<GovernanceMain>] = &[
    NavSection {
        main: GovernanceMain::Overview,
        branches: &[NavBranch {
            id: "summary",
            label: "Synthèse",
            leaves: &[NavLeaf {
                id: "dashboard",
                label: "Tableau de bord",
            }],
        }],
    },
    NavSection {
        main: GovernanceMain::Raci,
        branches: &[NavBranch {
            id: "matrix",
            label: "Responsabilités",
            leaves: &[LIST_LEAF],
        }],
    },
    NavSection {
        main: GovernanceMain::Alerts,
        branches: &[
            NavBranch {
                id: "open",
                label: "Ouvertes",
                leaves: &[LIST_LEAF],
            },
            NavBranch {
                id: "critical",
                label: "Critiques",
                leaves: &[LIST_LEAF],
            },
        ],
    },
    NavSection {
        main: GovernanceMain::Decisions,
        branches: &[NavBranch {
            id: "journal",
            label: "Registre",
            leaves: &[LIST_LEAF],
        }],
    },
];
