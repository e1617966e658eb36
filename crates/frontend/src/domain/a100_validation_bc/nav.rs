use crate::shared::navigation::{MainCategory, NavBranch, NavLeaf, NavSection};
use contracts::domain::a100_bon_commande::BcStatus;
use contracts::enums::ModuleId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BcMain {
    Overview,
    Pending,
    Validated,
    Rejected,
    Audit,
}

impl BcMain {
    /// Status filter sent to the backend for this category.
    pub fn status(self) -> Option<BcStatus> {
        match self {
            BcMain::Pending => Some(BcStatus::Pending),
            BcMain::Validated => Some(BcStatus::Validated),
            BcMain::Rejected => Some(BcStatus::Rejected),
            BcMain::Overview | BcMain::Audit => None,
        }
    }
}

impl MainCategory for BcMain {
    const MODULE: ModuleId = ModuleId::ValidationBc;

    fn all() -> &'static [Self] {
        &[
            BcMain::Overview,
            BcMain::Pending,
            BcMain::Validated,
            BcMain::Rejected,
            BcMain::Audit,
        ]
    }

    fn id(self) -> &'static str {
        match self {
            BcMain::Overview => "overview",
            BcMain::Pending => "pending",
            BcMain::Validated => "validated",
            BcMain::Rejected => "rejected",
            BcMain::Audit => "audit",
        }
    }

    fn label(self) -> &'static str {
        match self {
            BcMain::Overview => "Vue d'ensemble",
            BcMain::Pending => "À valider",
            BcMain::Validated => "Validés",
            BcMain::Rejected => "Rejetés",
            BcMain::Audit => "Audit",
        }
    }

    fn default_sub(self) -> &'static str {
        match self {
            BcMain::Overview => "summary",
            BcMain::Audit => "journal",
            _ => "all",
        }
    }

    fn default_sub_sub(self, sub: &str) -> &'static str {
        match (self, sub) {
            (BcMain::Overview, _) => "dashboard",
            (BcMain::Audit, "rules") => "reference",
            _ => "list",
        }
    }
}

const LIST_LEAF: NavLeaf = NavLeaf {
    id: "list",
    label: "Liste",
};

const ALL_BRANCH: NavBranch = NavBranch {
    id: "all",
    label: "Tous",
    leaves: &[LIST_LEAF],
};

pub const NAV_TREE: &[NavSection<BcMain>] = &[
    NavSection {
        main: BcMain::Overview,
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
        main: BcMain::Pending,
        branches: &[
            ALL_BRANCH,
            NavBranch {
                id: "urgent",
                label: "Urgents",
                leaves: &[LIST_LEAF],
            },
        ],
    },
    NavSection {
        main: BcMain::Validated,
        branches: &[ALL_BRANCH],
    },
    NavSection {
        main: BcMain::Rejected,
        branches: &[ALL_BRANCH],
    },
    NavSection {
        main: BcMain::Audit,
        branches: &[
            NavBranch {
                id: "journal",
                label: "Journal",
                leaves: &[LIST_LEAF],
            },
            NavBranch {
                id: "rules",
                label: "Règles",
                leaves: &[NavLeaf {
                    id: "reference",
                    label: "Référentiel",
                }],
            },
        ],
    },
];
