use crate::shared::navigation::{MainCategory, NavBranch, NavLeaf, NavSection};
use contracts::domain::a101_demande_rh::DemandeKind;
use contracts::enums::ModuleId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RhMain {
    Overview,
    Conges,
    Depenses,
    Deplacements,
    Avances,
}

impl RhMain {
    pub fn kind(self) -> Option<DemandeKind> {
        match self {
            RhMain::Overview => None,
            RhMain::Conges => Some(DemandeKind::Conge),
            RhMain::Depenses => Some(DemandeKind::Depense),
            RhMain::Deplacements => Some(DemandeKind::Deplacement),
            RhMain::Avances => Some(DemandeKind::Avance),
        }
    }
}

impl MainCategory for RhMain {
    const MODULE: ModuleId = ModuleId::DemandesRh;

    fn all() -> &'static [Self] {
        &[
            RhMain::Overview,
            RhMain::Conges,
            RhMain::Depenses,
            RhMain::Deplacements,
            RhMain::Avances,
        ]
    }

    fn id(self) -> &'static str {
        match self {
            RhMain::Overview => "overview",
            RhMain::Conges => "conges",
            RhMain::Depenses => "depenses",
            RhMain::Deplacements => "deplacements",
            RhMain::Avances => "avances",
        }
    }

    fn label(self) -> &'static str {
        match self {
            RhMain::Overview => "Vue d'ensemble",
            RhMain::Conges => "Congés",
            RhMain::Depenses => "Dépenses",
            RhMain::Deplacements => "Déplacements",
            RhMain::Avances => "Avances",
        }
    }

    fn default_sub(self) -> &'static str {
        match self {
            RhMain::Overview => "summary",
            _ => "all",
        }
    }

    fn default_sub_sub(self, _sub: &str) -> &'static str {
        match self {
            RhMain::Overview => "dashboard",
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
    label: "Toutes",
    leaves: &[LIST_LEAF],
};

const PENDING_BRANCH: NavBranch = NavBranch {
    id: "pending",
    label: "En attente",
    leaves: &[LIST_LEAF],
};

pub const NAV_TREE: &[NavSection<RhMain>] = &[
    NavSection {
        main: RhMain::Overview,
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
        main: RhMain::Conges,
        branches: &[ALL_BRANCH, PENDING_BRANCH],
    },
    NavSection {
        main: RhMain::Depenses,
        branches: &[ALL_BRANCH, PENDING_BRANCH],
    },
    NavSection {
        main: RhMain::Deplacements,
        branches: &[ALL_BRANCH],
    },
    NavSection {
        main: RhMain::Avances,
        branches: &[ALL_BRANCH],
    },
];
