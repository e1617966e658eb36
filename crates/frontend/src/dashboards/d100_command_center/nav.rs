use crate::shared::navigation::{MainCategory, NavBranch, NavLeaf, NavSection};
use contracts::enums::ModuleId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashboardMain {
    Overview,
    Performance,
    Actions,
    Risks,
    Decisions,
    Realtime,
}

impl MainCategory for DashboardMain {
    const MODULE: ModuleId = ModuleId::Dashboard;

    fn all() -> &'static [Self] {
        &[
            DashboardMain::Overview,
            DashboardMain::Performance,
            DashboardMain::Actions,
            DashboardMain::Risks,
            DashboardMain::Decisions,
            DashboardMain::Realtime,
        ]
    }

    fn id(self) -> &'static str {
        match self {
            DashboardMain::Overview => "overview",
            DashboardMain::Performance => "performance",
            DashboardMain::Actions => "actions",
            DashboardMain::Risks => "risks",
            DashboardMain::Decisions => "decisions",
            DashboardMain::Realtime => "realtime",
        }
    }

    fn label(self) -> &'static str {
        match self {
            DashboardMain::Overview => "Vue d'ensemble",
            DashboardMain::Performance => "Performance",
            DashboardMain::Actions => "Actions",
            DashboardMain::Risks => "Risques",
            DashboardMain::Decisions => "Décisions",
            DashboardMain::Realtime => "Temps réel",
        }
    }

    fn default_sub(self) -> &'static str {
        match self {
            DashboardMain::Performance => "kpis",
            DashboardMain::Realtime => "live",
            _ => "summary",
        }
    }

    fn default_sub_sub(self, _sub: &str) -> &'static str {
        "dashboard"
    }
}

const DASHBOARD_LEAF: NavLeaf = NavLeaf {
    id: "dashboard",
    label: "Tableau de bord",
};

pub const NAV_TREE: &[NavSection<DashboardMain>] = &[
    NavSection {
        main: DashboardMain::Overview,
        branches: &[NavBranch {
            id: "summary",
            label: "Synthèse",
            leaves: &[
                DASHBOARD_LEAF,
                NavLeaf {
                    id: "highlights",
                    label: "Faits marquants",
                },
            ],
        }],
    },
    NavSection {
        main: DashboardMain::Performance,
        branches: &[
            NavBranch {
                id: "kpis",
                label: "Indicateurs",
                leaves: &[
                    DASHBOARD_LEAF,
                    NavLeaf {
                        id: "trends",
                        label: "Tendances",
                    },
                ],
            },
            NavBranch {
                id: "chantiers",
                label: "Chantiers",
                leaves: &[DASHBOARD_LEAF],
            },
        ],
    },
    NavSection {
        main: DashboardMain::Actions,
        branches: &[NavBranch {
            id: "summary",
            label: "Plan d'actions",
            leaves: &[DASHBOARD_LEAF],
        }],
    },
    NavSection {
        main: DashboardMain::Risks,
        branches: &[NavBranch {
            id: "summary",
            label: "Cartographie",
            leaves: &[DASHBOARD_LEAF],
        }],
    },
    NavSection {
        main: DashboardMain::Decisions,
        branches: &[NavBranch {
            id: "summary",
            label: "Arbitrages",
            leaves: &[
                DASHBOARD_LEAF,
                NavLeaf {
                    id: "guide",
                    label: "Circuit de décision",
                },
            ],
        }],
    },
    NavSection {
        main: DashboardMain::Realtime,
        branches: &[NavBranch {
            id: "live",
            label: "Flux",
            leaves: &[DASHBOARD_LEAF],
        }],
    },
];
