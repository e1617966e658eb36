//! Static 3-level navigation menus (main → sub → subSub).

use super::key::{MainCategory, NavKey};

#[derive(Debug, Clone, Copy)]
pub struct NavLeaf {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct NavBranch {
    pub id: &'static str,
    pub label: &'static str,
    pub leaves: &'static [NavLeaf],
}

#[derive(Debug, Clone, Copy)]
pub struct NavSection<M: 'static> {
    pub main: M,
    pub branches: &'static [NavBranch],
}

/// Every reachable `(main, sub, subSub)` of a menu, in menu order.
pub fn leaf_keys<M: MainCategory>(tree: &[NavSection<M>]) -> Vec<NavKey<M>> {
    tree.iter()
        .flat_map(|section| {
            section.branches.iter().flat_map(move |branch| {
                branch
                    .leaves
                    .iter()
                    .map(move |leaf| NavKey::full(section.main, branch.id, leaf.id))
            })
        })
        .collect()
}

/// Menu label of the effective selection, e.g. "Validés › Tous › Liste".
pub fn breadcrumb<M: MainCategory>(tree: &[NavSection<M>], nav: &NavKey<M>) -> Vec<&'static str> {
    let mut crumbs = vec![nav.main.label()];
    let branch = tree
        .iter()
        .filter(|s| s.main == nav.main)
        .flat_map(|s| s.branches.iter())
        .find(|b| b.id == nav.effective_sub());
    if let Some(branch) = branch {
        crumbs.push(branch.label);
        if let Some(leaf) = branch.leaves.iter().find(|l| l.id == nav.effective_sub_sub()) {
            crumbs.push(leaf.label);
        }
    }
    crumbs
}

#[cfg(test)]
mod tests {
    use super::super::key::test_support::TestMain;
    use super::*;

    const TREE: &[NavSection<TestMain>] = &[
        NavSection {
            main: TestMain::Overview,
            branches: &[NavBranch {
                id: "summary",
                label: "Summary",
                leaves: &[
                    NavLeaf { id: "dashboard", label: "Dashboard" },
                    NavLeaf { id: "highlights", label: "Highlights" },
                ],
            }],
        },
        NavSection {
            main: TestMain::Performance,
            branches: &[NavBranch {
                id: "kpis",
                label: "KPIs",
                leaves: &[NavLeaf { id: "dashboard", label: "Dashboard" }],
            }],
        },
    ];

    #[test]
    fn test_leaf_keys_in_menu_order() {
        let keys: Vec<String> = leaf_keys(TREE)
            .iter()
            .map(|k| k.resolve().to_string())
            .collect();
        assert_eq!(
            keys,
            vec![
                "dashboard::overview::summary::dashboard",
                "dashboard::overview::summary::highlights",
                "dashboard::performance::kpis::dashboard",
            ]
        );
    }

    #[test]
    fn test_breadcrumb_uses_defaults() {
        let crumbs = breadcrumb(TREE, &NavKey::main_only(TestMain::Overview));
        assert_eq!(crumbs, vec!["overview", "Summary", "Dashboard"]);
    }

    #[test]
    fn test_breadcrumb_unknown_branch() {
        let crumbs = breadcrumb(TREE, &NavKey::full(TestMain::Performance, "x", "y"));
        assert_eq!(crumbs, vec!["performance"]);
    }
}
