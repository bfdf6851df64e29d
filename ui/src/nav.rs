//! Navigation model: the static route tree and the menu/dropdown state machine.
//!
//! Kept free of framework types so the matching rules and state transitions
//! can be tested on the host target.

/// A navigable entry inside a dropdown group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLeaf {
    pub path: &'static str,
    pub label: &'static str,
}

/// A top-level navigation entry. Groups render as non-navigable headers
/// whose children carry the actual links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Leaf {
        path: &'static str,
        label: &'static str,
    },
    Group {
        path: &'static str,
        label: &'static str,
        children: &'static [NavLeaf],
    },
}

/// The site's navigation tree. Defined once at startup, immutable after.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem::Leaf {
        path: "/",
        label: "Home",
    },
    NavItem::Group {
        path: "/ai-initiatives",
        label: "AI Initiatives",
        children: &[
            NavLeaf {
                path: "/ai-services",
                label: "AI Services",
            },
            NavLeaf {
                path: "/ai-projects",
                label: "AI Projects",
            },
        ],
    },
    NavItem::Group {
        path: "/company",
        label: "Our Company",
        children: &[
            NavLeaf {
                path: "/about",
                label: "About Us",
            },
            NavLeaf {
                path: "/offices",
                label: "Offices",
            },
        ],
    },
    NavItem::Leaf {
        path: "/philanthropy",
        label: "Impact",
    },
    NavItem::Leaf {
        path: "/careers",
        label: "Careers",
    },
    NavItem::Leaf {
        path: "/contact",
        label: "Contact",
    },
];

/// Active-link matching: exact for the root path, prefix for everything else.
pub fn path_matches(path: &str, current: &str) -> bool {
    if path == "/" {
        current == "/"
    } else {
        current.starts_with(path)
    }
}

impl NavItem {
    pub fn path(&self) -> &'static str {
        match self {
            NavItem::Leaf { path, .. } | NavItem::Group { path, .. } => path,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavItem::Leaf { label, .. } | NavItem::Group { label, .. } => label,
        }
    }

    /// A group is active when its own path matches or any child matches.
    pub fn is_active(&self, current: &str) -> bool {
        match self {
            NavItem::Leaf { path, .. } => path_matches(path, current),
            NavItem::Group { path, children, .. } => {
                path_matches(path, current)
                    || children.iter().any(|c| path_matches(c.path, current))
            }
        }
    }
}

/// Transient menu state, owned by the navbar and dropped with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    pub menu_open: bool,
    pub open_dropdown: Option<usize>,
}

impl NavState {
    /// Whether the menu or any dropdown is currently showing. Nothing open
    /// means an outside click has nothing to close.
    pub fn is_open(&self) -> bool {
        self.menu_open || self.open_dropdown.is_some()
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn hover_group(&mut self, index: usize) {
        self.open_dropdown = Some(index);
    }

    pub fn leave_group(&mut self) {
        self.open_dropdown = None;
    }

    /// A leaf link was followed: the mobile menu and any dropdown close.
    pub fn follow_link(&mut self) {
        self.menu_open = false;
        self.open_dropdown = None;
    }

    /// Pointer went down outside the nav container.
    pub fn click_outside(&mut self) {
        self.menu_open = false;
        self.open_dropdown = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_path_matches_exactly() {
        assert!(path_matches("/", "/"));
        assert!(!path_matches("/", "/careers"));
    }

    #[test]
    fn non_root_paths_match_by_prefix() {
        assert!(path_matches("/careers", "/careers"));
        assert!(path_matches("/careers", "/careers/senior-ai-engineer"));
        assert!(!path_matches("/careers", "/contact"));
    }

    #[test]
    fn group_is_active_when_child_route_is_current() {
        let group = &NAV_ITEMS[1];
        assert!(matches!(group, NavItem::Group { .. }));
        assert!(group.is_active("/ai-services"));
        assert!(group.is_active("/ai-projects"));
        assert!(group.is_active("/ai-initiatives"));
        assert!(!group.is_active("/contact"));
    }

    #[test]
    fn leaf_activation_is_independent_of_siblings() {
        let home = &NAV_ITEMS[0];
        assert!(home.is_active("/"));
        assert!(!home.is_active("/about"));
    }

    #[test]
    fn nav_paths_are_unique() {
        let mut paths: Vec<&str> = NAV_ITEMS
            .iter()
            .flat_map(|item| {
                let mut p = vec![item.path()];
                if let NavItem::Group { children, .. } = item {
                    p.extend(children.iter().map(|c| c.path));
                }
                p
            })
            .collect();
        let total = paths.len();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), total);
    }

    #[test]
    fn click_outside_closes_menu_and_dropdown() {
        for dropdown in [None, Some(0), Some(1)] {
            let mut state = NavState {
                menu_open: true,
                open_dropdown: dropdown,
            };
            state.click_outside();
            assert_eq!(state, NavState::default());
        }
    }

    #[test]
    fn only_open_state_needs_closing_on_outside_clicks() {
        assert!(!NavState::default().is_open());
        assert!(NavState {
            menu_open: true,
            open_dropdown: None
        }
        .is_open());
        assert!(NavState {
            menu_open: false,
            open_dropdown: Some(0)
        }
        .is_open());
    }

    #[test]
    fn following_a_link_closes_the_menu() {
        let mut state = NavState {
            menu_open: true,
            open_dropdown: Some(2),
        };
        state.follow_link();
        assert!(!state.menu_open);
        assert_eq!(state.open_dropdown, None);
    }

    #[test]
    fn hover_moves_between_groups() {
        let mut state = NavState::default();
        state.hover_group(1);
        assert_eq!(state.open_dropdown, Some(1));
        state.hover_group(2);
        assert_eq!(state.open_dropdown, Some(2));
        state.leave_group();
        assert_eq!(state.open_dropdown, None);
    }
}
