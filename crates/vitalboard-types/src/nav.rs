//! Static navigation tree and active-route matching
//!
//! The sidebar renders this tree verbatim: sections and items are fixed at
//! build time and never added, removed, or reordered at runtime.

/// Symbolic icon identifier, resolved to an inline SVG glyph by the frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Gauge,
    HeartPulse,
    Eye,
    Ear,
    Wind,
    TrendingUp,
    Phone,
    User,
    Settings,
    Archive,
}

/// A single sidebar link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    /// Absolute route path, unique across the full item set
    pub path: &'static str,
    pub icon: IconKind,
    /// One-line tooltip / page blurb
    pub description: &'static str,
}

/// A titled group of sidebar links, rendered with a section header
#[derive(Debug, Clone, Copy)]
pub struct NavSection {
    pub title: &'static str,
    pub items: &'static [NavItem],
}

/// The full authored navigation tree, in render order
pub const NAV_SECTIONS: &[NavSection] = &[
    NavSection {
        title: "Main",
        items: &[NavItem {
            label: "Dashboard",
            path: "/",
            icon: IconKind::Gauge,
            description: "Screening overview and recent results",
        }],
    },
    NavSection {
        title: "Screening Modules",
        items: &[
            NavItem {
                label: "Vital Signs",
                path: "/vital-signs",
                icon: IconKind::HeartPulse,
                description: "Camera-based heart rate screening",
            },
            NavItem {
                label: "Vision Test",
                path: "/vision-test",
                icon: IconKind::Eye,
                description: "Visual acuity and color perception checks",
            },
            NavItem {
                label: "Hearing Test",
                path: "/hearing-test",
                icon: IconKind::Ear,
                description: "Pure-tone hearing threshold check",
            },
            NavItem {
                label: "Respiration",
                path: "/respiration",
                icon: IconKind::Wind,
                description: "Breathing rate from chest motion",
            },
        ],
    },
    NavSection {
        title: "Analytics & Emergency",
        items: &[
            NavItem {
                label: "Vital Signs Analysis",
                path: "/vital-signs-analysis",
                icon: IconKind::TrendingUp,
                description: "Trends and history across screenings",
            },
            NavItem {
                label: "Emergency Contacts",
                path: "/emergency-contacts",
                icon: IconKind::Phone,
                description: "People to notify on critical readings",
            },
        ],
    },
    NavSection {
        title: "Settings",
        items: &[
            NavItem {
                label: "Profile",
                path: "/profile",
                icon: IconKind::User,
                description: "Personal details used for screening baselines",
            },
            NavItem {
                label: "Preferences",
                path: "/preferences",
                icon: IconKind::Settings,
                description: "Theme and application preferences",
            },
        ],
    },
    NavSection {
        title: "Legacy",
        items: &[NavItem {
            label: "Legacy Reports",
            path: "/legacy-reports",
            icon: IconKind::Archive,
            description: "Reports from the previous app version",
        }],
    },
];

/// True when `target` is the route currently displayed.
///
/// Matching is on whole path segments: the root target matches only the
/// root route, and any other target matches itself plus its nested child
/// paths. A sibling route that merely shares a textual prefix does not
/// match (`/vital-signs` stays inactive on `/vital-signs-analysis`).
pub fn route_matches(current: &str, target: &str) -> bool {
    if target == "/" {
        return current == "/";
    }
    match current.strip_prefix(target) {
        Some("") => true,
        Some(rest) => rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_route_matches_exact_and_unrelated() {
        assert!(route_matches("/vital-signs", "/vital-signs"));
        assert!(!route_matches("/hearing-test", "/vital-signs"));
        assert!(!route_matches("/", "/vital-signs"));
    }

    #[test]
    fn test_route_matches_root_only_exact() {
        assert!(route_matches("/", "/"));
        assert!(!route_matches("/anything", "/"));
        assert!(!route_matches("/vital-signs", "/"));
    }

    #[test]
    fn test_route_matches_nested_child() {
        assert!(route_matches("/vital-signs/history", "/vital-signs"));
        assert!(route_matches("/profile/security", "/profile"));
    }

    #[test]
    fn test_route_matches_rejects_prefix_sibling() {
        // Textual prefix without a segment boundary must not light up
        assert!(!route_matches("/vital-signs-analysis", "/vital-signs"));
        assert!(route_matches("/vital-signs-analysis", "/vital-signs-analysis"));
    }

    #[test]
    fn test_every_item_active_on_its_own_path() {
        for section in NAV_SECTIONS {
            for item in section.items {
                assert!(
                    route_matches(item.path, item.path),
                    "{} should match itself",
                    item.path
                );
                assert!(!route_matches("/nowhere-else", item.path));
            }
        }
    }

    #[test]
    fn test_nav_tree_shape() {
        let titles: Vec<&str> = NAV_SECTIONS.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec![
                "Main",
                "Screening Modules",
                "Analytics & Emergency",
                "Settings",
                "Legacy"
            ]
        );

        let module_labels: Vec<&str> = NAV_SECTIONS[1].items.iter().map(|i| i.label).collect();
        assert_eq!(
            module_labels,
            vec!["Vital Signs", "Vision Test", "Hearing Test", "Respiration"]
        );
    }

    #[test]
    fn test_nav_paths_unique_and_absolute() {
        let mut seen = HashSet::new();
        for section in NAV_SECTIONS {
            assert!(!section.items.is_empty());
            for item in section.items {
                assert!(item.path.starts_with('/'), "{} not absolute", item.path);
                assert!(seen.insert(item.path), "duplicate path {}", item.path);
            }
        }
        assert_eq!(seen.len(), 10);
    }
}
