//! Plain record types behind the static content arrays that drive the pages.
//! No identity beyond array position, no cross-references.

/// A service offering rendered as a tilt card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Active,
    Development,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Development => "Development",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            ProjectStatus::Active => "status-badge active",
            ProjectStatus::Development => "status-badge development",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub status: ProjectStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Office {
    pub city: &'static str,
    pub country: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobPosting {
    pub title: &'static str,
    pub department: &'static str,
    pub location: &'static str,
    pub kind: &'static str,
    pub experience: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Benefit {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub icon: &'static str,
    pub title: &'static str,
    pub details: &'static str,
    pub description: &'static str,
}

/// A row in the hover-expanding data-services widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceRow {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub accent: &'static str,
}

/// One tab of the brand-values showcase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueTab {
    pub number: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    pub cta: &'static str,
    pub image: &'static str,
}
