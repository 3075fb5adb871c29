//! Navigation state: which screen is active.
//!
//! Navigation replaces the whole variant; transient per-view state lives
//! in the view-state structs (`DashboardState`, `UploadState`), not here.

use std::fmt;
use std::str::FromStr;

/// Current screen in the portal.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum View {
    /// Public landing page with the login gate.
    #[default]
    Landing,

    /// Tabbed document dashboard.
    Dashboard {
        /// Active tab.
        tab: DashboardTab,
    },

    /// Upload screen with the recipient sidebar.
    Upload,
}

impl View {
    pub fn dashboard() -> Self {
        Self::Dashboard {
            tab: DashboardTab::default(),
        }
    }

    pub fn dashboard_with_tab(tab: DashboardTab) -> Self {
        Self::Dashboard { tab }
    }

    /// Get the active tab if on the dashboard.
    pub fn current_tab(&self) -> Option<DashboardTab> {
        match self {
            Self::Dashboard { tab } => Some(*tab),
            _ => None,
        }
    }

    pub fn is_landing(&self) -> bool {
        matches!(self, Self::Landing)
    }

    pub fn is_upload(&self) -> bool {
        matches!(self, Self::Upload)
    }
}

/// Dashboard tabs shown in the signed-in navbar.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashboardTab {
    #[default]
    All,
    Uploaded,
    Verified,
    /// Aggregation of starred documents from every other tab.
    Marked,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 4] = [
        DashboardTab::All,
        DashboardTab::Uploaded,
        DashboardTab::Verified,
        DashboardTab::Marked,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DashboardTab::All => "All",
            DashboardTab::Uploaded => "Uploaded",
            DashboardTab::Verified => "Verified",
            DashboardTab::Marked => "Marked",
        }
    }
}

impl fmt::Display for DashboardTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DashboardTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(DashboardTab::All),
            "uploaded" => Ok(DashboardTab::Uploaded),
            "verified" => Ok(DashboardTab::Verified),
            "marked" => Ok(DashboardTab::Marked),
            _ => Err(format!("Unknown dashboard tab: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_is_the_default_view() {
        assert!(View::default().is_landing());
        assert_eq!(View::default().current_tab(), None);
    }

    #[test]
    fn dashboard_starts_on_all_tab() {
        assert_eq!(View::dashboard().current_tab(), Some(DashboardTab::All));
    }

    #[test]
    fn tab_labels_round_trip() {
        for tab in DashboardTab::ALL {
            assert_eq!(tab.as_str().parse::<DashboardTab>(), Ok(tab));
        }
        assert!("inbox".parse::<DashboardTab>().is_err());
    }
}
