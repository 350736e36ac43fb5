//! Directory categories
//!
//! A discover tab is one browsable category of the member directory. Which
//! tabs a role sees, and in what order, is decided by the policy engine;
//! this module only names the categories.

use serde::{Deserialize, Serialize};

/// A browsable category of the member directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscoverTab {
    Players,
    Coaches,
    Clubs,
    Scouts,
    Sponsors,
    Jobs,
}

impl DiscoverTab {
    /// The tab identifier as used in policy tables and routes.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscoverTab::Players => "players",
            DiscoverTab::Coaches => "coaches",
            DiscoverTab::Clubs => "clubs",
            DiscoverTab::Scouts => "scouts",
            DiscoverTab::Sponsors => "sponsors",
            DiscoverTab::Jobs => "jobs",
        }
    }
}

impl std::fmt::Display for DiscoverTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_names_match_tab_identifiers() {
        let json = serde_json::to_string(&DiscoverTab::Jobs).unwrap();
        assert_eq!(json, "\"jobs\"");
    }
}
