//! Discover tab policy
//!
//! Ordered allow-list of directory categories per role. Order matters: it
//! drives which tab the directory selects by default. Validation of the
//! configured lists (no role may end up with zero tabs) happens when the
//! engine is built; the lookup itself stays total and degrades to an empty
//! slice, which callers must render as "show nothing".

use pitchlink_types::{DiscoverTab, Role};
use std::collections::HashMap;

/// Role → ordered directory categories table.
#[derive(Clone, Debug, Default)]
pub struct DiscoverTabPolicy {
    tabs: HashMap<Role, Vec<DiscoverTab>>,
}

impl DiscoverTabPolicy {
    /// Build a tab policy from per-role ordered lists.
    pub fn from_tabs(tabs: HashMap<Role, Vec<DiscoverTab>>) -> Self {
        Self { tabs }
    }

    /// The directory categories `role` may browse, in presentation order.
    pub fn tabs_for(&self, role: Role) -> &[DiscoverTab] {
        self.tabs.get(&role).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_configured_order() {
        let policy = DiscoverTabPolicy::from_tabs(HashMap::from([(
            Role::Player,
            vec![DiscoverTab::Clubs, DiscoverTab::Coaches, DiscoverTab::Jobs],
        )]));
        assert_eq!(
            policy.tabs_for(Role::Player),
            [DiscoverTab::Clubs, DiscoverTab::Coaches, DiscoverTab::Jobs]
        );
    }

    #[test]
    fn unconfigured_roles_get_an_empty_slice() {
        let policy = DiscoverTabPolicy::default();
        assert!(policy.tabs_for(Role::Sponsor).is_empty());
    }
}
