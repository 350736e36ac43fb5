//! Action permission table
//!
//! Gates a capability of the viewing role itself (may this role maintain a
//! shortlist, attach private notes, ...) rather than a datum of a specific
//! profile. Flat role → action-set membership with deny-by-default for
//! unrecognized action identifiers.

use pitchlink_types::{Action, Role};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// The actions granted to one role, as they appear in configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionGrant {
    pub role: Role,
    pub actions: Vec<String>,
}

/// Role → action-set membership table.
#[derive(Clone, Debug, Default)]
pub struct ActionTable {
    grants: HashMap<Role, HashSet<String>>,
}

impl ActionTable {
    /// Build a table from per-role grants. Grants for the same role are
    /// merged.
    pub fn from_grants(grants: &[ActionGrant]) -> Self {
        let mut table: HashMap<Role, HashSet<String>> = HashMap::new();
        for grant in grants {
            table
                .entry(grant.role)
                .or_default()
                .extend(grant.actions.iter().cloned());
        }
        Self { grants: table }
    }

    /// May `role` perform the action named `action`?
    ///
    /// Unrecognized action identifiers are denied.
    pub fn can_perform(&self, role: Role, action: &str) -> bool {
        self.grants
            .get(&role)
            .is_some_and(|actions| actions.contains(action))
    }

    /// Typed variant of [`can_perform`](Self::can_perform).
    pub fn can_perform_typed(&self, role: Role, action: Action) -> bool {
        self.can_perform(role, action.as_str())
    }
}
