//! Contact request quotas
//!
//! Static per-role ceilings on outstanding outbound contact requests. The
//! engine only supplies the ceiling; tracking how many requests a member
//! has already sent, and refusing sends past the ceiling, belongs to the
//! request-issuing collaborator. The limit is a soft display/guidance
//! value in this design, so "what the limit is" and "whether it is
//! exceeded" can be tested independently.

use pitchlink_types::Role;
use std::collections::HashMap;

/// Role → contact request ceiling table.
#[derive(Clone, Debug, Default)]
pub struct ContactQuota {
    limits: HashMap<Role, u32>,
}

impl ContactQuota {
    /// Build a quota table. Roles absent from `limits` resolve to a
    /// ceiling of 0.
    pub fn from_limits(limits: HashMap<Role, u32>) -> Self {
        Self { limits }
    }

    /// The ceiling on outstanding contact requests for `role`.
    pub fn limit_for(&self, role: Role) -> u32 {
        self.limits.get(&role).copied().unwrap_or(0)
    }

    /// Remaining allowance given an externally tracked sent count,
    /// clamped to zero.
    pub fn remaining(&self, role: Role, sent: u32) -> u32 {
        self.limit_for(role).saturating_sub(sent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quota() -> ContactQuota {
        ContactQuota::from_limits(HashMap::from([(Role::Scout, 50), (Role::Sponsor, 10)]))
    }

    #[test]
    fn returns_configured_ceilings() {
        let q = quota();
        assert_eq!(q.limit_for(Role::Scout), 50);
        assert_eq!(q.limit_for(Role::Sponsor), 10);
    }

    #[test]
    fn unconfigured_roles_have_zero_ceiling() {
        let q = quota();
        assert_eq!(q.limit_for(Role::Player), 0);
        assert_eq!(q.remaining(Role::Player, 0), 0);
    }

    #[test]
    fn remaining_clamps_to_zero() {
        let q = quota();
        assert_eq!(q.remaining(Role::Sponsor, 0), 10);
        assert_eq!(q.remaining(Role::Sponsor, 4), 6);
        assert_eq!(q.remaining(Role::Sponsor, 10), 0);
        assert_eq!(q.remaining(Role::Sponsor, u32::MAX), 0);
    }
}
