//! Participant roles
//!
//! A role is both axes of every access decision: who is looking (viewer)
//! and what kind of profile is being looked at (owner). The set is closed;
//! no other component may introduce role values outside it.

use serde::{Deserialize, Serialize};

/// One of the five fixed participant categories on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// A footballer looking for clubs, coaching, or vacancies.
    Player,

    /// A coach offering training or seeking a club position.
    Coach,

    /// A club account managed by club staff.
    Club,

    /// A scout evaluating players on behalf of clubs or agencies.
    Scout,

    /// A commercial sponsor evaluating partnership opportunities.
    Sponsor,
}

impl Role {
    /// Every canonical role, in declaration order.
    pub const ALL: [Role; 5] = [
        Role::Player,
        Role::Coach,
        Role::Club,
        Role::Scout,
        Role::Sponsor,
    ];

    /// Parse an untrusted string into a role.
    ///
    /// Returns `None` for anything outside the five canonical roles.
    /// Callers must treat `None` as "no role / unauthenticated" and deny
    /// all role-gated operations.
    pub fn parse(s: &str) -> Option<Role> {
        let normalized = s.trim();
        Role::ALL
            .into_iter()
            .find(|role| normalized.eq_ignore_ascii_case(role.as_str()))
    }

    /// The canonical wire name of this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Player => "player",
            Role::Coach => "coach",
            Role::Club => "club",
            Role::Scout => "scout",
            Role::Sponsor => "sponsor",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_names() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn parse_tolerates_case_and_whitespace() {
        assert_eq!(Role::parse("  Scout "), Some(Role::Scout));
        assert_eq!(Role::parse("SPONSOR"), Some(Role::Sponsor));
    }

    #[test]
    fn rejects_unknown_role_strings() {
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::parse("admin"), None);
        assert_eq!(Role::parse("players"), None);
    }

    #[test]
    fn serde_names_match_wire_names() {
        for role in Role::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
        }
    }
}
