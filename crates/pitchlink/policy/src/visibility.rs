//! Field visibility matrix
//!
//! The central decision point of the engine: may a third-party viewer see
//! one field of another role's profile? The full (viewer, owner, field)
//! cross-product is never materialized; rules are stored as nested lookups
//! (owner role → field → per-viewer answers) plus a blanket layer per
//! (viewer, owner) pair, so adding a field to one owner role touches one
//! small table.
//!
//! Self-views are the caller's short-circuit: product code must grant an
//! owner full access to their own profile before consulting the matrix.
//! The matrix always assumes a third-party viewer and carries no identity
//! context, which keeps it free of self-referential special cases.

use pitchlink_types::{ProfileField, Role};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A blanket rule covering every field of an owner role for one viewer
/// role, unless an exact field rule overrides it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlanketRule {
    pub viewer: Role,
    pub owner: Role,
    pub allow: bool,
}

/// An exact rule for a single (viewer, owner, field) triple.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRule {
    pub viewer: Role,
    pub owner: Role,
    pub field: String,
    pub allow: bool,
}

/// Sparse (viewer, owner, field) → bool matrix with deny-by-default.
///
/// Resolution order, first match wins:
/// 1. exact (viewer, owner, field) rule
/// 2. blanket (viewer, owner) rule
/// 3. deny
///
/// Deny-by-default makes a newly added sensitive field invisible to every
/// viewer until a rule explicitly opens it.
#[derive(Clone, Debug, Default)]
pub struct VisibilityMatrix {
    owners: HashMap<Role, OwnerRules>,
}

#[derive(Clone, Debug, Default)]
struct OwnerRules {
    blanket: HashMap<Role, bool>,
    fields: HashMap<String, HashMap<Role, bool>>,
}

impl VisibilityMatrix {
    /// Build a matrix from explicit rule lists. A later rule for the same
    /// key replaces an earlier one.
    pub fn from_rules(blankets: &[BlanketRule], fields: &[FieldRule]) -> Self {
        let mut owners: HashMap<Role, OwnerRules> = HashMap::new();

        for rule in blankets {
            owners
                .entry(rule.owner)
                .or_default()
                .blanket
                .insert(rule.viewer, rule.allow);
        }

        for rule in fields {
            owners
                .entry(rule.owner)
                .or_default()
                .fields
                .entry(rule.field.clone())
                .or_default()
                .insert(rule.viewer, rule.allow);
        }

        Self { owners }
    }

    /// May `viewer` see `field` on a profile owned by `owner`?
    ///
    /// Unknown field identifiers resolve through deny-by-default; this is
    /// a correct negative answer, not an error.
    pub fn can_view(&self, viewer: Role, owner: Role, field: &str) -> bool {
        let Some(rules) = self.owners.get(&owner) else {
            return false;
        };

        if let Some(answer) = rules.fields.get(field).and_then(|f| f.get(&viewer)) {
            return *answer;
        }

        if let Some(answer) = rules.blanket.get(&viewer) {
            return *answer;
        }

        false
    }

    /// Typed variant of [`can_view`](Self::can_view); the owner role is
    /// taken from the field type, so naming a field that does not exist
    /// for an owner role fails to compile.
    pub fn can_view_typed<F: ProfileField>(&self, viewer: Role, field: F) -> bool {
        self.can_view(viewer, F::OWNER, field.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitchlink_types::{PlayerField, SponsorField};

    fn matrix() -> VisibilityMatrix {
        VisibilityMatrix::from_rules(
            &[
                BlanketRule {
                    viewer: Role::Scout,
                    owner: Role::Player,
                    allow: true,
                },
                BlanketRule {
                    viewer: Role::Scout,
                    owner: Role::Sponsor,
                    allow: false,
                },
            ],
            &[
                FieldRule {
                    viewer: Role::Scout,
                    owner: Role::Player,
                    field: "medical_history".into(),
                    allow: false,
                },
                FieldRule {
                    viewer: Role::Scout,
                    owner: Role::Sponsor,
                    field: "brand_name".into(),
                    allow: true,
                },
                FieldRule {
                    viewer: Role::Club,
                    owner: Role::Sponsor,
                    field: "budget".into(),
                    allow: true,
                },
            ],
        )
    }

    #[test]
    fn exact_rule_overrides_blanket_allow() {
        let m = matrix();
        assert!(m.can_view(Role::Scout, Role::Player, "height_cm"));
        assert!(!m.can_view(Role::Scout, Role::Player, "medical_history"));
    }

    #[test]
    fn exact_rule_overrides_blanket_deny() {
        let m = matrix();
        assert!(!m.can_view(Role::Scout, Role::Sponsor, "industry"));
        assert!(m.can_view(Role::Scout, Role::Sponsor, "brand_name"));
    }

    #[test]
    fn unruled_triples_are_denied() {
        let m = matrix();
        assert!(!m.can_view(Role::Player, Role::Sponsor, "budget"));
        assert!(!m.can_view(Role::Coach, Role::Scout, "agency"));
        assert!(!m.can_view(Role::Club, Role::Player, "anything_at_all"));
    }

    #[test]
    fn unknown_fields_fall_back_to_the_pair_blanket() {
        let m = matrix();
        assert!(m.can_view(Role::Scout, Role::Player, "not_a_real_field"));
        assert!(!m.can_view(Role::Scout, Role::Sponsor, "not_a_real_field"));
    }

    #[test]
    fn typed_lookup_matches_string_lookup() {
        let m = matrix();
        assert_eq!(
            m.can_view_typed(Role::Scout, PlayerField::MedicalHistory),
            m.can_view(Role::Scout, Role::Player, "medical_history")
        );
        assert_eq!(
            m.can_view_typed(Role::Club, SponsorField::Budget),
            m.can_view(Role::Club, Role::Sponsor, "budget")
        );
    }

    #[test]
    fn later_rule_replaces_earlier_rule() {
        let m = VisibilityMatrix::from_rules(
            &[],
            &[
                FieldRule {
                    viewer: Role::Coach,
                    owner: Role::Player,
                    field: "stats".into(),
                    allow: false,
                },
                FieldRule {
                    viewer: Role::Coach,
                    owner: Role::Player,
                    field: "stats".into(),
                    allow: true,
                },
            ],
        );
        assert!(m.can_view(Role::Coach, Role::Player, "stats"));
    }

    #[test]
    fn empty_matrix_denies_everything() {
        let m = VisibilityMatrix::default();
        for viewer in Role::ALL {
            for owner in Role::ALL {
                assert!(!m.can_view(viewer, owner, "bio"));
            }
        }
    }
}
