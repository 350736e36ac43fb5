//! Policy configuration
//!
//! A [`PolicyConfig`] describes all five decision tables in one
//! serializable value, so a deployment can load overrides from static
//! configuration at startup. [`PolicyConfig::builtin`] is the canonical
//! product table set compiled into the platform; DESIGN.md records the
//! same tables in prose.

use crate::actions::ActionGrant;
use crate::visibility::{BlanketRule, FieldRule};
use pitchlink_types::{
    Action, ClubField, CoachField, DiscoverTab, PlayerField, ProfileField, Role, ScoutField,
    SponsorField, StatusColor, StatusConfig,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Static description of every policy table.
///
/// Absent sections deserialize to empty; the engine decides at build time
/// which omissions are configuration defects.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Blanket (viewer, owner) visibility rules.
    pub blanket_rules: Vec<BlanketRule>,

    /// Exact (viewer, owner, field) visibility rules.
    pub field_rules: Vec<FieldRule>,

    /// Actions granted per role.
    pub action_grants: Vec<ActionGrant>,

    /// Contact request ceilings per role.
    pub contact_limits: HashMap<Role, u32>,

    /// Display configuration per status code.
    pub statuses: HashMap<String, StatusConfig>,

    /// Ordered directory categories per role.
    pub discover_tabs: HashMap<Role, Vec<DiscoverTab>>,
}

impl PolicyConfig {
    /// The canonical product tables.
    pub fn builtin() -> Self {
        Self {
            blanket_rules: builtin_blanket_rules(),
            field_rules: builtin_field_rules(),
            action_grants: builtin_action_grants(),
            contact_limits: builtin_contact_limits(),
            statuses: builtin_statuses(),
            discover_tabs: builtin_discover_tabs(),
        }
    }
}

fn blanket(viewer: Role, owner: Role, allow: bool) -> BlanketRule {
    BlanketRule {
        viewer,
        owner,
        allow,
    }
}

fn field<F: ProfileField>(viewer: Role, field: F, allow: bool) -> FieldRule {
    FieldRule {
        viewer,
        owner: F::OWNER,
        field: field.key().to_string(),
        allow,
    }
}

fn grant(role: Role, actions: &[Action]) -> ActionGrant {
    ActionGrant {
        role,
        actions: actions.iter().map(|a| a.as_str().to_string()).collect(),
    }
}

fn builtin_blanket_rules() -> Vec<BlanketRule> {
    vec![
        // The football side of the industry sees player profiles.
        blanket(Role::Coach, Role::Player, true),
        blanket(Role::Club, Role::Player, true),
        blanket(Role::Scout, Role::Player, true),
        // Clubs recruit coaches and work with scouts.
        blanket(Role::Club, Role::Coach, true),
        blanket(Role::Club, Role::Scout, true),
        // Club profiles are the public face of the platform.
        blanket(Role::Player, Role::Club, true),
        blanket(Role::Coach, Role::Club, true),
        blanket(Role::Scout, Role::Club, true),
        blanket(Role::Sponsor, Role::Club, true),
        // Scouts have no business on sponsor profiles.
        blanket(Role::Scout, Role::Sponsor, false),
    ]
}

fn builtin_field_rules() -> Vec<FieldRule> {
    let mut rules = Vec::new();

    // Medical records never surface in the directory, for anyone.
    for viewer in [Role::Coach, Role::Club, Role::Scout] {
        rules.push(field(viewer, PlayerField::MedicalHistory, false));
    }

    // Agent contact details are disclosed to clubs only; coach and scout
    // blanket access is overridden here.
    rules.push(field(Role::Coach, PlayerField::AgentContact, false));
    rules.push(field(Role::Scout, PlayerField::AgentContact, false));

    // Sponsors evaluating endorsement deals see a named subset of the
    // player profile.
    for f in [
        PlayerField::FullName,
        PlayerField::Position,
        PlayerField::Bio,
        PlayerField::Stats,
    ] {
        rules.push(field(Role::Sponsor, f, true));
    }

    // Players evaluate coaches on the open part of their profiles.
    for f in [
        CoachField::FullName,
        CoachField::Bio,
        CoachField::CoachingBadges,
        CoachField::CurrentClub,
        CoachField::TacticalStyle,
    ] {
        rules.push(field(Role::Player, f, true));
    }
    for f in [
        CoachField::FullName,
        CoachField::CurrentClub,
        CoachField::TacticalStyle,
    ] {
        rules.push(field(Role::Scout, f, true));
    }

    // A club's scout network is visible to scouts alone.
    for viewer in [Role::Player, Role::Coach, Role::Sponsor] {
        rules.push(field(viewer, ClubField::ConnectedScoutIds, false));
    }

    // Players and coaches see who a scout is, not their full book.
    for f in [ScoutField::FullName, ScoutField::Agency, ScoutField::Regions] {
        rules.push(field(Role::Player, f, true));
    }
    for f in [ScoutField::FullName, ScoutField::Agency] {
        rules.push(field(Role::Coach, f, true));
    }

    // Clubs evaluate sponsorship budgets; players do not. Both answers
    // are explicit rules, not fallthrough.
    rules.push(field(Role::Club, SponsorField::Budget, true));
    rules.push(field(Role::Player, SponsorField::Budget, false));

    for f in [
        SponsorField::BrandName,
        SponsorField::Industry,
        SponsorField::Bio,
        SponsorField::SponsorshipFocus,
        SponsorField::ActiveDeals,
    ] {
        rules.push(field(Role::Club, f, true));
    }
    for f in [
        SponsorField::BrandName,
        SponsorField::Industry,
        SponsorField::Bio,
        SponsorField::SponsorshipFocus,
    ] {
        rules.push(field(Role::Coach, f, true));
    }
    for f in [
        SponsorField::BrandName,
        SponsorField::Industry,
        SponsorField::Bio,
    ] {
        rules.push(field(Role::Player, f, true));
    }

    rules
}

fn builtin_action_grants() -> Vec<ActionGrant> {
    vec![
        grant(Role::Player, &[Action::SendContactRequest]),
        grant(
            Role::Coach,
            &[
                Action::CreateShortlist,
                Action::SendContactRequest,
                Action::EndorsePlayer,
            ],
        ),
        grant(
            Role::Club,
            &[
                Action::CreateShortlist,
                Action::AddPrivateNotes,
                Action::SendContactRequest,
                Action::PostVacancy,
            ],
        ),
        grant(
            Role::Scout,
            &[
                Action::CreateShortlist,
                Action::AddPrivateNotes,
                Action::SendContactRequest,
            ],
        ),
        grant(Role::Sponsor, &[Action::SendContactRequest]),
    ]
}

fn builtin_contact_limits() -> HashMap<Role, u32> {
    HashMap::from([
        (Role::Player, 5),
        (Role::Coach, 15),
        (Role::Club, 30),
        (Role::Scout, 50),
        (Role::Sponsor, 10),
    ])
}

fn builtin_statuses() -> HashMap<String, StatusConfig> {
    HashMap::from([
        (
            "available".to_string(),
            StatusConfig::new("Available", StatusColor::Emerald),
        ),
        (
            "looking".to_string(),
            StatusConfig::new("Looking", StatusColor::Amber),
        ),
        (
            "open_to_offers".to_string(),
            StatusConfig::new("Open to offers", StatusColor::Blue),
        ),
        (
            "under_contract".to_string(),
            StatusConfig::new("Under contract", StatusColor::Violet),
        ),
        (
            "retired".to_string(),
            StatusConfig::new("Retired", StatusColor::Slate),
        ),
    ])
}

fn builtin_discover_tabs() -> HashMap<Role, Vec<DiscoverTab>> {
    HashMap::from([
        (
            Role::Player,
            vec![DiscoverTab::Clubs, DiscoverTab::Coaches, DiscoverTab::Jobs],
        ),
        (
            Role::Coach,
            vec![DiscoverTab::Clubs, DiscoverTab::Players, DiscoverTab::Jobs],
        ),
        (
            Role::Club,
            vec![
                DiscoverTab::Players,
                DiscoverTab::Coaches,
                DiscoverTab::Scouts,
                DiscoverTab::Sponsors,
            ],
        ),
        (
            Role::Scout,
            vec![
                DiscoverTab::Players,
                DiscoverTab::Clubs,
                DiscoverTab::Coaches,
            ],
        ),
        (
            Role::Sponsor,
            vec![DiscoverTab::Clubs, DiscoverTab::Players],
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_survives_a_serde_round_trip() {
        let config = PolicyConfig::builtin();
        let json = serde_json::to_string(&config).unwrap();
        let back: PolicyConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(back.blanket_rules, config.blanket_rules);
        assert_eq!(back.field_rules, config.field_rules);
        assert_eq!(back.action_grants, config.action_grants);
        assert_eq!(back.contact_limits, config.contact_limits);
        assert_eq!(back.statuses, config.statuses);
        assert_eq!(back.discover_tabs, config.discover_tabs);
    }

    #[test]
    fn sponsor_budget_rules_are_explicit_not_inferred() {
        let config = PolicyConfig::builtin();
        assert!(config.field_rules.contains(&FieldRule {
            viewer: Role::Club,
            owner: Role::Sponsor,
            field: "budget".into(),
            allow: true,
        }));
        assert!(config.field_rules.contains(&FieldRule {
            viewer: Role::Player,
            owner: Role::Sponsor,
            field: "budget".into(),
            allow: false,
        }));
    }

    #[test]
    fn every_role_has_builtin_tabs_and_limits() {
        let config = PolicyConfig::builtin();
        for role in Role::ALL {
            assert!(config.contact_limits.contains_key(&role));
            assert!(!config.discover_tabs[&role].is_empty());
        }
    }

    #[test]
    fn partial_config_deserializes_with_empty_sections() {
        let config: PolicyConfig =
            serde_json::from_str(r#"{"contact_limits": {"scout": 50}}"#).unwrap();
        assert_eq!(config.contact_limits[&Role::Scout], 50);
        assert!(config.blanket_rules.is_empty());
        assert!(config.discover_tabs.is_empty());
    }
}
