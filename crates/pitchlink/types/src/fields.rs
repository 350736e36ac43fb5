//! Profile fields, scoped per owner role
//!
//! Each owner role has its own closed field enum so that naming a field
//! that does not exist for that profile type is a compile-time error in
//! new code. The visibility matrix still accepts raw field identifiers at
//! its string entry point, where genuinely unknown or legacy identifiers
//! resolve through deny-by-default.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A typed profile field that knows which role's profiles it belongs to.
pub trait ProfileField {
    /// The role whose profiles carry this field.
    const OWNER: Role;

    /// The field identifier as used in rule tables and stored profiles.
    fn key(&self) -> &'static str;
}

/// Fields of a player profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerField {
    FullName,
    Position,
    CurrentClub,
    Bio,
    DateOfBirth,
    HeightCm,
    WeightKg,
    PreferredFoot,
    TransferStatus,
    MarketValue,
    Stats,
    VideoReels,
    AgentContact,
    MedicalHistory,
}

impl ProfileField for PlayerField {
    const OWNER: Role = Role::Player;

    fn key(&self) -> &'static str {
        match self {
            PlayerField::FullName => "full_name",
            PlayerField::Position => "position",
            PlayerField::CurrentClub => "current_club",
            PlayerField::Bio => "bio",
            PlayerField::DateOfBirth => "date_of_birth",
            PlayerField::HeightCm => "height_cm",
            PlayerField::WeightKg => "weight_kg",
            PlayerField::PreferredFoot => "preferred_foot",
            PlayerField::TransferStatus => "transfer_status",
            PlayerField::MarketValue => "market_value",
            PlayerField::Stats => "stats",
            PlayerField::VideoReels => "video_reels",
            PlayerField::AgentContact => "agent_contact",
            PlayerField::MedicalHistory => "medical_history",
        }
    }
}

/// Fields of a coach profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoachField {
    FullName,
    Bio,
    CoachingBadges,
    CurrentClub,
    TacticalStyle,
    SalaryExpectation,
    ContactEmail,
}

impl ProfileField for CoachField {
    const OWNER: Role = Role::Coach;

    fn key(&self) -> &'static str {
        match self {
            CoachField::FullName => "full_name",
            CoachField::Bio => "bio",
            CoachField::CoachingBadges => "coaching_badges",
            CoachField::CurrentClub => "current_club",
            CoachField::TacticalStyle => "tactical_style",
            CoachField::SalaryExpectation => "salary_expectation",
            CoachField::ContactEmail => "contact_email",
        }
    }
}

/// Fields of a club profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClubField {
    Name,
    League,
    Stadium,
    Bio,
    RecruitmentFocus,
    ConnectedScoutIds,
    Vacancies,
}

impl ProfileField for ClubField {
    const OWNER: Role = Role::Club;

    fn key(&self) -> &'static str {
        match self {
            ClubField::Name => "name",
            ClubField::League => "league",
            ClubField::Stadium => "stadium",
            ClubField::Bio => "bio",
            ClubField::RecruitmentFocus => "recruitment_focus",
            ClubField::ConnectedScoutIds => "connected_scout_ids",
            ClubField::Vacancies => "vacancies",
        }
    }
}

/// Fields of a scout profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoutField {
    FullName,
    Agency,
    Regions,
    Specialization,
    TrackRecord,
    ConnectedClubIds,
}

impl ProfileField for ScoutField {
    const OWNER: Role = Role::Scout;

    fn key(&self) -> &'static str {
        match self {
            ScoutField::FullName => "full_name",
            ScoutField::Agency => "agency",
            ScoutField::Regions => "regions",
            ScoutField::Specialization => "specialization",
            ScoutField::TrackRecord => "track_record",
            ScoutField::ConnectedClubIds => "connected_club_ids",
        }
    }
}

/// Fields of a sponsor profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SponsorField {
    BrandName,
    Industry,
    Bio,
    Budget,
    SponsorshipFocus,
    ActiveDeals,
}

impl ProfileField for SponsorField {
    const OWNER: Role = Role::Sponsor;

    fn key(&self) -> &'static str {
        match self {
            SponsorField::BrandName => "brand_name",
            SponsorField::Industry => "industry",
            SponsorField::Bio => "bio",
            SponsorField::Budget => "budget",
            SponsorField::SponsorshipFocus => "sponsorship_focus",
            SponsorField::ActiveDeals => "active_deals",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_fields_carry_their_owner_role() {
        assert_eq!(PlayerField::OWNER, Role::Player);
        assert_eq!(CoachField::OWNER, Role::Coach);
        assert_eq!(ClubField::OWNER, Role::Club);
        assert_eq!(ScoutField::OWNER, Role::Scout);
        assert_eq!(SponsorField::OWNER, Role::Sponsor);
    }

    #[test]
    fn serde_names_match_rule_table_keys() {
        let json = serde_json::to_string(&PlayerField::MedicalHistory).unwrap();
        assert_eq!(json, "\"medical_history\"");
        let json = serde_json::to_string(&SponsorField::Budget).unwrap();
        assert_eq!(json, "\"budget\"");
    }

    #[test]
    fn player_field_keys_are_distinct() {
        let keys = [
            PlayerField::FullName,
            PlayerField::Position,
            PlayerField::CurrentClub,
            PlayerField::Bio,
            PlayerField::DateOfBirth,
            PlayerField::HeightCm,
            PlayerField::WeightKg,
            PlayerField::PreferredFoot,
            PlayerField::TransferStatus,
            PlayerField::MarketValue,
            PlayerField::Stats,
            PlayerField::VideoReels,
            PlayerField::AgentContact,
            PlayerField::MedicalHistory,
        ]
        .map(|f| f.key());
        let unique: std::collections::HashSet<_> = keys.iter().collect();
        assert_eq!(unique.len(), keys.len());
    }
}
