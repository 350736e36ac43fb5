//! Capability actions
//!
//! An action gates a capability of the viewing role itself, independent of
//! any specific profile instance. Contrast with fields, which gate a datum
//! of a particular profile.

use serde::{Deserialize, Serialize};

/// A named capability a role may or may not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Maintain a shortlist of saved profiles.
    CreateShortlist,

    /// Attach private notes to a profile, visible only to the author.
    AddPrivateNotes,

    /// Open an outbound contact request (quota-limited).
    SendContactRequest,

    /// Publish a job vacancy in the directory.
    PostVacancy,

    /// Publicly endorse a player's abilities.
    EndorsePlayer,
}

impl Action {
    /// The action identifier as used in rule tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::CreateShortlist => "create_shortlist",
            Action::AddPrivateNotes => "add_private_notes",
            Action::SendContactRequest => "send_contact_request",
            Action::PostVacancy => "post_vacancy",
            Action::EndorsePlayer => "endorse_player",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
