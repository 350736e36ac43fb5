//! Policy engine facade
//!
//! [`PolicyEngine`] owns the five decision tables and is the single entry
//! point UI surfaces call into. It is built once, validated at
//! construction, and immutable afterwards: no interior mutability, no
//! locks, no I/O. Concurrent callers need no coordination, and a
//! deployment that wants to reconfigure at runtime must build a fresh
//! engine and swap the shared reference atomically rather than mutate in
//! place.

use crate::actions::ActionTable;
use crate::config::PolicyConfig;
use crate::discover::DiscoverTabPolicy;
use crate::error::{PolicyConfigError, Result};
use crate::quota::ContactQuota;
use crate::status::StatusRegistry;
use crate::visibility::VisibilityMatrix;
use pitchlink_types::{Action, DiscoverTab, ProfileField, Role, StatusConfig};
use std::collections::HashSet;
use std::sync::OnceLock;
use tracing::{info, trace, warn};

/// The access policy engine.
#[derive(Clone, Debug)]
pub struct PolicyEngine {
    visibility: VisibilityMatrix,
    actions: ActionTable,
    quota: ContactQuota,
    statuses: StatusRegistry,
    discover: DiscoverTabPolicy,
}

impl PolicyEngine {
    /// Build an engine from the builtin product tables.
    pub fn with_defaults() -> Self {
        Self::from_config(PolicyConfig::builtin()).expect("builtin policy tables are valid")
    }

    /// Build an engine from static configuration, validating it.
    ///
    /// A role with an empty or missing discover-tab list is a
    /// configuration defect and is rejected here; a role with no contact
    /// limit gets a ceiling of 0 with a warning, since a zero ceiling is
    /// a valid product state.
    pub fn from_config(config: PolicyConfig) -> Result<Self> {
        for role in Role::ALL {
            match config.discover_tabs.get(&role) {
                None => return Err(PolicyConfigError::EmptyDiscoverTabs { role }),
                Some(tabs) if tabs.is_empty() => {
                    return Err(PolicyConfigError::EmptyDiscoverTabs { role })
                }
                Some(tabs) => {
                    let mut seen = HashSet::new();
                    for tab in tabs {
                        if !seen.insert(tab) {
                            return Err(PolicyConfigError::DuplicateDiscoverTab {
                                role,
                                tab: *tab,
                            });
                        }
                    }
                }
            }

            if !config.contact_limits.contains_key(&role) {
                warn!(
                    role = %role,
                    "no contact request limit configured, ceiling defaults to 0"
                );
            }
        }

        info!(
            blanket_rules = config.blanket_rules.len(),
            field_rules = config.field_rules.len(),
            action_grants = config.action_grants.len(),
            statuses = config.statuses.len(),
            "policy engine constructed"
        );

        Ok(Self {
            visibility: VisibilityMatrix::from_rules(&config.blanket_rules, &config.field_rules),
            actions: ActionTable::from_grants(&config.action_grants),
            quota: ContactQuota::from_limits(config.contact_limits),
            statuses: StatusRegistry::from_entries(config.statuses),
            discover: DiscoverTabPolicy::from_tabs(config.discover_tabs),
        })
    }

    /// Process-wide engine built from the builtin tables, constructed on
    /// first use and immutable thereafter.
    pub fn global() -> &'static PolicyEngine {
        static GLOBAL: OnceLock<PolicyEngine> = OnceLock::new();
        GLOBAL.get_or_init(PolicyEngine::with_defaults)
    }

    /// May a third-party `viewer` see `field` on a profile owned by
    /// `owner`?
    ///
    /// Self-views must be short-circuited by the caller before asking;
    /// the engine always assumes a third-party viewer. Called many times
    /// per render, so the decision is logged at trace level only.
    pub fn can_view_field(&self, viewer: Role, owner: Role, field: &str) -> bool {
        let allowed = self.visibility.can_view(viewer, owner, field);
        trace!(viewer = %viewer, owner = %owner, field, allowed, "field visibility decision");
        allowed
    }

    /// Typed variant of [`can_view_field`](Self::can_view_field).
    pub fn can_view<F: ProfileField>(&self, viewer: Role, field: F) -> bool {
        self.can_view_field(viewer, F::OWNER, field.key())
    }

    /// May `role` perform the action named `action`?
    pub fn can_perform_action(&self, role: Role, action: &str) -> bool {
        let allowed = self.actions.can_perform(role, action);
        trace!(role = %role, action, allowed, "action permission decision");
        allowed
    }

    /// Typed variant of [`can_perform_action`](Self::can_perform_action).
    pub fn can_perform(&self, role: Role, action: Action) -> bool {
        self.can_perform_action(role, action.as_str())
    }

    /// The ceiling on outstanding outbound contact requests for `role`.
    pub fn contact_request_limit(&self, role: Role) -> u32 {
        self.quota.limit_for(role)
    }

    /// Remaining contact request allowance given an externally tracked
    /// sent count, clamped to zero.
    pub fn remaining_contact_requests(&self, role: Role, sent: u32) -> u32 {
        self.quota.remaining(role, sent)
    }

    /// Display configuration for a status code, with the slate fallback
    /// for unknown codes.
    pub fn status_config(&self, code: &str) -> StatusConfig {
        self.statuses.config_for(code)
    }

    /// The directory categories `role` may browse, in presentation order.
    pub fn discover_tabs(&self, role: Role) -> &[DiscoverTab] {
        self.discover.tabs_for(role)
    }
}

impl Default for PolicyEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}
