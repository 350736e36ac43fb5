//! Error types for policy configuration
//!
//! Runtime lookups are total and never fail; these errors can only arise
//! while building an engine from configuration.

use pitchlink_types::{DiscoverTab, Role};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Policy configuration errors.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyConfigError {
    /// A canonical role has no browsable directory categories.
    #[error("role `{role}` has no discover tabs configured")]
    EmptyDiscoverTabs { role: Role },

    /// A role's tab list names the same category twice.
    #[error("role `{role}` lists discover tab `{tab}` more than once")]
    DuplicateDiscoverTab { role: Role, tab: DiscoverTab },
}

/// Result type for policy configuration.
pub type Result<T> = std::result::Result<T, PolicyConfigError>;
