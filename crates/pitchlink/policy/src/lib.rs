//! PitchLink Policy - the access policy engine
//!
//! This crate decides, for any pair of (viewing role, profile-owner role),
//! which profile fields are disclosed, which actions a role may perform,
//! how many outbound contact requests a role may issue, how a status code
//! displays, and which directory tabs a role may browse.
//!
//! Every decision table is built once — from the builtin product tables or
//! from deserialized static configuration — and is immutable thereafter.
//! All lookups are pure and total: unrecognized inputs resolve to the
//! documented safe default (deny, slate, zero, empty) rather than an
//! error. Errors exist only at the configuration boundary.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]
#![warn(rust_2018_idioms)]

mod actions;
mod config;
mod discover;
mod engine;
mod error;
mod quota;
mod status;
mod visibility;

pub use actions::{ActionGrant, ActionTable};
pub use config::PolicyConfig;
pub use discover::DiscoverTabPolicy;
pub use engine::PolicyEngine;
pub use error::{PolicyConfigError, Result};
pub use quota::ContactQuota;
pub use status::StatusRegistry;
pub use visibility::{BlanketRule, FieldRule, VisibilityMatrix};
