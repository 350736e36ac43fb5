//! Status registry
//!
//! Maps recruiting/availability status codes to display configuration.
//! Status codes may originate from profile data written before a registry
//! update, so unknown codes resolve to a neutral slate badge that echoes a
//! humanized form of the raw code instead of failing.

use pitchlink_types::{StatusColor, StatusConfig};
use std::collections::HashMap;

/// Status-code → display configuration table.
#[derive(Clone, Debug, Default)]
pub struct StatusRegistry {
    entries: HashMap<String, StatusConfig>,
}

impl StatusRegistry {
    /// Build a registry from configured entries.
    pub fn from_entries(entries: HashMap<String, StatusConfig>) -> Self {
        Self { entries }
    }

    /// Display configuration for `code`.
    ///
    /// Unknown codes yield `{ humanize(code), Slate }`; the label is never
    /// empty.
    pub fn config_for(&self, code: &str) -> StatusConfig {
        match self.entries.get(code) {
            Some(config) => config.clone(),
            None => StatusConfig::new(humanize(code), StatusColor::Slate),
        }
    }
}

/// Turn a raw status code into a readable badge label: separators become
/// spaces and the first letter is capitalized. Blank input yields
/// "Unknown" so the label is always non-empty.
fn humanize(code: &str) -> String {
    let words: Vec<&str> = code
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .collect();

    if words.is_empty() {
        return "Unknown".to_string();
    }

    let joined = words.join(" ");
    let mut chars = joined.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => "Unknown".to_string(),
    }
}
