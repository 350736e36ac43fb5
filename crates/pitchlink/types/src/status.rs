//! Recruiting/availability status display configuration

use serde::{Deserialize, Serialize};

/// Presentation color category for a status badge.
///
/// Purely presentational; the closed palette keeps badge rendering
/// consistent across surfaces. `Slate` doubles as the neutral fallback for
/// status codes the registry does not recognize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusColor {
    Emerald,
    Amber,
    Blue,
    Violet,
    #[default]
    Slate,
}

/// How a recruiting/availability status code is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusConfig {
    /// Human-readable badge text. Never empty.
    pub label: String,

    /// Badge color category.
    pub color: StatusColor,
}

impl StatusConfig {
    /// Build a status configuration.
    pub fn new(label: impl Into<String>, color: StatusColor) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slate_is_the_default_color() {
        assert_eq!(StatusColor::default(), StatusColor::Slate);
    }

    #[test]
    fn serde_round_trips_status_config() {
        let config = StatusConfig::new("Open to offers", StatusColor::Blue);
        let json = serde_json::to_string(&config).unwrap();
        let back: StatusConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
