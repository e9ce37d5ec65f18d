//! Application settings.

use serde::{Deserialize, Serialize};

/// Persisted theme preference.
///
/// Stored as `"light"` or `"dark"`; an absent key means "follow the system",
/// which currently resolves to the dark palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Light palette.
    Light,
    /// Dark palette.
    Dark,
}

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Theme preference; absent means system default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemePreference>,
    /// Event loop tick rate in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Placeholder text shown in the empty filter input.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_placeholder() -> String {
    "Search".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: None,
            tick_rate_ms: default_tick_rate_ms(),
            placeholder: default_placeholder(),
        }
    }
}
