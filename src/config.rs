//! Client Configuration
//!
//! The page supplies its own origin; everything else is fixed.

use std::time::Duration;

/// How long a status message stays visible
pub const STATUS_HIDE_DELAY: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Scheme + host (+ port) the activities API is served from, no trailing slash
    pub api_base: String,
    pub status_hide_delay: Duration,
}

impl ClientConfig {
    pub fn for_origin(origin: &str) -> Self {
        Self {
            api_base: origin.trim_end_matches('/').to_string(),
            ..Default::default()
        }
    }

    /// Config for the page this client was loaded from
    pub fn from_window() -> Option<Self> {
        let origin = web_sys::window()?.location().origin().ok()?;
        Some(Self::for_origin(&origin))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:8000".to_string(),
            status_hide_delay: STATUS_HIDE_DELAY,
        }
    }
}
