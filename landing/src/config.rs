//! Runtime configuration for the landing page.
//!
//! The browser build reads an optional JSON blob from the host page
//! (`<script type="application/json" id="landing-config">`); the prerender CLI
//! reads the same shape from a file. Missing fields fall back to defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Id of the `<script>` element carrying the JSON config in the host page.
pub const CONFIG_ELEMENT_ID: &str = "landing-config";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// Period of the testimonial rotation.
    pub rotation_interval_ms: u64,
    /// Simulated latency of the waitlist acknowledgment.
    pub submit_latency_ms: u64,
    /// Seed for the floating hero decorations.
    pub jitter_seed: u64,
    /// Number of floating circles behind the hero.
    pub floating_circles: usize,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            rotation_interval_ms: 5_000,
            submit_latency_ms: 1_500,
            jitter_seed: 0x00A2_A5EE,
            floating_circles: 6,
        }
    }
}

impl LandingConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()
    }

    /// Read the config blob embedded in the host page, if any.
    ///
    /// Only meaningful in the browser.
    pub fn from_host_page() -> Result<Self, ConfigError> {
        let raw = leptos::prelude::document()
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.rotation_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "rotation_interval_ms",
                reason: "must be greater than zero",
            });
        }
        Ok(self)
    }

    pub fn rotation_interval(&self) -> Duration {
        Duration::from_millis(self.rotation_interval_ms)
    }

    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submit_latency_ms)
    }
}
