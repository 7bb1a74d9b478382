//! Page configuration: storage key, breakpoints, timings, and selectors.
//!
//! Every field has a default, so a host page only needs to override what
//! differs from the stock markup. The browser entry reads an optional JSON
//! override from the `<body data-page-config="...">` attribute.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    INVALID_STATUS_CLEAR_MS, NAV_BREAKPOINT_PX, REVEAL_THRESHOLD, SENT_STATUS_CLEAR_MS, THEME_STORAGE_KEY,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid page config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Tunables for every page behavior.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub storage_key: String,
    pub nav_breakpoint_px: f64,
    pub reveal_threshold: f64,
    pub timings: StatusTimings,
    pub selectors: Selectors,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: THEME_STORAGE_KEY.to_owned(),
            nav_breakpoint_px: NAV_BREAKPOINT_PX,
            reveal_threshold: REVEAL_THRESHOLD,
            timings: StatusTimings::default(),
            selectors: Selectors::default(),
        }
    }
}

impl PageConfig {
    /// Parse a JSON override. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if `raw` is not a valid config object.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Auto-clear delays for advisory status messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StatusTimings {
    pub invalid_clear_ms: u32,
    pub sent_clear_ms: u32,
}

impl Default for StatusTimings {
    fn default() -> Self {
        Self {
            invalid_clear_ms: INVALID_STATUS_CLEAR_MS,
            sent_clear_ms: SENT_STATUS_CLEAR_MS,
        }
    }
}

/// CSS selectors for the markup the controller binds to.
///
/// Form-scoped selectors (`name_input`, `submit_button`, ...) are resolved
/// inside the contact form element.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub nav_toggle: String,
    pub nav_links: String,
    pub nav_link: String,
    pub theme_toggle: String,
    pub fade_in: String,
    pub year: String,
    pub contact_form: String,
    pub form_status: String,
    pub name_input: String,
    pub email_input: String,
    pub message_input: String,
    pub submit_button: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            nav_toggle: ".nav-toggle".to_owned(),
            nav_links: ".nav-links".to_owned(),
            nav_link: ".nav-links a".to_owned(),
            theme_toggle: ".theme-toggle".to_owned(),
            fade_in: ".fade-in".to_owned(),
            year: "#year".to_owned(),
            contact_form: ".contact-form".to_owned(),
            form_status: ".form-status".to_owned(),
            name_input: "#name".to_owned(),
            email_input: "#email".to_owned(),
            message_input: "#message".to_owned(),
            submit_button: "button[type=\"submit\"]".to_owned(),
        }
    }
}
