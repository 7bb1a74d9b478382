//! Email-send configuration read from the contact form's data attributes.

#[cfg(test)]
#[path = "email_config_test.rs"]
mod email_config_test;

use crate::consts::EMAIL_KEY_PLACEHOLDER;

pub const SERVICE_ATTR: &str = "data-email-service";
pub const TEMPLATE_ATTR: &str = "data-email-template";
pub const KEY_ATTR: &str = "data-email-key";

/// Service, template, and public key needed to send a message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl EmailConfig {
    /// Build a config from raw attribute values.
    ///
    /// Returns `None` if any value is missing or empty, or if the key still
    /// contains the template placeholder.
    #[must_use]
    pub fn from_attributes(service_id: Option<&str>, template_id: Option<&str>, public_key: Option<&str>) -> Option<Self> {
        let service_id = service_id.filter(|v| !v.is_empty())?;
        let template_id = template_id.filter(|v| !v.is_empty())?;
        let public_key = public_key.filter(|v| !v.is_empty())?;
        if public_key.contains(EMAIL_KEY_PLACEHOLDER) {
            log::debug!("email config: public key is still a placeholder");
            return None;
        }
        Some(Self {
            service_id: service_id.to_owned(),
            template_id: template_id.to_owned(),
            public_key: public_key.to_owned(),
        })
    }
}
