//! Contact form submission lifecycle.
//!
//! ```text
//! validate ──invalid──▶ "fix the fields" (clears after 3s)
//!    │
//!    ▼
//! config + sender? ──no──▶ "not configured" (persistent)
//!    │
//!    ▼
//! "Sending...", submit disabled ──▶ send().await
//!    ├─ Ok  ──▶ thank-you, reset form, clear after 4s
//!    └─ Err ──▶ generic retry message
//!    then: submit re-enabled
//! ```
//!
//! Status clears are fire-and-forget. A stale clear timer can wipe a newer
//! status message; that race is accepted since status text is advisory.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use futures::future::LocalBoxFuture;
use serde::Serialize;

use super::email_config::EmailConfig;
use super::validate::{FormFields, validate};
use crate::config::StatusTimings;
use crate::consts::{STATUS_FAILED, STATUS_INVALID, STATUS_SENDING, STATUS_SENT, STATUS_UNCONFIGURED};
use crate::effect::{Effect, Surface};

/// Parameters passed to the email template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub reply_to: String,
    pub message: String,
}

impl From<&FormFields> for TemplateParams {
    fn from(fields: &FormFields) -> Self {
        Self {
            from_name: fields.name.clone(),
            reply_to: fields.email.clone(),
            message: fields.message.clone(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SendError {
    #[error("email capability unavailable")]
    Unavailable,
    #[error("send rejected: {0}")]
    Rejected(String),
    #[error("invalid template params: {0}")]
    InvalidParams(String),
}

/// Outbound email capability.
pub trait EmailSender {
    /// One-time setup with the account's public key.
    fn init(&self, public_key: &str);

    /// Send one message. The future owns everything it needs.
    fn send(&self, config: &EmailConfig, params: &TemplateParams) -> LocalBoxFuture<'static, Result<(), SendError>>;
}

/// How a submission attempt ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Invalid,
    Unconfigured,
    Sent,
    Failed,
}

/// The synchronous half of a submission.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitPlan {
    /// Submission stops here.
    Halt { outcome: SubmitOutcome, effects: Vec<Effect> },
    /// Apply `effects`, then send `params`.
    Send { effects: Vec<Effect>, params: TemplateParams },
}

/// Validate the form and decide whether a send can start.
///
/// `can_send` is true when a usable [`EmailConfig`] and an email capability
/// are both present.
#[must_use]
pub fn plan(fields: &FormFields, can_send: bool, timings: StatusTimings) -> SubmitPlan {
    let validation = validate(fields);
    let mut effects = validation.effects();

    if !validation.is_valid() {
        effects.push(Effect::SetStatus(STATUS_INVALID.to_owned()));
        effects.push(Effect::ClearStatusAfter {
            delay_ms: timings.invalid_clear_ms,
        });
        return SubmitPlan::Halt {
            outcome: SubmitOutcome::Invalid,
            effects,
        };
    }

    if !can_send {
        effects.push(Effect::SetStatus(STATUS_UNCONFIGURED.to_owned()));
        return SubmitPlan::Halt {
            outcome: SubmitOutcome::Unconfigured,
            effects,
        };
    }

    effects.push(Effect::SetStatus(STATUS_SENDING.to_owned()));
    effects.push(Effect::SetSubmitDisabled(true));
    SubmitPlan::Send {
        effects,
        params: TemplateParams::from(fields),
    }
}

/// Effects for a completed send. The submit control is always re-enabled.
#[must_use]
pub fn finish(result: &Result<(), SendError>, timings: StatusTimings) -> Vec<Effect> {
    let mut effects = match result {
        Ok(()) => vec![
            Effect::SetStatus(STATUS_SENT.to_owned()),
            Effect::ResetForm,
            Effect::ClearStatusAfter {
                delay_ms: timings.sent_clear_ms,
            },
        ],
        Err(_) => vec![Effect::SetStatus(STATUS_FAILED.to_owned())],
    };
    effects.push(Effect::SetSubmitDisabled(false));
    effects
}

/// Run one submission attempt end to end against `surface`.
pub async fn run<S, E>(
    fields: &FormFields,
    config: Option<EmailConfig>,
    sender: Option<&E>,
    timings: StatusTimings,
    surface: &mut S,
) -> SubmitOutcome
where
    S: Surface + ?Sized,
    E: EmailSender + ?Sized,
{
    let target = sender.zip(config);
    let params = match plan(fields, target.is_some(), timings) {
        SubmitPlan::Halt { outcome, effects } => {
            surface.apply_all(&effects);
            log::info!("contact: submission halted ({outcome:?})");
            return outcome;
        }
        SubmitPlan::Send { effects, params } => {
            surface.apply_all(&effects);
            params
        }
    };
    let Some((sender, config)) = target else {
        return SubmitOutcome::Unconfigured;
    };

    let result = sender.send(&config, &params).await;
    surface.apply_all(&finish(&result, timings));

    match result {
        Ok(()) => {
            log::info!("contact: message sent via service {}", config.service_id);
            SubmitOutcome::Sent
        }
        Err(err) => {
            log::warn!("contact: send failed: {err}");
            SubmitOutcome::Failed
        }
    }
}
