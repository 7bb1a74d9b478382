use std::cell::RefCell;

use futures::executor::block_on;
use futures::future::{self, FutureExt};

use super::*;
use crate::contact::validate::{EMAIL_INVALID, Field, MESSAGE_TOO_SHORT, NAME_REQUIRED};
use crate::surface::MemorySurface;

// =============================================================
// Helpers
// =============================================================

/// Sender that resolves immediately with a fixed result and records calls.
struct FakeSender {
    fail_with: Option<String>,
    sent: RefCell<Vec<(EmailConfig, TemplateParams)>>,
}

impl FakeSender {
    fn ok() -> Self {
        Self {
            fail_with: None,
            sent: RefCell::new(Vec::new()),
        }
    }

    fn failing(reason: &str) -> Self {
        Self {
            fail_with: Some(reason.to_owned()),
            sent: RefCell::new(Vec::new()),
        }
    }
}

impl EmailSender for FakeSender {
    fn init(&self, _public_key: &str) {}

    fn send(&self, config: &EmailConfig, params: &TemplateParams) -> LocalBoxFuture<'static, Result<(), SendError>> {
        self.sent.borrow_mut().push((config.clone(), params.clone()));
        let result = match &self.fail_with {
            None => Ok(()),
            Some(reason) => Err(SendError::Rejected(reason.clone())),
        };
        future::ready(result).boxed_local()
    }
}

fn config() -> EmailConfig {
    EmailConfig {
        service_id: "service_1".to_owned(),
        template_id: "template_1".to_owned(),
        public_key: "pk_live".to_owned(),
    }
}

fn valid_fields() -> FormFields {
    FormFields {
        name: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        message: "I would like to talk about a project.".to_owned(),
    }
}

fn submit(surface: &mut MemorySurface, config: Option<EmailConfig>, sender: Option<&FakeSender>) -> SubmitOutcome {
    let fields = surface.fields.clone();
    block_on(run(&fields, config, sender, StatusTimings::default(), surface))
}

// =============================================================
// plan / finish
// =============================================================

#[test]
fn plan_halts_invalid_before_checking_config() {
    let fields = FormFields::default();
    match plan(&fields, true, StatusTimings::default()) {
        SubmitPlan::Halt { outcome, .. } => assert_eq!(outcome, SubmitOutcome::Invalid),
        other => panic!("expected halt, got {other:?}"),
    }
}

#[test]
fn plan_maps_fields_to_template_params() {
    match plan(&valid_fields(), true, StatusTimings::default()) {
        SubmitPlan::Send { params, effects } => {
            assert_eq!(params.from_name, "Ada Lovelace");
            assert_eq!(params.reply_to, "ada@example.com");
            assert_eq!(params.message, "I would like to talk about a project.");
            assert_eq!(
                &effects[3..],
                &[Effect::SetStatus("Sending...".to_owned()), Effect::SetSubmitDisabled(true)]
            );
        }
        other => panic!("expected send, got {other:?}"),
    }
}

#[test]
fn template_params_serialize_with_template_keys() {
    let params = TemplateParams::from(&valid_fields());
    let json = serde_json::to_value(&params).expect("params serialize");
    assert_eq!(json["from_name"], "Ada Lovelace");
    assert_eq!(json["reply_to"], "ada@example.com");
    assert!(json.get("message").is_some());
}

#[test]
fn finish_always_reenables_submit() {
    let ok = finish(&Ok(()), StatusTimings::default());
    let err = finish(&Err(SendError::Unavailable), StatusTimings::default());
    assert_eq!(ok.last(), Some(&Effect::SetSubmitDisabled(false)));
    assert_eq!(err.last(), Some(&Effect::SetSubmitDisabled(false)));
}

// =============================================================
// End to end
// =============================================================

#[test]
fn invalid_submission_shows_all_errors_and_clears_status_after_3s() {
    let mut surface = MemorySurface::with_fields(FormFields {
        name: String::new(),
        email: "not-an-email".to_owned(),
        message: "8 chars!".to_owned(),
    });
    let sender = FakeSender::ok();

    let outcome = submit(&mut surface, Some(config()), Some(&sender));

    assert_eq!(outcome, SubmitOutcome::Invalid);
    assert_eq!(surface.field_errors.get(&Field::Name), Some(&NAME_REQUIRED));
    assert_eq!(surface.field_errors.get(&Field::Email), Some(&EMAIL_INVALID));
    assert_eq!(surface.field_errors.get(&Field::Message), Some(&MESSAGE_TOO_SHORT));
    assert_eq!(surface.status, "Please fix the highlighted fields.");
    assert!(sender.sent.borrow().is_empty());

    surface.advance(2999);
    assert_eq!(surface.status, "Please fix the highlighted fields.");
    surface.advance(1);
    assert_eq!(surface.status, "");
}

#[test]
fn fixing_fields_clears_their_errors() {
    let mut surface = MemorySurface::with_fields(FormFields::default());
    submit(&mut surface, None, None);
    assert_eq!(surface.field_errors.len(), 3);

    surface.fields = valid_fields();
    submit(&mut surface, None, None);
    assert!(surface.field_errors.is_empty());
}

#[test]
fn missing_config_shows_persistent_status_and_keeps_form() {
    let mut surface = MemorySurface::with_fields(valid_fields());
    let sender = FakeSender::ok();

    let outcome = submit(&mut surface, None, Some(&sender));

    assert_eq!(outcome, SubmitOutcome::Unconfigured);
    assert_eq!(
        surface.status,
        "Email service not configured. Update data attributes to enable sending."
    );
    assert_eq!(surface.fields, valid_fields());
    assert!(!surface.submit_disabled);
    surface.advance(60_000);
    assert!(!surface.status.is_empty());
}

#[test]
fn missing_sender_is_treated_as_unconfigured() {
    let mut surface = MemorySurface::with_fields(valid_fields());
    let outcome = submit(&mut surface, Some(config()), None);
    assert_eq!(outcome, SubmitOutcome::Unconfigured);
    assert!(surface.status.starts_with("Email service not configured."));
}

#[test]
fn successful_send_runs_full_lifecycle_in_order() {
    let mut surface = MemorySurface::with_fields(valid_fields());
    let sender = FakeSender::ok();

    let outcome = submit(&mut surface, Some(config()), Some(&sender));

    assert_eq!(outcome, SubmitOutcome::Sent);
    let tail: Vec<_> = surface.history.iter().skip(3).cloned().collect();
    assert_eq!(
        tail,
        vec![
            Effect::SetStatus("Sending...".to_owned()),
            Effect::SetSubmitDisabled(true),
            Effect::SetStatus("Thanks! Your message is on its way.".to_owned()),
            Effect::ResetForm,
            Effect::ClearStatusAfter { delay_ms: 4000 },
            Effect::SetSubmitDisabled(false),
        ]
    );
    assert_eq!(surface.fields, FormFields::default());
    assert!(!surface.submit_disabled);

    let sent = sender.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, config());
    assert_eq!(sent[0].1.reply_to, "ada@example.com");
    drop(sent);

    surface.advance(3999);
    assert_eq!(surface.status, "Thanks! Your message is on its way.");
    surface.advance(1);
    assert_eq!(surface.status, "");
}

#[test]
fn failed_send_shows_persistent_retry_and_reenables_submit() {
    let mut surface = MemorySurface::with_fields(valid_fields());
    let sender = FakeSender::failing("network down");

    let outcome = submit(&mut surface, Some(config()), Some(&sender));

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(surface.status, "Something went wrong. Please try again in a moment.");
    assert!(!surface.submit_disabled);
    assert_eq!(surface.fields, valid_fields());
    surface.advance(10_000);
    assert_eq!(surface.status, "Something went wrong. Please try again in a moment.");
}

#[test]
fn stale_invalid_timer_clears_newer_status() {
    let mut surface = MemorySurface::with_fields(FormFields::default());
    submit(&mut surface, None, None);

    surface.advance(1000);
    surface.fields = valid_fields();
    submit(&mut surface, None, None);
    assert!(surface.status.starts_with("Email service not configured."));

    surface.advance(2000);
    assert_eq!(surface.status, "");
}
