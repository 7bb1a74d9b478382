use super::*;

fn fields(name: &str, email: &str, message: &str) -> FormFields {
    FormFields {
        name: name.to_owned(),
        email: email.to_owned(),
        message: message.to_owned(),
    }
}

// =============================================================
// Email pattern
// =============================================================

#[test]
fn simple_address_is_valid() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("jane.doe+news@mail.example.org"));
}

#[test]
fn missing_dot_is_invalid() {
    assert!(!is_valid_email("a@b"));
}

#[test]
fn plain_string_is_invalid() {
    assert!(!is_valid_email("plainstring"));
}

#[test]
fn double_at_is_invalid() {
    assert!(!is_valid_email("a@@b.co"));
    assert!(!is_valid_email("a@b@c.co"));
}

#[test]
fn whitespace_anywhere_is_invalid() {
    assert!(!is_valid_email(" a@b.co"));
    assert!(!is_valid_email("a b@c.co"));
    assert!(!is_valid_email("a@b.co "));
}

#[test]
fn dot_must_have_text_on_both_sides() {
    assert!(!is_valid_email("a@.co"));
    assert!(!is_valid_email("a@b."));
    assert!(is_valid_email("a@b.c."));
}

// =============================================================
// Field checks
// =============================================================

#[test]
fn whitespace_only_name_is_required() {
    assert_eq!(check(Field::Name, "   \t"), Err(NAME_REQUIRED));
    assert_eq!(check(Field::Name, " Ada "), Ok(()));
}

#[test]
fn message_length_boundary() {
    assert_eq!(check(Field::Message, "  123456789  "), Err(MESSAGE_TOO_SHORT));
    assert_eq!(check(Field::Message, "  1234567890  "), Ok(()));
}

#[test]
fn message_length_counts_characters() {
    assert_eq!(check(Field::Message, "héllo wörld"), Ok(()));
    assert_eq!(check(Field::Message, "ééééééééé"), Err(MESSAGE_TOO_SHORT));
}

// =============================================================
// validate
// =============================================================

#[test]
fn all_failures_surface_together_in_order() {
    let result = validate(&fields("", "nope", "short msg"));
    assert!(!result.is_valid());
    let errors: Vec<_> = result.errors().collect();
    assert_eq!(
        errors,
        vec![
            (Field::Name, NAME_REQUIRED),
            (Field::Email, EMAIL_INVALID),
            (Field::Message, MESSAGE_TOO_SHORT),
        ]
    );
}

#[test]
fn effects_clear_valid_fields_and_mark_invalid_ones() {
    let result = validate(&fields("Ada", "bad", "a long enough message"));
    assert_eq!(
        result.effects(),
        vec![
            Effect::ClearFieldError(Field::Name),
            Effect::ShowFieldError { field: Field::Email, message: EMAIL_INVALID },
            Effect::ClearFieldError(Field::Message),
        ]
    );
}

#[test]
fn valid_form_has_no_errors() {
    let result = validate(&fields("Ada", "ada@example.com", "Hello there, nice site!"));
    assert!(result.is_valid());
    assert_eq!(result.errors().count(), 0);
}

#[test]
fn field_ids_match_markup() {
    let ids: Vec<_> = Field::ALL.iter().map(|f| f.id()).collect();
    assert_eq!(ids, vec!["name", "email", "message"]);
}
