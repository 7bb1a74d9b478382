//! Contact form: validation, email configuration, and the submission flow.
//!
//! DESIGN
//! ======
//! Validation and configuration checks are pure. The submission runner is
//! the only async code in the crate: it awaits one [`submit::EmailSender`]
//! call and writes every outcome to the status line through a
//! [`crate::effect::Surface`]. No failure escapes as an error.

pub mod email_config;
pub mod submit;
pub mod validate;
