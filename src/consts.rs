//! Shared constants for the page controller.

// ── Theme ───────────────────────────────────────────────────────

/// Storage key holding the persisted theme preference.
pub const THEME_STORAGE_KEY: &str = "ct-portfolio-theme";

// ── Navigation ──────────────────────────────────────────────────

/// Viewport width (CSS px) at or below which nav links close the menu.
pub const NAV_BREAKPOINT_PX: f64 = 768.0;

// ── Reveal ──────────────────────────────────────────────────────

/// Fraction of a fade-in target that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.2;

// ── Contact form ────────────────────────────────────────────────

/// Minimum trimmed message length, in characters.
pub const MIN_MESSAGE_CHARS: usize = 10;

/// Delay before the "fix the highlighted fields" status clears.
pub const INVALID_STATUS_CLEAR_MS: u32 = 3000;

/// Delay before the thank-you status clears.
pub const SENT_STATUS_CLEAR_MS: u32 = 4000;

/// Substring marking an email public key that was never filled in.
pub const EMAIL_KEY_PLACEHOLDER: &str = "PUBLIC_KEY";

// ── Status text ─────────────────────────────────────────────────

pub const STATUS_INVALID: &str = "Please fix the highlighted fields.";
pub const STATUS_UNCONFIGURED: &str = "Email service not configured. Update data attributes to enable sending.";
pub const STATUS_SENDING: &str = "Sending...";
pub const STATUS_SENT: &str = "Thanks! Your message is on its way.";
pub const STATUS_FAILED: &str = "Something went wrong. Please try again in a moment.";
