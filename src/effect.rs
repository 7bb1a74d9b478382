//! Side-effect instructions emitted by the page behaviors.
//!
//! Handlers never touch the DOM directly. They return `Effect`s and a
//! [`Surface`] applies them: the browser binding writes to real elements,
//! [`crate::surface::MemorySurface`] records them for tests.

use crate::contact::validate::Field;
use crate::theme::Theme;

/// One presentation change requested by a handler.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Write the theme marker consumed by the stylesheet.
    SetTheme(Theme),
    /// Reflect "light theme active" on the theme toggle's pressed state.
    SetThemePressed(bool),
    /// Open or close the nav menu; also marks the toggle active/inactive.
    SetNavOpen(bool),
    /// Publish the scroll ratio in `[0, 1]`.
    SetScrollProgress(f64),
    /// Mark fade-in target `index` visible.
    Reveal(usize),
    SetYear(u32),
    ShowFieldError { field: Field, message: &'static str },
    ClearFieldError(Field),
    /// Replace the form status text. An empty string clears it.
    SetStatus(String),
    /// Clear the status text after `delay_ms`. Not cancellable.
    ClearStatusAfter { delay_ms: u32 },
    SetSubmitDisabled(bool),
    /// Reset all form fields to empty.
    ResetForm,
}

/// Presentation layer that effects are applied to.
pub trait Surface {
    fn apply(&mut self, effect: &Effect);

    fn apply_all(&mut self, effects: &[Effect]) {
        for effect in effects {
            self.apply(effect);
        }
    }
}
