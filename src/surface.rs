//! In-memory [`Surface`] with a virtual clock.
//!
//! Mirrors the page state the browser binding would write to the DOM, keeps
//! a history of every applied effect, and runs status-clear timers when the
//! clock is advanced. Used to drive page behaviors without a browser.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use std::collections::{BTreeMap, BTreeSet};

use crate::contact::validate::{Field, FormFields};
use crate::effect::{Effect, Surface};
use crate::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingClear {
    due_ms: u64,
}

#[derive(Clone, Debug, Default)]
pub struct MemorySurface {
    pub theme: Option<Theme>,
    pub theme_pressed: Option<bool>,
    pub nav_open: bool,
    pub scroll_progress: Option<f64>,
    pub revealed: BTreeSet<usize>,
    pub year: Option<u32>,
    pub field_errors: BTreeMap<Field, &'static str>,
    pub fields: FormFields,
    pub status: String,
    pub submit_disabled: bool,
    /// Every effect applied so far, including timer-driven clears.
    pub history: Vec<Effect>,
    now_ms: u64,
    timers: Vec<PendingClear>,
}

impl MemorySurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A surface whose form already holds `fields`.
    #[must_use]
    pub fn with_fields(fields: FormFields) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Whether `field` currently carries the invalid marker.
    #[must_use]
    pub fn is_invalid(&self, field: Field) -> bool {
        self.field_errors.contains_key(&field)
    }

    /// Move the clock forward by `ms`, firing due timers in order.
    pub fn advance(&mut self, ms: u64) {
        let target = self.now_ms.saturating_add(ms);
        while let Some(index) = self.next_due(target) {
            let timer = self.timers.remove(index);
            self.now_ms = timer.due_ms;
            self.apply(&Effect::SetStatus(String::new()));
        }
        self.now_ms = target;
    }

    fn next_due(&self, target: u64) -> Option<usize> {
        self.timers
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due_ms <= target)
            .min_by_key(|(_, timer)| timer.due_ms)
            .map(|(index, _)| index)
    }
}

impl Surface for MemorySurface {
    fn apply(&mut self, effect: &Effect) {
        match effect {
            Effect::SetTheme(theme) => self.theme = Some(*theme),
            Effect::SetThemePressed(pressed) => self.theme_pressed = Some(*pressed),
            Effect::SetNavOpen(open) => self.nav_open = *open,
            Effect::SetScrollProgress(ratio) => self.scroll_progress = Some(*ratio),
            Effect::Reveal(index) => {
                self.revealed.insert(*index);
            }
            Effect::SetYear(year) => self.year = Some(*year),
            Effect::ShowFieldError { field, message } => {
                self.field_errors.insert(*field, *message);
            }
            Effect::ClearFieldError(field) => {
                self.field_errors.remove(field);
            }
            Effect::SetStatus(text) => self.status.clone_from(text),
            Effect::ClearStatusAfter { delay_ms } => self.timers.push(PendingClear {
                due_ms: self.now_ms + u64::from(*delay_ms),
            }),
            Effect::SetSubmitDisabled(disabled) => self.submit_disabled = *disabled,
            Effect::ResetForm => self.fields = FormFields::default(),
        }
        self.history.push(effect.clone());
    }
}
