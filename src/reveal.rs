//! One-shot fade-in reveal for scroll targets.
//!
//! Each target is an explicit two-state machine. The only transition is
//! `Hidden -> Visible`, taken the first time the target is at least
//! `threshold` visible. The browser binding stops observing a target once
//! it is revealed, but the state here is the source of truth: a late or
//! duplicate intersection report for a visible target is a no-op.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::effect::Effect;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

/// Reveal state for every registered fade-in target, indexed by document order.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealTracker {
    threshold: f64,
    targets: Vec<RevealState>,
}

impl RevealTracker {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            targets: Vec::new(),
        }
    }

    /// Register `count` targets, all hidden. Replaces any earlier registration.
    pub fn observe(&mut self, count: usize) {
        self.targets = vec![RevealState::Hidden; count];
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    #[must_use]
    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.targets.get(index).copied()
    }

    /// Handle an intersection report for target `index`.
    ///
    /// Returns `Some(Effect::Reveal(index))` exactly once per target, on the
    /// first report that is intersecting with `ratio >= threshold`.
    pub fn on_intersection(&mut self, index: usize, is_intersecting: bool, ratio: f64) -> Option<Effect> {
        let state = self.targets.get_mut(index)?;
        if *state == RevealState::Visible || !is_intersecting || ratio < self.threshold {
            return None;
        }
        *state = RevealState::Visible;
        log::debug!("reveal: target {index} visible at ratio {ratio:.2}");
        Some(Effect::Reveal(index))
    }
}
