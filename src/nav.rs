//! Navigation menu open/close state.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::effect::Effect;

/// Collapsible nav menu. `open` drives both the link list's `open` marker
/// and the toggle's `active` marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    pub open: bool,
}

impl NavMenu {
    /// Flip the menu open or closed.
    pub fn toggle(&mut self) -> Vec<Effect> {
        self.open = !self.open;
        vec![Effect::SetNavOpen(self.open)]
    }

    /// Close the menu after a link click, but only on narrow viewports where
    /// the menu is an overlay. Wider viewports never collapse the menu.
    pub fn close_on_link_click(&mut self, viewport_width: f64, breakpoint_px: f64) -> Vec<Effect> {
        if viewport_width > breakpoint_px {
            return Vec::new();
        }
        self.open = false;
        vec![Effect::SetNavOpen(false)]
    }
}
