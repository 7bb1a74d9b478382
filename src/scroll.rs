//! Scroll progress published as the `--scroll` custom property.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::effect::Effect;

/// Snapshot of the document's vertical scroll geometry, in CSS px.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    /// Scroll position as a fraction of the scrollable range, in `[0, 1]`.
    ///
    /// The range is floored at 1px so a page without overflow reports 0.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        let range = (self.scroll_height - self.client_height).max(1.0);
        let ratio = self.scroll_top / range;
        if ratio.is_nan() {
            return 0.0;
        }
        ratio.clamp(0.0, 1.0)
    }
}

/// Effect publishing the current scroll ratio.
#[must_use]
pub fn progress(metrics: ScrollMetrics) -> Effect {
    Effect::SetScrollProgress(metrics.ratio())
}
