//! Page controller: owns behavior state and maps events to effects.
//!
//! Separated from the browser binding so every behavior can be exercised
//! without WASM. The binding forwards DOM events as [`PageEvent`]s and
//! applies the returned [`Effect`]s; the contact form submission runs through
//! [`crate::contact::submit::run`] instead, since it awaits a send.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::PageConfig;
use crate::effect::Effect;
use crate::nav::NavMenu;
use crate::reveal::RevealTracker;
use crate::scroll::{self, ScrollMetrics};
use crate::theme::{self, PreferenceStore, Theme};

/// Discrete UI events the controller reacts to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PageEvent {
    NavToggleClicked,
    NavLinkClicked { viewport_width: f64 },
    ThemeToggleClicked,
    Scrolled(ScrollMetrics),
    Intersection { target: usize, is_intersecting: bool, ratio: f64 },
}

/// Startup inputs gathered from the environment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BootContext {
    pub year: u32,
    pub scroll: ScrollMetrics,
    pub fade_targets: usize,
}

pub struct PageController<P: PreferenceStore> {
    config: PageConfig,
    store: P,
    theme: Theme,
    nav: NavMenu,
    reveal: RevealTracker,
}

impl<P: PreferenceStore> PageController<P> {
    pub fn new(config: PageConfig, store: P) -> Self {
        let reveal = RevealTracker::new(config.reveal_threshold);
        Self {
            config,
            store,
            theme: Theme::default(),
            nav: NavMenu::default(),
            reveal,
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn nav(&self) -> NavMenu {
        self.nav
    }

    pub fn reveal(&self) -> &RevealTracker {
        &self.reveal
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    /// Initial effects: year, fade-in registration, stored theme, scroll ratio.
    pub fn boot(&mut self, ctx: BootContext) -> Vec<Effect> {
        self.reveal.observe(ctx.fade_targets);
        self.theme = theme::read_preference(&self.store, &self.config.storage_key);
        log::debug!(
            "boot: theme={} fade_targets={}",
            self.theme.as_str(),
            ctx.fade_targets
        );

        let mut effects = vec![Effect::SetYear(ctx.year)];
        effects.extend(theme::apply(self.theme));
        effects.push(scroll::progress(ctx.scroll));
        effects
    }

    pub fn handle(&mut self, event: PageEvent) -> Vec<Effect> {
        match event {
            PageEvent::NavToggleClicked => self.nav.toggle(),
            PageEvent::NavLinkClicked { viewport_width } => self
                .nav
                .close_on_link_click(viewport_width, self.config.nav_breakpoint_px),
            PageEvent::ThemeToggleClicked => {
                let (next, effects) = theme::toggle(self.theme, &mut self.store, &self.config.storage_key);
                self.theme = next;
                effects
            }
            PageEvent::Scrolled(metrics) => vec![scroll::progress(metrics)],
            PageEvent::Intersection {
                target,
                is_intersecting,
                ratio,
            } => self
                .reveal
                .on_intersection(target, is_intersecting, ratio)
                .into_iter()
                .collect(),
        }
    }
}
