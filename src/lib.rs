//! # portfolio-page
//!
//! Page behavior for a single portfolio site, compiled to WebAssembly: nav
//! menu toggle, persisted light/dark theme, scroll progress, one-shot fade-in
//! reveals, and a validated contact form with an optional email-send
//! integration.
//!
//! Behaviors are plain state machines that turn events into [`effect::Effect`]s.
//! The `browser` feature adds the WASM entry point that binds them to the live
//! document; without it the crate builds natively and is driven through
//! [`surface::MemorySurface`] in tests.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Event dispatch and behavior state |
//! | [`theme`] | Theme preference and the injected preference store |
//! | [`nav`] | Nav menu open/close |
//! | [`scroll`] | Scroll ratio for the `--scroll` property |
//! | [`reveal`] | Per-target fade-in state machine |
//! | [`contact`] | Form validation, email config, submission flow |
//! | [`effect`] | Effect instructions and the `Surface` trait |
//! | [`surface`] | In-memory surface with a virtual clock |
//! | [`config`] | Selectors, timings, and other tunables |
//! | [`consts`] | Default values and status text |

pub mod config;
pub mod consts;
pub mod contact;
pub mod controller;
pub mod effect;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod surface;
pub mod theme;

#[cfg(feature = "browser")]
pub mod browser;
