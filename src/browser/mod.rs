//! Browser entry point: binds the page controller to the live document.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once when the WASM module is instantiated. If the document is still
//! loading, wiring waits for `DOMContentLoaded`. Listeners and observer
//! callbacks live for the lifetime of the page, so their closures are leaked
//! with `forget()` after registration.

pub mod dom;
pub mod emailjs;
pub mod storage;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

use self::dom::DomSurface;
use self::emailjs::EmailJs;
use self::storage::LocalStoragePreferences;
use crate::config::{PageConfig, StatusTimings};
use crate::contact::submit::{self, EmailSender};
use crate::controller::{BootContext, PageController, PageEvent};
use crate::effect::Surface;
use crate::scroll::ScrollMetrics;

const CONFIG_ATTR: &str = "data-page-config";

type Controller = Rc<RefCell<PageController<LocalStoragePreferences>>>;

#[derive(Debug, thiserror::Error)]
pub enum BootError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
}

impl From<BootError> for JsValue {
    fn from(err: BootError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// WASM entry point.
///
/// # Errors
///
/// Returns an error if there is no window or document to bind to.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&err.to_string()));
    }

    let window = web_sys::window().ok_or(BootError::NoWindow)?;
    let document = window.document().ok_or(BootError::NoDocument)?;

    if is_loading(&document) {
        let (win, doc) = (window.clone(), document.clone());
        let on_ready = Closure::once(move || {
            if let Err(err) = boot(&win, &doc) {
                log::error!("page: boot failed: {err}");
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
        on_ready.forget();
        return Ok(());
    }

    boot(&window, &document)?;
    Ok(())
}

fn is_loading(document: &Document) -> bool {
    match js_sys::Reflect::get(document, &JsValue::from_str("readyState")) {
        Ok(state) => state.as_string().as_deref() == Some("loading"),
        Err(_) => false,
    }
}

fn read_config(document: &Document) -> PageConfig {
    let Some(raw) = document.body().and_then(|body| body.get_attribute(CONFIG_ATTR)) else {
        return PageConfig::default();
    };
    match PageConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("page: {err}; using defaults");
            PageConfig::default()
        }
    }
}

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

fn scroll_metrics(document: &Document) -> ScrollMetrics {
    let Some(root) = document.document_element() else {
        return ScrollMetrics::default();
    };
    let mut scroll_top = root.scroll_top();
    if scroll_top == 0 {
        if let Some(body) = document.body() {
            scroll_top = body.scroll_top();
        }
    }
    ScrollMetrics {
        scroll_top: f64::from(scroll_top),
        scroll_height: f64::from(root.scroll_height()),
        client_height: f64::from(root.client_height()),
    }
}

fn viewport_width(window: &Window) -> f64 {
    match window.inner_width() {
        Ok(width) => width.as_f64().unwrap_or(f64::INFINITY),
        Err(_) => f64::INFINITY,
    }
}

fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("page: listen {event} failed: {err:?}");
    }
    closure.forget();
}

fn dispatch(controller: &Controller, surface: &mut DomSurface, event: PageEvent) {
    let effects = controller.borrow_mut().handle(event);
    surface.apply_all(&effects);
}

fn boot(window: &Window, document: &Document) -> Result<(), BootError> {
    let config = read_config(document);
    let mut surface = DomSurface::bind(document, &config.selectors)?;
    let timings = config.timings;
    let link_selector = config.selectors.nav_link.clone();
    let controller: Controller = Rc::new(RefCell::new(PageController::new(
        config,
        LocalStoragePreferences::open(window),
    )));

    let ctx = BootContext {
        year: current_year(),
        scroll: scroll_metrics(document),
        fade_targets: surface.fade_targets().len(),
    };
    let effects = controller.borrow_mut().boot(ctx);
    surface.apply_all(&effects);

    observe_fade_ins(&controller, &surface);
    bind_nav(window, document, &controller, &surface, &link_selector);
    bind_theme(&controller, &surface);
    bind_form(&surface, timings);
    bind_scroll(window, document, &controller, &surface);

    log::info!("page: ready");
    Ok(())
}

fn observe_fade_ins(controller: &Controller, surface: &DomSurface) {
    if surface.fade_targets().is_empty() {
        return;
    }
    let threshold = controller.borrow().config().reveal_threshold;
    let handler_controller = Rc::clone(controller);
    let mut handler_surface = surface.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = handler_surface.fade_index(&target) else {
                    continue;
                };
                let effects = handler_controller.borrow_mut().handle(PageEvent::Intersection {
                    target: index,
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                });
                if !effects.is_empty() {
                    observer.unobserve(&target);
                }
                handler_surface.apply_all(&effects);
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            for target in surface.fade_targets() {
                observer.observe(target);
            }
        }
        Err(err) => log::warn!("page: IntersectionObserver unavailable: {err:?}"),
    }
    callback.forget();
}

fn bind_nav(window: &Window, document: &Document, controller: &Controller, surface: &DomSurface, link_selector: &str) {
    if let Some(toggle) = surface.nav_toggle() {
        let controller = Rc::clone(controller);
        let mut surface = surface.clone();
        listen(toggle, "click", move |_| {
            dispatch(&controller, &mut surface, PageEvent::NavToggleClicked);
        });
    }

    for link in dom::query_all(document, link_selector) {
        let controller = Rc::clone(controller);
        let mut surface = surface.clone();
        let window = window.clone();
        listen(&link, "click", move |_| {
            let width = viewport_width(&window);
            dispatch(&controller, &mut surface, PageEvent::NavLinkClicked { viewport_width: width });
        });
    }
}

fn bind_theme(controller: &Controller, surface: &DomSurface) {
    let Some(toggle) = surface.theme_toggle() else {
        return;
    };
    let controller = Rc::clone(controller);
    let mut handler_surface = surface.clone();
    listen(toggle, "click", move |_| {
        dispatch(&controller, &mut handler_surface, PageEvent::ThemeToggleClicked);
    });
}

fn bind_form(surface: &DomSurface, timings: StatusTimings) {
    let Some(form) = surface.form() else {
        return;
    };
    if let (Some(config), Some(sender)) = (surface.email_config(), EmailJs::detect()) {
        sender.init(&config.public_key);
    }

    let handler_surface = surface.clone();
    listen(form, "submit", move |event: Event| {
        event.prevent_default();
        let fields = handler_surface.read_fields();
        let config = handler_surface.email_config();
        let mut surface = handler_surface.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let sender = EmailJs::detect();
            let outcome = submit::run(&fields, config, sender.as_ref(), timings, &mut surface).await;
            log::debug!("page: submission finished ({outcome:?})");
        });
    });
}

fn bind_scroll(window: &Window, document: &Document, controller: &Controller, surface: &DomSurface) {
    let controller = Rc::clone(controller);
    let mut handler_surface = surface.clone();
    let document = document.clone();
    let closure = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
        dispatch(&controller, &mut handler_surface, PageEvent::Scrolled(scroll_metrics(&document)));
    });

    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    if let Err(err) = window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        closure.as_ref().unchecked_ref(),
        &options,
    ) {
        log::warn!("page: listen scroll failed: {err:?}");
    }
    closure.forget();
}
