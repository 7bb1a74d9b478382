//! DOM-backed [`Surface`]: element lookup by selector and effect application.
//!
//! Every element is optional. A missing element only disables the behavior
//! that writes to it; failed DOM calls are logged and skipped.

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlFormElement};

use super::BootError;
use crate::config::Selectors;
use crate::contact::email_config::{EmailConfig, KEY_ATTR, SERVICE_ATTR, TEMPLATE_ATTR};
use crate::contact::validate::{Field, FormFields};
use crate::effect::{Effect, Surface};

const ERROR_SLOT: &str = "small";

fn warn_on_err<T>(what: &str, result: Result<T, JsValue>) {
    if let Err(err) = result {
        log::warn!("dom: {what} failed: {err:?}");
    }
}

fn query(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("dom: invalid selector {selector:?}: {err:?}");
            None
        }
    }
}

fn query_within(parent: &Element, selector: &str) -> Option<Element> {
    match parent.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("dom: invalid selector {selector:?}: {err:?}");
            None
        }
    }
}

pub(super) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::warn!("dom: invalid selector {selector:?}: {err:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// Handles to every element the page behaviors write to.
#[derive(Clone)]
pub struct DomSurface {
    selectors: Selectors,
    root: Option<HtmlElement>,
    body: HtmlElement,
    nav_toggle: Option<Element>,
    nav_links: Option<Element>,
    theme_toggle: Option<Element>,
    fade_targets: Vec<Element>,
    year: Option<Element>,
    form: Option<HtmlFormElement>,
    status: Option<Element>,
    submit: Option<Element>,
}

impl DomSurface {
    /// Look up every element named by `selectors`.
    ///
    /// # Errors
    ///
    /// Returns [`BootError::NoBody`] if the document has no `<body>`.
    pub fn bind(document: &Document, selectors: &Selectors) -> Result<Self, BootError> {
        let body = document.body().ok_or(BootError::NoBody)?;
        let root = document
            .document_element()
            .and_then(|el| el.dyn_ref::<HtmlElement>().cloned());
        let form = query(document, &selectors.contact_form).and_then(|el| el.dyn_ref::<HtmlFormElement>().cloned());
        let submit = form
            .as_ref()
            .and_then(|form| query_within(form, &selectors.submit_button));

        let surface = Self {
            root,
            body,
            nav_toggle: query(document, &selectors.nav_toggle),
            nav_links: query(document, &selectors.nav_links),
            theme_toggle: query(document, &selectors.theme_toggle),
            fade_targets: query_all(document, &selectors.fade_in),
            year: query(document, &selectors.year),
            form,
            status: query(document, &selectors.form_status),
            submit,
            selectors: selectors.clone(),
        };
        log::debug!(
            "dom: bound nav_toggle={} theme_toggle={} form={} fade_targets={}",
            surface.nav_toggle.is_some(),
            surface.theme_toggle.is_some(),
            surface.form.is_some(),
            surface.fade_targets.len()
        );
        Ok(surface)
    }

    pub fn nav_toggle(&self) -> Option<&Element> {
        self.nav_toggle.as_ref()
    }

    pub fn theme_toggle(&self) -> Option<&Element> {
        self.theme_toggle.as_ref()
    }

    pub fn form(&self) -> Option<&HtmlFormElement> {
        self.form.as_ref()
    }

    pub fn fade_targets(&self) -> &[Element] {
        &self.fade_targets
    }

    /// Document-order index of a fade-in target.
    pub fn fade_index(&self, element: &Element) -> Option<usize> {
        self.fade_targets.iter().position(|target| target == element)
    }

    fn field_input(&self, field: Field) -> Option<Element> {
        let selector = match field {
            Field::Name => &self.selectors.name_input,
            Field::Email => &self.selectors.email_input,
            Field::Message => &self.selectors.message_input,
        };
        query_within(self.form.as_ref()?, selector)
    }

    fn field_value(&self, field: Field) -> String {
        let Some(input) = self.field_input(field) else {
            return String::new();
        };
        match js_sys::Reflect::get(&input, &JsValue::from_str("value")) {
            Ok(value) => value.as_string().unwrap_or_default(),
            Err(err) => {
                log::warn!("dom: reading {} failed: {err:?}", field.id());
                String::new()
            }
        }
    }

    /// Current raw values of the three contact inputs.
    pub fn read_fields(&self) -> FormFields {
        FormFields {
            name: self.field_value(Field::Name),
            email: self.field_value(Field::Email),
            message: self.field_value(Field::Message),
        }
    }

    /// Email configuration from the form's data attributes, read fresh.
    pub fn email_config(&self) -> Option<EmailConfig> {
        let form = self.form.as_ref()?;
        EmailConfig::from_attributes(
            form.get_attribute(SERVICE_ATTR).as_deref(),
            form.get_attribute(TEMPLATE_ATTR).as_deref(),
            form.get_attribute(KEY_ATTR).as_deref(),
        )
    }

    fn set_field_error(&self, field: Field, message: &str) {
        let Some(input) = self.field_input(field) else {
            return;
        };
        if let Some(slot) = input
            .parent_element()
            .and_then(|parent| query_within(&parent, ERROR_SLOT))
        {
            slot.set_text_content(Some(message));
        }
        warn_on_err(
            "toggle invalid marker",
            input.class_list().toggle_with_force("invalid", !message.is_empty()),
        );
    }

    fn set_status(&self, text: &str) {
        if let Some(status) = &self.status {
            status.set_text_content(Some(text));
        }
    }
}

impl Surface for DomSurface {
    fn apply(&mut self, effect: &Effect) {
        match effect {
            Effect::SetTheme(theme) => {
                warn_on_err("set data-theme", self.body.set_attribute("data-theme", theme.as_str()));
            }
            Effect::SetThemePressed(pressed) => {
                if let Some(toggle) = &self.theme_toggle {
                    let value = if *pressed { "true" } else { "false" };
                    warn_on_err("set aria-pressed", toggle.set_attribute("aria-pressed", value));
                }
            }
            Effect::SetNavOpen(open) => {
                if let Some(links) = &self.nav_links {
                    warn_on_err("toggle nav open", links.class_list().toggle_with_force("open", *open));
                }
                if let Some(toggle) = &self.nav_toggle {
                    warn_on_err("toggle nav active", toggle.class_list().toggle_with_force("active", *open));
                }
            }
            Effect::SetScrollProgress(ratio) => {
                if let Some(root) = &self.root {
                    warn_on_err("set --scroll", root.style().set_property("--scroll", &ratio.to_string()));
                }
            }
            Effect::Reveal(index) => {
                if let Some(target) = self.fade_targets.get(*index) {
                    warn_on_err("add visible", target.class_list().add_1("visible"));
                }
            }
            Effect::SetYear(year) => {
                if let Some(el) = &self.year {
                    el.set_text_content(Some(&year.to_string()));
                }
            }
            Effect::ShowFieldError { field, message } => self.set_field_error(*field, message),
            Effect::ClearFieldError(field) => self.set_field_error(*field, ""),
            Effect::SetStatus(text) => self.set_status(text),
            Effect::ClearStatusAfter { delay_ms } => {
                if let Some(status) = self.status.clone() {
                    Timeout::new(*delay_ms, move || status.set_text_content(Some(""))).forget();
                }
            }
            Effect::SetSubmitDisabled(disabled) => {
                if let Some(submit) = &self.submit {
                    warn_on_err("toggle disabled", submit.toggle_attribute_with_force("disabled", *disabled));
                }
            }
            Effect::ResetForm => {
                if let Some(form) = &self.form {
                    form.reset();
                }
            }
        }
    }
}
