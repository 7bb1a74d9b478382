//! [`EmailSender`] backed by the page's global `emailjs` client.
//!
//! The client is looked up on `globalThis` each time it is needed, so a
//! script that loads late is still picked up by the next submission.

use futures::future::{FutureExt, LocalBoxFuture};
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::contact::email_config::EmailConfig;
use crate::contact::submit::{EmailSender, SendError, TemplateParams};

const GLOBAL_NAME: &str = "emailjs";

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

pub struct EmailJs {
    client: JsValue,
}

impl EmailJs {
    /// The global client, if one is defined right now.
    pub fn detect() -> Option<Self> {
        match Reflect::get(&js_sys::global(), &JsValue::from_str(GLOBAL_NAME)) {
            Ok(client) if !client.is_undefined() && !client.is_null() => Some(Self { client }),
            Ok(_) => None,
            Err(err) => {
                log::warn!("emailjs: global lookup failed: {}", describe(&err));
                None
            }
        }
    }

    fn method(&self, name: &str) -> Result<Function, SendError> {
        let value = Reflect::get(&self.client, &JsValue::from_str(name)).map_err(|err| SendError::Rejected(describe(&err)))?;
        value.dyn_into::<Function>().map_err(|_| SendError::Unavailable)
    }

    fn start_send(&self, config: &EmailConfig, params: &TemplateParams) -> Result<Promise, SendError> {
        let send = self.method("send")?;
        let json = serde_json::to_string(params).map_err(|err| SendError::InvalidParams(err.to_string()))?;
        let params = js_sys::JSON::parse(&json).map_err(|err| SendError::InvalidParams(describe(&err)))?;
        let pending = send
            .call3(
                &self.client,
                &JsValue::from_str(&config.service_id),
                &JsValue::from_str(&config.template_id),
                &params,
            )
            .map_err(|err| SendError::Rejected(describe(&err)))?;
        pending
            .dyn_into::<Promise>()
            .map_err(|_| SendError::Rejected("send did not return a promise".to_owned()))
    }
}

impl EmailSender for EmailJs {
    fn init(&self, public_key: &str) {
        let result = self.method("init").and_then(|init| {
            init.call1(&self.client, &JsValue::from_str(public_key))
                .map_err(|err| SendError::Rejected(describe(&err)))
        });
        match result {
            Ok(_) => log::debug!("emailjs: initialized"),
            Err(err) => log::warn!("emailjs: init failed: {err}"),
        }
    }

    fn send(&self, config: &EmailConfig, params: &TemplateParams) -> LocalBoxFuture<'static, Result<(), SendError>> {
        let started = self.start_send(config, params);
        async move {
            JsFuture::from(started?)
                .await
                .map(|_| ())
                .map_err(|err| SendError::Rejected(describe(&err)))
        }
        .boxed_local()
    }
}
