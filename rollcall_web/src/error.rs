// Copyright 2026 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0

use rollcall_core::SettingsError;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised while installing features or talking to the server.
#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("no element matches `{0}`")]
    MissingElement(&'static str),
    #[error("`{element}` has no `{attribute}`")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },
    #[error("JavaScript exception: {0}")]
    Js(String),
    #[error("request failed: {0}")]
    Http(#[from] gloo_net::Error),
    #[error("server answered with status {0}")]
    Status(u16),
    #[error("settings are not valid JSON: {0}")]
    Settings(#[from] serde_json::Error),
    #[error(transparent)]
    InvalidSettings(#[from] SettingsError),
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        match value.as_string() {
            Some(message) => Self::Js(message),
            None => Self::Js(format!("{value:?}")),
        }
    }
}

impl From<Error> for JsValue {
    fn from(err: Error) -> Self {
        web_sys::js_sys::Error::new(&err.to_string()).into()
    }
}

pub(crate) type Result<T, E = Error> = std::result::Result<T, E>;
