// Copyright 2026 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0

//! Bindings to the parts of Bootstrap's JavaScript the pages rely on.
//!
//! Bootstrap is loaded by the base template from a CDN, so it may be missing;
//! every constructor catches the resulting `ReferenceError`.

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::util::has_global;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub(crate) type Tooltip;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    pub(crate) fn new(element: &Element) -> Result<Tooltip, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub(crate) type Toast;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    pub(crate) fn new(element: &Element) -> Result<Toast, JsValue>;

    #[wasm_bindgen(method)]
    pub(crate) fn show(this: &Toast);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub(crate) type Alert;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    pub(crate) fn new(element: &Element) -> Result<Alert, JsValue>;

    #[wasm_bindgen(method)]
    pub(crate) fn close(this: &Alert);
}

/// Whether the page loaded Bootstrap's bundle.
pub(crate) fn is_loaded() -> bool {
    has_global("bootstrap")
}
