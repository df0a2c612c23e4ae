// Copyright 2026 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0

use wasm_bindgen::{JsCast, JsValue, UnwrapThrowExt};
use web_sys::js_sys::Reflect;
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

use crate::{Error, Result};

/// Helper to get the global window
pub(crate) fn window() -> Window {
    web_sys::window().expect_throw("no global `window` exists")
}

/// Helper to get the HTML document
pub(crate) fn document() -> Document {
    window()
        .document()
        .expect_throw("should have a document on window")
}

/// Helper to get the HTML document body element
pub(crate) fn document_body() -> Result<HtmlElement> {
    document().body().ok_or(Error::MissingElement("body"))
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Every element in the document matching `selector`, in document order.
pub(crate) fn query_all(selector: &str) -> Result<Vec<Element>> {
    Ok(elements(document().query_selector_all(selector)?))
}

/// Every descendant of `root` matching `selector`.
pub(crate) fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>> {
    Ok(elements(root.query_selector_all(selector)?))
}

pub(crate) fn query(selector: &str) -> Result<Option<Element>> {
    Ok(document().query_selector(selector)?)
}

/// Whether `element` or one of its ancestors matches `selector`.
pub(crate) fn is_within(element: &Element, selector: &str) -> bool {
    element.closest(selector).ok().flatten().is_some()
}

/// The value of a form field, or an empty string for anything else.
pub(crate) fn field_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<web_sys::HtmlInputElement>() {
        input.value()
    } else if let Some(select) = element.dyn_ref::<web_sys::HtmlSelectElement>() {
        select.value()
    } else if let Some(textarea) = element.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        textarea.value()
    } else {
        String::new()
    }
}

/// The inline value of a style property, empty when unset.
pub(crate) fn inline_style(element: &Element, name: &str) -> String {
    element
        .dyn_ref::<HtmlElement>()
        .and_then(|html| html.style().get_property_value(name).ok())
        .unwrap_or_default()
}

/// Whether a global named `name` exists on `window`.
pub(crate) fn has_global(name: &str) -> bool {
    Reflect::has(&window(), &JsValue::from_str(name)).unwrap_or(false)
}

/// The element an event was dispatched to.
pub(crate) fn event_target(event: &web_sys::Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}
