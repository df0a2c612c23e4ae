// Copyright 2026 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0

//! Helpers for templates and other page scripts.
//!
//! They are exported from the module and also published on `window` as `UI`,
//! `ResponsiveManager` and `TouchHelper`, for inline scripts which can't import.

use std::rc::Rc;

use rollcall_core::format::{self, DATE_FORMAT, FormatValue, LocaleFormat, TIME_FORMAT};
use rollcall_core::forms::LoadingState;
use rollcall_core::{Breakpoint, ResponsiveManager};
use wasm_bindgen::closure::WasmClosure;
use wasm_bindgen::prelude::*;
use web_sys::js_sys::{Date, Function, Object, Reflect};
use web_sys::{Element, MouseEvent};

use crate::Result;
use crate::apply::{apply_patch, label_of};
use crate::events::report;
use crate::modern_ui::{add_ripple, validate_field};
use crate::responsive::{SharedManager, is_touch_device};
use crate::util::window;

/// Disables `element` and replaces its content with a spinner.
///
/// Returns a function which puts the original content back.
#[wasm_bindgen(js_name = showLoadingState)]
pub fn show_loading_state(element: &Element) -> Result<Function, JsValue> {
    let loading = LoadingState::new(label_of(element));
    apply_patch(element, &loading.show())?;
    let element = element.clone();
    let hide = Closure::once_into_js(move || {
        report("hide loading state", apply_patch(&element, &loading.hide()));
    });
    Ok(hide.unchecked_into())
}

/// Calls `callback` if the user confirms `message`.
#[wasm_bindgen(js_name = confirmAction)]
pub fn confirm_action(message: &str, callback: &Function) -> Result<(), JsValue> {
    if window().confirm_with_message(message)? {
        callback.call0(&JsValue::NULL)?;
    }
    Ok(())
}

/// Formats anything `Date` accepts as a long US date, e.g. "January 5, 2026".
#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(date: &JsValue) -> Result<String, JsValue> {
    let date = Date::new(date);
    Ok(date.to_locale_date_string(DATE_FORMAT.locale, &options(&DATE_FORMAT)?.into()).into())
}

/// Formats a time of day such as `14:05` as "2:05 PM".
#[wasm_bindgen(js_name = formatTime)]
pub fn format_time(time: &str) -> Result<String, JsValue> {
    let date = Date::new(&JsValue::from_str(&format::time_of_day(time)));
    Ok(date.to_locale_time_string_with_options(TIME_FORMAT.locale, &options(&TIME_FORMAT)?.into()).into())
}

/// Click listener adding a ripple to the element it is attached to.
#[wasm_bindgen(js_name = createRipple)]
pub fn create_ripple(event: &MouseEvent) -> Result<(), JsValue> {
    let button = event
        .current_target()
        .and_then(|target| target.dyn_into::<Element>().ok());
    if let Some(button) = button {
        add_ripple(&button, event)?;
    }
    Ok(())
}

/// Marks `input` valid or invalid, like the built-in form feedback does.
#[wasm_bindgen(js_name = validateInput)]
pub fn validate_input(input: &Element) -> Result<(), JsValue> {
    validate_field(input)?;
    Ok(())
}

fn options(format: &LocaleFormat) -> Result<Object> {
    let options = Object::new();
    for &(name, value) in format.options {
        let value = match value {
            FormatValue::Text(text) => JsValue::from_str(text),
            FormatValue::Flag(flag) => JsValue::from_bool(flag),
        };
        Reflect::set(&options, &JsValue::from_str(name), &value)?;
    }
    Ok(options)
}

/// Publishes `window.UI`.
pub(crate) fn publish_ui() -> Result<()> {
    let ui = Object::new();
    set_function(
        &ui,
        "showLoadingState",
        Closure::<dyn Fn(Element) -> Result<Function, JsValue>>::new(|element: Element| {
            show_loading_state(&element)
        }),
    )?;
    set_function(
        &ui,
        "confirmAction",
        Closure::<dyn Fn(String, Function) -> Result<(), JsValue>>::new(
            |message: String, callback: Function| confirm_action(&message, &callback),
        ),
    )?;
    set_function(
        &ui,
        "formatDate",
        Closure::<dyn Fn(JsValue) -> Result<String, JsValue>>::new(|date: JsValue| {
            format_date(&date)
        }),
    )?;
    set_function(
        &ui,
        "formatTime",
        Closure::<dyn Fn(String) -> Result<String, JsValue>>::new(|time: String| {
            format_time(&time)
        }),
    )?;
    set_function(
        &ui,
        "createRipple",
        Closure::<dyn Fn(MouseEvent) -> Result<(), JsValue>>::new(|event: MouseEvent| {
            create_ripple(&event)
        }),
    )?;
    set_function(
        &ui,
        "validateInput",
        Closure::<dyn Fn(Element) -> Result<(), JsValue>>::new(|input: Element| {
            validate_input(&input)
        }),
    )?;
    Reflect::set(&window(), &JsValue::from_str("UI"), &ui)?;
    Ok(())
}

/// Publishes `window.ResponsiveManager` and `window.TouchHelper`, for debugging
/// from the console.
pub(crate) fn publish_responsive(manager: &SharedManager) -> Result<()> {
    let responsive = Object::new();

    let breakpoints = Object::new();
    for breakpoint in Breakpoint::ALL {
        let min_width = manager.borrow().breakpoints().min_width(breakpoint);
        Reflect::set(
            &breakpoints,
            &JsValue::from_str(breakpoint.name()),
            &JsValue::from(min_width),
        )?;
    }
    Reflect::set(&responsive, &JsValue::from_str("breakpoints"), &breakpoints)?;

    let shared = Rc::clone(manager);
    set_function(
        &responsive,
        "getCurrentBreakpoint",
        Closure::<dyn Fn() -> String>::new(move || {
            shared.borrow().current_breakpoint().name().to_owned()
        }),
    )?;
    let queries: [(&str, fn(&ResponsiveManager) -> bool); 3] = [
        ("isMobile", ResponsiveManager::is_mobile),
        ("isTablet", ResponsiveManager::is_tablet),
        ("isDesktop", ResponsiveManager::is_desktop),
    ];
    for (name, query) in queries {
        let shared = Rc::clone(manager);
        set_function(
            &responsive,
            name,
            Closure::<dyn Fn() -> bool>::new(move || query(&shared.borrow())),
        )?;
    }
    let shared = Rc::clone(manager);
    set_function(
        &responsive,
        "isAtLeast",
        Closure::<dyn Fn(String) -> bool>::new(move |name: String| {
            Breakpoint::from_name(&name)
                .is_some_and(|breakpoint| shared.borrow().is_at_least(breakpoint))
        }),
    )?;

    let touch = Object::new();
    set_function(
        &touch,
        "isTouchDevice",
        Closure::<dyn Fn() -> bool>::new(is_touch_device),
    )?;

    let window = window();
    Reflect::set(&window, &JsValue::from_str("ResponsiveManager"), &responsive)?;
    Reflect::set(&window, &JsValue::from_str("TouchHelper"), &touch)?;
    Ok(())
}

/// Stores `closure` as `object[name]` for the rest of the page's life.
fn set_function<T: ?Sized + WasmClosure>(
    object: &Object,
    name: &str,
    closure: Closure<T>,
) -> Result<()> {
    Reflect::set(object, &JsValue::from_str(name), closure.as_ref())?;
    closure.forget();
    Ok(())
}
