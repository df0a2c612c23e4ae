// Copyright 2026 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{AddEventListenerOptions, EventTarget};

use crate::Result;

/// Attaches `handler` to `event` on `target` for the rest of the page's life.
///
/// The event type `E` should inherit from [`web_sys::Event`]; it is cast unchecked.
pub(crate) fn listen<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    add_listener(target, event, false, handler)
}

/// Like [`listen`], but the handler can't call `prevent_default`, which keeps
/// touch scrolling smooth.
pub(crate) fn listen_passive<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    add_listener(target, event, true, handler)
}

fn add_listener<E, F>(
    target: &EventTarget,
    event: &str,
    passive: bool,
    mut handler: F,
) -> Result<()>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        handler(event.unchecked_into::<E>());
    });

    let options = AddEventListenerOptions::new();
    options.set_passive(passive);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        callback.as_ref().unchecked_ref(),
        &options,
    )?;
    // Listeners are never removed; the page owns them until it unloads.
    callback.forget();
    Ok(())
}

/// Logs a failed event handler, which has nowhere to return its error to.
pub(crate) fn report(context: &'static str, result: Result<()>) {
    if let Err(err) = result {
        tracing::warn!(%err, context, "event handler failed");
    }
}
