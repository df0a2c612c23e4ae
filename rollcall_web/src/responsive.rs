// Copyright 2026 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0

//! Keeps the page laid out for the current viewport.
//!
//! All layout decisions go through the page's [`ResponsiveManager`], which is
//! refreshed from `window.innerWidth` on every resize before anything else runs.

use std::cell::RefCell;
use std::rc::Rc;

use rollcall_core::breakpoint::BreakpointTracker;
use rollcall_core::layout::{self, VISIBILITY_RULES};
use rollcall_core::navigation::{self, SHOW_CLASS};
use rollcall_core::table::{self, TableLayout};
use rollcall_core::{Breakpoint, ResponsiveManager, Settings, Viewport};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Object, Reflect};
use web_sys::{
    CustomEvent, CustomEventInit, Element, MutationObserver, MutationObserverInit, MutationRecord,
    TouchEvent,
};

use crate::Result;
use crate::apply::apply_patch;
use crate::events::{listen, listen_passive, report};
use crate::util::{
    document_body, event_target, has_global, query, query_all, query_all_in, window,
};

/// The page's manager, shared by every listener that needs it.
pub(crate) type SharedManager = Rc<RefCell<ResponsiveManager>>;

/// Name of the window event fired when the breakpoint changes.
pub(crate) const BREAKPOINT_CHANGE_EVENT: &str = "breakpointchange";

/// Reads the window size and touch support.
pub(crate) fn viewport() -> Result<Viewport> {
    let width = window().inner_width()?.as_f64().unwrap_or_default();
    Ok(Viewport::new(width).with_touch(is_touch_device()))
}

pub(crate) fn is_touch_device() -> bool {
    has_global("ontouchstart") || window().navigator().max_touch_points() > 0
}

/// Builds the page's manager from the settings and the current window.
pub(crate) fn manager(settings: &Settings) -> Result<SharedManager> {
    let manager = ResponsiveManager::new(settings.breakpoints, viewport()?);
    tracing::debug!(
        breakpoint = %manager.current_breakpoint(),
        touch = manager.is_touch(),
        "responsive manager ready"
    );
    Ok(Rc::new(RefCell::new(manager)))
}

pub(crate) fn install(manager: &SharedManager) -> Result<()> {
    {
        let manager = manager.borrow();
        let body = document_body()?;
        apply_patch(&body, &layout::touch_classes(manager.is_touch()))?;
        apply_patch(&body, &layout::body_classes(&manager))?;
        layout_tables(&manager, table::on_load)?;
        update_visibility(&manager)?;
        size_for_touch(&manager)?;
        optimize_images(&manager)?;
    }
    install_navigation(manager)?;
    install_touch_feedback(manager)?;
    observe_new_content(manager)?;

    let mut tracker = BreakpointTracker::new(&manager.borrow());
    let manager = Rc::clone(manager);
    listen(&window(), "resize", move |_: web_sys::Event| {
        report("resize", on_resize(&manager, &mut tracker));
    })
}

fn on_resize(manager: &SharedManager, tracker: &mut BreakpointTracker) -> Result<()> {
    let viewport = viewport()?;
    manager.borrow_mut().set_viewport(viewport);
    let manager = manager.borrow();

    apply_patch(&document_body()?.into(), &layout::body_classes(&manager))?;
    layout_tables(&manager, table::on_resize)?;
    if let Some(patch) = navigation::on_resize(&manager) {
        if let Some(collapse) = query(navigation::COLLAPSE_SELECTOR)? {
            apply_patch(&collapse, &patch)?;
        }
    }
    update_visibility(&manager)?;
    optimize_images(&manager)?;

    if let Some(breakpoint) = tracker.observe(&manager) {
        dispatch_breakpoint_change(breakpoint)?;
    }
    Ok(())
}

fn dispatch_breakpoint_change(breakpoint: Breakpoint) -> Result<()> {
    let detail = Object::new();
    Reflect::set(
        &detail,
        &JsValue::from_str("breakpoint"),
        &JsValue::from_str(breakpoint.name()),
    )?;
    let init = CustomEventInit::new();
    init.set_detail(&detail);
    let event = CustomEvent::new_with_event_init_dict(BREAKPOINT_CHANGE_EVENT, &init)?;
    window().dispatch_event(&event)?;
    Ok(())
}

fn layout_tables(
    manager: &ResponsiveManager,
    decide: fn(&ResponsiveManager, bool) -> Option<TableLayout>,
) -> Result<()> {
    for table_el in query_all(table::TABLE_SELECTOR)? {
        let stacked = table_el.class_list().contains(table::STACKED_CLASS);
        match decide(manager, stacked) {
            Some(TableLayout::Stack) => stack_table(&table_el)?,
            Some(TableLayout::Unstack) => apply_patch(&table_el, &table::unstack())?,
            None => {}
        }
    }
    Ok(())
}

fn stack_table(table_el: &Element) -> Result<()> {
    let headers: Vec<String> = query_all_in(table_el, table::HEADER_SELECTOR)?
        .iter()
        .map(|th| th.text_content().unwrap_or_default().trim().to_owned())
        .collect();
    let cells = query_all_in(table_el, table::CELL_SELECTOR)?;
    let plan = table::stack(&headers, cells.len());
    for (cell, patch) in cells.iter().zip(&plan.cells) {
        apply_patch(cell, patch)?;
    }
    apply_patch(table_el, &plan.table)
}

fn update_visibility(manager: &ResponsiveManager) -> Result<()> {
    for rule in &VISIBILITY_RULES {
        let patch = rule.patch(manager);
        for element in query_all(rule.selector)? {
            apply_patch(&element, &patch)?;
        }
    }
    Ok(())
}

/// Bigger touch targets on phones.
fn size_for_touch(manager: &ResponsiveManager) -> Result<()> {
    if let Some(patch) = layout::form_field(manager) {
        for form in query_all(layout::FORM_SELECTOR)? {
            for field in query_all_in(&form, layout::FORM_FIELD_SELECTOR)? {
                apply_patch(&field, &patch)?;
            }
        }
    }
    if let Some(patch) = layout::modal_dialog(manager) {
        for modal in query_all(layout::MODAL_SELECTOR)? {
            for dialog in query_all_in(&modal, layout::MODAL_DIALOG_SELECTOR)? {
                apply_patch(&dialog, &patch)?;
            }
        }
    }
    Ok(())
}

fn optimize_images(manager: &ResponsiveManager) -> Result<()> {
    let patch = layout::image(manager);
    for image in query_all(layout::PENDING_IMAGE_SELECTOR)? {
        apply_patch(&image, &patch)?;
    }
    Ok(())
}

fn install_navigation(manager: &SharedManager) -> Result<()> {
    if query(navigation::NAVBAR_SELECTOR)?.is_none() {
        return Ok(());
    }
    let (Some(toggler), Some(collapse)) = (
        query(navigation::TOGGLER_SELECTOR)?,
        query(navigation::COLLAPSE_SELECTOR)?,
    ) else {
        return Ok(());
    };

    {
        let collapse = collapse.clone();
        listen(&toggler, "click", move |_: web_sys::Event| {
            let shown = collapse.class_list().contains(SHOW_CLASS);
            report("navbar toggler", apply_patch(&collapse, &navigation::toggle(shown)));
        })?;
    }

    for link in query_all_in(&collapse, navigation::NAV_LINK_SELECTOR)? {
        let manager = Rc::clone(manager);
        let collapse = collapse.clone();
        listen(&link, "click", move |_: web_sys::Event| {
            if let Some(patch) = navigation::on_nav_link(&manager.borrow()) {
                report("nav link", apply_patch(&collapse, &patch));
            }
        })?;
    }
    Ok(())
}

/// Pressed state for buttons and links, which touch screens don't show on their own.
fn install_touch_feedback(manager: &SharedManager) -> Result<()> {
    if !manager.borrow().is_touch() {
        return Ok(());
    }
    let body = document_body()?;
    listen_passive(&body, "touchstart", |event: TouchEvent| {
        report("touchstart", press(&event));
    })?;
    listen_passive(&body, "touchend", |_: TouchEvent| {
        report("touchend", release_touch());
    })
}

fn press(event: &TouchEvent) -> Result<()> {
    let Some(target) = event_target(event) else {
        return Ok(());
    };
    if let Some(patch) = layout::touch_start(target.matches(layout::TOUCH_TARGET_SELECTOR)?) {
        apply_patch(&target, &patch)?;
    }
    Ok(())
}

fn release_touch() -> Result<()> {
    for element in query_all(layout::TOUCH_ACTIVE_SELECTOR)? {
        apply_patch(&element, &layout::touch_end())?;
    }
    Ok(())
}

/// Lays out content the server or other scripts insert after load.
fn observe_new_content(manager: &SharedManager) -> Result<()> {
    let manager = Rc::clone(manager);
    let callback = Closure::<dyn FnMut(Array, MutationObserver)>::new(
        move |records: Array, _: MutationObserver| {
            let added = records.iter().any(|record| {
                record
                    .unchecked_into::<MutationRecord>()
                    .added_nodes()
                    .length()
                    > 0
            });
            if added {
                let manager = manager.borrow();
                report("new content", refresh_content(&manager));
            }
        },
    );
    let observer = MutationObserver::new(callback.as_ref().unchecked_ref())?;
    let options = MutationObserverInit::new();
    options.set_child_list(true);
    options.set_subtree(true);
    observer.observe_with_options(&document_body()?.into(), &options)?;
    callback.forget();
    Ok(())
}

fn refresh_content(manager: &ResponsiveManager) -> Result<()> {
    layout_tables(manager, table::on_load)?;
    size_for_touch(manager)?;
    optimize_images(manager)
}
