// Copyright 2026 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0

//! Interaction polish: ripples, scroll reveal, form feedback, dropdowns,
//! Bootstrap widgets and accessibility fixes.

use rollcall_core::accessibility::{self, FieldIds, SKIP_LINK};
use rollcall_core::animation::{self, REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_THRESHOLD};
use rollcall_core::forms::{self, FieldKind};
use rollcall_core::navigation::{self, DropdownPart};
use rollcall_core::notifications;
use rollcall_core::ripple::{self, Rect};
use rollcall_core::table;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Element, HtmlInputElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

use crate::apply::{apply_patch, apply_reaction};
use crate::bootstrap::{self, Toast, Tooltip};
use crate::events::{listen, report};
use crate::util::{
    document, document_body, event_target, field_value, is_within, query, query_all, query_all_in,
};
use crate::{Result, run, stylesheet};

const RIPPLE_SELECTOR: &str = ".ripple";

pub(crate) fn install() -> Result<()> {
    stylesheet::inject()?;
    run("smooth scroll", install_smooth_scroll);
    run("ripples", install_ripples);
    run("scroll reveal", install_reveal);
    run("form feedback", install_form_feedback);
    run("bootstrap widgets", install_bootstrap_widgets);
    run("row selection", install_row_selection);
    run("dropdowns", install_dropdowns);
    run("collapse animation", install_collapse_animation);
    run("skip link", install_skip_link);
    run("label association", associate_labels);
    Ok(())
}

fn install_smooth_scroll() -> Result<()> {
    for anchor in query_all(navigation::ANCHOR_SELECTOR)? {
        let link = anchor.clone();
        listen(&anchor, "click", move |event: web_sys::Event| {
            event.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            if let Some(selector) = navigation::anchor_target(&href) {
                report("smooth scroll", scroll_to(selector));
            }
        })?;
    }
    Ok(())
}

fn scroll_to(selector: &str) -> Result<()> {
    if let Some(target) = query(selector)? {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
    Ok(())
}

fn install_ripples() -> Result<()> {
    for button in query_all(ripple::SELECTOR)? {
        let target = button.clone();
        listen(&button, "click", move |event: MouseEvent| {
            report("ripple", add_ripple(&target, &event));
        })?;
    }
    Ok(())
}

pub(crate) fn add_ripple(button: &Element, event: &MouseEvent) -> Result<()> {
    let existing = query_all_in(button, RIPPLE_SELECTOR)?;
    let bounds = button.get_bounding_client_rect();
    let rect = Rect {
        left: bounds.left(),
        top: bounds.top(),
        width: bounds.width(),
        height: bounds.height(),
    };
    let Some(change) = ripple::on_click(
        existing.len(),
        event.button(),
        rect,
        f64::from(event.client_x()),
        f64::from(event.client_y()),
    ) else {
        return Ok(());
    };
    for old in existing.iter().take(change.remove) {
        old.remove();
    }
    let span = document().create_element("span")?;
    apply_patch(&span, &change.ripple.patch())?;
    button.append_child(&span)?;
    Ok(())
}

/// Animates cards the first time they scroll into view.
fn install_reveal() -> Result<()> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry = entry.unchecked_into::<IntersectionObserverEntry>();
                if let Some(patch) = animation::reveal(entry.is_intersecting()) {
                    let target = entry.target();
                    report("reveal", apply_patch(&target, &patch));
                    observer.unobserve(&target);
                }
            }
        },
    );
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for element in query_all(REVEAL_SELECTOR)? {
        observer.observe(&element);
    }
    callback.forget();
    Ok(())
}

fn install_form_feedback() -> Result<()> {
    for field in query_all(forms::FIELD_SELECTOR)? {
        let Some(parent) = field.parent_element() else {
            continue;
        };
        if let Some(patch) = forms::initial_focus(&field_value(&field)) {
            apply_patch(&parent, &patch)?;
        }

        {
            let parent = parent.clone();
            listen(&field, "focus", move |_: web_sys::Event| {
                report("focus", apply_patch(&parent, &forms::focus()));
            })?;
        }
        {
            let target = field.clone();
            listen(&field, "blur", move |_: web_sys::Event| {
                if let Some(patch) = forms::blur(&field_value(&target)) {
                    report("blur", apply_patch(&parent, &patch));
                }
                report("validation", validate_field(&target));
            })?;
        }
        let target = field.clone();
        listen(&field, "input", move |_: web_sys::Event| {
            report("validation", validate_field(&target));
        })?;
    }
    Ok(())
}

pub(crate) fn validate_field(field: &Element) -> Result<()> {
    let wrapper = match field.closest(forms::WRAPPER_SELECTOR)? {
        Some(wrapper) => Some(wrapper),
        None => field.parent_element(),
    };
    if let Some(wrapper) = wrapper {
        for feedback in query_all_in(&wrapper, forms::FEEDBACK_SELECTOR)? {
            if forms::is_stale_feedback(&feedback.text_content().unwrap_or_default()) {
                feedback.remove();
            }
        }
    }

    let kind = match field.dyn_ref::<HtmlInputElement>() {
        Some(input) => FieldKind::new(&input.type_(), input.required()),
        None => FieldKind::new("", field.has_attribute("required")),
    };
    if let Some(patch) = forms::validate(kind, &field_value(field)) {
        apply_patch(field, &patch)?;
    }
    Ok(())
}

fn install_bootstrap_widgets() -> Result<()> {
    if !bootstrap::is_loaded() {
        tracing::debug!("Bootstrap not loaded, skipping tooltips and toasts");
        return Ok(());
    }
    run("tooltips", || {
        for element in query_all(notifications::TOOLTIP_SELECTOR)? {
            Tooltip::new(&element)?;
        }
        Ok(())
    });
    run("toasts", || {
        for element in query_all(notifications::TOAST_SELECTOR)? {
            Toast::new(&element)?.show();
        }
        Ok(())
    });
    Ok(())
}

fn install_row_selection() -> Result<()> {
    for row in query_all(table::SELECTABLE_ROW_SELECTOR)? {
        let target = row.clone();
        listen(&row, "click", move |event: web_sys::Event| {
            let hit_interactive = event_target(&event)
                .is_some_and(|clicked| is_within(&clicked, table::INTERACTIVE_SELECTOR));
            let is_active = target.class_list().contains(table::ACTIVE_CLASS);
            if let Some(patch) = table::select(is_active, hit_interactive) {
                report("row selection", apply_patch(&target, &patch));
            }
        })?;
    }
    Ok(())
}

fn dropdown_parts(
    dropdown: &Element,
    menu: Option<Element>,
) -> impl FnMut(&DropdownPart) -> Option<Element> {
    move |part| match part {
        DropdownPart::Dropdown => Some(dropdown.clone()),
        DropdownPart::Menu => menu.clone(),
    }
}

fn hover_dropdown(dropdown: &Element, entered: bool) -> Result<()> {
    let menu = dropdown.query_selector(navigation::DROPDOWN_MENU_SELECTOR)?;
    let reaction = navigation::hover(entered, menu.is_some());
    apply_reaction(&reaction, dropdown_parts(dropdown, menu))
}

fn close_open_dropdowns() -> Result<()> {
    for dropdown in query_all(navigation::OPEN_DROPDOWN_SELECTOR)? {
        let menu = dropdown.query_selector(navigation::DROPDOWN_MENU_SELECTOR)?;
        apply_reaction(&navigation::close(), dropdown_parts(&dropdown, menu))?;
    }
    Ok(())
}

fn install_dropdowns() -> Result<()> {
    for dropdown in query_all(navigation::DROPDOWN_SELECTOR)? {
        for (event, entered) in [("mouseenter", true), ("mouseleave", false)] {
            let target = dropdown.clone();
            listen(&dropdown, event, move |_: web_sys::Event| {
                report("dropdown hover", hover_dropdown(&target, entered));
            })?;
        }
    }
    listen(&document(), "keydown", |event: KeyboardEvent| {
        if navigation::closes_dropdowns(&event.key()) {
            report("escape", close_open_dropdowns());
        }
    })
}

fn install_collapse_animation() -> Result<()> {
    for collapse in query_all(navigation::COLLAPSE_PANEL_SELECTOR)? {
        let target = collapse.clone();
        listen(&collapse, "show.bs.collapse", move |_: web_sys::Event| {
            let patch = navigation::collapse_show(target.scroll_height());
            report("collapse", apply_patch(&target, &patch));
        })?;
        let target = collapse.clone();
        listen(&collapse, "hide.bs.collapse", move |_: web_sys::Event| {
            report("collapse", apply_patch(&target, &navigation::collapse_hide()));
        })?;
    }
    Ok(())
}

fn install_skip_link() -> Result<()> {
    if query(accessibility::SKIP_LINK_SELECTOR)?.is_some() {
        return Ok(());
    }
    let link = document().create_element("a")?;
    link.set_attribute("href", SKIP_LINK.href)?;
    link.set_class_name(SKIP_LINK.class_name);
    link.set_text_content(Some(SKIP_LINK.text));
    let body = document_body()?;
    body.insert_before(&link, body.first_child().as_ref())?;
    Ok(())
}

/// Points every wrapping `label` at its field so screen readers announce it.
fn associate_labels() -> Result<()> {
    let document = document();
    let mut ids = FieldIds::new();
    for label in query_all(accessibility::LABEL_SELECTOR)? {
        let Some(field) = label.query_selector(accessibility::LABELLED_FIELD_SELECTOR)? else {
            continue;
        };
        let label_for = label.get_attribute("for");
        let Some(association) =
            accessibility::associate(label_for.as_deref(), &field.id(), &mut ids, |id| {
                document.get_element_by_id(id).is_some()
            })
        else {
            continue;
        };
        if let Some(patch) = &association.field {
            apply_patch(&field, patch)?;
        }
        apply_patch(&label, &association.label)?;
    }
    Ok(())
}
