// Copyright 2026 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0

//! Writes [`ElementPatch`]es onto live elements.

use rollcall_core::{
    AttributeModifier, ClassModifier, ElementPatch, Label, Reaction, StyleModifier,
};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::Result;

pub(crate) fn apply_patch(element: &Element, patch: &ElementPatch) -> Result<()> {
    let class_list = element.class_list();
    for modifier in &patch.classes {
        match modifier {
            ClassModifier::Add(name) => class_list.add_1(name)?,
            ClassModifier::Remove(name) => class_list.remove_1(name)?,
        }
    }

    if !patch.styles.is_empty() {
        // Only HTML elements carry an inline style we can reach through `web_sys`.
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            let style = html.style();
            for modifier in &patch.styles {
                match modifier {
                    StyleModifier::Set(name, value) => style.set_property(name, value)?,
                    StyleModifier::Clear(name) => {
                        style.remove_property(name)?;
                    }
                }
            }
        }
    }

    for modifier in &patch.attributes {
        match modifier {
            AttributeModifier::Set(name, value) => element.set_attribute(name, value)?,
            AttributeModifier::Remove(name) => element.remove_attribute(name)?,
        }
    }

    match patch.disabled {
        Some(true) => element.set_attribute("disabled", "")?,
        Some(false) => element.remove_attribute("disabled")?,
        None => {}
    }

    if let Some(label) = &patch.label {
        element.set_inner_html(&label.to_markup());
    }
    Ok(())
}

/// Applies each patch of `reaction` to the element `resolve` picks for its target.
///
/// Targets without an element are skipped.
pub(crate) fn apply_reaction<T>(
    reaction: &Reaction<T>,
    mut resolve: impl FnMut(&T) -> Option<Element>,
) -> Result<()> {
    for (target, patch) in reaction.iter() {
        if let Some(element) = resolve(target) {
            apply_patch(&element, patch)?;
        }
    }
    Ok(())
}

/// Captures the current inner content of a button so it can be restored verbatim.
pub(crate) fn label_of(element: &Element) -> Label {
    Label::Markup(element.inner_html())
}
