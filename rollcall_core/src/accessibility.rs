// Copyright 2026 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0

//! Skip link and label association.

#![expect(missing_docs, reason = "selectors and link fields are self-descriptive")]

use crate::ElementPatch;

pub const SKIP_LINK_SELECTOR: &str = ".skip-to-content";
pub const LABEL_SELECTOR: &str = "label";
pub const LABELLED_FIELD_SELECTOR: &str = "input, select, textarea";

/// The link inserted at the top of `body` when the page has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkipLink {
    pub href: &'static str,
    pub class_name: &'static str,
    pub text: &'static str,
}

pub const SKIP_LINK: SkipLink = SkipLink {
    href: "#main-content",
    class_name: "skip-to-content btn btn-primary",
    text: "Skip to main content",
};

/// Hands out ids for fields that have none.
#[derive(Debug, Default)]
pub struct FieldIds {
    next: u32,
}

impl FieldIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// The next `field-<n>` id; `taken` reports ids already used in the document.
    pub fn next_id(&mut self, taken: impl Fn(&str) -> bool) -> String {
        loop {
            self.next += 1;
            let id = format!("field-{}", self.next);
            if !taken(&id) {
                return id;
            }
        }
    }
}

/// Patches linking a `label` without `for` to the field it wraps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Association {
    pub label: ElementPatch,
    /// Set when the field needed an id.
    pub field: Option<ElementPatch>,
}

/// `label_for` is the label's `for` attribute, `field_id` the wrapped field's id (empty when unset).
pub fn associate(
    label_for: Option<&str>,
    field_id: &str,
    ids: &mut FieldIds,
    taken: impl Fn(&str) -> bool,
) -> Option<Association> {
    if label_for.is_some_and(|f| !f.is_empty()) {
        return None;
    }
    let (id, field) = if field_id.is_empty() {
        let id = ids.next_id(taken);
        let patch = ElementPatch::new().attr("id", id.clone());
        (id, Some(patch))
    } else {
        (field_id.to_owned(), None)
    };
    Some(Association {
        label: ElementPatch::new().attr("for", id),
        field,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VirtualElement;

    #[test]
    fn labels_with_for_are_left_alone() {
        let mut ids = FieldIds::new();
        assert!(associate(Some("email"), "", &mut ids, |_| false).is_none());
    }

    #[test]
    fn fields_get_fresh_ids() {
        let mut ids = FieldIds::new();
        let assoc = associate(None, "", &mut ids, |id| id == "field-1").unwrap();
        let mut label = VirtualElement::new();
        let mut field = VirtualElement::new();
        label.apply(&assoc.label);
        field.apply(&assoc.field.unwrap());
        assert_eq!(field.attr("id"), Some("field-2"));
        assert_eq!(label.attr("for"), Some("field-2"));
    }

    #[test]
    fn existing_ids_are_reused() {
        let mut ids = FieldIds::new();
        let assoc = associate(Some(""), "remarks", &mut ids, |_| false).unwrap();
        assert!(assoc.field.is_none());
        assert_eq!(assoc.label, ElementPatch::new().attr("for", "remarks"));
    }
}
