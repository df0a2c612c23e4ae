// Copyright 2026 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0

//! Form field styling, validation feedback and submit loading states.

#![expect(missing_docs, reason = "selectors and class names are self-descriptive")]

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;

use crate::{ElementPatch, Label, Scheduler, TimerHandle};

pub const FIELD_SELECTOR: &str = ".form-control, .form-select";
pub const FEEDBACK_SELECTOR: &str = ".valid-feedback, .invalid-feedback";
pub const WRAPPER_SELECTOR: &str = ".form-group";
pub const SEARCH_SELECTOR: &str = r#"input[type="search"], input[placeholder*="search"]"#;
pub const TOOLTIP_SELECTOR: &str = "[data-tooltip]";
pub const SUBMIT_BUTTON_SELECTOR: &str = r#"button[type="submit"]"#;

pub const FOCUSED_CLASS: &str = "focused";
pub const VALID_CLASS: &str = "is-valid";
pub const INVALID_CLASS: &str = "is-invalid";

pub const SUBMITTING_LABEL: Label = Label::Spinner("Submitting...");
pub const LOADING_LABEL: Label = Label::Spinner("Loading...");

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Focus adds `focused` to the field's parent.
pub fn focus() -> ElementPatch {
    ElementPatch::new().add_class(FOCUSED_CLASS)
}

/// Blur keeps the parent `focused` while the field has a value.
pub fn blur(value: &str) -> Option<ElementPatch> {
    value
        .is_empty()
        .then(|| ElementPatch::new().remove_class(FOCUSED_CLASS))
}

/// Pre-filled fields start out focused.
pub fn initial_focus(value: &str) -> Option<ElementPatch> {
    (!value.is_empty()).then(focus)
}

/// The validation rule a field falls under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Email,
    Number,
    Other { required: bool },
}

impl FieldKind {
    /// From an input's `type` and `required` attributes.
    pub fn new(input_type: &str, required: bool) -> Self {
        match input_type {
            "email" => Self::Email,
            "number" => Self::Number,
            _ => Self::Other { required },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Invalid,
    /// Neither class is shown.
    Unknown,
}

impl Validity {
    fn from_check(passed: bool) -> Self {
        if passed { Self::Valid } else { Self::Invalid }
    }
}

pub fn is_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Whether `value` reads as a number the way an HTML number field's script would.
pub fn is_numeric(value: &str) -> bool {
    let value = value.trim();
    let unsigned = value.trim_start_matches(['+', '-']);
    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        if let Some(digits) = value
            .strip_prefix(prefix)
            .or_else(|| value.strip_prefix(&prefix.to_uppercase()))
        {
            return u64::from_str_radix(digits, radix).is_ok();
        }
    }
    if unsigned == "Infinity" {
        return true;
    }
    // Rust also reads `inf` and `nan`, which aren't numbers to the browser.
    if unsigned.chars().any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E')) {
        return false;
    }
    value.parse::<f64>().is_ok()
}

/// Validity of a field value, before trimming.
pub fn validity(kind: FieldKind, value: &str) -> Option<Validity> {
    let value = value.trim();
    match kind {
        FieldKind::Email | FieldKind::Number if value.is_empty() => Some(Validity::Unknown),
        FieldKind::Email => Some(Validity::from_check(is_email(value))),
        FieldKind::Number => Some(Validity::from_check(is_numeric(value))),
        FieldKind::Other { required: true } => Some(Validity::from_check(!value.is_empty())),
        FieldKind::Other { required: false } => None,
    }
}

/// Validation classes for a field; `None` leaves the field untouched.
pub fn validate(kind: FieldKind, value: &str) -> Option<ElementPatch> {
    let patch = ElementPatch::new();
    validity(kind, value).map(|validity| match validity {
        Validity::Valid => patch.remove_class(INVALID_CLASS).add_class(VALID_CLASS),
        Validity::Invalid => patch.remove_class(VALID_CLASS).add_class(INVALID_CLASS),
        Validity::Unknown => patch.remove_class(VALID_CLASS).remove_class(INVALID_CLASS),
    })
}

/// Empty feedback placeholders are removed before revalidating.
pub fn is_stale_feedback(text: &str) -> bool {
    text.is_empty()
}

/// Search boxes grow slightly while focused.
pub fn search_focus(focused: bool) -> ElementPatch {
    ElementPatch::new().style("transform", if focused { "scale(1.02)" } else { "scale(1)" })
}

/// Elements with a `data-tooltip` show a help cursor.
pub fn tooltip_marker() -> ElementPatch {
    ElementPatch::new()
        .style("cursor", "help")
        .add_class("tooltip-text")
}

/// A busy element which other scripts put into, and take out of, a loading state.
#[derive(Debug, Clone)]
pub struct LoadingState {
    original: Label,
}

impl LoadingState {
    /// `original` is the element's content before it started loading.
    pub fn new(original: Label) -> Self {
        Self { original }
    }

    pub fn show(&self) -> ElementPatch {
        ElementPatch::new().disabled(true).label(LOADING_LABEL)
    }

    pub fn hide(&self) -> ElementPatch {
        ElementPatch::new()
            .disabled(false)
            .label(self.original.clone())
    }
}

/// Timer action of [`SubmitLoading`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestoreButton;

/// Loading state of a regular form's submit button.
///
/// The page normally navigates away before the revert fires; it only matters
/// when the submission is cancelled, e.g. by client-side validation.
#[derive(Debug)]
pub struct SubmitLoading {
    original: Label,
    revert_after: Duration,
    timer: Option<TimerHandle>,
}

impl SubmitLoading {
    pub fn new(original: Label, revert_after: Duration) -> Self {
        Self {
            original,
            revert_after,
            timer: None,
        }
    }

    pub fn on_submit(&mut self, scheduler: &mut impl Scheduler<RestoreButton>) -> ElementPatch {
        if let Some(handle) = self.timer.take() {
            scheduler.cancel(handle);
        }
        self.timer = Some(scheduler.schedule(self.revert_after, RestoreButton));
        ElementPatch::new().disabled(true).label(SUBMITTING_LABEL)
    }

    pub fn on_timer(&mut self, _: RestoreButton) -> ElementPatch {
        self.timer = None;
        ElementPatch::new()
            .disabled(false)
            .label(self.original.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ManualClock, VirtualElement};

    #[test]
    fn email_validation() {
        assert_eq!(validity(FieldKind::Email, "a@b.co"), Some(Validity::Valid));
        assert_eq!(validity(FieldKind::Email, " a@b "), Some(Validity::Invalid));
        assert_eq!(validity(FieldKind::Email, "  "), Some(Validity::Unknown));
    }

    #[test]
    fn number_validation() {
        for ok in ["12", "-3.5", "1e3", "0x1F", "+7", "Infinity"] {
            assert!(is_numeric(ok), "{ok}");
        }
        for bad in ["abc", "nan", "inf", "12px", "0xZZ"] {
            assert!(!is_numeric(bad), "{bad}");
        }
        assert_eq!(validity(FieldKind::Number, ""), Some(Validity::Unknown));
    }

    #[test]
    fn required_and_optional_fields() {
        let required = FieldKind::new("text", true);
        assert_eq!(validity(required, ""), Some(Validity::Invalid));
        assert_eq!(validity(required, "x"), Some(Validity::Valid));
        assert_eq!(validity(FieldKind::new("text", false), "x"), None);
    }

    #[test]
    fn classes_are_exclusive() {
        let mut input = VirtualElement::new();
        input.apply(&validate(FieldKind::Number, "abc").unwrap());
        assert!(input.has_class(INVALID_CLASS));
        input.apply(&validate(FieldKind::Number, "4").unwrap());
        assert!(input.has_class(VALID_CLASS));
        assert!(!input.has_class(INVALID_CLASS));
        input.apply(&validate(FieldKind::Number, "").unwrap());
        assert_eq!(input.classes().count(), 0);
    }

    #[test]
    fn focus_tracks_value() {
        assert!(blur("").is_some());
        assert!(blur("kept").is_none());
        assert!(initial_focus("").is_none());
        assert_eq!(initial_focus("x"), Some(focus()));
    }

    #[test]
    fn loading_state_reverts() {
        let mut clock = ManualClock::new();
        let original = Label::Markup("Save".to_owned());
        let mut loading = SubmitLoading::new(original.clone(), Duration::from_millis(3000));
        let mut button = VirtualElement::new().with_label(original.clone());

        button.apply(&loading.on_submit(&mut clock));
        assert!(button.is_disabled());
        assert_eq!(button.label(), Some(&SUBMITTING_LABEL));

        assert!(clock.advance(Duration::from_millis(2999)).is_empty());
        for action in clock.advance(Duration::from_millis(1)) {
            button.apply(&loading.on_timer(action));
        }
        assert!(!button.is_disabled());
        assert_eq!(button.label(), Some(&original));
    }

    #[test]
    fn loading_state_restores_original_content() {
        let original = Label::Markup("Export <b>CSV</b>".to_owned());
        let loading = LoadingState::new(original.clone());
        let mut button = VirtualElement::new().with_label(original.clone());

        button.apply(&loading.show());
        assert!(button.is_disabled());
        assert_eq!(button.label(), Some(&LOADING_LABEL));
        assert_eq!(
            LOADING_LABEL.to_markup(),
            r#"<span class="spinner-border spinner-border-sm me-2"></span>Loading..."#
        );

        button.apply(&loading.hide());
        assert!(!button.is_disabled());
        assert_eq!(button.label(), Some(&original));
    }
}
