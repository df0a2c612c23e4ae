// Copyright 2026 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0

//! Page-wide responsive classes, visibility helpers and touch sizing.

#![expect(missing_docs, reason = "selectors and class names are self-descriptive")]

use crate::{Breakpoint, DeviceClass, ElementPatch, ResponsiveManager};

pub const TOUCH_CLASS: &str = "touch-device";
pub const NO_TOUCH_CLASS: &str = "no-touch-device";
pub const TOUCH_ACTIVE_CLASS: &str = "touch-active";
/// Elements which show a pressed state while touched.
pub const TOUCH_TARGET_SELECTOR: &str = "button, .btn, a.btn, .nav-link";
pub const TOUCH_ACTIVE_SELECTOR: &str = ".touch-active";

pub const FORM_SELECTOR: &str = "form";
pub const FORM_FIELD_SELECTOR: &str = "input, select, textarea";
pub const MODAL_SELECTOR: &str = ".modal";
pub const MODAL_DIALOG_SELECTOR: &str = ".modal-dialog";
/// Images that haven't been processed yet.
pub const PENDING_IMAGE_SELECTOR: &str = "img:not([data-responsive-done])";
pub const IMAGE_DONE_ATTR: &str = "data-responsive-done";

/// Keeps exactly one breakpoint class and one device class on `body`.
pub fn body_classes(manager: &ResponsiveManager) -> ElementPatch {
    let breakpoint = manager.current_breakpoint();
    let device = manager.device_class();
    ElementPatch::new()
        .remove_classes(Breakpoint::ALL.map(Breakpoint::class_name))
        .add_class(breakpoint.class_name())
        .remove_classes(DeviceClass::ALL.map(DeviceClass::class_name))
        .add_class(device.class_name())
}

pub fn touch_classes(is_touch: bool) -> ElementPatch {
    ElementPatch::new().add_class(if is_touch { TOUCH_CLASS } else { NO_TOUCH_CLASS })
}

/// Pressed state for the touched element, which must itself match
/// [`TOUCH_TARGET_SELECTOR`]; touching an icon inside a button presses nothing.
pub fn touch_start(target_matches: bool) -> Option<ElementPatch> {
    target_matches.then(|| ElementPatch::new().add_class(TOUCH_ACTIVE_CLASS))
}

pub fn touch_end() -> ElementPatch {
    ElementPatch::new().remove_class(TOUCH_ACTIVE_CLASS)
}

/// Shows or hides everything matching `selector` depending on the device class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityRule {
    pub selector: &'static str,
    pub device: DeviceClass,
    /// `true` for `show-*` classes, `false` for `hide-*`.
    pub show: bool,
}

pub const VISIBILITY_RULES: [VisibilityRule; 6] = [
    VisibilityRule {
        selector: ".show-mobile",
        device: DeviceClass::Mobile,
        show: true,
    },
    VisibilityRule {
        selector: ".hide-mobile",
        device: DeviceClass::Mobile,
        show: false,
    },
    VisibilityRule {
        selector: ".show-tablet",
        device: DeviceClass::Tablet,
        show: true,
    },
    VisibilityRule {
        selector: ".hide-tablet",
        device: DeviceClass::Tablet,
        show: false,
    },
    VisibilityRule {
        selector: ".show-desktop",
        device: DeviceClass::Desktop,
        show: true,
    },
    VisibilityRule {
        selector: ".hide-desktop",
        device: DeviceClass::Desktop,
        show: false,
    },
];

impl VisibilityRule {
    pub fn is_visible(&self, manager: &ResponsiveManager) -> bool {
        (manager.device_class() == self.device) == self.show
    }

    pub fn patch(&self, manager: &ResponsiveManager) -> ElementPatch {
        if self.is_visible(manager) {
            ElementPatch::new().clear_style("display")
        } else {
            ElementPatch::new().style("display", "none")
        }
    }
}

/// Gives form fields a 44px touch target on phones.
pub fn form_field(manager: &ResponsiveManager) -> Option<ElementPatch> {
    manager
        .is_mobile()
        .then(|| ElementPatch::new().style("min-height", "44px"))
}

pub fn modal_dialog(manager: &ResponsiveManager) -> Option<ElementPatch> {
    manager
        .is_mobile()
        .then(|| ElementPatch::new().style("margin", "0.5rem"))
}

/// Marks an image as processed, fitting it to the screen on phones.
pub fn image(manager: &ResponsiveManager) -> ElementPatch {
    let patch = ElementPatch::new().attr(IMAGE_DONE_ATTR, "true");
    if manager.is_mobile() {
        patch
            .style("max-width", "100%")
            .style("height", "auto")
            .style("display", "block")
    } else {
        patch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Breakpoints, Viewport, VirtualElement};

    fn manager(width: f64) -> ResponsiveManager {
        ResponsiveManager::new(Breakpoints::default(), Viewport::new(width))
    }

    #[test]
    fn body_keeps_one_class_of_each_kind() {
        let mut body = VirtualElement::with_class_name("app breakpoint-xl is-desktop");
        body.apply(&body_classes(&manager(700.0)));
        let classes: Vec<_> = body.classes().collect();
        assert_eq!(classes, ["app", "breakpoint-sm", "is-tablet"]);
    }

    #[test]
    fn visibility_rules_follow_device() {
        let phone = manager(320.0);
        let visible: Vec<_> = VISIBILITY_RULES
            .iter()
            .filter(|r| r.is_visible(&phone))
            .map(|r| r.selector)
            .collect();
        assert_eq!(visible, [".show-mobile", ".hide-tablet", ".hide-desktop"]);
        assert_eq!(
            VISIBILITY_RULES[1].patch(&phone).style_value("display"),
            Some("none")
        );
        assert_eq!(
            VISIBILITY_RULES[0].patch(&phone).style_value("display"),
            Some("")
        );
    }

    #[test]
    fn images_are_marked_everywhere() {
        let desktop = image(&manager(1024.0));
        assert_eq!(desktop.styles.len(), 0);
        assert_eq!(desktop.attributes.len(), 1);
        assert_eq!(image(&manager(400.0)).style_value("display"), Some("block"));
        assert!(form_field(&manager(1024.0)).is_none());
    }
}
