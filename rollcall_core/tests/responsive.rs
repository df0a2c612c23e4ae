// Copyright 2026 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0

//! A phone rotating into a tablet and back, checked against every responsive feature.

use rollcall_core::breakpoint::BreakpointTracker;
use rollcall_core::layout::{self, VISIBILITY_RULES};
use rollcall_core::table::{self, TableLayout};
use rollcall_core::{
    Breakpoint, Breakpoints, ResponsiveManager, Settings, Viewport, VirtualElement, navigation,
};

#[test]
fn named_widths() {
    let mut manager = ResponsiveManager::new(Breakpoints::default(), Viewport::new(500.0));
    assert_eq!(manager.current_breakpoint(), Breakpoint::Xs);
    assert!(manager.is_mobile());
    assert!(!manager.is_desktop());

    manager.set_viewport(Viewport::new(1300.0));
    assert_eq!(manager.current_breakpoint(), Breakpoint::Xl);
    assert!(manager.is_desktop());
    assert!(!manager.is_mobile());
}

#[test]
fn rotation_updates_page_state() {
    let mut manager = ResponsiveManager::new(
        Breakpoints::default(),
        Viewport::new(414.0).with_touch(true),
    );
    let mut tracker = BreakpointTracker::new(&manager);
    let mut body = VirtualElement::new();
    let mut table_el = VirtualElement::with_class_name("table");
    let mut collapse = VirtualElement::with_class_name("navbar-collapse show");

    body.apply(&layout::touch_classes(manager.is_touch()));
    body.apply(&layout::body_classes(&manager));
    let stacked = table_el.has_class(table::STACKED_CLASS);
    if let Some(TableLayout::Stack) = table::on_load(&manager, stacked) {
        let plan = table::stack(&["Student".to_owned(), "Status".to_owned()], 4);
        table_el.apply(&plan.table);
    }
    assert!(body.has_class("touch-device"));
    assert!(body.has_class("breakpoint-xs"));
    assert!(body.has_class("is-mobile"));
    assert!(table_el.has_class("table-stacked"));

    // Landscape.
    manager.set_viewport(Viewport::new(896.0).with_touch(true));
    assert_eq!(tracker.observe(&manager), Some(Breakpoint::Md));
    body.apply(&layout::body_classes(&manager));
    match table::on_resize(&manager, table_el.has_class(table::STACKED_CLASS)) {
        Some(TableLayout::Unstack) => table_el.apply(&table::unstack()),
        other => panic!("expected unstack, got {other:?}"),
    }
    if let Some(patch) = navigation::on_resize(&manager) {
        collapse.apply(&patch);
    }

    assert!(body.has_class("breakpoint-md"));
    assert!(!body.has_class("breakpoint-xs"));
    assert!(body.has_class("is-tablet"));
    assert!(!body.has_class("is-mobile"));
    assert!(!table_el.has_class("table-stacked"));
    assert!(!collapse.has_class("show"));

    // Small resizes within a breakpoint are not reported.
    manager.set_viewport(Viewport::new(900.0).with_touch(true));
    assert_eq!(tracker.observe(&manager), None);
}

#[test]
fn visibility_on_desktop() {
    let manager = ResponsiveManager::new(Breakpoints::default(), Viewport::new(1440.0));
    let mut hidden = Vec::new();
    for rule in VISIBILITY_RULES {
        let mut el = VirtualElement::new();
        el.apply(&rule.patch(&manager));
        if el.style("display") == Some("none") {
            hidden.push(rule.selector);
        }
    }
    assert_eq!(hidden, [".show-mobile", ".show-tablet", ".hide-desktop"]);
}

#[test]
fn custom_breakpoints_from_settings() {
    let settings: Settings = serde_json::from_str(
        r#"{ "breakpoints": { "sm": 480, "md": 720, "lg": 960, "xl": 1140, "xxl": 1320 } }"#,
    )
    .unwrap();
    settings.validate().unwrap();
    let manager = ResponsiveManager::new(settings.breakpoints, Viewport::new(500.0));
    assert_eq!(manager.current_breakpoint(), Breakpoint::Sm);
    assert!(manager.is_tablet());
}

#[test]
fn touchend_releases_every_pressed_element() {
    // (element, whether it matches the touch target selector itself)
    let mut elements: Vec<_> = [
        ("btn btn-primary", true),
        ("nav-link", true),
        ("bi bi-check", false),
        ("card", false),
    ]
    .into_iter()
    .map(|(class_name, matches)| (VirtualElement::with_class_name(class_name), matches))
    .collect();

    // Two fingers on buttons, one on an icon inside a button.
    for (element, matches) in elements.iter_mut().take(3) {
        if let Some(patch) = layout::touch_start(*matches) {
            element.apply(&patch);
        }
    }
    assert!(elements[0].0.has_class(layout::TOUCH_ACTIVE_CLASS));
    assert!(elements[1].0.has_class(layout::TOUCH_ACTIVE_CLASS));
    assert!(!elements[2].0.has_class(layout::TOUCH_ACTIVE_CLASS));

    for (element, _) in &mut elements {
        if element.has_class(layout::TOUCH_ACTIVE_CLASS) {
            element.apply(&layout::touch_end());
        }
    }
    assert!(
        elements
            .iter()
            .all(|(element, _)| !element.has_class(layout::TOUCH_ACTIVE_CLASS)),
        "no element keeps the pressed state"
    );
    assert!(elements[0].0.has_class("btn-primary"));
}
