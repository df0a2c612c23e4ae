// Copyright 2026 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0

//! Navbar collapse, dropdowns, collapse panels and in-page anchors.

#![expect(missing_docs, reason = "selectors and class names are self-descriptive")]

use crate::{ElementPatch, Reaction, ResponsiveManager};

pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const TOGGLER_SELECTOR: &str = ".navbar-toggler";
pub const COLLAPSE_SELECTOR: &str = ".navbar-collapse";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const DROPDOWN_SELECTOR: &str = ".dropdown";
pub const OPEN_DROPDOWN_SELECTOR: &str = ".dropdown.show";
pub const DROPDOWN_MENU_SELECTOR: &str = ".dropdown-menu";
pub const COLLAPSE_PANEL_SELECTOR: &str = ".collapse";
pub const ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;

pub const SHOW_CLASS: &str = "show";

/// The toggler flips the menu open or closed.
pub fn toggle(collapse_shown: bool) -> ElementPatch {
    if collapse_shown {
        ElementPatch::new().remove_class(SHOW_CLASS)
    } else {
        ElementPatch::new().add_class(SHOW_CLASS)
    }
}

/// Following a link closes the menu on phones, where it covers the page.
pub fn on_nav_link(manager: &ResponsiveManager) -> Option<ElementPatch> {
    manager
        .is_mobile()
        .then(|| ElementPatch::new().remove_class(SHOW_CLASS))
}

/// Growing past mobile closes the menu, the full navbar takes over.
pub fn on_resize(manager: &ResponsiveManager) -> Option<ElementPatch> {
    (!manager.is_mobile()).then(|| ElementPatch::new().remove_class(SHOW_CLASS))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownPart {
    Dropdown,
    Menu,
}

/// Opens a dropdown on hover; dropdowns without a menu are left alone.
pub fn hover(entered: bool, has_menu: bool) -> Reaction<DropdownPart> {
    if !has_menu {
        return Reaction::new();
    }
    if entered {
        let open = || ElementPatch::new().add_class(SHOW_CLASS);
        Reaction::new()
            .with(DropdownPart::Dropdown, open())
            .with(DropdownPart::Menu, open())
    } else {
        close()
    }
}

/// Closes one dropdown and its menu.
pub fn close() -> Reaction<DropdownPart> {
    let closed = || ElementPatch::new().remove_class(SHOW_CLASS);
    Reaction::new()
        .with(DropdownPart::Dropdown, closed())
        .with(DropdownPart::Menu, closed())
}

/// Whether a `keydown` key closes open dropdowns.
pub fn closes_dropdowns(key: &str) -> bool {
    key == "Escape"
}

/// `show.bs.collapse`: animate up to the content height.
pub fn collapse_show(scroll_height: i32) -> ElementPatch {
    ElementPatch::new().style("max-height", format!("{scroll_height}px"))
}

/// `hide.bs.collapse`
pub fn collapse_hide() -> ElementPatch {
    ElementPatch::new().style("max-height", "0px")
}

/// The selector an in-page link scrolls to.
///
/// A bare `#` isn't a valid selector and scrolls nowhere.
pub fn anchor_target(href: &str) -> Option<&str> {
    (href.starts_with('#') && href.len() > 1).then_some(href)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Breakpoints, Viewport, VirtualElement};

    #[test]
    fn toggler_flips_show() {
        let mut collapse = VirtualElement::with_class_name("navbar-collapse");
        collapse.apply(&toggle(collapse.has_class(SHOW_CLASS)));
        assert!(collapse.has_class(SHOW_CLASS));
        collapse.apply(&toggle(collapse.has_class(SHOW_CLASS)));
        assert!(!collapse.has_class(SHOW_CLASS));
    }

    #[test]
    fn links_close_only_on_mobile() {
        let phone = ResponsiveManager::new(Breakpoints::default(), Viewport::new(390.0));
        let laptop = ResponsiveManager::new(Breakpoints::default(), Viewport::new(1280.0));
        assert!(on_nav_link(&phone).is_some());
        assert!(on_nav_link(&laptop).is_none());
        assert!(on_resize(&phone).is_none());
        assert!(on_resize(&laptop).is_some());
    }

    #[test]
    fn hover_needs_a_menu() {
        assert!(hover(true, false).is_empty());
        let open = hover(true, true);
        assert!(open.patch_for(&DropdownPart::Menu).is_some());
        assert_eq!(hover(false, true), close());
    }

    #[test]
    fn anchors() {
        assert_eq!(anchor_target("#main-content"), Some("#main-content"));
        assert_eq!(anchor_target("#"), None);
        assert!(closes_dropdowns("Escape"));
        assert!(!closes_dropdowns("Enter"));
        assert_eq!(collapse_show(240).style_value("max-height"), Some("240px"));
    }
}
