// Copyright 2026 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0

//! Table behaviour: stacking on small screens, row hover and row selection.

#![expect(missing_docs, reason = "selectors and class names are self-descriptive")]

use crate::{ElementPatch, ResponsiveManager};

pub const TABLE_SELECTOR: &str = "table";
pub const HEADER_SELECTOR: &str = "thead th";
pub const CELL_SELECTOR: &str = "tbody td";
/// Rows that get a hover highlight.
pub const HOVER_ROW_SELECTOR: &str = "table tbody tr";
/// Rows that can be selected by clicking.
pub const SELECTABLE_ROW_SELECTOR: &str = "tbody tr";
/// Clicks inside these don't toggle row selection.
pub const INTERACTIVE_SELECTOR: &str = "a, button, input, select";

pub const STACKED_CLASS: &str = "table-stacked";
pub const ACTIVE_CLASS: &str = "table-active";

/// Patches turning a table into stacked cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackPlan {
    /// One patch per `tbody td`, in document order.
    pub cells: Vec<ElementPatch>,
    pub table: ElementPatch,
}

/// Labels every body cell with the header of its column.
///
/// Cells are numbered in document order across all rows, so a row with a
/// missing cell shifts the labels of the rows below it; the server always
/// renders full rows.
pub fn stack(headers: &[String], cell_count: usize) -> StackPlan {
    let cells = (0..cell_count)
        .map(|index| {
            if headers.is_empty() {
                ElementPatch::new()
            } else {
                ElementPatch::new().attr("data-label", headers[index % headers.len()].clone())
            }
        })
        .collect();
    StackPlan {
        cells,
        table: ElementPatch::new().add_class(STACKED_CLASS),
    }
}

/// What to do with one table after a layout change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableLayout {
    Stack,
    Unstack,
}

/// On page load only mobile layouts stack; nothing is unstacked.
pub fn on_load(manager: &ResponsiveManager, is_stacked: bool) -> Option<TableLayout> {
    (manager.is_mobile() && !is_stacked).then_some(TableLayout::Stack)
}

pub fn on_resize(manager: &ResponsiveManager, is_stacked: bool) -> Option<TableLayout> {
    match (manager.is_mobile(), is_stacked) {
        (true, false) => Some(TableLayout::Stack),
        (false, true) => Some(TableLayout::Unstack),
        _ => None,
    }
}

pub fn unstack() -> ElementPatch {
    ElementPatch::new().remove_class(STACKED_CLASS)
}

/// Applied to hoverable rows once.
pub fn hover_init() -> ElementPatch {
    ElementPatch::new().style("cursor", "pointer")
}

pub fn hover(entered: bool, color: &str) -> ElementPatch {
    if entered {
        ElementPatch::new().style("background-color", color.to_owned())
    } else {
        ElementPatch::new().clear_style("background-color")
    }
}

/// Toggles the selection of a row, unless the click hit a control inside it.
pub fn select(is_active: bool, hit_interactive: bool) -> Option<ElementPatch> {
    if hit_interactive {
        return None;
    }
    Some(if is_active {
        ElementPatch::new().remove_class(ACTIVE_CLASS)
    } else {
        ElementPatch::new().add_class(ACTIVE_CLASS)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Breakpoints, Viewport};

    fn headers() -> Vec<String> {
        vec!["Name".to_owned(), "Status".to_owned()]
    }

    #[test]
    fn cells_cycle_through_headers() {
        let plan = stack(&headers(), 5);
        let labels: Vec<_> = plan
            .cells
            .iter()
            .map(|p| match p.attributes.first() {
                Some(crate::AttributeModifier::Set(_, v)) => v.as_str(),
                _ => "",
            })
            .collect();
        assert_eq!(labels, ["Name", "Status", "Name", "Status", "Name"]);
        assert!(plan.table.classes.contains(&crate::ClassModifier::Add(
            STACKED_CLASS.into()
        )));
    }

    #[test]
    fn headerless_tables_only_get_the_class() {
        let plan = stack(&[], 3);
        assert!(plan.cells.iter().all(ElementPatch::is_empty));
        assert!(!plan.table.is_empty());
    }

    #[test]
    fn resize_decisions() {
        let mobile = ResponsiveManager::new(Breakpoints::default(), Viewport::new(400.0));
        let desktop = ResponsiveManager::new(Breakpoints::default(), Viewport::new(1200.0));
        assert_eq!(on_resize(&mobile, false), Some(TableLayout::Stack));
        assert_eq!(on_resize(&mobile, true), None);
        assert_eq!(on_resize(&desktop, true), Some(TableLayout::Unstack));
        assert_eq!(on_resize(&desktop, false), None);
        assert_eq!(on_load(&desktop, true), None);
    }

    #[test]
    fn selection_skips_controls() {
        assert_eq!(select(false, true), None);
        assert_eq!(
            select(false, false),
            Some(ElementPatch::new().add_class(ACTIVE_CLASS))
        );
        assert_eq!(
            select(true, false),
            Some(ElementPatch::new().remove_class(ACTIVE_CLASS))
        );
    }
}
