// Copyright 2026 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0

//! Click ripples on buttons.

#![expect(missing_docs, reason = "field names are self-descriptive")]

use crate::ElementPatch;

/// Buttons which get a ripple.
pub const SELECTOR: &str = ".btn";
/// Class of the ripple element.
pub const CLASS: &str = "ripple";

/// `MouseEvent.button` of the primary (usually left) button.
const PRIMARY_BUTTON: i16 = 0;

/// A `getBoundingClientRect()` result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// A ripple circle, positioned relative to its button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    /// Centres a circle covering the whole button on the click point.
    pub fn from_click(rect: Rect, client_x: f64, client_y: f64) -> Self {
        let size = rect.width.max(rect.height);
        Self {
            size,
            left: client_x - rect.left - size / 2.0,
            top: client_y - rect.top - size / 2.0,
        }
    }

    /// Styling for the freshly created `span`.
    pub fn patch(&self) -> ElementPatch {
        let size = format!("{}px", self.size);
        ElementPatch::new()
            .add_class(CLASS)
            .style("width", size.clone())
            .style("height", size)
            .style("left", format!("{}px", self.left))
            .style("top", format!("{}px", self.top))
    }
}

/// What to do with a button after a click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleChange {
    /// How many existing ripples to remove first.
    pub remove: usize,
    pub ripple: Ripple,
}

/// Maps a click to a ripple change.
///
/// `existing` is the number of ripples currently inside the button; all of them
/// are removed so a button never holds more than one. Clicks with any button
/// other than the primary one are ignored.
pub fn on_click(
    existing: usize,
    mouse_button: i16,
    rect: Rect,
    client_x: f64,
    client_y: f64,
) -> Option<RippleChange> {
    if mouse_button != PRIMARY_BUTTON {
        return None;
    }
    Some(RippleChange {
        remove: existing,
        ripple: Ripple::from_click(rect, client_x, client_y),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: Rect = Rect {
        left: 100.0,
        top: 50.0,
        width: 120.0,
        height: 40.0,
    };

    #[test]
    fn centred_on_click() {
        let ripple = Ripple::from_click(RECT, 160.0, 70.0);
        assert_eq!(ripple.size, 120.0);
        assert_eq!(ripple.left, 0.0);
        assert_eq!(ripple.top, -40.0);
        let patch = ripple.patch();
        assert_eq!(patch.style_value("width"), Some("120px"));
        assert_eq!(patch.style_value("top"), Some("-40px"));
    }

    #[test]
    fn secondary_clicks_are_ignored() {
        assert!(on_click(0, 2, RECT, 0.0, 0.0).is_none());
    }
}
