// Copyright 2026 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0

//! Entry animations.
//!
//! Delays are written in whole milliseconds so that staggering never produces
//! values like `0.30000000000000004s`.

#![expect(missing_docs, reason = "selectors and class names are self-descriptive")]

use crate::ElementPatch;

pub const ANIMATED_CLASS: &str = "animated";

/// Elements revealed when they scroll into view.
pub const REVEAL_SELECTOR: &str = ".card, .stat-card, .feature-card, .course-card";
/// Fraction of the element that must be visible.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Reveal slightly before the element reaches the bottom edge.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// A group of elements animated one after another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub selector: &'static str,
    /// Delay between two consecutive elements.
    pub step_ms: u32,
    pub style: StaggerStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaggerStyle {
    /// Hidden, then slid up with the full `animation` shorthand.
    SlideUp,
    /// `animation-delay` plus the `animated` class from the stylesheet.
    AnimatedClass,
}

pub const CARDS: Stagger = Stagger {
    selector: ".card",
    step_ms: 100,
    style: StaggerStyle::SlideUp,
};

pub const ALERTS: Stagger = Stagger {
    selector: ".alert",
    step_ms: 100,
    style: StaggerStyle::AnimatedClass,
};

pub const TABLE_ROWS: Stagger = Stagger {
    selector: "tbody tr",
    step_ms: 50,
    style: StaggerStyle::AnimatedClass,
};

pub const STAT_CARDS: Stagger = Stagger {
    selector: ".stat-card, .stat-box",
    step_ms: 150,
    style: StaggerStyle::AnimatedClass,
};

pub const STAGGERS: [Stagger; 4] = [CARDS, ALERTS, TABLE_ROWS, STAT_CARDS];

impl Stagger {
    pub fn delay_ms(&self, index: usize) -> u64 {
        index as u64 * u64::from(self.step_ms)
    }

    /// Patch for the `index`th matching element.
    pub fn patch(&self, index: usize) -> ElementPatch {
        let delay = self.delay_ms(index);
        match self.style {
            StaggerStyle::SlideUp => ElementPatch::new()
                .style("opacity", "0")
                .style("animation", format!("slideUp 0.5s ease-out {delay}ms forwards")),
            StaggerStyle::AnimatedClass => ElementPatch::new()
                .style("animation-delay", format!("{delay}ms"))
                .add_class(ANIMATED_CLASS),
        }
    }
}

pub const EMPTY_STATE_SELECTOR: &str = ".empty-state";

pub fn empty_state() -> ElementPatch {
    ElementPatch::new().style("animation", "fadeIn 0.5s ease-out")
}

/// Reveals an element the first time it intersects the viewport.
///
/// Returns `None` while it's still off screen; once revealed the caller stops observing it.
pub fn reveal(is_intersecting: bool) -> Option<ElementPatch> {
    is_intersecting.then(|| ElementPatch::new().add_class(ANIMATED_CLASS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_slide_in_order() {
        let third = CARDS.patch(2);
        assert_eq!(third.style_value("opacity"), Some("0"));
        assert_eq!(
            third.style_value("animation"),
            Some("slideUp 0.5s ease-out 200ms forwards")
        );
    }

    #[test]
    fn rows_use_fine_steps() {
        assert_eq!(
            TABLE_ROWS.patch(3).style_value("animation-delay"),
            Some("150ms")
        );
        assert_eq!(STAT_CARDS.delay_ms(2), 300);
        assert_eq!(ALERTS.delay_ms(0), 0);
    }

    #[test]
    fn reveal_waits_for_intersection() {
        assert!(reveal(false).is_none());
        assert!(reveal(true).is_some());
    }
}
