// Copyright 2026 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0

//! Progress bar widths.

use std::time::Duration;

use crate::{ElementPatch, Scheduler};

/// Elements which declare their width in `data-width`.
pub const WIDTH_SELECTOR: &str = "[data-width]";
/// Bars animated from zero on page load.
pub const ANIMATED_SELECTOR: &str = ".progress-bar-inner > div";

/// Copies a `data-width` value into the inline width, as a percentage.
///
/// The value is taken as written; the server renders plain numbers.
pub fn width_patch(data_width: &str) -> ElementPatch {
    ElementPatch::new().style("width", format!("{data_width}%"))
}

/// Timer action of [`GrowAnimation::start`]: grow the bar at this index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowBar(pub usize);

/// A bar that grows from zero to its declared inline width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrowAnimation {
    target: String,
}

impl GrowAnimation {
    /// `inline_width` is the bar's current `style.width`, possibly empty.
    pub fn new(inline_width: &str) -> Self {
        let target = if inline_width.is_empty() {
            "0%".to_owned()
        } else {
            inline_width.to_owned()
        };
        Self { target }
    }

    /// The width the bar grows to.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Resets the bar now and schedules its growth as bar `index` after `delay`.
    pub fn start(
        &self,
        index: usize,
        delay: Duration,
        scheduler: &mut impl Scheduler<GrowBar>,
    ) -> ElementPatch {
        scheduler.schedule(delay, GrowBar(index));
        self.reset()
    }

    /// Applied immediately.
    pub fn reset(&self) -> ElementPatch {
        ElementPatch::new().style("width", "0%")
    }

    /// Applied once the animation delay has passed.
    pub fn grow(&self) -> ElementPatch {
        ElementPatch::new()
            .style("transition", "width 1s ease-out")
            .style("width", self.target.clone())
    }
}
