// Copyright 2026 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use rollcall_core::Settings;
use rollcall_core::progress::{
    ANIMATED_SELECTOR, GrowAnimation, GrowBar, WIDTH_SELECTOR, width_patch,
};
use web_sys::Element;

use crate::Result;
use crate::apply::apply_patch;
use crate::events::report;
use crate::timers::TimeoutScheduler;
use crate::util::{inline_style, query_all};

/// Copies `data-width` into the inline width of every bar.
pub(crate) fn install() -> Result<()> {
    let bars = query_all(WIDTH_SELECTOR)?;
    for bar in &bars {
        if let Some(width) = bar.get_attribute("data-width") {
            apply_patch(bar, &width_patch(&width))?;
        }
    }
    tracing::debug!(bars = bars.len(), "progress bars sized");
    Ok(())
}

/// Grows inner bars from zero to their declared width.
pub(crate) fn install_animation(settings: &Settings) -> Result<()> {
    let mut bars = Vec::new();
    for bar in query_all(ANIMATED_SELECTOR)? {
        let animation = GrowAnimation::new(&inline_style(&bar, "width"));
        bars.push((bar, animation));
    }
    if bars.is_empty() {
        return Ok(());
    }
    let delay = settings.delays.progress_animation();
    let this = Rc::new_cyclic(|weak: &Weak<RefCell<GrowingBars>>| {
        let weak = weak.clone();
        RefCell::new(GrowingBars {
            bars,
            scheduler: TimeoutScheduler::new(move |timer| {
                if let Some(this) = weak.upgrade() {
                    report("progress animation", this.borrow().on_timer(timer));
                }
            }),
        })
    });
    {
        let mut guard = this.borrow_mut();
        let GrowingBars { bars, scheduler } = &mut *guard;
        for (index, (bar, animation)) in bars.iter().enumerate() {
            apply_patch(bar, &animation.start(index, delay, scheduler))?;
        }
    }
    // The scheduler must outlive its timers; the bars live as long as the page.
    std::mem::forget(this);
    Ok(())
}

struct GrowingBars {
    bars: Vec<(Element, GrowAnimation)>,
    scheduler: TimeoutScheduler<GrowBar>,
}

impl GrowingBars {
    fn on_timer(&self, GrowBar(index): GrowBar) -> Result<()> {
        match self.bars.get(index) {
            Some((bar, animation)) => apply_patch(bar, &animation.grow()),
            None => Ok(()),
        }
    }
}
