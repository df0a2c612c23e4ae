// Copyright 2026 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0

//! Viewport breakpoints and the per-page responsive manager.
//!
//! The manager holds the last viewport it was told about and answers every
//! query from that, so it can be built and exercised without a browser:
//!
//! ```
//! use rollcall_core::{Breakpoint, Breakpoints, ResponsiveManager, Viewport};
//!
//! let mut manager = ResponsiveManager::new(Breakpoints::default(), Viewport::new(500.0));
//! assert_eq!(manager.current_breakpoint(), Breakpoint::Xs);
//! assert!(manager.is_mobile());
//!
//! manager.set_viewport(Viewport::new(1300.0));
//! assert_eq!(manager.current_breakpoint(), Breakpoint::Xl);
//! assert!(manager.is_desktop());
//! ```

#![expect(missing_docs, reason = "queries are named after what they answer")]

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// A named viewport width range, matching Bootstrap's grid tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl Breakpoint {
    /// All breakpoints, narrowest first.
    pub const ALL: [Self; 6] = [Self::Xs, Self::Sm, Self::Md, Self::Lg, Self::Xl, Self::Xxl];

    pub fn name(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "xxl",
        }
    }

    /// Looks a breakpoint up by [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|breakpoint| breakpoint.name() == name)
    }

    /// The body class marking this breakpoint, e.g. `breakpoint-md`.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Xs => "breakpoint-xs",
            Self::Sm => "breakpoint-sm",
            Self::Md => "breakpoint-md",
            Self::Lg => "breakpoint-lg",
            Self::Xl => "breakpoint-xl",
            Self::Xxl => "breakpoint-xxl",
        }
    }

    pub fn device_class(self) -> DeviceClass {
        match self {
            Self::Xs => DeviceClass::Mobile,
            Self::Sm | Self::Md => DeviceClass::Tablet,
            Self::Lg | Self::Xl | Self::Xxl => DeviceClass::Desktop,
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Coarse layout category derived from a [`Breakpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceClass {
    pub const ALL: [Self; 3] = [Self::Mobile, Self::Tablet, Self::Desktop];

    pub fn name(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }

    /// The body class marking this layout, e.g. `is-tablet`.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Mobile => "is-mobile",
            Self::Tablet => "is-tablet",
            Self::Desktop => "is-desktop",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BreakpointError {
    #[error("`{upper}` ({upper_px}px) must be wider than `{lower}` ({lower_px}px)")]
    NotIncreasing {
        lower: Breakpoint,
        lower_px: u32,
        upper: Breakpoint,
        upper_px: u32,
    },
}

/// Minimum widths, in CSS pixels, of every breakpoint above `xs`.
///
/// `xs` always starts at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Breakpoints {
    pub sm: u32,
    pub md: u32,
    pub lg: u32,
    pub xl: u32,
    pub xxl: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            sm: 576,
            md: 768,
            lg: 992,
            xl: 1200,
            xxl: 1400,
        }
    }
}

impl Breakpoints {
    /// Creates a validated set of thresholds.
    pub fn new(sm: u32, md: u32, lg: u32, xl: u32, xxl: u32) -> Result<Self, BreakpointError> {
        let breakpoints = Self { sm, md, lg, xl, xxl };
        breakpoints.validate()?;
        Ok(breakpoints)
    }

    /// Checks that every threshold is strictly wider than the one below it.
    pub fn validate(&self) -> Result<(), BreakpointError> {
        for pair in Breakpoint::ALL.windows(2) {
            let (lower, upper) = (pair[0], pair[1]);
            let (lower_px, upper_px) = (self.min_width(lower), self.min_width(upper));
            if upper_px <= lower_px {
                return Err(BreakpointError::NotIncreasing {
                    lower,
                    lower_px,
                    upper,
                    upper_px,
                });
            }
        }
        Ok(())
    }

    pub fn min_width(&self, breakpoint: Breakpoint) -> u32 {
        match breakpoint {
            Breakpoint::Xs => 0,
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
            Breakpoint::Xxl => self.xxl,
        }
    }

    /// The widest breakpoint whose minimum width `width` reaches.
    pub fn classify(&self, width: f64) -> Breakpoint {
        Breakpoint::ALL
            .into_iter()
            .rev()
            .find(|bp| width >= f64::from(self.min_width(*bp)))
            .unwrap_or(Breakpoint::Xs)
    }
}

/// What the manager knows about the browser window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// `window.innerWidth`
    pub width: f64,
    pub touch: bool,
}

impl Viewport {
    pub fn new(width: f64) -> Self {
        Self {
            width,
            touch: false,
        }
    }

    pub fn with_touch(mut self, touch: bool) -> Self {
        self.touch = touch;
        self
    }
}

/// Answers layout queries for one page.
///
/// Built once when the page initialises and updated from resize events.
#[derive(Debug, Clone)]
pub struct ResponsiveManager {
    breakpoints: Breakpoints,
    viewport: Viewport,
}

impl ResponsiveManager {
    pub fn new(breakpoints: Breakpoints, viewport: Viewport) -> Self {
        Self {
            breakpoints,
            viewport,
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    pub fn current_breakpoint(&self) -> Breakpoint {
        self.breakpoints.classify(self.viewport.width)
    }

    pub fn device_class(&self) -> DeviceClass {
        self.current_breakpoint().device_class()
    }

    pub fn is_mobile(&self) -> bool {
        self.device_class() == DeviceClass::Mobile
    }

    pub fn is_tablet(&self) -> bool {
        self.device_class() == DeviceClass::Tablet
    }

    pub fn is_desktop(&self) -> bool {
        self.device_class() == DeviceClass::Desktop
    }

    pub fn is_at_least(&self, breakpoint: Breakpoint) -> bool {
        self.viewport.width >= f64::from(self.breakpoints.min_width(breakpoint))
    }

    pub fn is_touch(&self) -> bool {
        self.viewport.touch
    }
}

/// Remembers the last breakpoint to report only actual changes.
#[derive(Debug, Clone)]
pub struct BreakpointTracker {
    current: Breakpoint,
}

impl BreakpointTracker {
    pub fn new(manager: &ResponsiveManager) -> Self {
        Self {
            current: manager.current_breakpoint(),
        }
    }

    pub fn current(&self) -> Breakpoint {
        self.current
    }

    /// Returns the new breakpoint if it differs from the previous one.
    pub fn observe(&mut self, manager: &ResponsiveManager) -> Option<Breakpoint> {
        let next = manager.current_breakpoint();
        if next == self.current {
            return None;
        }
        tracing::debug!(from = %self.current, to = %next, "breakpoint changed");
        self.current = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_by_name() {
        assert_eq!(Breakpoint::from_name("md"), Some(Breakpoint::Md));
        assert_eq!(Breakpoint::from_name("xxl"), Some(Breakpoint::Xxl));
        assert_eq!(Breakpoint::from_name("MD"), None);
        assert_eq!(Breakpoint::from_name("huge"), None);
    }

    fn manager(width: f64) -> ResponsiveManager {
        ResponsiveManager::new(Breakpoints::default(), Viewport::new(width))
    }

    #[test]
    fn thresholds_are_inclusive() {
        let expected = [
            (0.0, Breakpoint::Xs),
            (575.9, Breakpoint::Xs),
            (576.0, Breakpoint::Sm),
            (767.0, Breakpoint::Sm),
            (768.0, Breakpoint::Md),
            (992.0, Breakpoint::Lg),
            (1199.0, Breakpoint::Lg),
            (1200.0, Breakpoint::Xl),
            (1400.0, Breakpoint::Xxl),
            (4000.0, Breakpoint::Xxl),
        ];
        for (width, bp) in expected {
            assert_eq!(manager(width).current_breakpoint(), bp, "width {width}");
        }
    }

    #[test]
    fn device_classes() {
        assert!(manager(500.0).is_mobile());
        assert!(manager(600.0).is_tablet());
        assert!(manager(800.0).is_tablet());
        assert!(manager(1000.0).is_desktop());
        assert!(manager(1300.0).is_desktop());
        assert!(!manager(1300.0).is_tablet());
    }

    #[test]
    fn at_least_compares_raw_width() {
        let m = manager(768.0);
        assert!(m.is_at_least(Breakpoint::Md));
        assert!(!m.is_at_least(Breakpoint::Lg));
        assert!(m.is_at_least(Breakpoint::Xs));
    }

    #[test]
    fn tracker_reports_changes_once() {
        let mut m = manager(500.0);
        let mut tracker = BreakpointTracker::new(&m);
        m.set_viewport(Viewport::new(520.0));
        assert_eq!(tracker.observe(&m), None);
        m.set_viewport(Viewport::new(800.0));
        assert_eq!(tracker.observe(&m), Some(Breakpoint::Md));
        assert_eq!(tracker.observe(&m), None);
    }

    #[test]
    fn validation_names_the_offending_pair() {
        let err = Breakpoints::new(576, 500, 992, 1200, 1400).unwrap_err();
        assert_eq!(
            err.to_string(),
            "`md` (500px) must be wider than `sm` (576px)"
        );
        assert!(Breakpoints::new(1, 2, 3, 4, 5).is_ok());
    }
}
