// Copyright 2026 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0

//! Alerts, tooltips and toasts.

use std::time::Duration;

use crate::{ElementPatch, Scheduler, TimerHandle};

/// Every alert on the page; [`dismissals`] picks the ones which close on their own.
pub const ALERT_SELECTOR: &str = ".alert";
/// Success alerts close on their own.
pub const SUCCESS_CLASS: &str = "alert-success";
/// So do dismissible ones.
pub const DISMISSIBLE_CLASS: &str = "alert-dismissible";
/// Elements that get a Bootstrap `Tooltip`.
pub const TOOLTIP_SELECTOR: &str = r#"[data-bs-toggle="tooltip"]"#;
/// Toasts shown as soon as the page loads.
pub const TOAST_SELECTOR: &str = ".toast";

/// Bootstrap's fade duration; the element is detached after it.
pub const FADE: Duration = Duration::from_millis(150);

/// Timer actions, identifying alerts by their index in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertTimer {
    /// Start closing the alert.
    Dismiss(usize),
    /// The fade is over, detach the alert.
    Detach(usize),
}

/// The classes of an alert which decide whether it closes on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlertKind {
    /// Has [`SUCCESS_CLASS`].
    pub success: bool,
    /// Has [`DISMISSIBLE_CLASS`].
    pub dismissible: bool,
}

impl AlertKind {
    /// Whether the alert closes after the dismiss delay.
    pub fn auto_dismiss(self) -> bool {
        self.success || self.dismissible
    }
}

/// Indices of the alerts which close on their own, each listed once.
pub fn dismissals(alerts: &[AlertKind]) -> Vec<usize> {
    alerts
        .iter()
        .enumerate()
        .filter(|(_, kind)| kind.auto_dismiss())
        .map(|(index, _)| index)
        .collect()
}

/// Schedules the dismissal of the alerts at `indices`.
pub fn schedule_dismissals(
    indices: &[usize],
    delay: Duration,
    scheduler: &mut impl Scheduler<AlertTimer>,
) -> Vec<TimerHandle> {
    indices
        .iter()
        .map(|&index| scheduler.schedule(delay, AlertTimer::Dismiss(index)))
        .collect()
}

/// Closing without Bootstrap: fade out now, detach once faded.
pub fn fade_out(index: usize, scheduler: &mut impl Scheduler<AlertTimer>) -> ElementPatch {
    scheduler.schedule(FADE, AlertTimer::Detach(index));
    ElementPatch::new().remove_class("show")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ManualClock;

    #[test]
    fn alerts_close_after_delay_then_detach() {
        let mut clock = ManualClock::new();
        schedule_dismissals(&[0, 1], Duration::from_secs(5), &mut clock);
        assert!(clock.advance(Duration::from_millis(4999)).is_empty());

        let due = clock.advance(Duration::from_millis(1));
        assert_eq!(due, [AlertTimer::Dismiss(0), AlertTimer::Dismiss(1)]);

        let patch = fade_out(0, &mut clock);
        assert_eq!(patch, ElementPatch::new().remove_class("show"));
        assert_eq!(clock.advance(FADE), [AlertTimer::Detach(0)]);
    }

    #[test]
    fn success_and_dismissible_alert_closes_once() {
        let alerts = [
            AlertKind {
                success: true,
                dismissible: true,
            },
            AlertKind::default(),
            AlertKind {
                success: false,
                dismissible: true,
            },
            AlertKind {
                success: true,
                dismissible: false,
            },
        ];
        let indices = dismissals(&alerts);
        assert_eq!(indices, [0, 2, 3]);

        let mut clock = ManualClock::new();
        schedule_dismissals(&indices, Duration::from_secs(5), &mut clock);
        assert_eq!(clock.pending(), 3);
        let due = clock.advance(Duration::from_secs(5));
        assert_eq!(
            due.iter()
                .filter(|timer| **timer == AlertTimer::Dismiss(0))
                .count(),
            1
        );
        assert!(!due.contains(&AlertTimer::Dismiss(1)));
    }
}
