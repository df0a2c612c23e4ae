// Copyright 2026 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use rollcall_core::animation::{self, STAGGERS};
use rollcall_core::forms::{self, RestoreButton, SubmitLoading};
use rollcall_core::notifications::{self, AlertKind, AlertTimer};
use rollcall_core::quick_submit;
use rollcall_core::{Settings, status, table};
use web_sys::Element;

use crate::apply::{apply_patch, label_of};
use crate::bootstrap::{self, Alert};
use crate::events::{listen, report};
use crate::timers::TimeoutScheduler;
use crate::util::{field_value, query_all};
use crate::{Result, run};

pub(crate) fn install(settings: &Settings) -> Result<()> {
    run("tooltip markers", mark_tooltips);
    run("loading states", || install_loading_states(settings));
    run("row hover", || install_row_hover(settings));
    run("status selects", install_status_selects);
    run("entrance animations", animate_entrances);
    run("search focus", install_search_focus);
    run("alert dismissal", || AlertDismissal::install(settings));
    Ok(())
}

fn mark_tooltips() -> Result<()> {
    for element in query_all(forms::TOOLTIP_SELECTOR)? {
        apply_patch(&element, &forms::tooltip_marker())?;
    }
    Ok(())
}

fn install_loading_states(settings: &Settings) -> Result<()> {
    let revert_after = settings.delays.loading_revert();
    for form in query_all("form")? {
        // Quick-submit forms manage their own button.
        if form.matches(quick_submit::FORM_SELECTOR)? {
            continue;
        }
        let Some(button) = form.query_selector(forms::SUBMIT_BUTTON_SELECTOR)? else {
            continue;
        };
        let loading = Rc::new_cyclic(|weak: &Weak<RefCell<SubmitButton>>| {
            let weak = weak.clone();
            RefCell::new(SubmitButton {
                state: SubmitLoading::new(label_of(&button), revert_after),
                scheduler: TimeoutScheduler::new(move |timer| {
                    if let Some(this) = weak.upgrade() {
                        this.borrow_mut().on_timer(timer);
                    }
                }),
                button,
            })
        });
        listen(&form, "submit", move |_: web_sys::Event| {
            let mut guard = loading.borrow_mut();
            let this = &mut *guard;
            let patch = this.state.on_submit(&mut this.scheduler);
            report("loading state", apply_patch(&this.button, &patch));
        })?;
    }
    Ok(())
}

struct SubmitButton {
    button: Element,
    state: SubmitLoading,
    scheduler: TimeoutScheduler<RestoreButton>,
}

impl SubmitButton {
    fn on_timer(&mut self, timer: RestoreButton) {
        let patch = self.state.on_timer(timer);
        report("loading revert", apply_patch(&self.button, &patch));
    }
}

fn install_row_hover(settings: &Settings) -> Result<()> {
    for row in query_all(table::HOVER_ROW_SELECTOR)? {
        apply_patch(&row, &table::hover_init())?;
        for (event, entered) in [("mouseenter", true), ("mouseleave", false)] {
            let target = row.clone();
            let color = settings.colors.row_hover.clone();
            listen(&row, event, move |_: web_sys::Event| {
                report("row hover", apply_patch(&target, &table::hover(entered, &color)));
            })?;
        }
    }
    Ok(())
}

fn install_status_selects() -> Result<()> {
    for select in query_all(status::SELECTOR)? {
        apply_patch(&select, &status::select_patch(&field_value(&select)))?;
        let target = select.clone();
        listen(&select, "change", move |_: web_sys::Event| {
            let patch = status::select_patch(&field_value(&target));
            report("status select", apply_patch(&target, &patch));
        })?;
    }
    Ok(())
}

fn animate_entrances() -> Result<()> {
    for stagger in &STAGGERS {
        for (index, element) in query_all(stagger.selector)?.iter().enumerate() {
            apply_patch(element, &stagger.patch(index))?;
        }
    }
    for element in query_all(animation::EMPTY_STATE_SELECTOR)? {
        apply_patch(&element, &animation::empty_state())?;
    }
    Ok(())
}

fn install_search_focus() -> Result<()> {
    for input in query_all(forms::SEARCH_SELECTOR)? {
        for (event, focused) in [("focus", true), ("blur", false)] {
            let target = input.clone();
            listen(&input, event, move |_: web_sys::Event| {
                report("search focus", apply_patch(&target, &forms::search_focus(focused)));
            })?;
        }
    }
    Ok(())
}

/// Closes success and dismissible alerts a few seconds after load.
struct AlertDismissal {
    alerts: Vec<Element>,
    scheduler: TimeoutScheduler<AlertTimer>,
}

impl AlertDismissal {
    fn install(settings: &Settings) -> Result<()> {
        let alerts = query_all(notifications::ALERT_SELECTOR)?;
        let kinds: Vec<_> = alerts
            .iter()
            .map(|alert| {
                let classes = alert.class_list();
                AlertKind {
                    success: classes.contains(notifications::SUCCESS_CLASS),
                    dismissible: classes.contains(notifications::DISMISSIBLE_CLASS),
                }
            })
            .collect();
        let closing = notifications::dismissals(&kinds);
        if closing.is_empty() {
            return Ok(());
        }
        let this = Rc::new_cyclic(|weak: &Weak<RefCell<Self>>| {
            let weak = weak.clone();
            RefCell::new(Self {
                alerts,
                scheduler: TimeoutScheduler::new(move |timer| {
                    if let Some(this) = weak.upgrade() {
                        report("alert dismissal", this.borrow_mut().on_timer(timer));
                    }
                }),
            })
        });
        let delay = settings.delays.alert_dismiss();
        notifications::schedule_dismissals(&closing, delay, &mut this.borrow_mut().scheduler);
        tracing::debug!(count = closing.len(), "alerts will close in {delay:?}");
        // Pending timers only hold a weak reference; keep the alerts for the page's lifetime.
        std::mem::forget(this);
        Ok(())
    }

    fn on_timer(&mut self, timer: AlertTimer) -> Result<()> {
        match timer {
            AlertTimer::Dismiss(index) => {
                let Some(alert) = self.alerts.get(index) else {
                    return Ok(());
                };
                if bootstrap::is_loaded() {
                    Alert::new(alert)?.close();
                } else {
                    let patch = notifications::fade_out(index, &mut self.scheduler);
                    apply_patch(alert, &patch)?;
                }
            }
            AlertTimer::Detach(index) => {
                if let Some(alert) = self.alerts.get(index) {
                    alert.remove();
                }
            }
        }
        Ok(())
    }
}
