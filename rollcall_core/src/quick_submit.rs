// Copyright 2026 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0

//! Background "mark present" submission for a single student row.
//!
//! The DOM adapter owns one [`QuickSubmit`] per form. It calls
//! [`QuickSubmit::submit`] when the form is submitted, sends the returned
//! request, and reports the outcome with [`QuickSubmit::resolve`]. Reversions
//! come back through the [`Scheduler`] as [`SubmitTimer`] actions.

#![expect(missing_docs, reason = "field names are self-descriptive")]

use crate::{ElementPatch, Label, Reaction, Scheduler, Settings, TimerHandle};

/// Forms handled by quick submit.
pub const FORM_SELECTOR: &str = ".mark-present-form";
/// Hidden field carrying the CSRF token.
pub const CSRF_FIELD: &str = "csrfmiddlewaretoken";
/// Header marking the request as a background request.
pub const REQUESTED_WITH: (&str, &str) = ("X-Requested-With", "XMLHttpRequest");

pub const SAVING_LABEL: Label = Label::Icon {
    icon: "hourglass-split",
    text: "Saving...",
};
pub const MARKED_LABEL: Label = Label::Icon {
    icon: "check-circle",
    text: "Marked Present",
};
pub const ERROR_LABEL: Label = Label::Icon {
    icon: "exclamation-circle",
    text: "Error",
};

/// What the page tells us about one quick-submit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkPresentForm {
    /// The form's `action` attribute.
    pub action: String,
    /// `data-student-id`
    pub student_id: String,
    /// `data-session-id`; not sent, the action URL already names the session.
    pub session_id: Option<String>,
    pub csrf_token: String,
}

impl MarkPresentForm {
    /// The request marking this student present.
    pub fn request(&self) -> MarkPresentRequest {
        let id = &self.student_id;
        MarkPresentRequest {
            url: self.action.clone(),
            fields: vec![
                (format!("status_{id}"), "present".to_owned()),
                (format!("remarks_{id}"), String::new()),
                (CSRF_FIELD.to_owned(), self.csrf_token.clone()),
            ],
        }
    }
}

/// A form-encoded POST, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkPresentRequest {
    pub url: String,
    pub fields: Vec<(String, String)>,
}

impl MarkPresentRequest {
    pub const METHOD: &'static str = "POST";

    pub fn headers(&self) -> [(&'static str, &'static str); 1] {
        [REQUESTED_WITH]
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// How the background request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The server answered with an ok (2xx) status.
    Accepted,
    /// The server answered with any other status.
    Rejected { status: u16 },
    /// The request never got an answer.
    NetworkError(String),
}

impl SubmitOutcome {
    pub fn from_status(status: u16) -> Self {
        if (200..300).contains(&status) {
            Self::Accepted
        } else {
            Self::Rejected { status }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Elements a quick submit changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitTarget {
    /// The form's submit button.
    Button,
    /// The table row containing the form.
    Row,
}

/// Delayed reversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitTimer {
    ClearRowHighlight,
    RestoreLabel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Saving,
    MarkedPresent,
    Failed,
}

/// Per-form quick submit state.
#[derive(Debug)]
pub struct QuickSubmit {
    phase: SubmitPhase,
    original_label: Label,
    has_row: bool,
    row_color: String,
    row_flash: std::time::Duration,
    error_label: std::time::Duration,
    row_timer: Option<TimerHandle>,
    label_timer: Option<TimerHandle>,
}

impl QuickSubmit {
    /// `original_label` is the button content to restore after an error.
    pub fn new(original_label: Label, has_row: bool, settings: &Settings) -> Self {
        Self {
            phase: SubmitPhase::Idle,
            original_label,
            has_row,
            row_color: settings.colors.row_flash.clone(),
            row_flash: settings.delays.row_flash(),
            error_label: settings.delays.error_label(),
            row_timer: None,
            label_timer: None,
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Starts a submission.
    ///
    /// Returns `None` while a request is in flight or after the student was
    /// marked, in which case no request must be sent.
    pub fn submit(
        &mut self,
        scheduler: &mut impl Scheduler<SubmitTimer>,
    ) -> Option<Reaction<SubmitTarget>> {
        match self.phase {
            SubmitPhase::Saving | SubmitPhase::MarkedPresent => {
                tracing::trace!(phase = ?self.phase, "ignoring repeated submit");
                return None;
            }
            SubmitPhase::Idle | SubmitPhase::Failed => {}
        }
        if let Some(handle) = self.label_timer.take() {
            scheduler.cancel(handle);
        }
        self.phase = SubmitPhase::Saving;
        Some(Reaction::new().with(
            SubmitTarget::Button,
            ElementPatch::new().disabled(true).label(SAVING_LABEL),
        ))
    }

    /// Applies the outcome of the request started by [`submit`](Self::submit).
    pub fn resolve(
        &mut self,
        outcome: &SubmitOutcome,
        scheduler: &mut impl Scheduler<SubmitTimer>,
    ) -> Reaction<SubmitTarget> {
        if self.phase != SubmitPhase::Saving {
            tracing::warn!(phase = ?self.phase, "outcome without a pending submit");
            return Reaction::new();
        }
        if outcome.is_success() {
            self.phase = SubmitPhase::MarkedPresent;
            let mut reaction = Reaction::new().with(
                SubmitTarget::Button,
                ElementPatch::new()
                    .add_class("btn-success")
                    .remove_class("btn-primary")
                    .label(MARKED_LABEL)
                    .disabled(true),
            );
            if self.has_row {
                if let Some(handle) = self.row_timer.take() {
                    scheduler.cancel(handle);
                }
                reaction.push(
                    SubmitTarget::Row,
                    ElementPatch::new().style("background-color", self.row_color.clone()),
                );
                self.row_timer =
                    Some(scheduler.schedule(self.row_flash, SubmitTimer::ClearRowHighlight));
            }
            reaction
        } else {
            tracing::error!(?outcome, "failed to mark attendance");
            self.phase = SubmitPhase::Failed;
            self.label_timer =
                Some(scheduler.schedule(self.error_label, SubmitTimer::RestoreLabel));
            Reaction::new().with(
                SubmitTarget::Button,
                ElementPatch::new().disabled(false).label(ERROR_LABEL),
            )
        }
    }

    /// Handles a reversion scheduled by this state.
    pub fn on_timer(&mut self, timer: SubmitTimer) -> Reaction<SubmitTarget> {
        match timer {
            SubmitTimer::ClearRowHighlight => {
                self.row_timer = None;
                Reaction::new().with(
                    SubmitTarget::Row,
                    ElementPatch::new().clear_style("background-color"),
                )
            }
            SubmitTimer::RestoreLabel => {
                self.label_timer = None;
                Reaction::new().with(
                    SubmitTarget::Button,
                    ElementPatch::new().label(self.original_label.clone()),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_fields_follow_server_naming() {
        let form = MarkPresentForm {
            action: "/sessions/7/attendance/".to_owned(),
            student_id: "42".to_owned(),
            session_id: Some("7".to_owned()),
            csrf_token: "tok".to_owned(),
        };
        let request = form.request();
        assert_eq!(request.url, "/sessions/7/attendance/");
        assert_eq!(request.field("status_42"), Some("present"));
        assert_eq!(request.field("remarks_42"), Some(""));
        assert_eq!(request.field(CSRF_FIELD), Some("tok"));
        assert_eq!(request.fields.len(), 3);
        assert_eq!(request.headers(), [("X-Requested-With", "XMLHttpRequest")]);
    }

    #[test]
    fn ok_statuses() {
        assert!(SubmitOutcome::from_status(200).is_success());
        assert!(SubmitOutcome::from_status(204).is_success());
        assert!(!SubmitOutcome::from_status(302).is_success());
        assert_eq!(
            SubmitOutcome::from_status(403),
            SubmitOutcome::Rejected { status: 403 }
        );
    }
}
