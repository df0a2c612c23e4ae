// Copyright 2026 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0

//! Tests for the quick submit state machine, driven through a simulated clock.
//!
//! This is an integration test so that it can use the infrastructure in [`common`].

use rollcall_core::Label;
use rollcall_core::quick_submit::{SubmitOutcome, SubmitPhase};

mod common;
use common::*;

#[test]
fn saving_disables_the_button() {
    let mut harness = RowHarness::new();
    harness.submit();
    assert_eq!(harness.sent, 1);
    assert_eq!(harness.phase(), SubmitPhase::Saving);
    assert!(harness.button.is_disabled());
    assert_eq!(harness.button_text(), "Saving...");
}

#[test]
fn success_marks_present_and_flashes_the_row() {
    let mut harness = RowHarness::new();
    harness.submit();
    harness.resolve(SubmitOutcome::Accepted);

    assert!(harness.button.is_disabled());
    assert_eq!(harness.button_text(), "Marked Present");
    assert!(harness.button.has_class("btn-success"));
    assert!(!harness.button.has_class("btn-primary"));
    assert_eq!(harness.row.style("background-color"), Some("#d4edda"));

    harness.advance_ms(1499);
    assert_eq!(harness.row.style("background-color"), Some("#d4edda"));
    harness.advance_ms(1);
    assert_eq!(harness.row.style("background-color"), None);

    // Still marked, and for good.
    harness.advance_ms(60_000);
    assert!(harness.button.is_disabled());
    assert_eq!(harness.button_text(), "Marked Present");
}

#[test]
fn rejection_shows_error_then_restores_label() {
    let mut harness = RowHarness::new();
    harness.submit();
    harness.resolve(SubmitOutcome::Rejected { status: 500 });

    assert!(!harness.button.is_disabled());
    assert_eq!(harness.button_text(), "Error");
    assert_eq!(harness.row.style("background-color"), None);

    harness.advance_ms(1999);
    assert_eq!(harness.button_text(), "Error");
    harness.advance_ms(1);
    assert_eq!(
        harness.button.label(),
        Some(&Label::Markup(ORIGINAL.to_owned()))
    );
    assert!(!harness.button.is_disabled());
}

#[test]
fn network_errors_behave_like_rejections() {
    let mut harness = RowHarness::new();
    harness.submit();
    harness.resolve(SubmitOutcome::NetworkError("offline".to_owned()));
    assert_eq!(harness.phase(), SubmitPhase::Failed);
    assert_eq!(harness.button_text(), "Error");
    harness.advance_ms(2000);
    assert_eq!(harness.button_text(), ORIGINAL);
}

#[test]
fn no_duplicate_requests() {
    let mut harness = RowHarness::new();
    harness.submit();
    harness.submit();
    assert_eq!(harness.sent, 1);

    harness.resolve(SubmitOutcome::Accepted);
    harness.submit();
    assert_eq!(harness.sent, 1);
    assert_eq!(harness.phase(), SubmitPhase::MarkedPresent);
}

#[test]
fn retry_after_failure_cancels_the_pending_revert() {
    let mut harness = RowHarness::new();
    harness.submit();
    harness.resolve(SubmitOutcome::Rejected { status: 403 });
    harness.advance_ms(500);

    harness.submit();
    assert_eq!(harness.sent, 2);
    assert_eq!(harness.clock.pending(), 0);

    // The old revert would have fired here and clobbered the saving label.
    harness.advance_ms(1500);
    assert_eq!(harness.button_text(), "Saving...");

    harness.resolve(SubmitOutcome::Accepted);
    assert_eq!(harness.button_text(), "Marked Present");
}

#[test]
fn late_outcomes_are_ignored() {
    let mut harness = RowHarness::new();
    harness.resolve(SubmitOutcome::Accepted);
    assert_eq!(harness.phase(), SubmitPhase::Idle);
    assert!(!harness.button.is_disabled());
}
