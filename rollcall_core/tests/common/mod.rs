// Copyright 2026 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

use rollcall_core::quick_submit::{
    QuickSubmit, SubmitOutcome, SubmitPhase, SubmitTarget, SubmitTimer,
};
use rollcall_core::{Label, ManualClock, Reaction, Settings, VirtualElement};

pub(crate) const ORIGINAL: &str = r#"<i class="bi bi-check"></i> Present"#;

/// One quick-submit form in a table row, driven by a simulated clock.
pub(crate) struct RowHarness {
    pub submit: QuickSubmit,
    pub clock: ManualClock<SubmitTimer>,
    pub button: VirtualElement,
    pub row: VirtualElement,
    /// Requests the harness would have sent.
    pub sent: usize,
}

impl RowHarness {
    pub(crate) fn new() -> Self {
        let label = Label::Markup(ORIGINAL.to_owned());
        Self {
            submit: QuickSubmit::new(label.clone(), true, &Settings::default()),
            clock: ManualClock::new(),
            button: VirtualElement::with_class_name("btn btn-primary btn-sm").with_label(label),
            row: VirtualElement::new(),
            sent: 0,
        }
    }

    fn apply(&mut self, reaction: Reaction<SubmitTarget>) {
        for (target, patch) in reaction {
            match target {
                SubmitTarget::Button => self.button.apply(&patch),
                SubmitTarget::Row => self.row.apply(&patch),
            }
        }
    }

    pub(crate) fn submit(&mut self) {
        if let Some(reaction) = self.submit.submit(&mut self.clock) {
            self.sent += 1;
            self.apply(reaction);
        }
    }

    pub(crate) fn resolve(&mut self, outcome: SubmitOutcome) {
        let reaction = self.submit.resolve(&outcome, &mut self.clock);
        self.apply(reaction);
    }

    pub(crate) fn advance_ms(&mut self, ms: u64) {
        for timer in self.clock.advance(Duration::from_millis(ms)) {
            let reaction = self.submit.on_timer(timer);
            self.apply(reaction);
        }
    }

    pub(crate) fn phase(&self) -> SubmitPhase {
        self.submit.phase()
    }

    pub(crate) fn button_text(&self) -> &str {
        self.button.label().map(Label::text).unwrap_or_default()
    }
}
