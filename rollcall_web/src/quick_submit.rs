// Copyright 2026 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0

//! Marks a student present without reloading the register.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_net::http::Request;
use rollcall_core::{Reaction, Settings};
use rollcall_core::forms::SUBMIT_BUTTON_SELECTOR;
use rollcall_core::quick_submit::{
    FORM_SELECTOR, MarkPresentForm, MarkPresentRequest, QuickSubmit, SubmitOutcome, SubmitTarget,
    SubmitTimer,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, FormData};

use crate::apply::{apply_reaction, label_of};
use crate::events::listen;
use crate::timers::TimeoutScheduler;
use crate::util::{field_value, query_all};
use crate::{Error, Result};

const CSRF_SELECTOR: &str = r#"[name="csrfmiddlewaretoken"]"#;

pub(crate) fn install(settings: &Settings) -> Result<()> {
    let forms = query_all(FORM_SELECTOR)?;
    let mut installed = 0;
    for form in forms {
        match QuickSubmitForm::attach(form, settings) {
            Ok(()) => installed += 1,
            Err(err) => tracing::warn!(%err, "skipping quick-submit form"),
        }
    }
    tracing::debug!(installed, "quick-submit forms ready");
    Ok(())
}

struct QuickSubmitForm {
    form: Element,
    button: Element,
    row: Option<Element>,
    csrf: Element,
    state: QuickSubmit,
    scheduler: TimeoutScheduler<SubmitTimer>,
}

impl QuickSubmitForm {
    fn attach(form: Element, settings: &Settings) -> Result<()> {
        if form.get_attribute("data-student-id").is_none() {
            return Err(Error::MissingAttribute {
                element: FORM_SELECTOR,
                attribute: "data-student-id",
            });
        }
        let csrf = form
            .query_selector(CSRF_SELECTOR)?
            .ok_or(Error::MissingElement(CSRF_SELECTOR))?;
        let button = form
            .query_selector(SUBMIT_BUTTON_SELECTOR)?
            .ok_or(Error::MissingElement(SUBMIT_BUTTON_SELECTOR))?;
        let row = form.closest("tr")?;

        let state = QuickSubmit::new(label_of(&button), row.is_some(), settings);
        let this = Rc::new_cyclic(|weak: &Weak<RefCell<Self>>| {
            let weak = weak.clone();
            let scheduler = TimeoutScheduler::new(move |timer| {
                if let Some(this) = weak.upgrade() {
                    this.borrow_mut().on_timer(timer);
                }
            });
            RefCell::new(Self {
                form: form.clone(),
                button,
                row,
                csrf,
                state,
                scheduler,
            })
        });

        listen(&form, "submit", move |event: web_sys::Event| {
            event.prevent_default();
            Self::on_submit(&this);
        })
    }

    /// The form as it reads right now; the token is read late in case the page rotated it.
    fn snapshot(&self) -> MarkPresentForm {
        MarkPresentForm {
            action: self.form.get_attribute("action").unwrap_or_default(),
            student_id: self.form.get_attribute("data-student-id").unwrap_or_default(),
            session_id: self.form.get_attribute("data-session-id"),
            csrf_token: field_value(&self.csrf),
        }
    }

    fn on_submit(this: &Rc<RefCell<Self>>) {
        let request = {
            let mut guard = this.borrow_mut();
            let form = &mut *guard;
            let Some(reaction) = form.state.submit(&mut form.scheduler) else {
                return;
            };
            form.apply(&reaction);
            form.snapshot().request()
        };
        tracing::debug!(url = %request.url, "marking present");

        let this = Rc::clone(this);
        spawn_local(async move {
            let outcome = match send(&request).await {
                Ok(()) => SubmitOutcome::Accepted,
                Err(Error::Status(status)) => SubmitOutcome::Rejected { status },
                Err(err) => SubmitOutcome::NetworkError(err.to_string()),
            };
            let mut guard = this.borrow_mut();
            let form = &mut *guard;
            let reaction = form.state.resolve(&outcome, &mut form.scheduler);
            form.apply(&reaction);
        });
    }

    fn on_timer(&mut self, timer: SubmitTimer) {
        let reaction = self.state.on_timer(timer);
        self.apply(&reaction);
    }

    fn apply(&self, reaction: &Reaction<SubmitTarget>) {
        let result = apply_reaction(reaction, |target| match target {
            SubmitTarget::Button => Some(self.button.clone()),
            SubmitTarget::Row => self.row.clone(),
        });
        if let Err(err) = result {
            tracing::error!(%err, "failed to update quick-submit form");
        }
    }
}

/// Posts the request as form data; anything but a 2xx answer is an error.
async fn send(request: &MarkPresentRequest) -> Result<()> {
    let body = FormData::new()?;
    for (name, value) in &request.fields {
        body.append_with_str(name, value)?;
    }
    let mut builder = Request::post(&request.url);
    for (name, value) in request.headers() {
        builder = builder.header(name, value);
    }
    let response = builder.body(body)?.send().await?;
    if response.ok() {
        Ok(())
    } else {
        Err(Error::Status(response.status()))
    }
}
