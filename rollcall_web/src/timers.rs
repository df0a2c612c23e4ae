// Copyright 2026 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use futures::channel::oneshot;
use futures::{FutureExt, select};
use gloo_timers::future::TimeoutFuture;
use rollcall_core::{Scheduler, TimerHandle};
use wasm_bindgen_futures::spawn_local;

type Pending = Rc<RefCell<HashMap<TimerHandle, oneshot::Sender<()>>>>;

/// A [`Scheduler`] backed by browser timeouts.
///
/// Each timer is a task racing a timeout against an abort signal. Due actions
/// are handed to `sink`, outside of any borrow of the scheduler.
pub(crate) struct TimeoutScheduler<A> {
    next: u64,
    pending: Pending,
    sink: Rc<dyn Fn(A)>,
}

impl<A: 'static> TimeoutScheduler<A> {
    pub(crate) fn new(sink: impl Fn(A) + 'static) -> Self {
        Self {
            next: 0,
            pending: Rc::default(),
            sink: Rc::new(sink),
        }
    }
}

impl<A: 'static> Scheduler<A> for TimeoutScheduler<A> {
    fn schedule(&mut self, delay: Duration, action: A) -> TimerHandle {
        let handle = TimerHandle::from_raw(self.next);
        self.next += 1;

        let (abort_tx, abort_rx) = oneshot::channel::<()>();
        self.pending.borrow_mut().insert(handle, abort_tx);

        let pending = Rc::downgrade(&self.pending);
        let sink = Rc::clone(&self.sink);
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        spawn_local(async move {
            let mut timeout = TimeoutFuture::new(millis).fuse();
            // Resolves on `cancel` and when the scheduler is dropped.
            let mut abort = abort_rx.fuse();
            select! {
                () = timeout => {
                    let Some(pending) = pending.upgrade() else {
                        return;
                    };
                    pending.borrow_mut().remove(&handle);
                    drop(pending);
                    sink(action);
                }
                _ = abort => {
                    tracing::trace!(timer = handle.to_raw(), "timer cancelled");
                }
            }
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.pending.borrow_mut().remove(&handle).is_some()
    }
}
