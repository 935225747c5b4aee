//! Periodic refresh loop.
//!
//! The loop owns no timer itself: each tick asks a [`TimerHost`] to call it again
//! after the viewport's *current* interval. A tick already waiting keeps the delay
//! it was scheduled with, so interval edits show up one tick later.

mod browser;
#[cfg(test)]
mod manual;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub use browser::BrowserTimers;

use crate::request::{NonceSource, RequestDescriptor, build_request};
use crate::state::ViewportState;

/// One-shot timer facility. At most one task is pending per host.
pub trait TimerHost {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
    fn cancel_pending(&self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Stopped,
}

pub type RequestSink = Rc<dyn Fn(RequestDescriptor)>;

struct Inner {
    host: Rc<dyn TimerHost>,
    state: Rc<RefCell<ViewportState>>,
    nonce: Rc<dyn NonceSource>,
    sink: RequestSink,
    phase: Cell<Phase>,
    ticks: Cell<u64>,
}

/// Cheap to clone; clones drive the same loop.
#[derive(Clone)]
pub struct RefreshScheduler {
    inner: Rc<Inner>,
}

impl RefreshScheduler {
    pub fn new(
        host: Rc<dyn TimerHost>,
        state: Rc<RefCell<ViewportState>>,
        nonce: Rc<dyn NonceSource>,
        sink: RequestSink,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                host,
                state,
                nonce,
                sink,
                phase: Cell::new(Phase::Idle),
                ticks: Cell::new(0),
            }),
        }
    }

    pub fn phase(&self) -> Phase {
        self.inner.phase.get()
    }

    pub fn ticks(&self) -> u64 {
        self.inner.ticks.get()
    }

    /// Host "ready" signal. Runs the first tick right away; later calls are no-ops.
    pub fn start(&self) {
        if self.inner.phase.get() != Phase::Idle {
            return;
        }
        self.inner.phase.set(Phase::Running);
        tracing::info!(interval_ms = self.inner.state.borrow().interval_ms(), "refresh loop started");
        tick(&self.inner);
    }

    /// Cancels the pending tick. Final: a stopped scheduler never restarts.
    pub fn stop(&self) {
        if self.inner.phase.replace(Phase::Stopped) == Phase::Stopped {
            return;
        }
        self.inner.host.cancel_pending();
        tracing::info!(ticks = self.inner.ticks.get(), "refresh loop stopped");
    }

    /// Out-of-band refresh (keyboard commands). Leaves the tick schedule alone.
    pub fn refresh_now(&self) {
        dispatch(&self.inner);
    }
}

fn dispatch(inner: &Inner) {
    let req = build_request(&inner.state.borrow(), inner.nonce.as_ref());
    (inner.sink)(req);
}

fn tick(inner: &Rc<Inner>) {
    if inner.phase.get() != Phase::Running {
        return;
    }
    inner.ticks.set(inner.ticks.get() + 1);
    dispatch(inner);
    // the sink may have stopped us
    if inner.phase.get() != Phase::Running {
        return;
    }
    let delay = inner.state.borrow().interval_ms();
    let next = Rc::clone(inner);
    inner.host.schedule(delay, Box::new(move || tick(&next)));
}
