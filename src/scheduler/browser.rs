use std::cell::RefCell;

use gloo_timers::callback::Timeout;

use super::TimerHost;

/// `setTimeout`-backed host. Dropping a gloo `Timeout` clears it, so holding the
/// handle here is what keeps the next tick alive.
#[derive(Default)]
pub struct BrowserTimers {
    pending: RefCell<Option<Timeout>>,
}

impl TimerHost for BrowserTimers {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let timeout = Timeout::new(delay_ms, task);
        // replaces the handle of the timeout that just fired
        let _ = self.pending.replace(Some(timeout));
    }

    fn cancel_pending(&self) {
        if let Some(t) = self.pending.borrow_mut().take() {
            let _ = t.cancel();
        }
    }
}
