// Simulated clock for driving the scheduler in tests.
use std::cell::{Cell, RefCell};

use super::TimerHost;

struct Pending {
    due: u64,
    seq: u64,
    delay: u32,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
pub struct ManualTimers {
    now: Cell<u64>,
    seq: Cell<u64>,
    queue: RefCell<Vec<Pending>>,
}

impl ManualTimers {
    pub fn now(&self) -> u64 {
        self.now.get()
    }

    pub fn pending_delays(&self) -> Vec<u32> {
        self.queue.borrow().iter().map(|p| p.delay).collect()
    }

    /// Moves virtual time forward by `ms`, firing due tasks in order. Tasks that
    /// schedule new work inside the window fire too.
    pub fn advance(&self, ms: u64) {
        let target = self.now.get() + ms;
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let idx = queue
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= target)
                    .min_by_key(|(_, p)| (p.due, p.seq))
                    .map(|(i, _)| i);
                idx.map(|i| queue.remove(i))
            };
            let Some(p) = next else { break };
            self.now.set(p.due);
            (p.task)();
        }
        self.now.set(target);
    }
}

impl TimerHost for ManualTimers {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let seq = self.seq.get();
        self.seq.set(seq + 1);
        self.queue.borrow_mut().push(Pending {
            due: self.now.get() + u64::from(delay_ms),
            seq,
            delay: delay_ms,
            task,
        });
    }

    fn cancel_pending(&self) {
        self.queue.borrow_mut().clear();
    }
}
