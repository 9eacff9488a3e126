//! Deferred one-shot tasks.
//!
//! Tasks run later on the same thread, never concurrently with the code that
//! scheduled them.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// Runs a task once after a delay.
pub trait Scheduler {
    /// Queue `task` to run after `delay`.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

impl<T: Scheduler + ?Sized> Scheduler for Rc<T> {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        (**self).schedule(delay, task);
    }
}

struct PendingTask {
    due: Duration,
    seq: u64,
    task: Box<dyn FnOnce()>,
}

/// Scheduler driven by an explicit clock, for tests.
///
/// Nothing runs until [`ManualScheduler::advance`] moves time past a task's
/// due point. Tasks due at the same instant run in scheduling order.
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<Duration>,
    next_seq: Cell<u64>,
    pending: RefCell<Vec<PendingTask>>,
}

impl ManualScheduler {
    /// Create a scheduler at time zero with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed virtual time.
    pub fn now(&self) -> Duration {
        self.now.get()
    }

    /// Number of tasks still waiting.
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Move the clock forward, running every task that falls due.
    ///
    /// Tasks may schedule further tasks; those run too if they fall due
    /// within the same advance.
    pub fn advance(&self, by: Duration) {
        let target = self.now.get() + by;
        loop {
            let next = {
                let mut pending = self.pending.borrow_mut();
                let earliest = pending
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(_, t)| (t.due, t.seq))
                    .map(|(i, _)| i);
                earliest.map(|i| pending.remove(i))
            };
            let Some(task) = next else { break };
            self.now.set(task.due);
            (task.task)();
        }
        self.now.set(target);
    }
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("now", &self.now.get())
            .field("pending", &self.pending())
            .finish()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        self.pending.borrow_mut().push(PendingTask {
            due: self.now.get() + delay,
            seq,
            task,
        });
    }
}

/// `window.setTimeout`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct TimeoutScheduler {
    window: web_sys::Window,
}

#[cfg(target_arch = "wasm32")]
impl TimeoutScheduler {
    /// Schedule through the given window.
    pub fn new(window: web_sys::Window) -> Self {
        Self { window }
    }
}

#[cfg(target_arch = "wasm32")]
impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        let callback = Closure::once_into_js(move || task());
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        if let Err(e) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref::<js_sys::Function>(),
                millis,
            )
        {
            log::warn!("setTimeout failed: {:?}", e);
        }
    }
}
