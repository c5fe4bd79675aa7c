//! crates/people_table_core/src/timer.rs
//!
//! The countdown that runs while the table's count is set.
//!
//! The timer owns at most one pending tick at a time. Scheduled callbacks only
//! hold a weak reference to the timer, and every transition to `Idle` (as well
//! as dropping the timer) cancels the pending tick.

use crate::domain::{TimerConfig, TimerSnapshot, TimerState};
use crate::ports::{TickHandle, TickSource};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::{debug, info};

struct TimerInner {
    ticks: Rc<dyn TickSource>,
    config: TimerConfig,
    state: TimerState,
    input: Option<i64>,
    pending: Option<Box<dyn TickHandle>>,
}

/// A countdown driven by an optional input value.
///
/// - a change to a present value while idle starts counting down from
///   `config.start_from`;
/// - a change between two present values while running is ignored;
/// - clearing the input stops the countdown;
/// - the countdown stops on its own when it reaches zero.
pub struct CountdownTimer {
    inner: Rc<RefCell<TimerInner>>,
}

impl CountdownTimer {
    /// Creates an idle timer. `initial_input` is remembered but does not
    /// start the countdown; only later changes do.
    pub fn new(ticks: Rc<dyn TickSource>, config: TimerConfig, initial_input: Option<i64>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(TimerInner {
                ticks,
                config,
                state: TimerState::Idle,
                input: initial_input,
                pending: None,
            })),
        }
    }

    /// Feeds a new value of the driving input.
    pub fn set_input(&self, input: Option<i64>) {
        let previous = std::mem::replace(&mut self.inner.borrow_mut().input, input);
        if previous == input {
            return;
        }

        match input {
            None => stop(&self.inner, "input cleared"),
            Some(value) if self.is_active() => {
                debug!(value, "Input changed while running; countdown continues.");
            }
            Some(value) => {
                debug!(value, "Input set; starting countdown.");
                start(&self.inner);
            }
        }
    }

    /// Stops a running countdown without touching the recorded input.
    pub fn reset(&self) {
        stop(&self.inner, "reset");
    }

    pub fn state(&self) -> TimerState {
        self.inner.borrow().state
    }

    pub fn is_active(&self) -> bool {
        self.state().is_active()
    }

    /// Seconds left, or `None` when idle.
    pub fn remaining(&self) -> Option<u32> {
        self.state().remaining()
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        self.state().into()
    }

    pub fn input(&self) -> Option<i64> {
        self.inner.borrow().input
    }

    pub fn config(&self) -> TimerConfig {
        self.inner.borrow().config
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        cancel_pending(&self.inner);
    }
}

//=========================================================================================
// Transitions
//=========================================================================================

fn start(this: &Rc<RefCell<TimerInner>>) {
    cancel_pending(this);

    let start_from = this.borrow().config.start_from;
    if start_from == 0 {
        this.borrow_mut().state = TimerState::Idle;
        info!("Countdown configured to start from zero; nothing to run.");
        return;
    }

    this.borrow_mut().state = TimerState::Running {
        remaining: start_from,
    };
    info!(remaining = start_from, "Countdown started.");
    schedule_tick(this);
}

fn stop(this: &Rc<RefCell<TimerInner>>, reason: &str) {
    cancel_pending(this);

    let mut inner = this.borrow_mut();
    if inner.state.is_active() {
        inner.state = TimerState::Idle;
        info!(reason, "Countdown stopped.");
    }
}

fn on_tick(this: &Rc<RefCell<TimerInner>>) {
    let keep_running = {
        let mut inner = this.borrow_mut();
        inner.pending = None;
        let state = inner.state;
        match state {
            // A tick that raced a stop.
            TimerState::Idle => return,
            TimerState::Running { remaining } if remaining <= 1 => {
                inner.state = TimerState::Idle;
                info!("Countdown expired.");
                false
            }
            TimerState::Running { remaining } => {
                inner.state = TimerState::Running {
                    remaining: remaining - 1,
                };
                debug!(remaining = remaining - 1, "Tick.");
                true
            }
        }
    };

    if keep_running {
        schedule_tick(this);
    }
}

fn schedule_tick(this: &Rc<RefCell<TimerInner>>) {
    let (ticks, period) = {
        let inner = this.borrow();
        (inner.ticks.clone(), inner.config.period)
    };

    let weak: Weak<RefCell<TimerInner>> = Rc::downgrade(this);
    let handle = ticks.after(
        period,
        Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                on_tick(&inner);
            }
        }),
    );
    this.borrow_mut().pending = Some(handle);
}

fn cancel_pending(this: &Rc<RefCell<TimerInner>>) {
    let pending = this.borrow_mut().pending.take();
    if let Some(handle) = pending {
        handle.cancel();
    }
}
