//! crates/people_table_core/src/clock.rs
//!
//! A manually driven `TickSource`. Time only moves when `advance` is called,
//! which makes countdowns testable without real delays.

use crate::ports::{TickCallback, TickHandle, TickSource};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Callbacks are keyed by deadline, then by scheduling order.
type Key = (Duration, u64);

#[derive(Default)]
struct ClockInner {
    now: Duration,
    next_seq: u64,
    queue: BTreeMap<Key, TickCallback>,
}

/// A virtual clock. Cloning it yields another handle to the same timeline.
#[derive(Clone, Default)]
pub struct VirtualClock {
    inner: Rc<RefCell<ClockInner>>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the clock was created.
    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    /// Number of callbacks waiting to fire.
    pub fn pending(&self) -> usize {
        self.inner.borrow().queue.len()
    }

    /// Moves time forward by `by`, firing every callback that falls due in
    /// deadline order. Callbacks scheduled while advancing fire too if their
    /// deadline is inside the window. Time saturates at `Duration::MAX`.
    pub fn advance(&self, by: Duration) {
        let target = self.now().saturating_add(by);
        loop {
            let due = {
                let mut inner = self.inner.borrow_mut();
                let next = inner.queue.keys().next().map(|&(deadline, _)| deadline);
                match next {
                    Some(deadline) if deadline <= target => {
                        inner.now = deadline;
                        inner.queue.pop_first()
                    }
                    _ => None,
                }
            };
            // The borrow is released before running, so callbacks may reschedule.
            match due {
                Some((_, callback)) => callback(),
                None => break,
            }
        }
        self.inner.borrow_mut().now = target;
    }
}

impl TickSource for VirtualClock {
    fn after(&self, delay: Duration, callback: TickCallback) -> Box<dyn TickHandle> {
        let mut inner = self.inner.borrow_mut();
        let key = (inner.now.saturating_add(delay), inner.next_seq);
        inner.next_seq += 1;
        inner.queue.insert(key, callback);
        Box::new(VirtualTickHandle {
            clock: Rc::downgrade(&self.inner),
            key,
        })
    }
}

struct VirtualTickHandle {
    clock: Weak<RefCell<ClockInner>>,
    key: Key,
}

impl TickHandle for VirtualTickHandle {
    fn cancel(&self) {
        let Some(clock) = self.clock.upgrade() else {
            return;
        };
        // The callback is dropped after the borrow ends.
        let removed = clock.borrow_mut().queue.remove(&self.key);
        drop(removed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<u32>>, impl Fn() -> TickCallback) {
        let hits = Rc::new(Cell::new(0));
        let make = {
            let hits = hits.clone();
            move || -> TickCallback {
                let hits = hits.clone();
                Box::new(move || hits.set(hits.get() + 1))
            }
        };
        (hits, make)
    }

    #[test]
    fn fires_only_when_due() {
        let clock = VirtualClock::new();
        let (hits, make) = counter();
        clock.after(Duration::from_millis(1000), make());

        clock.advance(Duration::from_millis(999));
        assert_eq!(hits.get(), 0);
        clock.advance(Duration::from_millis(1));
        assert_eq!(hits.get(), 1);
        assert_eq!(clock.pending(), 0);
        assert_eq!(clock.now(), Duration::from_millis(1000));
    }

    #[test]
    fn cancelled_callbacks_never_fire() {
        let clock = VirtualClock::new();
        let (hits, make) = counter();
        let handle = clock.after(Duration::from_secs(1), make());
        handle.cancel();
        handle.cancel();

        assert_eq!(clock.pending(), 0);
        clock.advance(Duration::from_secs(5));
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn rescheduled_callbacks_fire_within_the_window() {
        fn chain(clock: VirtualClock, order: Rc<RefCell<Vec<Duration>>>, left: u32) {
            if left == 0 {
                return;
            }
            let next = clock.clone();
            clock.after(
                Duration::from_secs(1),
                Box::new(move || {
                    order.borrow_mut().push(next.now());
                    chain(next, order, left - 1);
                }),
            );
        }

        let clock = VirtualClock::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        chain(clock.clone(), order.clone(), 3);

        clock.advance(Duration::from_millis(2500));
        assert_eq!(
            *order.borrow(),
            vec![Duration::from_secs(1), Duration::from_secs(2)]
        );
        assert_eq!(clock.pending(), 1);
    }

    #[test]
    fn advancing_past_the_end_of_time_saturates() {
        let clock = VirtualClock::new();
        let (hits, make) = counter();
        clock.after(Duration::from_secs(2), make());

        clock.advance(Duration::from_secs(1));
        clock.advance(Duration::MAX);
        assert_eq!(clock.now(), Duration::MAX);
        assert_eq!(hits.get(), 1);

        clock.after(Duration::from_secs(1), make());
        clock.advance(Duration::from_secs(1));
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn same_deadline_runs_in_scheduling_order() {
        let clock = VirtualClock::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for label in ["a", "b", "c"] {
            let order = order.clone();
            clock.after(
                Duration::from_secs(1),
                Box::new(move || order.borrow_mut().push(label)),
            );
        }
        clock.advance(Duration::from_secs(1));
        assert_eq!(*order.borrow(), vec!["a", "b", "c"]);
    }
}
