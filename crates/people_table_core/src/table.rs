//! crates/people_table_core/src/table.rs
//!
//! The people table component: a `count` property, the rows generated for
//! it, and the countdown the count drives.

use crate::domain::{Person, TimerConfig, TimerSnapshot};
use crate::generator::generate_people;
use crate::ports::{CoreResult, TickSource};
use crate::timer::CountdownTimer;
use std::rc::Rc;
use tracing::{info, warn};

pub struct PeopleTable {
    count: Option<i64>,
    rows: Vec<Person>,
    timer: CountdownTimer,
}

impl PeopleTable {
    /// Mounts the table with its initial count. Rows are generated right
    /// away; the countdown stays idle until the count changes.
    pub fn mount(
        ticks: Rc<dyn TickSource>,
        config: TimerConfig,
        count: Option<i64>,
    ) -> CoreResult<Self> {
        let rows = rows_for(count)?;
        info!(?count, rows = rows.len(), "People table mounted.");
        Ok(Self {
            count,
            rows,
            timer: CountdownTimer::new(ticks, config, count),
        })
    }

    /// Updates the `count` property.
    ///
    /// A rejected count leaves the rows, the recorded count and the countdown
    /// untouched.
    pub fn set_count(&mut self, count: Option<i64>) -> CoreResult<()> {
        if count == self.count {
            return Ok(());
        }

        self.rows = rows_for(count).map_err(|e| {
            warn!(?count, "Rejected count: {}", e);
            e
        })?;
        self.count = count;
        info!(?count, rows = self.rows.len(), "People table count changed.");

        self.timer.set_input(count);
        Ok(())
    }

    pub fn count(&self) -> Option<i64> {
        self.count
    }

    pub fn rows(&self) -> &[Person] {
        &self.rows
    }

    pub fn timer_active(&self) -> bool {
        self.timer.is_active()
    }

    /// Seconds left on the countdown, or `None` when it is not running.
    pub fn timer_duration(&self) -> Option<u32> {
        self.timer.remaining()
    }

    pub fn timer_snapshot(&self) -> TimerSnapshot {
        self.timer.snapshot()
    }

    pub fn timer(&self) -> &CountdownTimer {
        &self.timer
    }
}

fn rows_for(count: Option<i64>) -> CoreResult<Vec<Person>> {
    match count {
        Some(count) => generate_people(count),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::VirtualClock;
    use crate::ports::CoreError;

    #[test]
    fn mount_generates_rows_for_initial_count() {
        let clock = VirtualClock::new();
        let table = PeopleTable::mount(Rc::new(clock), TimerConfig::default(), Some(4)).unwrap();
        assert_eq!(table.rows().len(), 4);
        assert!(!table.timer_active());
    }

    #[test]
    fn mount_without_count_is_empty() {
        let clock = VirtualClock::new();
        let table = PeopleTable::mount(Rc::new(clock), TimerConfig::default(), None).unwrap();
        assert!(table.rows().is_empty());
        assert_eq!(table.count(), None);
    }

    #[test]
    fn mount_rejects_negative_count() {
        let clock = VirtualClock::new();
        let result = PeopleTable::mount(Rc::new(clock), TimerConfig::default(), Some(-1));
        assert!(matches!(result, Err(CoreError::InvalidArgument(_))));
    }

    #[test]
    fn negative_count_leaves_table_untouched() {
        let clock = VirtualClock::new();
        let mut table =
            PeopleTable::mount(Rc::new(clock.clone()), TimerConfig::default(), Some(2)).unwrap();
        let before = table.rows().to_vec();

        let err = table.set_count(Some(-5)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument(_)));
        assert_eq!(table.rows(), before.as_slice());
        assert_eq!(table.count(), Some(2));
        assert!(!table.timer_active());
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn clearing_count_clears_rows() {
        let clock = VirtualClock::new();
        let mut table =
            PeopleTable::mount(Rc::new(clock), TimerConfig::default(), Some(3)).unwrap();
        table.set_count(Some(6)).unwrap();
        assert_eq!(table.rows().len(), 6);

        table.set_count(None).unwrap();
        assert!(table.rows().is_empty());
        assert!(!table.timer_active());
        assert_eq!(table.timer().input(), None);
    }

    #[test]
    fn count_changes_reach_the_timer() {
        let clock = VirtualClock::new();
        let mut table =
            PeopleTable::mount(Rc::new(clock), TimerConfig::default(), Some(3)).unwrap();
        assert_eq!(table.timer().input(), Some(3));
        assert_eq!(table.timer().config(), TimerConfig::default());

        table.set_count(Some(5)).unwrap();
        assert_eq!(table.timer().input(), Some(5));
        assert_eq!(table.timer().remaining(), table.timer_duration());
    }
}
