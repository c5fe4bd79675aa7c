//! crates/people_table_core/src/domain.rs
//!
//! Defines the pure, core data structures for the people table.
//! These are independent of any scheduler or output format.

use serde::Serialize;
use std::time::Duration;

/// A single synthetic row of the people table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    pub name: String,
    pub email: String,
    pub potatoes: u64,
    pub tags: Vec<String>,
    pub location: String,
}

/// The state of a countdown.
///
/// The remaining seconds only exist while a countdown is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// No countdown is running.
    Idle,
    /// A countdown is running.
    Running {
        /// Seconds left before the countdown expires.
        remaining: u32,
    },
}

impl TimerState {
    pub fn is_active(&self) -> bool {
        matches!(self, TimerState::Running { .. })
    }

    pub fn remaining(&self) -> Option<u32> {
        match self {
            TimerState::Idle => None,
            TimerState::Running { remaining } => Some(*remaining),
        }
    }
}

/// The externally readable view of a countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimerSnapshot {
    pub timer_active: bool,
    pub timer_duration: Option<u32>,
}

impl From<TimerState> for TimerSnapshot {
    fn from(state: TimerState) -> Self {
        Self {
            timer_active: state.is_active(),
            timer_duration: state.remaining(),
        }
    }
}

/// Tunables for a countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    /// Value the countdown (re)starts from.
    pub start_from: u32,
    /// Time between two ticks.
    pub period: Duration,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            start_from: 30,
            period: Duration::from_secs(1),
        }
    }
}
