//! crates/people_table_core/src/ports.rs
//!
//! Defines the contracts the core relies on from the outside world.
//! The countdown never sleeps on its own; it asks a `TickSource` to call it
//! back, so hosts can plug in a real runtime and tests a virtual clock.

use std::time::Duration;

//=========================================================================================
// Core Error and Result Types
//=========================================================================================

/// The error type for all core operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// A convenience type alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

//=========================================================================================
// Scheduling Ports (Traits)
//=========================================================================================

/// A one-shot callback handed to a `TickSource`.
pub type TickCallback = Box<dyn FnOnce()>;

/// Schedules one-shot callbacks.
pub trait TickSource {
    /// Runs `callback` once `delay` has elapsed, unless the returned handle
    /// is cancelled first.
    fn after(&self, delay: Duration, callback: TickCallback) -> Box<dyn TickHandle>;
}

/// A handle to a callback scheduled on a `TickSource`.
pub trait TickHandle {
    /// Discards the callback if it has not fired yet. Cancelling twice, or
    /// after the callback fired, does nothing.
    fn cancel(&self);
}
