//! services/table/src/adapters/tokio_ticks.rs
//!
//! This module contains the tokio-backed implementation of the `TickSource`
//! port from the `core` crate.

use people_table_core::ports::{TickCallback, TickHandle, TickSource};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// Runs tick callbacks on the current `LocalSet`.
///
/// Callbacks are not `Send`, so `after` must be called from inside a
/// `tokio::task::LocalSet`; calling it anywhere else panics.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioTickSource;

impl TokioTickSource {
    pub fn new() -> Self {
        Self
    }
}

//=========================================================================================
// `TickSource` Trait Implementation
//=========================================================================================

impl TickSource for TokioTickSource {
    fn after(&self, delay: Duration, callback: TickCallback) -> Box<dyn TickHandle> {
        let token = CancellationToken::new();
        let cancelled = token.clone();

        tokio::task::spawn_local(async move {
            tokio::select! {
                biased;
                _ = cancelled.cancelled() => {}
                _ = tokio::time::sleep(delay) => callback(),
            }
        });

        Box::new(TokioTickHandle { token })
    }
}

struct TokioTickHandle {
    token: CancellationToken,
}

impl TickHandle for TokioTickHandle {
    fn cancel(&self) {
        self.token.cancel();
    }
}
