//! services/table/src/runner.rs
//!
//! This module contains the asynchronous "worker" function that drives one
//! people table from mount to the end of its countdown.

use crate::{adapters::TokioTickSource, config::Config, error::AppError};
use people_table_core::{PeopleTable, TimerSnapshot};
use std::io::Write;
use std::rc::Rc;
use tracing::{debug, info};

/// Mounts a table without a count, sets the configured count, writes the
/// generated rows to `out` as JSON and waits until the countdown has ended.
///
/// Must run inside a `tokio::task::LocalSet`.
pub async fn run_table<W: Write>(config: &Config, out: &mut W) -> Result<TimerSnapshot, AppError> {
    let count = i64::try_from(config.people_count).map_err(|_| {
        AppError::Internal(format!("people count {} is out of range", config.people_count))
    })?;

    let mut table = PeopleTable::mount(Rc::new(TokioTickSource::new()), config.timer(), None)?;
    table.set_count(Some(count))?;

    serde_json::to_writer_pretty(&mut *out, table.rows())?;
    writeln!(out)?;
    out.flush()?;
    info!("Wrote {} rows.", table.rows().len());

    let mut last_seen = table.timer_duration();
    while table.timer_active() {
        tokio::time::sleep(config.tick_period).await;
        let remaining = table.timer_duration();
        if remaining != last_seen {
            if let Some(seconds) = remaining {
                info!("⏱️ {} seconds left.", seconds);
            }
            last_seen = remaining;
        }
    }
    debug!("Countdown is idle; leaving the table.");

    Ok(table.timer_snapshot())
}
