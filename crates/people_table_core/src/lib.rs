//! crates/people_table_core/src/lib.rs
//!
//! Record generator, countdown timer and the people table that hosts them.

pub mod clock;
pub mod domain;
pub mod generator;
pub mod ports;
pub mod table;
pub mod timer;

pub use clock::VirtualClock;
pub use domain::{Person, TimerConfig, TimerSnapshot, TimerState};
pub use generator::{generate_people, generate_people_with, parse_count};
pub use ports::{CoreError, CoreResult, TickCallback, TickHandle, TickSource};
pub use table::PeopleTable;
pub use timer::CountdownTimer;
