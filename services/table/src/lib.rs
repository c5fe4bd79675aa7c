//! services/table/src/lib.rs
//!
//! The host service that drives a people table on the tokio runtime.

pub mod adapters;
pub mod config;
pub mod error;
pub mod runner;
