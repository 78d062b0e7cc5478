//! Workload runner - drains a set of transactions through a Scheduler.
//!
//! This module provides:
//! - RunOptions for simulated processing delay and mid-run re-weighting
//! - ProcessedTransaction for each extraction, in priority order
//! - RunSummary with throughput, revenue and timing for a whole run
//! - compare for running one workload under every known strategy

mod compare;
mod workload_runner;

pub use compare::{Comparison, compare};
pub use workload_runner::{ProcessedTransaction, RunOptions, RunSummary, WeightSwitch, processing_delay, run};
