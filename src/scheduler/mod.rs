//! Weighted transaction scheduler.
//!
//! This module provides:
//! - **Priority calculation**: weighted sum of fee, wait time, inverse
//!   complexity and account tier, evaluated live against the clock.
//! - **Scheduler**: priority queue with enqueue, highest-priority extraction,
//!   runtime re-weighting and throughput/revenue stats.
//! - **Strategies**: named weight presets, optionally extended from config.
//!
//! # Re-weighting
//!
//! Pending entries are keyed under the weights that were active when they
//! were keyed. `set_weights` drains the queue and rebuilds it under the new
//! weights, so already-pending transactions are re-ranked immediately.
//!
//! # Example
//!
//! ```
//! use txsched::domain::Transaction;
//! use txsched::scheduler::{Scheduler, Weights};
//!
//! let mut scheduler = Scheduler::new(Weights::new([1.0, 0.0, 0.0, 0.0]));
//! scheduler.add(Transaction::deposit(1, 100.0).with_fee(5.0));
//! scheduler.add(Transaction::deposit(2, 100.0).with_fee(20.0));
//!
//! assert_eq!(scheduler.next().unwrap().account_id, 2);
//! assert_eq!(scheduler.processed_count(), 1);
//! ```

mod priority;
mod queue;
mod strategy;

pub use priority::{DEFAULT_WEIGHT, WEIGHT_COUNT, Weights, complexity_score, wait_hours};
pub use queue::Scheduler;
pub use strategy::{DEFAULT_STRATEGY, Strategy, StrategyCatalog};
