//! txsched - weighted live-priority transaction scheduling
//!
//! Transactions are ranked by a weighted sum of fee, wait time, inverse
//! complexity and account tier. Weights can change at runtime, re-ranking
//! everything still pending.

pub mod domain;
pub mod error;
pub mod report;
pub mod runner;
pub mod scheduler;
pub mod workload;

pub use domain::{Transaction, TransactionType};
pub use error::{Result, TxschedError};
pub use scheduler::{Scheduler, Weights};
