//! Domain types for txsched
//!
//! - Transaction: one unit of work plus the four raw ranking factors
//! - TransactionType: deposit, withdraw or transfer (informational only)

pub mod transaction;

pub use transaction::{Transaction, TransactionType};
