//! Workload files.
//!
//! A workload is a text file with one transaction per line:
//!
//! ```text
//! # account target amount type fee arrival complexity tier
//! 1001 0    250.00 0 2.50 1735725600 1 3
//! 1002 1003 75.25  2 0.75 1735729200 4 1
//! ```
//!
//! `type` is 0=deposit, 1=withdraw, 2=transfer and `arrival` is Unix epoch
//! seconds. Blank lines and `#` comments are ignored. Tokens after the eighth
//! field are ignored. Malformed lines are skipped with a warning rather than
//! failing the whole load.

mod parser;

pub use parser::{FIELD_COUNT, Workload, load_workload, parse_record, parse_workload};
