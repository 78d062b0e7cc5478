//! Line-oriented workload parser.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};

use crate::domain::{Transaction, TransactionType};
use crate::error::{Result, TxschedError};

/// Whitespace-separated fields per record.
pub const FIELD_COUNT: usize = 8;

/// Transactions loaded from a workload, plus how many lines were rejected.
#[derive(Debug, Clone, Default)]
pub struct Workload {
    pub transactions: Vec<Transaction>,
    pub skipped: usize,
}

impl Workload {
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

/// Read and parse a workload file. Fails only if the file cannot be read.
pub fn load_workload(path: impl AsRef<Path>) -> Result<Workload> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let workload = parse_workload(&content);

    info!(
        "Loaded {} transactions from {} ({} skipped)",
        workload.len(),
        path.display(),
        workload.skipped
    );
    Ok(workload)
}

/// Parse workload text, skipping blank lines, comments and malformed records.
pub fn parse_workload(content: &str) -> Workload {
    let mut workload = Workload::default();

    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match parse_record(idx + 1, trimmed) {
            Ok(tx) => workload.transactions.push(tx),
            Err(e) => {
                warn!("Skipping record: {}", e);
                workload.skipped += 1;
            }
        }
    }

    workload
}

/// Parse one record. `line` is the 1-based line number used in errors.
pub fn parse_record(line: usize, record: &str) -> Result<Transaction> {
    let fields: Vec<&str> = record.split_whitespace().collect();
    if fields.len() < FIELD_COUNT {
        return Err(TxschedError::Workload {
            line,
            message: format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
        });
    }
    if fields.len() > FIELD_COUNT {
        debug!("Line {}: ignoring {} trailing fields", line, fields.len() - FIELD_COUNT);
    }

    let account_id: i64 = field(line, "account_id", fields[0])?;
    let target_id: i64 = field(line, "target_id", fields[1])?;
    let amount: f64 = field(line, "amount", fields[2])?;
    let code: u8 = field(line, "type", fields[3])?;
    let fee: f64 = field(line, "fee", fields[4])?;
    let arrival_secs: i64 = field(line, "arrival_time", fields[5])?;
    let complexity: u32 = field(line, "complexity", fields[6])?;
    let account_tier: u32 = field(line, "account_tier", fields[7])?;

    let kind = TransactionType::from_code(code).ok_or_else(|| TxschedError::Workload {
        line,
        message: format!("unknown transaction type {}", code),
    })?;

    if !fee.is_finite() || fee < 0.0 {
        return Err(TxschedError::Workload {
            line,
            message: format!("fee must be a non-negative number, got {}", fee),
        });
    }

    let arrival_time = DateTime::<Utc>::from_timestamp(arrival_secs, 0).ok_or_else(|| TxschedError::Workload {
        line,
        message: format!("arrival_time {} out of range", arrival_secs),
    })?;

    Ok(Transaction {
        account_id,
        target_id,
        amount,
        kind,
        fee,
        arrival_time,
        complexity,
        account_tier,
    })
}

fn field<T: FromStr>(line: usize, name: &str, raw: &str) -> Result<T> {
    raw.parse().map_err(|_| TxschedError::Workload {
        line,
        message: format!("invalid {} '{}'", name, raw),
    })
}
