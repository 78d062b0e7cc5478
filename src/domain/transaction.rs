//! Transaction record.
//!
//! A transaction is immutable once handed to the scheduler. Only its computed
//! priority changes over time, because `arrival_time` is fixed while the
//! evaluation instant advances.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What the transaction does with the money.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Deposit,
    Withdraw,
    Transfer,
}

impl TransactionType {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "deposit",
            TransactionType::Withdraw => "withdraw",
            TransactionType::Transfer => "transfer",
        }
    }

    /// Numeric code used in workload files (0=deposit, 1=withdraw, 2=transfer).
    pub fn code(&self) -> u8 {
        match self {
            TransactionType::Deposit => 0,
            TransactionType::Withdraw => 1,
            TransactionType::Transfer => 2,
        }
    }

    /// Inverse of [`TransactionType::code`].
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(TransactionType::Deposit),
            1 => Some(TransactionType::Withdraw),
            2 => Some(TransactionType::Transfer),
            _ => None,
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A unit of work ranked by the scheduler.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Source account; not unique within a scheduler
    pub account_id: i64,

    /// Destination account, meaningful for transfers only (0 otherwise)
    pub target_id: i64,

    /// Transaction value, not used in ranking
    pub amount: f64,

    pub kind: TransactionType,

    /// Higher fee = higher priority
    pub fee: f64,

    /// When the transaction entered the system
    pub arrival_time: DateTime<Utc>,

    /// Lower number = simpler transaction = higher priority
    pub complexity: u32,

    /// Higher tier = VIP treatment (0-5 typical)
    pub account_tier: u32,
}

impl Transaction {
    /// Create a transaction that arrived now with no fee, complexity or tier.
    pub fn new(account_id: i64, kind: TransactionType, amount: f64) -> Self {
        Self {
            account_id,
            target_id: 0,
            amount,
            kind,
            fee: 0.0,
            arrival_time: Utc::now(),
            complexity: 0,
            account_tier: 0,
        }
    }

    /// Create a deposit.
    pub fn deposit(account_id: i64, amount: f64) -> Self {
        Self::new(account_id, TransactionType::Deposit, amount)
    }

    /// Create a withdrawal.
    pub fn withdraw(account_id: i64, amount: f64) -> Self {
        Self::new(account_id, TransactionType::Withdraw, amount)
    }

    /// Create a transfer from `account_id` to `target_id`.
    pub fn transfer(account_id: i64, target_id: i64, amount: f64) -> Self {
        let mut tx = Self::new(account_id, TransactionType::Transfer, amount);
        tx.target_id = target_id;
        tx
    }

    pub fn with_fee(mut self, fee: f64) -> Self {
        self.fee = fee;
        self
    }

    pub fn with_arrival(mut self, arrival_time: DateTime<Utc>) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    pub fn with_complexity(mut self, complexity: u32) -> Self {
        self.complexity = complexity;
        self
    }

    pub fn with_tier(mut self, account_tier: u32) -> Self {
        self.account_tier = account_tier;
        self
    }

    /// Check whether this moves money between two accounts.
    pub fn is_transfer(&self) -> bool {
        self.kind == TransactionType::Transfer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_transaction_type_as_str() {
        assert_eq!(TransactionType::Deposit.as_str(), "deposit");
        assert_eq!(TransactionType::Withdraw.as_str(), "withdraw");
        assert_eq!(TransactionType::Transfer.as_str(), "transfer");
    }

    #[test]
    fn test_transaction_type_codes() {
        for kind in [TransactionType::Deposit, TransactionType::Withdraw, TransactionType::Transfer] {
            assert_eq!(TransactionType::from_code(kind.code()), Some(kind));
        }
        assert_eq!(TransactionType::from_code(3), None);
    }

    #[test]
    fn test_transaction_type_serde_lowercase() {
        let json = serde_json::to_string(&TransactionType::Withdraw).unwrap();
        assert_eq!(json, "\"withdraw\"");
    }

    #[test]
    fn test_builder_sets_ranking_factors() {
        let arrival = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let tx = Transaction::deposit(42, 100.0)
            .with_fee(2.5)
            .with_arrival(arrival)
            .with_complexity(3)
            .with_tier(4);

        assert_eq!(tx.account_id, 42);
        assert_eq!(tx.kind, TransactionType::Deposit);
        assert!((tx.fee - 2.5).abs() < 1e-10);
        assert_eq!(tx.arrival_time, arrival);
        assert_eq!(tx.complexity, 3);
        assert_eq!(tx.account_tier, 4);
    }

    #[test]
    fn test_transfer_keeps_target() {
        let tx = Transaction::transfer(1, 2, 50.0);
        assert!(tx.is_transfer());
        assert_eq!(tx.target_id, 2);

        let tx = Transaction::withdraw(1, 50.0);
        assert!(!tx.is_transfer());
        assert_eq!(tx.target_id, 0);
    }

    #[test]
    fn test_non_transfer_has_no_target() {
        // Matches the `0` target written for deposits and withdrawals in workload files
        assert_eq!(Transaction::deposit(7, 10.0).target_id, 0);
        assert_eq!(Transaction::new(7, TransactionType::Withdraw, 10.0).target_id, 0);
    }
}
