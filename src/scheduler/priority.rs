//! Priority calculation for transaction scheduling.
//!
//! Transactions are prioritized by a weighted sum of:
//! - Fee (more money = higher priority)
//! - Wait time in hours (waited longer = higher priority)
//! - Inverse complexity, `1 / (complexity + 1)` (simpler = higher priority)
//! - Account tier (higher tier = higher priority)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Transaction;
use crate::error::{Result, TxschedError};

/// Number of components in a weight vector: fee, time, complexity, tier.
pub const WEIGHT_COUNT: usize = 4;

/// Default weight per component (uniform).
pub const DEFAULT_WEIGHT: f64 = 0.25;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Hours between `arrival` and `now`. Negative if `arrival` is in the future.
pub fn wait_hours(arrival: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - arrival).num_milliseconds() as f64 / MILLIS_PER_HOUR
}

/// Inverted complexity so lower complexity scores higher.
pub fn complexity_score(complexity: u32) -> f64 {
    1.0 / (f64::from(complexity) + 1.0)
}

fn epoch_hours(instant: DateTime<Utc>) -> f64 {
    instant.timestamp_millis() as f64 / MILLIS_PER_HOUR
}

/// Weight vector `[fee, time, complexity, tier]`.
///
/// Normalized to sum to 1.0 whenever the supplied components have a positive
/// sum. A non-positive sum is stored verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "[f64; 4]", from = "[f64; 4]")]
pub struct Weights {
    components: [f64; WEIGHT_COUNT],
}

impl Weights {
    /// Create weights, normalizing by total when the total is positive.
    pub fn new(raw: [f64; WEIGHT_COUNT]) -> Self {
        let sum: f64 = raw.iter().sum();
        let components = if sum > 0.0 { raw.map(|w| w / sum) } else { raw };
        Self { components }
    }

    /// Uniform quarter weights.
    pub fn uniform() -> Self {
        Self::new([DEFAULT_WEIGHT; WEIGHT_COUNT])
    }

    pub fn fee(&self) -> f64 {
        self.components[0]
    }

    pub fn time(&self) -> f64 {
        self.components[1]
    }

    pub fn complexity(&self) -> f64 {
        self.components[2]
    }

    pub fn tier(&self) -> f64 {
        self.components[3]
    }

    pub fn as_array(&self) -> [f64; WEIGHT_COUNT] {
        self.components
    }

    pub fn sum(&self) -> f64 {
        self.components.iter().sum()
    }

    /// Live priority of `tx` evaluated at `now`. Higher is served sooner.
    pub fn score(&self, tx: &Transaction, now: DateTime<Utc>) -> f64 {
        let fee_score = tx.fee;
        let time_score = wait_hours(tx.arrival_time, now);
        let complexity_score = complexity_score(tx.complexity);
        let tier_score = f64::from(tx.account_tier);

        self.fee() * fee_score
            + self.time() * time_score
            + self.complexity() * complexity_score
            + self.tier() * tier_score
    }

    /// Priority with the time term anchored at the Unix epoch.
    ///
    /// `score(tx, now) == rank_key(tx) + time_weight * now_hours` for every
    /// `now`. The offset is shared by all transactions, so ordering by rank
    /// key is ordering by live priority at any instant.
    pub fn rank_key(&self, tx: &Transaction) -> f64 {
        self.fee() * tx.fee - self.time() * epoch_hours(tx.arrival_time)
            + self.complexity() * complexity_score(tx.complexity)
            + self.tier() * f64::from(tx.account_tier)
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self::uniform()
    }
}

impl From<[f64; WEIGHT_COUNT]> for Weights {
    fn from(raw: [f64; WEIGHT_COUNT]) -> Self {
        Self::new(raw)
    }
}

impl From<Weights> for [f64; WEIGHT_COUNT] {
    fn from(weights: Weights) -> Self {
        weights.components
    }
}

impl TryFrom<&[f64]> for Weights {
    type Error = TxschedError;

    fn try_from(raw: &[f64]) -> Result<Self> {
        let components: [f64; WEIGHT_COUNT] = raw
            .try_into()
            .map_err(|_| TxschedError::InvalidWeightVector { len: raw.len() })?;
        Ok(Self::new(components))
    }
}

impl std::fmt::Display for Weights {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "fee={:.3} time={:.3} complexity={:.3} tier={:.3}",
            self.fee(),
            self.time(),
            self.complexity(),
            self.tier()
        )
    }
}

impl Transaction {
    /// Priority under `weights` evaluated at `now`.
    pub fn priority_at(&self, weights: &Weights, now: DateTime<Utc>) -> f64 {
        weights.score(self, now)
    }

    /// Priority under `weights` evaluated at the current wall-clock time.
    pub fn priority(&self, weights: &Weights) -> f64 {
        self.priority_at(weights, Utc::now())
    }
}
