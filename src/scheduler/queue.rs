//! Weighted priority queue for pending transactions.
//!
//! The Scheduler owns the pending transactions, the active weight vector and
//! running statistics. Entries are ordered by their rank key under the active
//! weights (see [`Weights::rank_key`]), which orders them exactly as their live
//! priority would at any instant. Changing the weights rebuilds the heap.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::domain::Transaction;
use crate::error::{Result, TxschedError};
use crate::scheduler::priority::Weights;

/// A pending transaction with its rank key under the weights it was keyed with.
#[derive(Debug, Clone)]
struct Pending {
    key: f64,
    /// Insertion sequence; earlier wins ties.
    seq: u64,
    tx: Transaction,
}

impl Pending {
    fn new(weights: &Weights, seq: u64, tx: Transaction) -> Self {
        Self {
            key: weights.rank_key(&tx),
            seq,
            tx,
        }
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        // Higher key first, then older insertion first
        self.key.total_cmp(&other.key).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Pending {}

/// Scheduler that prioritizes transactions using weighted factors.
#[derive(Debug)]
pub struct Scheduler {
    weights: Weights,
    queue: BinaryHeap<Pending>,
    next_seq: u64,
    processed: u64,
    total_fees: f64,
}

impl Scheduler {
    /// Create a Scheduler with the given weights.
    pub fn new(weights: Weights) -> Self {
        Self {
            weights,
            queue: BinaryHeap::new(),
            next_seq: 0,
            processed: 0,
            total_fees: 0.0,
        }
    }

    /// Create a Scheduler from a raw weight vector `[fee, time, complexity, tier]`.
    pub fn with_weights(raw: &[f64]) -> Result<Self> {
        Ok(Self::new(Weights::try_from(raw)?))
    }

    /// Enqueue a transaction.
    pub fn add(&mut self, tx: Transaction) {
        let entry = Pending::new(&self.weights, self.next_seq, tx);
        self.next_seq += 1;

        tracing::debug!(
            account_id = entry.tx.account_id,
            fee = entry.tx.fee,
            pending = self.queue.len() + 1,
            "Enqueued transaction"
        );
        self.queue.push(entry);
    }

    /// Remove and return the highest-priority transaction.
    ///
    /// Fails with [`TxschedError::EmptyQueue`] when nothing is pending; stats
    /// are left untouched in that case.
    pub fn next(&mut self) -> Result<Transaction> {
        let entry = self.queue.pop().ok_or(TxschedError::EmptyQueue)?;

        self.processed += 1;
        self.total_fees += entry.tx.fee;

        tracing::debug!(
            account_id = entry.tx.account_id,
            fee = entry.tx.fee,
            processed = self.processed,
            remaining = self.queue.len(),
            "Dequeued transaction"
        );
        Ok(entry.tx)
    }

    /// The transaction `next` would return, without removing it.
    pub fn peek(&self) -> Option<&Transaction> {
        self.queue.peek().map(|entry| &entry.tx)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of pending transactions.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Replace the weight vector and re-rank everything pending.
    ///
    /// Fails with [`TxschedError::InvalidWeightVector`] unless `raw` has
    /// exactly four components; weights and pending order are unchanged then.
    pub fn set_weights(&mut self, raw: &[f64]) -> Result<()> {
        let weights = Weights::try_from(raw)?;
        self.weights = weights;

        // Drain under the old keys, rebuild keyed by the new weights
        let drained = std::mem::take(&mut self.queue).into_vec();
        let mut rebuilt = BinaryHeap::with_capacity(drained.len());
        for entry in drained {
            rebuilt.push(Pending::new(&self.weights, entry.seq, entry.tx));
        }
        self.queue = rebuilt;

        tracing::info!(
            weights = %self.weights,
            pending = self.queue.len(),
            "Weights updated, pending transactions re-ranked"
        );
        Ok(())
    }

    /// Active weights.
    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Number of successful `next` calls.
    pub fn processed_count(&self) -> u64 {
        self.processed
    }

    /// Sum of fees over every transaction returned by `next`.
    pub fn total_fees(&self) -> f64 {
        self.total_fees
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(Weights::uniform())
    }
}
