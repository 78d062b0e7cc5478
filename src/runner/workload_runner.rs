//! Runs a workload under one strategy.
//!
//! Every transaction is enqueued up front, then drained highest priority
//! first. After each extraction the runner sleeps for the simulated
//! processing time (`delay_per_complexity * complexity`) and, if a
//! [`WeightSwitch`] is configured, swaps the weights once enough transactions
//! have been processed.

use std::time::{Duration, Instant};

use chrono::Utc;
use log::{debug, info};
use serde::Serialize;

use crate::domain::Transaction;
use crate::error::Result;
use crate::scheduler::{Scheduler, Weights, wait_hours};

/// Change the weights partway through a run.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightSwitch {
    /// Apply after this many transactions have been processed
    pub after: usize,
    /// Raw weight vector handed to `Scheduler::set_weights`
    pub weights: Vec<f64>,
}

/// Options for a single run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Simulated processing time per complexity unit
    pub delay_per_complexity: Duration,
    pub switch: Option<WeightSwitch>,
}

impl RunOptions {
    pub fn with_delay(mut self, delay_per_complexity: Duration) -> Self {
        self.delay_per_complexity = delay_per_complexity;
        self
    }

    pub fn with_switch(mut self, switch: WeightSwitch) -> Self {
        self.switch = Some(switch);
        self
    }
}

/// One extraction, in the order the scheduler produced it.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedTransaction {
    /// 1-based extraction position
    pub position: usize,
    pub transaction: Transaction,
    /// Priority at extraction time under the weights then active
    pub priority: f64,
    pub wait_hours: f64,
}

/// Outcome of a full run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub label: String,
    /// Weights the run started with
    pub weights: Weights,
    /// Weights in effect when the queue drained; differs from `weights` after a switch
    pub final_weights: Weights,
    /// Number of transactions processed before the switch was applied
    pub switched_after: Option<usize>,
    pub processed: u64,
    pub total_fees: f64,
    pub elapsed_secs: f64,
    pub order: Vec<ProcessedTransaction>,
}

impl RunSummary {
    /// Account id of the first transaction extracted.
    pub fn first_account(&self) -> Option<i64> {
        self.order.first().map(|p| p.transaction.account_id)
    }
}

/// Simulated processing time for one transaction, saturating at `Duration::MAX`.
pub fn processing_delay(per_complexity: Duration, complexity: u32) -> Duration {
    per_complexity.saturating_mul(complexity)
}

/// Enqueue `transactions`, drain them in priority order and collect stats.
///
/// `on_processed` is called after each extraction, before the simulated delay.
pub fn run<F>(
    label: &str,
    transactions: Vec<Transaction>,
    weights: Weights,
    options: &RunOptions,
    mut on_processed: F,
) -> Result<RunSummary>
where
    F: FnMut(&ProcessedTransaction),
{
    // Reject a bad switch before anything is processed
    if let Some(switch) = &options.switch {
        Weights::try_from(switch.weights.as_slice())?;
    }

    info!(
        "Processing {} transactions with {} strategy ({})",
        transactions.len(),
        label,
        weights
    );

    let mut scheduler = Scheduler::new(weights);
    for tx in transactions {
        scheduler.add(tx);
    }

    let start = Instant::now();
    let mut order = Vec::with_capacity(scheduler.len());
    let mut switched_after = None;

    while !scheduler.is_empty() {
        if let Some(switch) = &options.switch
            && switched_after.is_none()
            && order.len() >= switch.after
        {
            info!("Switching weights after {} transactions", order.len());
            scheduler.set_weights(&switch.weights)?;
            switched_after = Some(order.len());
        }

        let tx = scheduler.next()?;
        let now = Utc::now();
        let record = ProcessedTransaction {
            position: order.len() + 1,
            priority: tx.priority_at(scheduler.weights(), now),
            wait_hours: wait_hours(tx.arrival_time, now),
            transaction: tx,
        };
        on_processed(&record);

        let delay = processing_delay(options.delay_per_complexity, record.transaction.complexity);
        if !delay.is_zero() {
            debug!("Simulating {:?} of processing", delay);
            std::thread::sleep(delay);
        }

        order.push(record);
    }

    let summary = RunSummary {
        label: label.to_string(),
        weights,
        final_weights: *scheduler.weights(),
        switched_after,
        processed: scheduler.processed_count(),
        total_fees: scheduler.total_fees(),
        elapsed_secs: start.elapsed().as_secs_f64(),
        order,
    };

    info!(
        "Finished {}: {} processed, {:.2} in fees, {:.3}s",
        summary.label, summary.processed, summary.total_fees, summary.elapsed_secs
    );
    Ok(summary)
}
