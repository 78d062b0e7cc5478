//! Plain-text rendering of runs.
//!
//! Coloring is left to the caller; these functions only build the lines.

use chrono::{DateTime, Local, Utc};

use crate::runner::{ProcessedTransaction, RunSummary};

/// Format used for arrival timestamps, in local time.
pub const ARRIVAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_arrival(arrival: DateTime<Utc>) -> String {
    arrival.with_timezone(&Local).format(ARRIVAL_FORMAT).to_string()
}

/// One line per extracted transaction.
pub fn format_processed(record: &ProcessedTransaction) -> String {
    let tx = &record.transaction;
    format!(
        "  {}. Transaction ID: {}, Priority: {:.4} [Fee: ${:.2}, Arrival: {}, Wait: {:.2} hrs, Complexity: {}, Account Tier: {}]",
        record.position,
        tx.account_id,
        record.priority,
        tx.fee,
        format_arrival(tx.arrival_time),
        record.wait_hours,
        tx.complexity,
        tx.account_tier
    )
}

/// Closing statistics for a run.
pub fn format_summary(summary: &RunSummary) -> Vec<String> {
    let mut lines = vec![
        format!("  Processed: {} transactions", summary.processed),
        format!("  Total fees: ${:.2}", summary.total_fees),
        format!("  Processing time: {:.3} seconds", summary.elapsed_secs),
    ];
    if let Some(after) = summary.switched_after {
        lines.push(format!(
            "  Weights switched after {} transactions: {}",
            after, summary.final_weights
        ));
    }
    lines
}

/// Side-by-side table of several runs over the same workload.
pub fn format_comparison(summaries: &[RunSummary]) -> Vec<String> {
    let width = summaries
        .iter()
        .map(|s| s.label.len())
        .max()
        .unwrap_or(0)
        .max("Strategy".len());

    let mut lines = vec![format!(
        "  {:<width$}  {:>9}  {:>12}  {:>13}",
        "Strategy",
        "Processed",
        "Total Fees",
        "First Account",
        width = width
    )];

    for s in summaries {
        let first = s
            .first_account()
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());
        lines.push(format!(
            "  {:<width$}  {:>9}  {:>12}  {:>13}",
            s.label,
            s.processed,
            format!("${:.2}", s.total_fees),
            first,
            width = width
        ));
    }

    lines
}
