//! Workload scheduling integration tests
//!
//! Tests loading a workload file and draining it through the scheduler and
//! runner using only the public API.

use std::io::Write;

use chrono::Utc;
use tempfile::NamedTempFile;
use txsched::error::{Result, TxschedError};
use txsched::runner::{RunOptions, WeightSwitch, run};
use txsched::scheduler::{Scheduler, Strategy, StrategyCatalog, Weights};
use txsched::workload::load_workload;

const WORKLOAD: &str = "\
# account target amount type fee arrival complexity tier
1 0 100.00 0 5.00 1735725600 2 1
2 0 100.00 1 20.00 1735729200 4 0
3 4 100.00 2 1.00 1735718400 0 5
not a record
";

fn workload_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(WORKLOAD.as_bytes()).unwrap();
    file
}

/// Integration test: fee-only weights drain strictly by fee
#[test]
fn test_fee_only_drain_from_file() -> Result<()> {
    let file = workload_file();
    let workload = load_workload(file.path())?;
    assert_eq!(workload.len(), 3);
    assert_eq!(workload.skipped, 1);

    let mut scheduler = Scheduler::new(Strategy::REVENUE.normalized());
    for tx in workload.transactions {
        scheduler.add(tx);
    }

    let mut fees = Vec::new();
    while !scheduler.is_empty() {
        fees.push(scheduler.next()?.fee);
    }
    assert_eq!(fees, vec![20.0, 5.0, 1.0]);
    assert_eq!(scheduler.processed_count(), 3);
    assert!((scheduler.total_fees() - 26.0).abs() < 1e-9);
    assert!(matches!(scheduler.next(), Err(TxschedError::EmptyQueue)));

    Ok(())
}

/// Integration test: re-weighting mid-drain reorders what is still pending
#[test]
fn test_reweight_mid_drain() -> Result<()> {
    let file = workload_file();
    let workload = load_workload(file.path())?;

    let mut scheduler = Scheduler::new(Strategy::REVENUE.normalized());
    for tx in workload.transactions {
        scheduler.add(tx);
    }
    assert_eq!(scheduler.next()?.account_id, 2);

    // Under fees, account 1 is next; under tier, account 3 jumps ahead
    assert_eq!(scheduler.peek().map(|t| t.account_id), Some(1));
    scheduler.set_weights(&Strategy::VIP.weights)?;
    assert_eq!(scheduler.next()?.account_id, 3);
    assert_eq!(scheduler.next()?.account_id, 1);

    Ok(())
}

/// Integration test: drained order is non-increasing under balanced weights
#[test]
fn test_balanced_drain_is_ordered() -> Result<()> {
    let file = workload_file();
    let workload = load_workload(file.path())?;
    let weights = Strategy::BALANCED.normalized();

    let mut scheduler = Scheduler::new(weights);
    for tx in workload.transactions {
        scheduler.add(tx);
    }

    let now = Utc::now();
    let mut last = f64::INFINITY;
    while let Ok(tx) = scheduler.next() {
        let p = tx.priority_at(&weights, now);
        assert!(p <= last + 1e-9);
        last = p;
    }
    Ok(())
}

/// Integration test: runner with a strategy switch matches a manual drain
#[test]
fn test_runner_switch_matches_manual() -> Result<()> {
    let file = workload_file();
    let workload = load_workload(file.path())?;
    let catalog = StrategyCatalog::default();
    let (label, weights) = catalog.resolve("revenue")?;
    let (_, vip) = catalog.resolve("vip")?;

    let options = RunOptions::default().with_switch(WeightSwitch {
        after: 1,
        weights: vip.as_array().to_vec(),
    });
    let summary = run(&label, workload.transactions, weights, &options, |_| {})?;

    let order: Vec<i64> = summary.order.iter().map(|p| p.transaction.account_id).collect();
    assert_eq!(order, vec![2, 3, 1]);
    assert_eq!(summary.processed, 3);
    assert_eq!(summary.label, "Highest Fee First");
    assert_eq!(summary.weights, weights);
    assert_eq!(summary.final_weights, vip);
    assert_eq!(summary.switched_after, Some(1));
    Ok(())
}

/// Integration test: bad weight vectors are rejected without side effects
#[test]
fn test_invalid_weights_rejected() {
    let mut scheduler = Scheduler::new(Weights::uniform());
    let err = scheduler.set_weights(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap_err();
    assert!(matches!(err, TxschedError::InvalidWeightVector { len: 5 }));
    assert_eq!(scheduler.weights().as_array(), [0.25; 4]);

    let err = StrategyCatalog::default().resolve("does-not-exist").unwrap_err();
    assert!(matches!(err, TxschedError::UnknownStrategy(_)));
}
