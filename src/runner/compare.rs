use log::warn;

use crate::domain::Transaction;
use crate::error::{Result, TxschedError};
use crate::scheduler::StrategyCatalog;

use super::workload_runner::{RunOptions, RunSummary, run};

/// Runs of one workload under every strategy in a catalog.
#[derive(Debug)]
pub struct Comparison {
    pub summaries: Vec<RunSummary>,
    /// Strategies that could not be resolved, with the reason
    pub skipped: Vec<(String, TxschedError)>,
}

/// Run `transactions` once per catalog strategy, in catalog order.
///
/// A strategy whose configured vector does not resolve is logged and skipped;
/// the remaining strategies still run.
pub fn compare(transactions: &[Transaction], catalog: &StrategyCatalog, options: &RunOptions) -> Result<Comparison> {
    let mut comparison = Comparison {
        summaries: Vec::new(),
        skipped: Vec::new(),
    };

    for name in catalog.names() {
        match catalog.resolve(&name) {
            Ok((label, weights)) => {
                let summary = run(&label, transactions.to_vec(), weights, options, |_| {})?;
                comparison.summaries.push(summary);
            }
            Err(e) => {
                warn!("Skipping strategy {}: {}", name, e);
                comparison.skipped.push((name, e));
            }
        }
    }

    Ok(comparison)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::Strategy;
    use std::collections::BTreeMap;

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::deposit(1, 10.0).with_fee(5.0),
            Transaction::deposit(2, 10.0).with_fee(20.0).with_tier(1),
            Transaction::deposit(3, 10.0).with_fee(1.0).with_tier(5),
        ]
    }

    #[test]
    fn test_compare_builtins() {
        let comparison = compare(&sample(), &StrategyCatalog::default(), &RunOptions::default()).unwrap();

        assert!(comparison.skipped.is_empty());
        assert_eq!(comparison.summaries.len(), Strategy::builtins().len());
        for summary in &comparison.summaries {
            assert_eq!(summary.processed, 3);
            assert!((summary.total_fees - 26.0).abs() < 1e-9);
        }

        let revenue = comparison
            .summaries
            .iter()
            .find(|s| s.label == Strategy::REVENUE.label)
            .unwrap();
        assert_eq!(revenue.first_account(), Some(2));
    }

    #[test]
    fn test_compare_skips_unresolvable_strategy() {
        let mut custom = BTreeMap::new();
        custom.insert("broken".to_string(), vec![1.0, 1.0]);
        custom.insert("tier-only".to_string(), vec![0.0, 0.0, 0.0, 1.0]);
        let catalog = StrategyCatalog::new(custom);

        let comparison = compare(&sample(), &catalog, &RunOptions::default()).unwrap();

        assert_eq!(comparison.skipped.len(), 1);
        let (name, err) = &comparison.skipped[0];
        assert_eq!(name, "broken");
        assert!(matches!(err, TxschedError::InvalidWeightVector { len: 2 }));

        assert_eq!(comparison.summaries.len(), Strategy::builtins().len() + 1);
        let tier = comparison.summaries.last().unwrap();
        assert_eq!(tier.label, "tier-only");
        assert_eq!(tier.first_account(), Some(3));
    }
}
