//! Named weighting strategies.
//!
//! A strategy is a label plus a raw weight vector. Built-ins cover the usual
//! single-factor policies and the balanced default; user config can add more
//! or override them by name.

use std::collections::BTreeMap;

use crate::error::{Result, TxschedError};
use crate::scheduler::priority::{WEIGHT_COUNT, Weights};

/// Name of the strategy used when none is requested.
pub const DEFAULT_STRATEGY: &str = "balanced";

/// A named weight preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strategy {
    pub name: &'static str,
    pub label: &'static str,
    pub weights: [f64; WEIGHT_COUNT],
}

impl Strategy {
    pub const BALANCED: Strategy = Strategy {
        name: "balanced",
        label: "Balanced Priority",
        weights: [0.4, 0.3, 0.2, 0.1],
    };

    pub const REVENUE: Strategy = Strategy {
        name: "revenue",
        label: "Highest Fee First",
        weights: [1.0, 0.0, 0.0, 0.0],
    };

    pub const FAIRNESS: Strategy = Strategy {
        name: "fairness",
        label: "Longest Wait First",
        weights: [0.0, 1.0, 0.0, 0.0],
    };

    pub const SIMPLE_FIRST: Strategy = Strategy {
        name: "simple-first",
        label: "Simplest First",
        weights: [0.0, 0.0, 1.0, 0.0],
    };

    pub const VIP: Strategy = Strategy {
        name: "vip",
        label: "Highest Tier First",
        weights: [0.0, 0.0, 0.0, 1.0],
    };

    pub const UNIFORM: Strategy = Strategy {
        name: "uniform",
        label: "Uniform",
        weights: [0.25; WEIGHT_COUNT],
    };

    /// All built-in strategies.
    pub fn builtins() -> &'static [Strategy] {
        BUILTINS
    }

    /// Look up a built-in strategy by name.
    pub fn find(name: &str) -> Option<Strategy> {
        Self::builtins().iter().copied().find(|s| s.name == name)
    }

    /// Normalized weights for this strategy.
    pub fn normalized(&self) -> Weights {
        Weights::new(self.weights)
    }
}

const BUILTINS: &[Strategy] = &[
    Strategy::BALANCED,
    Strategy::REVENUE,
    Strategy::FAIRNESS,
    Strategy::SIMPLE_FIRST,
    Strategy::VIP,
    Strategy::UNIFORM,
];

/// Built-in strategies overlaid with user-defined ones.
///
/// User entries are raw vectors and are only checked for length when resolved.
#[derive(Debug, Clone, Default)]
pub struct StrategyCatalog {
    custom: BTreeMap<String, Vec<f64>>,
}

impl StrategyCatalog {
    pub fn new(custom: BTreeMap<String, Vec<f64>>) -> Self {
        Self { custom }
    }

    /// Resolve a strategy name to its display label and normalized weights.
    pub fn resolve(&self, name: &str) -> Result<(String, Weights)> {
        if let Some(raw) = self.custom.get(name) {
            let weights = Weights::try_from(raw.as_slice())?;
            let label = Strategy::find(name)
                .map(|s| s.label.to_string())
                .unwrap_or_else(|| name.to_string());
            return Ok((label, weights));
        }

        Strategy::find(name)
            .map(|s| (s.label.to_string(), s.normalized()))
            .ok_or_else(|| TxschedError::UnknownStrategy(name.to_string()))
    }

    /// Every known strategy name, built-ins first, then custom-only names.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = Strategy::builtins().iter().map(|s| s.name.to_string()).collect();
        for name in self.custom.keys() {
            if Strategy::find(name).is_none() {
                names.push(name.clone());
            }
        }
        names
    }
}
