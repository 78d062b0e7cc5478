//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - run: schedule a workload under one strategy
//! - compare: run a workload under every known strategy
//! - strategies: list known strategies

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// txsched - Weighted priority scheduling for transaction workloads
#[derive(Parser, Debug)]
#[command(name = "txsched")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute (defaults to `run` with configured settings)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Process a workload in priority order
    Run(RunArgs),

    /// Run a workload under every known strategy and compare the results
    Compare {
        /// Workload file (defaults to the configured workload)
        workload: Option<PathBuf>,
    },

    /// List known strategies and their normalized weights
    Strategies,
}

/// Arguments for `run`
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct RunArgs {
    /// Workload file (defaults to the configured workload)
    pub workload: Option<PathBuf>,

    /// Named strategy (balanced, revenue, fairness, simple-first, vip, uniform, or from config)
    #[arg(short, long, conflicts_with = "weights")]
    pub strategy: Option<String>,

    /// Explicit weights: fee,time,complexity,tier
    #[arg(short, long, value_delimiter = ',')]
    pub weights: Option<Vec<f64>>,

    /// Skip the simulated processing delay
    #[arg(long)]
    pub no_delay: bool,

    /// Switch strategy after this many transactions
    #[arg(long, requires = "switch_to")]
    pub switch_after: Option<usize>,

    /// Strategy to switch to
    #[arg(long, requires = "switch_after")]
    pub switch_to: Option<String>,

    /// Print the run summary as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn run_args(args: &[&str]) -> RunArgs {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Some(Commands::Run(run)) => run,
            _ => panic!("Expected run command"),
        }
    }

    #[test]
    fn test_cli_parse_no_args() {
        // No args should result in None command (default run)
        let cli = Cli::try_parse_from(["txsched"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["txsched", "-v"]).unwrap();
        assert!(cli.is_verbose());
    }

    #[test]
    fn test_cli_config_option() {
        let cli = Cli::try_parse_from(["txsched", "-c", "/path/to/config.yml"]).unwrap();
        assert_eq!(cli.config.as_ref(), Some(&PathBuf::from("/path/to/config.yml")));
    }

    #[test]
    fn test_run_defaults() {
        let run = run_args(&["txsched", "run"]);
        assert_eq!(run, RunArgs::default());
    }

    #[test]
    fn test_run_with_workload_and_strategy() {
        let run = run_args(&["txsched", "run", "workloads/w2.txt", "-s", "revenue"]);
        assert_eq!(run.workload, Some(PathBuf::from("workloads/w2.txt")));
        assert_eq!(run.strategy.as_deref(), Some("revenue"));
        assert!(run.weights.is_none());
    }

    #[test]
    fn test_run_with_weights() {
        let run = run_args(&["txsched", "run", "-w", "0.4,0.3,0.2,0.1"]);
        assert_eq!(run.weights, Some(vec![0.4, 0.3, 0.2, 0.1]));
    }

    #[test]
    fn test_run_weights_length_not_checked_by_parser() {
        // Length is validated by the scheduler, which reports InvalidWeightVector
        let run = run_args(&["txsched", "run", "-w", "1,2,3"]);
        assert_eq!(run.weights, Some(vec![1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_run_strategy_conflicts_with_weights() {
        let result = Cli::try_parse_from(["txsched", "run", "-s", "vip", "-w", "1,0,0,0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_switch_options() {
        let run = run_args(&["txsched", "run", "--switch-after", "5", "--switch-to", "fairness"]);
        assert_eq!(run.switch_after, Some(5));
        assert_eq!(run.switch_to.as_deref(), Some("fairness"));
    }

    #[test]
    fn test_run_switch_requires_both() {
        assert!(Cli::try_parse_from(["txsched", "run", "--switch-after", "5"]).is_err());
        assert!(Cli::try_parse_from(["txsched", "run", "--switch-to", "vip"]).is_err());
    }

    #[test]
    fn test_run_flags() {
        let run = run_args(&["txsched", "run", "--no-delay", "--json"]);
        assert!(run.no_delay);
        assert!(run.json);
    }

    #[test]
    fn test_compare_command() {
        let cli = Cli::try_parse_from(["txsched", "compare", "w.txt"]).unwrap();
        match cli.command {
            Some(Commands::Compare { workload }) => {
                assert_eq!(workload, Some(PathBuf::from("w.txt")));
            }
            _ => panic!("Expected compare command"),
        }
    }

    #[test]
    fn test_strategies_command() {
        let cli = Cli::try_parse_from(["txsched", "strategies"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Strategies)));
    }

    #[test]
    fn test_help_works() {
        // Verify help doesn't panic
        Cli::command().debug_assert();
    }

    #[test]
    fn test_version_flag() {
        let result = Cli::try_parse_from(["txsched", "--version"]);
        // Version flag causes early exit with error (expected)
        assert!(result.is_err());
    }
}
