use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use txsched::report::{format_comparison, format_processed, format_summary};
use txsched::runner::{RunOptions, WeightSwitch, compare, run};
use txsched::scheduler::Weights;
use txsched::workload::load_workload;

mod cli;
mod config;

use cli::Cli;
use cli::commands::{Commands, RunArgs};
use config::Config;

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("txsched")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("txsched.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        None => handle_run_command(&RunArgs::default(), cli.is_verbose(), config),
        Some(Commands::Run(args)) => handle_run_command(args, cli.is_verbose(), config),
        Some(Commands::Compare { workload }) => handle_compare_command(workload.as_deref(), config),
        Some(Commands::Strategies) => handle_strategies_command(config),
    }
}

fn handle_run_command(args: &RunArgs, verbose: bool, config: &Config) -> Result<()> {
    let catalog = config.catalog();
    let workload_path = args.workload.as_deref().unwrap_or(&config.workload);

    let (label, weights) = match &args.weights {
        Some(raw) => ("Custom".to_string(), Weights::try_from(raw.as_slice())?),
        None => {
            let name = args.strategy.as_deref().unwrap_or(&config.strategy);
            catalog.resolve(name)?
        }
    };

    let mut options = RunOptions::default();
    if !args.no_delay {
        options = options.with_delay(config.delay_per_complexity());
    }
    if let (Some(after), Some(name)) = (args.switch_after, args.switch_to.as_deref()) {
        let (_, switch_weights) = catalog.resolve(name)?;
        options = options.with_switch(WeightSwitch {
            after,
            weights: switch_weights.as_array().to_vec(),
        });
    }

    info!("Running {} with {} ({})", workload_path.display(), label, weights);

    let workload = load_workload(workload_path)
        .context(format!("Couldn't open {}... check the path?", workload_path.display()))?;
    if workload.is_empty() {
        println!("No transactions found in {}", workload_path.display());
        return Ok(());
    }

    if !args.json {
        println!(
            "{} {} transactions with {} strategy...",
            "Processing".cyan(),
            workload.len(),
            label.bold()
        );
        if verbose {
            println!("  Weights: {}", weights);
            if workload.skipped > 0 {
                println!("  {}", format!("Skipped {} malformed records", workload.skipped).yellow());
            }
            if let Some(switch) = &options.switch {
                println!("  Switching weights after {} transactions", switch.after);
            }
        }
        println!("  Processing transactions in priority order:");
    }

    let json = args.json;
    let summary = run(&label, workload.transactions, weights, &options, |processed| {
        if !json {
            println!("{}", format_processed(processed));
        }
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        for line in format_summary(&summary) {
            println!("{}", line.green());
        }
        println!();
    }
    Ok(())
}

fn handle_compare_command(workload: Option<&Path>, config: &Config) -> Result<()> {
    let catalog = config.catalog();
    let workload_path = workload.unwrap_or(&config.workload);
    info!("Comparing strategies on {}", workload_path.display());

    let workload = load_workload(workload_path)
        .context(format!("Couldn't open {}... check the path?", workload_path.display()))?;
    if workload.is_empty() {
        println!("No transactions found in {}", workload_path.display());
        return Ok(());
    }

    println!(
        "{} {} transactions across strategies",
        "Comparing".cyan(),
        workload.len()
    );

    let options = RunOptions::default().with_delay(Duration::ZERO);
    let comparison = compare(&workload.transactions, &catalog, &options)?;

    for (name, e) in &comparison.skipped {
        println!("  {}", format!("Skipping {}: {}", name, e).yellow());
    }
    for line in format_comparison(&comparison.summaries) {
        println!("{}", line);
    }
    Ok(())
}

fn handle_strategies_command(config: &Config) -> Result<()> {
    let catalog = config.catalog();
    println!("{}", "Strategies:".cyan());
    for name in catalog.names() {
        match catalog.resolve(&name) {
            Ok((label, weights)) => {
                let marker = if name == config.strategy { "*" } else { " " };
                println!("  {} {:<14} {:<20} {}", marker, name.bold(), label, weights);
            }
            Err(e) => println!("    {:<14} {}", name.bold(), e.to_string().red()),
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
