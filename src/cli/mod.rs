//! CLI module for txsched - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for running, comparing
//! and listing scheduling strategies.

pub mod commands;

pub use commands::Cli;
