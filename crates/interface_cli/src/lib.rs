//! Shared Expenses CLI
//!
//! Command-line front end over the expense and settlement domains. Reads a
//! group's ledger from a JSON file and prints balances, settlement plans or
//! even splits as JSON on stdout.
//!
//! # Modules
//!
//! - `cli`: clap argument definitions
//! - `commands`: command implementations and JSON rendering
//! - `config`: environment-driven configuration
//! - `ledger_file`: ledger file format and replay into a `GroupLedger`
//! - `telemetry`: tracing subscriber setup

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod ledger_file;
pub mod telemetry;

pub use cli::{Cli, Command};
pub use config::{CliConfig, LogFormat};
pub use error::CliError;
pub use ledger_file::{ExpenseRecord, LedgerFile};
