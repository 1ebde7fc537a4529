//! Shared Expenses - CLI Binary
//!
//! # Usage
//!
//! ```bash
//! shared-expenses split --amount 10.00 alice bob carol
//! shared-expenses balances ledger.json
//! shared-expenses settle ledger.json --compact
//! shared-expenses expenses ledger.json --page 2 --page-size 10
//! shared-expenses expense ledger.json EXP-0191d3a0-7c1e-7b5e-8f1a-2b3c4d5e6f70
//! ```
//!
//! # Environment Variables
//!
//! * `SHARED_EXPENSES_LOG_LEVEL` - Log level or filter directive (default: info)
//! * `SHARED_EXPENSES_LOG_FORMAT` - `text` or `json` (default: text)
//! * `SHARED_EXPENSES_PRETTY` - Pretty-print JSON output (default: true)
//! * `RUST_LOG` - Overrides the log level when set
//!
//! # Exit Codes
//!
//! * `0` - Success
//! * `65` - Invalid input (amounts, ledger contents, identifiers)
//! * `66` - Ledger file could not be read
//! * `78` - Invalid configuration

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use interface_cli::{commands, telemetry, Cli, CliConfig, CliError};

fn main() -> anyhow::Result<ExitCode> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(err) => return Ok(report(err)),
    };

    telemetry::init_tracing(&config);

    let pretty = config.pretty && !cli.compact;
    let output = match commands::run(&cli.command, pretty) {
        Ok(output) => output,
        Err(err) => return Ok(report(err)),
    };

    writeln!(io::stdout().lock(), "{output}").context("Failed to write output")?;
    Ok(ExitCode::SUCCESS)
}

fn report(err: CliError) -> ExitCode {
    tracing::debug!(error = ?err, "command failed");
    eprintln!("error: {err}");
    ExitCode::from(err.exit_code())
}
