//! CLI error handling

use std::path::PathBuf;

use core_kernel::{CoreError, MoneyError};
use domain_expenses::ExpenseError;
use domain_settlement::SettlementError;
use thiserror::Error;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid ledger: {0}")]
    Ledger(#[from] SettlementError),

    #[error("Expense #{index} rejected: {source}")]
    InvalidExpense {
        index: usize,
        #[source]
        source: SettlementError,
    },

    #[error("Invalid amount: {0}")]
    Money(#[from] MoneyError),

    #[error("Cannot split: {0}")]
    Split(#[from] ExpenseError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl CliError {
    /// Process exit code for the error
    ///
    /// Input problems exit with 65 (`EX_DATAERR`), unreadable files with 66
    /// (`EX_NOINPUT`) and bad configuration with 78 (`EX_CONFIG`).
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Io { .. } => 66,
            CliError::Config(_) => 78,
            _ => 65,
        }
    }
}
