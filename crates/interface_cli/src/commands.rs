//! Command implementations
//!
//! Each command returns a serializable value; rendering to JSON is left to
//! [`render`] so the commands can be tested without capturing stdout.

use std::num::NonZeroUsize;
use std::path::Path;

use core_kernel::{CoreError, ExpenseId, MemberId, Money};
use domain_expenses::{allocate, Expense, Split};
use domain_settlement::{ExpensePage, GroupBalancesReport, GroupSettlementReport};
use serde::Serialize;
use tracing::info;

use crate::cli::Command;
use crate::error::CliError;
use crate::ledger_file::LedgerFile;

/// Splits a major-unit amount evenly among `members`
pub fn split(amount: &str, members: &[MemberId]) -> Result<Vec<Split>, CliError> {
    let total: Money = amount.parse()?;
    Ok(allocate(total, members)?)
}

pub fn balances(path: &Path) -> Result<GroupBalancesReport, CliError> {
    let ledger = LedgerFile::read(path)?.into_ledger()?;
    Ok(ledger.balance_report())
}

pub fn settle(path: &Path) -> Result<GroupSettlementReport, CliError> {
    let ledger = LedgerFile::read(path)?.into_ledger()?;
    let report = ledger.settlement_report();

    info!(
        group_id = %report.group_id,
        transfers = report.transfers.len(),
        "settlement planned"
    );

    Ok(report)
}

/// One page of the ledger's expenses, newest first
pub fn expenses(path: &Path, page: NonZeroUsize, page_size: NonZeroUsize) -> Result<ExpensePage, CliError> {
    let ledger = LedgerFile::read(path)?.into_ledger()?;
    Ok(ledger.expenses_page(page, page_size))
}

/// Looks up a single expense by id
pub fn expense(path: &Path, id: &str) -> Result<Expense, CliError> {
    let expense_id: ExpenseId = id.parse()?;
    let ledger = LedgerFile::read(path)?.into_ledger()?;

    ledger
        .expense(&expense_id)
        .cloned()
        .ok_or_else(|| CoreError::not_found("Expense", id).into())
}

/// Serializes command output as JSON
pub fn render<T: Serialize>(value: &T, pretty: bool) -> Result<String, CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Runs a parsed command and returns the rendered output
pub fn run(command: &Command, pretty: bool) -> Result<String, CliError> {
    match command {
        Command::Split(args) => render(&split(&args.amount, &args.members)?, pretty),
        Command::Balances(args) => render(&balances(&args.ledger)?, pretty),
        Command::Settle(args) => render(&settle(&args.ledger)?, pretty),
        Command::Expenses(args) => render(&expenses(&args.ledger, args.page, args.page_size)?, pretty),
        Command::Expense(args) => render(&expense(&args.ledger, &args.id)?, pretty),
    }
}
