//! Command-line arguments

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use core_kernel::MemberId;

#[derive(Parser, Debug)]
#[command(name = "shared-expenses", version)]
#[command(about = "Split shared expenses and settle who owes whom")]
pub struct Cli {
    /// Print compact JSON regardless of configuration
    #[arg(long, global = true)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Split an amount evenly among members
    Split(SplitArgs),
    /// Show each member's net balance
    Balances(LedgerArgs),
    /// Plan the transfers that settle every balance
    Settle(LedgerArgs),
    /// List expenses, newest first, one page at a time
    Expenses(ExpensesArgs),
    /// Show a single expense with its splits
    Expense(ExpenseArgs),
}

#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Amount in major units, e.g. 12.34
    #[arg(long, allow_hyphen_values = true)]
    pub amount: String,

    /// Members sharing the amount, in order of precedence for the remainder
    #[arg(required = true, value_parser = parse_member)]
    pub members: Vec<MemberId>,
}

#[derive(Args, Debug)]
pub struct LedgerArgs {
    /// Path to the ledger JSON file
    pub ledger: PathBuf,
}

#[derive(Args, Debug)]
pub struct ExpensesArgs {
    /// Path to the ledger JSON file
    pub ledger: PathBuf,

    /// 1-based page number
    #[arg(long, default_value = "1")]
    pub page: NonZeroUsize,

    /// Expenses per page
    #[arg(long, default_value = "20")]
    pub page_size: NonZeroUsize,
}

#[derive(Args, Debug)]
pub struct ExpenseArgs {
    /// Path to the ledger JSON file
    pub ledger: PathBuf,

    /// Expense id, with or without the `EXP-` prefix
    pub id: String,
}

fn parse_member(raw: &str) -> Result<MemberId, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("member id must not be empty".to_string());
    }
    Ok(MemberId::from(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_split() {
        let cli = Cli::try_parse_from(["shared-expenses", "split", "--amount", "10.00", "a", "b", "c"])
            .unwrap();

        match cli.command {
            Command::Split(args) => {
                assert_eq!(args.amount, "10.00");
                assert_eq!(
                    args.members,
                    vec![MemberId::from("a"), MemberId::from("b"), MemberId::from("c")]
                );
            }
            other => panic!("expected split, got {:?}", other),
        }
        assert!(!cli.compact);
    }

    #[test]
    fn test_split_requires_members() {
        assert!(Cli::try_parse_from(["shared-expenses", "split", "--amount", "1"]).is_err());
    }

    #[test]
    fn test_parse_settle_with_global_flag() {
        let cli = Cli::try_parse_from(["shared-expenses", "settle", "ledger.json", "--compact"]).unwrap();

        assert!(cli.compact);
        assert!(matches!(cli.command, Command::Settle(ref args) if args.ledger == PathBuf::from("ledger.json")));
    }

    #[test]
    fn test_expenses_paging_defaults() {
        let cli = Cli::try_parse_from(["shared-expenses", "expenses", "ledger.json"]).unwrap();

        match cli.command {
            Command::Expenses(args) => {
                assert_eq!(args.page.get(), 1);
                assert_eq!(args.page_size.get(), 20);
            }
            other => panic!("expected expenses, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let result = Cli::try_parse_from(["shared-expenses", "expenses", "ledger.json", "--page-size", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_member_rejected() {
        assert!(Cli::try_parse_from(["shared-expenses", "split", "--amount", "1", " "]).is_err());
    }
}
