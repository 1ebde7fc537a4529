//! Exit status tests for the shared-expenses binary

use std::path::Path;
use std::process::{Command, Output};

use serde_json::{json, Value};
use tempfile::TempDir;

fn run_binary(dir: &Path, env: &[(&str, &str)], args: &[&str]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_shared-expenses"));
    command
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("SHARED_EXPENSES_LOG_LEVEL")
        .env_remove("SHARED_EXPENSES_LOG_FORMAT")
        .env_remove("SHARED_EXPENSES_PRETTY")
        .args(args);
    for (key, value) in env {
        command.env(key, value);
    }
    command.output().unwrap()
}

fn write_ledger(dir: &TempDir) -> String {
    let ledger = json!({
        "members": ["alice", "bob"],
        "expenses": [{
            "description": "Dinner",
            "amount": 200,
            "paidBy": "alice",
            "splits": [
                { "memberId": "alice", "amount": 100 },
                { "memberId": "bob", "amount": 100 }
            ]
        }]
    });
    let path = dir.path().join("ledger.json");
    std::fs::write(&path, ledger.to_string()).unwrap();
    path.to_string_lossy().into_owned()
}

// ============================================================================
// Exit Code Tests
// ============================================================================

mod exit_code_tests {
    use super::*;

    #[test]
    fn test_success_exits_zero() {
        let dir = TempDir::new().unwrap();
        let ledger = write_ledger(&dir);

        let output = run_binary(dir.path(), &[], &["settle", &ledger, "--compact"]);

        assert_eq!(output.status.code(), Some(0));
        let plan: Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(plan["transfers"][0]["fromMemberId"], "bob");
        assert_eq!(plan["transfers"][0]["amount"], 100);
    }

    #[test]
    fn test_bad_log_format_exits_78() {
        let dir = TempDir::new().unwrap();
        let ledger = write_ledger(&dir);

        let output = run_binary(
            dir.path(),
            &[("SHARED_EXPENSES_LOG_FORMAT", "xml")],
            &["balances", &ledger],
        );

        assert_eq!(output.status.code(), Some(78));
        assert!(output.stdout.is_empty());
        assert!(String::from_utf8_lossy(&output.stderr).starts_with("error: "));
    }

    #[test]
    fn test_missing_ledger_exits_66() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.json");

        let output = run_binary(dir.path(), &[], &["balances", &missing.to_string_lossy()]);

        assert_eq!(output.status.code(), Some(66));
    }

    #[test]
    fn test_unknown_expense_exits_65() {
        let dir = TempDir::new().unwrap();
        let ledger = write_ledger(&dir);

        let output = run_binary(
            dir.path(),
            &[],
            &["expense", &ledger, "0191d3a0-7c1e-7b5e-8f1a-2b3c4d5e6f70"],
        );

        assert_eq!(output.status.code(), Some(65));
        assert!(String::from_utf8_lossy(&output.stderr).contains("Expense not found"));
    }
}
