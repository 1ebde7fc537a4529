//! Settlement domain errors

use core_kernel::{ExpenseId, MemberId};
use domain_expenses::ExpenseError;
use thiserror::Error;

/// Errors raised while maintaining a group ledger
///
/// Computing balances and planning settlements never fails; only changes to
/// the ledger and [`Balances::post`](crate::Balances::post) can.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettlementError {
    /// Member already exists
    #[error("Member already exists: {0}")]
    MemberAlreadyExists(MemberId),

    /// Expense was rejected
    #[error("Invalid expense: {0}")]
    Expense(#[from] ExpenseError),

    /// An expense with this id is already recorded
    #[error("Expense already exists: {0}")]
    ExpenseAlreadyExists(ExpenseId),

    /// Recording the expense would push a balance outside the range of `Money`
    #[error("Balance out of range for member: {0}")]
    BalanceOutOfRange(MemberId),
}
