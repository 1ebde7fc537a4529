//! Expenses domain errors

use core_kernel::{MemberId, Money};
use thiserror::Error;

/// Errors that can occur while splitting or validating an expense
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExpenseError {
    /// Total is not a positive amount
    #[error("Invalid amount: {0}")]
    InvalidAmount(Money),

    /// Nobody to split between
    #[error("Cannot split an expense among zero participants")]
    EmptyParticipantSet,

    /// Description is blank
    #[error("Expense description must not be empty")]
    EmptyDescription,

    /// A split carries a non-positive amount
    #[error("Invalid split amount for member {member_id}: {amount}")]
    InvalidSplitAmount {
        member_id: MemberId,
        amount: Money,
    },

    /// Splits do not add up to the expense total
    #[error("Splits must sum to amount: expected={expected}, actual={actual}")]
    SplitTotalMismatch {
        expected: Money,
        actual: Money,
    },

    /// The same member appears in more than one split
    #[error("Duplicate split member: {0}")]
    DuplicateSplitMember(MemberId),

    /// Payer or split member is not part of the group
    #[error("Member not in group: {0}")]
    MemberNotInGroup(MemberId),
}
