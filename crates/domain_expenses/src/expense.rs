//! Expense records and their validation
//!
//! An `Expense` is only ever produced by validating an `ExpenseDraft` against
//! the group's members, so every `Expense` in circulation satisfies:
//!
//! - its splits sum exactly to its amount
//! - no member appears in more than one split
//! - every split amount is at least one minor unit
//! - the payer and all split members belong to the group

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use core_kernel::{ExpenseId, MemberId, Money};

use crate::allocation::allocate;
use crate::error::ExpenseError;

/// One member's share of an expense
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Split {
    /// The member who owes this share
    pub member_id: MemberId,
    /// Share in minor units
    pub amount: Money,
}

impl Split {
    pub fn new(member_id: MemberId, amount: Money) -> Self {
        Self { member_id, amount }
    }
}

/// A validated shared expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    id: ExpenseId,
    description: String,
    paid_by: MemberId,
    amount: Money,
    splits: Vec<Split>,
    created_at: DateTime<Utc>,
}

impl Expense {
    pub fn id(&self) -> ExpenseId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The member who paid the full amount
    pub fn paid_by(&self) -> &MemberId {
        &self.paid_by
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Splits in the order they were submitted
    pub fn splits(&self) -> &[Split] {
        &self.splits
    }

    /// Creation time, used for ordering and display only
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// An expense as submitted, before validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: Money,
    pub paid_by: MemberId,
    pub splits: Vec<Split>,
}

impl ExpenseDraft {
    /// Creates a draft with explicit splits
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        paid_by: MemberId,
        splits: Vec<Split>,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            paid_by,
            splits,
        }
    }

    /// Creates a draft whose amount is split evenly among `participants`
    ///
    /// # Errors
    ///
    /// Propagates the allocation errors (`InvalidAmount`, `EmptyParticipantSet`).
    pub fn split_evenly(
        description: impl Into<String>,
        amount: Money,
        paid_by: MemberId,
        participants: &[MemberId],
    ) -> Result<Self, ExpenseError> {
        let splits = allocate(amount, participants)?;
        Ok(Self::new(description, amount, paid_by, splits))
    }

    /// Validates the draft against the group's members, stamping it with the
    /// current time
    ///
    /// # Errors
    ///
    /// Returns the first rule the draft breaks, checked in this order:
    /// description, amount, presence of splits, split amounts, split total,
    /// duplicate members, group membership.
    pub fn validate(self, members: &[MemberId]) -> Result<Expense, ExpenseError> {
        self.validate_at(members, Utc::now())
    }

    /// Same as [`validate`](Self::validate) with an explicit creation time
    pub fn validate_at(
        self,
        members: &[MemberId],
        created_at: DateTime<Utc>,
    ) -> Result<Expense, ExpenseError> {
        self.validate_as(members, ExpenseId::new_v7(), created_at)
    }

    /// Same as [`validate_at`](Self::validate_at) keeping an existing id,
    /// e.g. for an expense imported from elsewhere
    pub fn validate_as(
        self,
        members: &[MemberId],
        id: ExpenseId,
        created_at: DateTime<Utc>,
    ) -> Result<Expense, ExpenseError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(ExpenseError::EmptyDescription);
        }

        if !self.amount.is_positive() {
            return Err(ExpenseError::InvalidAmount(self.amount));
        }

        if self.splits.is_empty() {
            return Err(ExpenseError::EmptyParticipantSet);
        }

        if let Some(split) = self.splits.iter().find(|s| !s.amount.is_positive()) {
            return Err(ExpenseError::InvalidSplitAmount {
                member_id: split.member_id.clone(),
                amount: split.amount,
            });
        }

        let split_total = self
            .splits
            .iter()
            .try_fold(Money::zero(), |acc, s| acc.checked_add(&s.amount).ok())
            .ok_or(ExpenseError::InvalidAmount(self.amount))?;
        if split_total != self.amount {
            return Err(ExpenseError::SplitTotalMismatch {
                expected: self.amount,
                actual: split_total,
            });
        }

        let mut seen = HashSet::with_capacity(self.splits.len());
        for split in &self.splits {
            if !seen.insert(&split.member_id) {
                return Err(ExpenseError::DuplicateSplitMember(split.member_id.clone()));
            }
        }

        let group: HashSet<&MemberId> = members.iter().collect();
        let required = std::iter::once(&self.paid_by).chain(self.splits.iter().map(|s| &s.member_id));
        for member_id in required {
            if !group.contains(member_id) {
                return Err(ExpenseError::MemberNotInGroup(member_id.clone()));
            }
        }

        Ok(Expense {
            id,
            description: description.to_string(),
            paid_by: self.paid_by,
            amount: self.amount,
            splits: self.splits,
            created_at,
        })
    }
}
