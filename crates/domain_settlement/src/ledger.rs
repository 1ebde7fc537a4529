//! Group expense ledger
//!
//! Holds a group's members and its validated expense history, keeps the
//! running balances in step with it and plans settlements on request.

use std::num::NonZeroUsize;

use chrono::{DateTime, Utc};
use tracing::{info, instrument};

use core_kernel::{ExpenseId, GroupId, MemberId, Money};
use domain_expenses::{Expense, ExpenseDraft};

use crate::balance::Balances;
use crate::error::SettlementError;
use crate::report::{ExpensePage, GroupBalancesReport, GroupSettlementReport};
use crate::settlement::{plan_settlement, SettlementPlan};

/// The expense history of one group
///
/// # Invariants
///
/// - Members are unique and kept in the order they joined
/// - Every recorded expense passed validation against the members at the
///   time it was recorded, so balances always sum to zero
/// - Every member's balance fits in `Money`
/// - Expenses are append-only
#[derive(Debug, Clone)]
pub struct GroupLedger {
    group_id: GroupId,
    members: Vec<MemberId>,
    expenses: Vec<Expense>,
    balances: Balances,
}

impl GroupLedger {
    /// Creates an empty ledger for a group
    pub fn new(group_id: GroupId) -> Self {
        Self {
            group_id,
            members: Vec::new(),
            expenses: Vec::new(),
            balances: Balances::new(),
        }
    }

    /// Creates a ledger with an initial member list
    ///
    /// # Errors
    ///
    /// Returns `MemberAlreadyExists` if `members` repeats an identifier
    pub fn with_members(
        group_id: GroupId,
        members: impl IntoIterator<Item = MemberId>,
    ) -> Result<Self, SettlementError> {
        let mut ledger = Self::new(group_id);
        for member_id in members {
            ledger.add_member(member_id)?;
        }
        Ok(ledger)
    }

    pub fn group_id(&self) -> GroupId {
        self.group_id
    }

    /// Members in joining order
    pub fn members(&self) -> &[MemberId] {
        &self.members
    }

    pub fn is_member(&self, member_id: &MemberId) -> bool {
        self.members.contains(member_id)
    }

    /// Adds a member to the group
    ///
    /// # Errors
    ///
    /// Returns `MemberAlreadyExists` if the member is already in the group
    pub fn add_member(&mut self, member_id: MemberId) -> Result<(), SettlementError> {
        if self.is_member(&member_id) {
            return Err(SettlementError::MemberAlreadyExists(member_id));
        }
        self.balances.accumulate(member_id.clone(), Money::zero());
        self.members.push(member_id);
        Ok(())
    }

    /// Validates and records an expense created now
    ///
    /// # Errors
    ///
    /// Returns `SettlementError::Expense` wrapping the first validation rule
    /// the draft breaks, or `BalanceOutOfRange` if the expense would push a
    /// balance outside the range of `Money`. The ledger is unchanged in
    /// either case.
    pub fn record(&mut self, draft: ExpenseDraft) -> Result<ExpenseId, SettlementError> {
        self.record_at(draft, Utc::now())
    }

    /// Validates and records an expense with an explicit creation time,
    /// e.g. when replaying an imported history
    pub fn record_at(
        &mut self,
        draft: ExpenseDraft,
        created_at: DateTime<Utc>,
    ) -> Result<ExpenseId, SettlementError> {
        self.record_as(draft, ExpenseId::new_v7(), created_at)
    }

    /// Validates and records an expense under an existing id
    ///
    /// # Errors
    ///
    /// As [`record`](Self::record), plus `ExpenseAlreadyExists` if the id is
    /// already taken.
    #[instrument(skip(self, draft), fields(group_id = %self.group_id))]
    pub fn record_as(
        &mut self,
        draft: ExpenseDraft,
        id: ExpenseId,
        created_at: DateTime<Utc>,
    ) -> Result<ExpenseId, SettlementError> {
        if self.expense(&id).is_some() {
            return Err(SettlementError::ExpenseAlreadyExists(id));
        }

        let expense = draft.validate_as(&self.members, id, created_at)?;
        self.balances.post(&expense)?;

        info!(
            expense_id = %id,
            paid_by = %expense.paid_by(),
            amount = expense.amount().minor_units(),
            splits = expense.splits().len(),
            "expense recorded"
        );

        self.expenses.push(expense);
        Ok(id)
    }

    /// Expenses in the order they were recorded
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Expenses newest first, as a listing would show them
    ///
    /// Expenses sharing a timestamp are listed latest-recorded first.
    pub fn expenses_newest_first(&self) -> Vec<&Expense> {
        let mut expenses: Vec<&Expense> = self.expenses.iter().rev().collect();
        expenses.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        expenses
    }

    /// One page of [`expenses_newest_first`](Self::expenses_newest_first)
    ///
    /// `page` is 1-based. A page past the end is empty; `total` always counts
    /// every expense.
    pub fn expenses_page(&self, page: NonZeroUsize, page_size: NonZeroUsize) -> ExpensePage {
        let skip = (page.get() - 1).saturating_mul(page_size.get());
        let items = self
            .expenses_newest_first()
            .into_iter()
            .skip(skip)
            .take(page_size.get())
            .cloned()
            .collect();

        ExpensePage {
            items,
            page: page.get(),
            page_size: page_size.get(),
            total: self.expenses.len(),
        }
    }

    pub fn expense(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| &e.id() == id)
    }

    /// Current net balance of every member
    ///
    /// Kept up to date as expenses are recorded; always equal to
    /// [`compute_balances`](crate::compute_balances) over the history.
    pub fn balances(&self) -> Balances {
        self.balances.clone()
    }

    /// Transfers that would settle the group right now
    pub fn settlement(&self) -> SettlementPlan {
        plan_settlement(&self.balances())
    }

    pub fn balance_report(&self) -> GroupBalancesReport {
        GroupBalancesReport::new(self.group_id, &self.balances)
    }

    pub fn settlement_report(&self) -> GroupSettlementReport {
        GroupSettlementReport::new(self.group_id, self.settlement())
    }
}
