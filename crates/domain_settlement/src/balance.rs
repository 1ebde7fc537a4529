//! Net balance computation
//!
//! A member's balance is what the group owes them across the whole expense
//! history: positive for creditors, negative for debtors, zero when settled.
//! Sums are carried in `i128` while posting so that intermediate totals never
//! overflow; only the final balances have to fit in `Money`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, instrument, warn};

use core_kernel::{MemberId, Money};
use domain_expenses::Expense;

use crate::error::SettlementError;

/// One member's net position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberBalance {
    pub member_id: MemberId,
    pub balance: Money,
}

/// Net balances of a group, in member order
///
/// Iteration order is the order members were first added, which the
/// settlement planner relies on to stay deterministic.
///
/// # Invariants
///
/// - Each member appears at most once
/// - For balances derived from valid expenses, the balances sum to zero
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Balances {
    entries: Vec<MemberBalance>,
    index: HashMap<MemberId, usize>,
}

impl Balances {
    /// Creates an empty set of balances
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a zero balance for every member, keeping the first occurrence
    /// of any repeated identifier
    pub fn with_members(members: &[MemberId]) -> Self {
        let mut balances = Self {
            entries: Vec::with_capacity(members.len()),
            index: HashMap::with_capacity(members.len()),
        };
        for member_id in members {
            balances.accumulate(member_id.clone(), Money::zero());
        }
        balances
    }

    /// Adds `amount` to a member's balance, registering the member if needed
    pub fn accumulate(&mut self, member_id: MemberId, amount: Money) {
        match self.index.get(&member_id) {
            Some(&i) => self.entries[i].balance += amount,
            None => {
                self.index.insert(member_id.clone(), self.entries.len());
                self.entries.push(MemberBalance {
                    member_id,
                    balance: amount,
                });
            }
        }
    }

    /// Adds `amount` to an existing member's balance
    ///
    /// Returns `false` and changes nothing if the member is unknown.
    pub fn adjust(&mut self, member_id: &MemberId, amount: Money) -> bool {
        match self.index.get(member_id) {
            Some(&i) => {
                self.entries[i].balance += amount;
                true
            }
            None => false,
        }
    }

    /// Posts one expense, moving each split from the split member to the payer
    ///
    /// # Errors
    ///
    /// Returns `BalanceOutOfRange` naming the first member whose balance
    /// would no longer fit in `Money`; the balances are unchanged in that
    /// case.
    pub fn post(&mut self, expense: &Expense) -> Result<(), SettlementError> {
        let mut totals = self.widened();
        self.post_widened(&mut totals, expense);

        let mut posted = Vec::with_capacity(totals.len());
        for (entry, total) in self.entries.iter().zip(totals) {
            let minor = i64::try_from(total)
                .map_err(|_| SettlementError::BalanceOutOfRange(entry.member_id.clone()))?;
            posted.push(Money::from_minor(minor));
        }

        for (entry, balance) in self.entries.iter_mut().zip(posted) {
            entry.balance = balance;
        }
        Ok(())
    }

    fn widened(&self) -> Vec<i128> {
        self.entries
            .iter()
            .map(|e| i128::from(e.balance.minor_units()))
            .collect()
    }

    fn post_widened(&self, totals: &mut [i128], expense: &Expense) {
        for split in expense.splits() {
            let amount = i128::from(split.amount.minor_units());

            match self.index.get(&split.member_id) {
                Some(&i) => totals[i] -= amount,
                None => warn!(
                    expense_id = %expense.id(),
                    member_id = %split.member_id,
                    "split references a non-member"
                ),
            }
            match self.index.get(expense.paid_by()) {
                Some(&i) => totals[i] += amount,
                None => warn!(
                    expense_id = %expense.id(),
                    member_id = %expense.paid_by(),
                    "payer is not a member"
                ),
            }
        }
    }

    /// Returns a member's balance
    pub fn get(&self, member_id: &MemberId) -> Option<Money> {
        self.index.get(member_id).map(|&i| self.entries[i].balance)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MemberBalance> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[MemberBalance] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all balances
    pub fn total(&self) -> Money {
        self.entries.iter().map(|e| e.balance).sum()
    }

    /// True when the balances sum to exactly zero
    pub fn is_conserved(&self) -> bool {
        self.widened().into_iter().sum::<i128>() == 0
    }

    /// True when every member's balance is zero
    pub fn is_settled(&self) -> bool {
        self.entries.iter().all(|e| e.balance.is_zero())
    }

    /// Members who are owed money, in member order
    pub fn creditors(&self) -> impl Iterator<Item = &MemberBalance> + '_ {
        self.entries.iter().filter(|e| e.balance.is_positive())
    }

    /// Members who owe money, in member order
    pub fn debtors(&self) -> impl Iterator<Item = &MemberBalance> + '_ {
        self.entries.iter().filter(|e| e.balance.is_negative())
    }
}

impl FromIterator<(MemberId, Money)> for Balances {
    /// Collects balances in iteration order; repeated members accumulate
    fn from_iter<I: IntoIterator<Item = (MemberId, Money)>>(iter: I) -> Self {
        let mut balances = Balances::new();
        for (member_id, amount) in iter {
            balances.accumulate(member_id, amount);
        }
        balances
    }
}

impl<'a> IntoIterator for &'a Balances {
    type Item = &'a MemberBalance;
    type IntoIter = std::slice::Iter<'a, MemberBalance>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Balances {
    type Item = MemberBalance;
    type IntoIter = std::vec::IntoIter<MemberBalance>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Computes every member's net balance from the expense history
///
/// Each split moves its amount from the split member to the payer; a payer
/// charged their own split therefore nets to zero. Members who appear in no
/// expense are reported with a zero balance. The result does not depend on
/// the order of `expenses`.
///
/// Expenses are trusted to satisfy their own invariants. Amounts that
/// reference someone outside `members` are not attributed to anyone. A
/// history whose net balances exceed the range of `Money` (which
/// [`GroupLedger`](crate::GroupLedger) refuses to record) has those balances
/// clamped to the nearest bound.
#[instrument(skip_all, fields(members = members.len(), expenses = expenses.len()))]
pub fn compute_balances(members: &[MemberId], expenses: &[Expense]) -> Balances {
    let mut balances = Balances::with_members(members);
    let mut totals = balances.widened();

    for expense in expenses {
        balances.post_widened(&mut totals, expense);
    }

    for (entry, total) in balances.entries.iter_mut().zip(totals) {
        let minor = i64::try_from(total).unwrap_or_else(|_| {
            warn!(member_id = %entry.member_id, "balance out of range, clamped");
            if total.is_negative() {
                i64::MIN
            } else {
                i64::MAX
            }
        });
        entry.balance = Money::from_minor(minor);
    }

    debug!(
        creditors = balances.creditors().count(),
        debtors = balances.debtors().count(),
        "balances computed"
    );

    balances
}
