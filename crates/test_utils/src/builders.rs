//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use chrono::{DateTime, Duration, Utc};
use core_kernel::{GroupId, MemberId, Money};
use domain_expenses::{Expense, ExpenseDraft, Split};
use domain_settlement::GroupLedger;

use crate::fixtures::{IdFixtures, MemberFixtures, MoneyFixtures, TemporalFixtures};

/// Builder for constructing test expense drafts
///
/// Without explicit splits the amount is split evenly among the
/// participants, which default to the payer alone.
pub struct TestExpenseBuilder {
    description: String,
    amount: Money,
    paid_by: MemberId,
    participants: Vec<MemberId>,
    splits: Option<Vec<Split>>,
}

impl Default for TestExpenseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestExpenseBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            description: "Dinner".to_string(),
            amount: MoneyFixtures::ten_pounds(),
            paid_by: MemberFixtures::alice(),
            participants: Vec::new(),
            splits: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the amount in minor units
    pub fn with_amount(mut self, minor: i64) -> Self {
        self.amount = Money::from_minor(minor);
        self
    }

    pub fn paid_by(mut self, member_id: impl Into<MemberId>) -> Self {
        self.paid_by = member_id.into();
        self
    }

    /// Adds a participant to the even split
    pub fn shared_with(mut self, member_id: impl Into<MemberId>) -> Self {
        self.participants.push(member_id.into());
        self
    }

    /// Adds an explicit split, disabling the even split
    pub fn with_split(mut self, member_id: impl Into<MemberId>, minor: i64) -> Self {
        self.splits
            .get_or_insert_with(Vec::new)
            .push(Split::new(member_id.into(), Money::from_minor(minor)));
        self
    }

    /// Builds the draft without validating it
    pub fn build_draft(self) -> ExpenseDraft {
        let splits = match self.splits {
            Some(splits) => splits,
            None => {
                let participants = if self.participants.is_empty() {
                    vec![self.paid_by.clone()]
                } else {
                    self.participants
                };
                domain_expenses::allocate(self.amount, &participants)
                    .expect("Even split of test expense failed")
            }
        };

        ExpenseDraft::new(self.description, self.amount, self.paid_by, splits)
    }

    /// Builds and validates the expense against `members`
    pub fn build(self, members: &[MemberId]) -> Expense {
        self.build_draft()
            .validate_at(members, TemporalFixtures::trip_start())
            .expect("Test expense failed validation")
    }
}

/// Builder for constructing test group ledgers
///
/// Expenses are recorded one minute apart starting at the fixture trip
/// start, so their order by creation time matches the order they were added.
pub struct TestLedgerBuilder {
    group_id: GroupId,
    members: Vec<MemberId>,
    expenses: Vec<TestExpenseBuilder>,
}

impl Default for TestLedgerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestLedgerBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            group_id: IdFixtures::group_id(),
            members: Vec::new(),
            expenses: Vec::new(),
        }
    }

    pub fn with_group_id(mut self, group_id: GroupId) -> Self {
        self.group_id = group_id;
        self
    }

    pub fn with_member(mut self, member_id: impl Into<MemberId>) -> Self {
        self.members.push(member_id.into());
        self
    }

    pub fn with_members(mut self, members: impl IntoIterator<Item = MemberId>) -> Self {
        self.members.extend(members);
        self
    }

    pub fn with_expense(mut self, expense: TestExpenseBuilder) -> Self {
        self.expenses.push(expense);
        self
    }

    pub fn build(self) -> GroupLedger {
        let mut ledger = GroupLedger::with_members(self.group_id, self.members)
            .expect("Test ledger has duplicate members");
        let start: DateTime<Utc> = TemporalFixtures::trip_start();

        for (i, expense) in self.expenses.into_iter().enumerate() {
            ledger
                .record_at(expense.build_draft(), start + Duration::minutes(i as i64))
                .expect("Test ledger expense failed validation");
        }

        ledger
    }
}
