//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_expenses::Split;
use domain_settlement::{Balances, SettlementPlan};

/// Asserts that splits add up to exactly `total`
///
/// # Panics
///
/// Panics if the sum of split amounts differs from `total`
pub fn assert_splits_sum_to(splits: &[Split], total: Money) {
    let sum: Money = splits.iter().map(|s| s.amount).sum();
    assert_eq!(
        sum, total,
        "Splits sum to {} but total is {} ({} splits)",
        sum,
        total,
        splits.len()
    );
}

/// Asserts that no two split amounts differ by more than one minor unit
pub fn assert_fair_split(splits: &[Split]) {
    let (Some(max), Some(min)) = (
        splits.iter().map(|s| s.amount).max(),
        splits.iter().map(|s| s.amount).min(),
    ) else {
        return;
    };

    assert!(
        (max - min).minor_units() <= 1,
        "Split amounts are uneven: max={}, min={}",
        max,
        min
    );
}

/// Asserts that balances sum to exactly zero
pub fn assert_conserved(balances: &Balances) {
    assert!(
        balances.is_conserved(),
        "Balances do not sum to zero: total={}, balances={:?}",
        balances.total(),
        balances.as_slice()
    );
}

/// Asserts that executing the plan leaves every balance at zero
pub fn assert_plan_settles(balances: &Balances, plan: &SettlementPlan) {
    let remaining = plan.apply(balances);
    assert!(
        remaining.is_settled(),
        "Plan leaves balances unsettled: remaining={:?}, plan={:?}",
        remaining.as_slice(),
        plan.transfers()
    );
}

/// Asserts that every transfer moves a positive amount between two different members
pub fn assert_transfers_well_formed(plan: &SettlementPlan) {
    for transfer in plan {
        assert!(
            transfer.amount.is_positive(),
            "Transfer amount must be positive: {:?}",
            transfer
        );
        assert_ne!(
            transfer.from, transfer.to,
            "Transfer from a member to themselves: {:?}",
            transfer
        );
    }
}

/// Asserts the plan has at most `creditors + debtors - 1` transfers
pub fn assert_transfer_bound(balances: &Balances, plan: &SettlementPlan) {
    let parties = balances.creditors().count() + balances.debtors().count();
    let bound = parties.saturating_sub(1);
    assert!(
        plan.len() <= bound,
        "Plan has {} transfers, bound is {}",
        plan.len(),
        bound
    );
}
