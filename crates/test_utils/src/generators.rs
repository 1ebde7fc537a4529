//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use core_kernel::{GroupId, MemberId, Money};
use domain_expenses::{Expense, ExpenseDraft};
use domain_settlement::Balances;
use proptest::prelude::*;

/// Deterministic member identifiers `member-0`, `member-1`, ...
pub fn member_ids(count: usize) -> Vec<MemberId> {
    (0..count).map(|i| MemberId::new(format!("member-{}", i))).collect()
}

/// Strategy for generating valid positive amounts in minor units
pub fn positive_amount_minor_strategy() -> impl Strategy<Value = i64> {
    1i64..1_000_000_000i64
}

/// Strategy for generating everyday expense totals (1p to £1,000)
pub fn expense_amount_strategy() -> impl Strategy<Value = Money> {
    (1i64..100_000i64).prop_map(Money::from_minor)
}

/// Strategy for generating a non-empty participant list of up to `max` members
pub fn participants_strategy(max: usize) -> impl Strategy<Value = Vec<MemberId>> {
    (1..=max).prop_map(member_ids)
}

/// Strategy for generating GroupId
pub fn group_id_strategy() -> impl Strategy<Value = GroupId> {
    any::<[u8; 16]>().prop_map(|bytes| GroupId::from_uuid(uuid::Uuid::from_bytes(bytes)))
}

/// Strategy for generating a group and a valid expense history
///
/// Each expense has a random payer, a random non-empty subset of members as
/// participants (falling back to the payer alone) and an even split. Payers
/// may or may not be among the participants.
pub fn expense_history_strategy(
    max_members: usize,
    max_expenses: usize,
) -> impl Strategy<Value = (Vec<MemberId>, Vec<Expense>)> {
    (1..=max_members)
        .prop_flat_map(move |count| {
            let expense = (
                0..count,
                1i64..100_000i64,
                proptest::collection::vec(any::<bool>(), count),
            );
            (Just(member_ids(count)), proptest::collection::vec(expense, 0..=max_expenses))
        })
        .prop_map(|(members, raw)| {
            let expenses = raw
                .into_iter()
                .map(|(payer, amount, mask)| {
                    let mut participants: Vec<MemberId> = members
                        .iter()
                        .zip(&mask)
                        .filter(|(_, included)| **included)
                        .map(|(id, _)| id.clone())
                        .collect();
                    if participants.is_empty() {
                        participants.push(members[payer].clone());
                    }

                    ExpenseDraft::split_evenly(
                        "Generated expense",
                        Money::from_minor(amount),
                        members[payer].clone(),
                        &participants,
                    )
                    .and_then(|draft| draft.validate(&members))
                    .expect("Generated invalid expense")
                })
                .collect();
            (members, expenses)
        })
}

/// Strategy for generating balances that sum to zero
///
/// The last member absorbs whatever the others add up to. Roughly a quarter
/// of the generated balances are exactly zero.
pub fn conserved_balances_strategy(max_members: usize) -> impl Strategy<Value = Balances> {
    let amount = prop_oneof![
        3 => -100_000i64..100_000i64,
        1 => Just(0i64),
    ];

    proptest::collection::vec(amount, 1..max_members.max(2)).prop_map(|amounts| {
        let closing = -amounts.iter().sum::<i64>();
        amounts
            .into_iter()
            .chain(std::iter::once(closing))
            .enumerate()
            .map(|(i, amount)| (MemberId::new(format!("member-{}", i)), Money::from_minor(amount)))
            .collect()
    })
}
