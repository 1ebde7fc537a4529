//! Even split allocation
//!
//! Divides an integer total among an ordered list of participants so that
//! the shares add back up to the total exactly and differ by at most one
//! minor unit.

use core_kernel::{MemberId, Money};
use tracing::debug;

use crate::error::ExpenseError;
use crate::expense::Split;

/// Splits `total` evenly across `participants`
///
/// Each participant gets `total / n`; the first `total % n` participants in
/// the given order get one extra minor unit. Participants whose share would be
/// zero (only possible when `total < n`) are left out, since zero-amount
/// splits are never recorded.
///
/// Uniqueness of `participants` is the caller's responsibility.
///
/// # Errors
///
/// - `ExpenseError::InvalidAmount` if `total` is not positive
/// - `ExpenseError::EmptyParticipantSet` if `participants` is empty
///
/// # Example
///
/// ```rust
/// use core_kernel::{MemberId, Money};
/// use domain_expenses::allocate;
///
/// let members: Vec<MemberId> = ["a", "b", "c"].into_iter().map(MemberId::from).collect();
/// let splits = allocate(Money::from_minor(1000), &members).unwrap();
///
/// let amounts: Vec<i64> = splits.iter().map(|s| s.amount.minor_units()).collect();
/// assert_eq!(amounts, vec![334, 333, 333]);
/// ```
pub fn allocate(total: Money, participants: &[MemberId]) -> Result<Vec<Split>, ExpenseError> {
    if !total.is_positive() {
        return Err(ExpenseError::InvalidAmount(total));
    }
    if participants.is_empty() {
        return Err(ExpenseError::EmptyParticipantSet);
    }

    let count = participants.len() as i64;
    let base = total.minor_units() / count;
    let remainder = total.minor_units() % count;

    debug!(
        total = total.minor_units(),
        participants = count,
        base,
        remainder,
        "allocating expense split"
    );

    let splits = participants
        .iter()
        .enumerate()
        .map(|(i, member_id)| {
            let share = if (i as i64) < remainder { base + 1 } else { base };
            Split::new(member_id.clone(), Money::from_minor(share))
        })
        .filter(|split| split.amount.is_positive())
        .collect();

    Ok(splits)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn allocation_sum_equals_total(
            total in 1i64..1_000_000_000i64,
            count in 1usize..100usize
        ) {
            let participants: Vec<MemberId> =
                (0..count).map(|i| MemberId::new(format!("m{}", i))).collect();
            let splits = allocate(Money::from_minor(total), &participants).unwrap();

            let sum: Money = splits.iter().map(|s| s.amount).sum();
            prop_assert_eq!(sum, Money::from_minor(total));
        }

        #[test]
        fn allocation_shares_differ_by_at_most_one(
            total in 1i64..1_000_000i64,
            count in 1usize..50usize
        ) {
            let participants: Vec<MemberId> =
                (0..count).map(|i| MemberId::new(format!("m{}", i))).collect();
            let splits = allocate(Money::from_minor(total), &participants).unwrap();

            let max = splits.iter().map(|s| s.amount).max().unwrap();
            let min = splits.iter().map(|s| s.amount).min().unwrap();
            prop_assert!((max - min).minor_units() <= 1);
        }
    }
}
