//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the expense ledger.
//! These fixtures are designed to be consistent and predictable for unit tests.

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::{GroupId, MemberId, Money};
use domain_settlement::Balances;
use uuid::Uuid;

/// Fixture for member identifiers
pub struct MemberFixtures;

impl MemberFixtures {
    pub fn alice() -> MemberId {
        MemberId::from("alice")
    }

    pub fn bob() -> MemberId {
        MemberId::from("bob")
    }

    pub fn carol() -> MemberId {
        MemberId::from("carol")
    }

    pub fn dave() -> MemberId {
        MemberId::from("dave")
    }

    /// A flatshare of three
    pub fn flatmates() -> Vec<MemberId> {
        vec![Self::alice(), Self::bob(), Self::carol()]
    }
}

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// £10.00
    pub fn ten_pounds() -> Money {
        Money::from_minor(1000)
    }

    /// £2.00
    pub fn two_pounds() -> Money {
        Money::from_minor(200)
    }
}

/// Fixture for identifiers
pub struct IdFixtures;

impl IdFixtures {
    /// A fixed group id, stable across runs
    pub fn group_id() -> GroupId {
        GroupId::from_uuid(Uuid::from_u128(0x0191_d3a0_7c1e_7b5e_8f1a_2b3c_4d5e_6f70))
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Start of the fixture trip (Mar 1, 2024)
    pub fn trip_start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }
}

/// Balances from the reference settlement scenarios
pub struct BalanceFixtures;

impl BalanceFixtures {
    fn from_entries(entries: &[(&str, i64)]) -> Balances {
        entries
            .iter()
            .map(|&(id, amount)| (MemberId::from(id), Money::from_minor(amount)))
            .collect()
    }

    /// One debtor owing two creditors
    pub fn single_debtor() -> Balances {
        Self::from_entries(&[("debtor", -200), ("creditorA", 50), ("creditorB", 150)])
    }

    /// Two debtors and two creditors with an uneven overlap
    pub fn two_by_two() -> Balances {
        Self::from_entries(&[
            ("debtorA", -300),
            ("debtorB", -100),
            ("creditorA", 250),
            ("creditorB", 150),
        ])
    }

    /// Everyone settled
    pub fn all_zero() -> Balances {
        Self::from_entries(&[("user-a", 0), ("user-b", 0)])
    }
}
