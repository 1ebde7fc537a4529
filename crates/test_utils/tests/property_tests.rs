//! Cross-crate property tests for splitting, balances and settlement

use proptest::prelude::*;

use core_kernel::{MemberId, Money};
use domain_expenses::allocate;
use domain_settlement::{compute_balances, plan_settlement, GroupLedger};

use test_utils::*;

// ============================================================================
// Splitting Properties
// ============================================================================

mod split_properties {
    use super::*;

    proptest! {
        #[test]
        fn even_split_sums_to_total(
            total in positive_amount_minor_strategy(),
            participants in participants_strategy(12),
        ) {
            let splits = allocate(Money::from_minor(total), &participants).unwrap();
            assert_splits_sum_to(&splits, Money::from_minor(total));
        }

        #[test]
        fn even_split_is_fair(
            total in expense_amount_strategy(),
            participants in participants_strategy(12),
        ) {
            let splits = allocate(total, &participants).unwrap();
            assert_fair_split(&splits);
        }

        #[test]
        fn larger_shares_go_to_earlier_participants(
            total in expense_amount_strategy(),
            participants in participants_strategy(12),
        ) {
            let splits = allocate(total, &participants).unwrap();
            for pair in splits.windows(2) {
                prop_assert!(pair[0].amount >= pair[1].amount);
            }
        }
    }
}

// ============================================================================
// Balance Properties
// ============================================================================

mod balance_properties {
    use super::*;

    proptest! {
        #[test]
        fn balances_are_conserved((members, expenses) in expense_history_strategy(6, 20)) {
            let balances = compute_balances(&members, &expenses);
            assert_conserved(&balances);
            prop_assert_eq!(balances.len(), members.len());
        }

        #[test]
        fn balance_order_follows_member_order((members, expenses) in expense_history_strategy(6, 10)) {
            let balances = compute_balances(&members, &expenses);
            let order: Vec<&MemberId> = balances.iter().map(|b| &b.member_id).collect();
            let expected: Vec<&MemberId> = members.iter().collect();
            prop_assert_eq!(order, expected);
        }
    }
}

// ============================================================================
// Settlement Properties
// ============================================================================

mod settlement_properties {
    use super::*;

    proptest! {
        #[test]
        fn plan_zeroes_all_balances(balances in conserved_balances_strategy(10)) {
            let plan = plan_settlement(&balances);
            assert_plan_settles(&balances, &plan);
        }

        #[test]
        fn plan_transfers_are_well_formed(balances in conserved_balances_strategy(10)) {
            let plan = plan_settlement(&balances);
            assert_transfers_well_formed(&plan);
        }

        #[test]
        fn plan_respects_transfer_bound(balances in conserved_balances_strategy(10)) {
            let plan = plan_settlement(&balances);
            assert_transfer_bound(&balances, &plan);
        }

        #[test]
        fn plan_is_deterministic(balances in conserved_balances_strategy(10)) {
            prop_assert_eq!(plan_settlement(&balances), plan_settlement(&balances));
        }

        #[test]
        fn plan_moves_total_credit(balances in conserved_balances_strategy(10)) {
            let plan = plan_settlement(&balances);
            let credit: Money = balances.creditors().map(|b| b.balance).sum();
            prop_assert_eq!(plan.total_amount(), credit);
        }

        #[test]
        fn ledger_settlement_settles_history((members, expenses) in expense_history_strategy(6, 20)) {
            let balances = compute_balances(&members, &expenses);
            let plan = plan_settlement(&balances);
            assert_plan_settles(&balances, &plan);
            assert_transfer_bound(&balances, &plan);
        }
    }
}

// ============================================================================
// Scenario Tests
// ============================================================================

mod scenario_tests {
    use super::*;

    #[test]
    fn test_fixture_balances_settle() {
        for balances in [
            BalanceFixtures::single_debtor(),
            BalanceFixtures::two_by_two(),
            BalanceFixtures::all_zero(),
        ] {
            let plan = plan_settlement(&balances);
            assert_conserved(&balances);
            assert_plan_settles(&balances, &plan);
            assert_transfer_bound(&balances, &plan);
        }
    }

    #[test]
    fn test_weekend_trip_ledger() {
        let ledger: GroupLedger = TestLedgerBuilder::new()
            .with_members(MemberFixtures::flatmates())
            .with_member(MemberFixtures::dave())
            .with_expense(
                TestExpenseBuilder::new()
                    .with_description("Cabin")
                    .with_amount(40_000)
                    .paid_by("alice")
                    .shared_with("alice")
                    .shared_with("bob")
                    .shared_with("carol")
                    .shared_with("dave"),
            )
            .with_expense(
                TestExpenseBuilder::new()
                    .with_description("Fuel")
                    .with_amount(6_001)
                    .paid_by("bob")
                    .shared_with("alice")
                    .shared_with("bob")
                    .shared_with("carol"),
            )
            .with_expense(
                TestExpenseBuilder::new()
                    .with_description("Groceries")
                    .with_amount(3_000)
                    .paid_by("dave")
                    .with_split("carol", 1_000)
                    .with_split("dave", 2_000),
            )
            .build();

        let balances = ledger.balances();
        assert_conserved(&balances);

        // alice: +40000 - 10000 - 2001 = 27999
        assert_eq!(balances.get(&MemberFixtures::alice()), Some(Money::from_minor(27_999)));
        // bob: +6001 - 10000 - 2000 = -5999
        assert_eq!(balances.get(&MemberFixtures::bob()), Some(Money::from_minor(-5_999)));
        // carol: -10000 - 2000 - 1000 = -13000
        assert_eq!(balances.get(&MemberFixtures::carol()), Some(Money::from_minor(-13_000)));
        // dave: +3000 - 10000 - 2000 = -9000
        assert_eq!(balances.get(&MemberFixtures::dave()), Some(Money::from_minor(-9_000)));

        let plan = ledger.settlement();
        assert_plan_settles(&balances, &plan);
        assert_eq!(plan.len(), 3);
        assert!(plan.transfers().iter().all(|t| t.to == MemberFixtures::alice()));
    }
}
