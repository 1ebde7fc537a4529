//! Settlement Domain - Balances and debt settlement
//!
//! This crate reduces a group's expense history to who owes whom:
//!
//! - **Balances**: one signed net amount per member; positive means the
//!   member is owed money, negative means they owe money
//! - **Settlement**: a list of transfers that brings every balance to zero
//!
//! Both are pure functions of the expense history and are recomputed on
//! every request.
//!
//! # Conservation
//!
//! Every split moves money from one member to another, so the balances of a
//! group always sum to exactly zero. The settlement planner depends on this
//! to exhaust debtors and creditors together.
//!
//! # Example
//!
//! ```rust
//! use core_kernel::{GroupId, MemberId, Money};
//! use domain_expenses::ExpenseDraft;
//! use domain_settlement::GroupLedger;
//!
//! let members: Vec<MemberId> = vec!["alice".into(), "bob".into()];
//! let mut ledger = GroupLedger::with_members(GroupId::new(), members.clone()).unwrap();
//!
//! let draft = ExpenseDraft::split_evenly("Dinner", Money::from_minor(200), "alice".into(), &members).unwrap();
//! ledger.record(draft).unwrap();
//!
//! let plan = ledger.settlement();
//! assert_eq!(plan.len(), 1);
//! assert_eq!(plan.transfers()[0].from.as_str(), "bob");
//! assert_eq!(plan.transfers()[0].amount, Money::from_minor(100));
//! ```

pub mod balance;
pub mod settlement;
pub mod ledger;
pub mod report;
pub mod error;

pub use balance::{compute_balances, Balances, MemberBalance};
pub use settlement::{plan_settlement, SettlementPlan, Transfer};
pub use ledger::GroupLedger;
pub use report::{ExpensePage, GroupBalancesReport, GroupSettlementReport};
pub use error::SettlementError;
