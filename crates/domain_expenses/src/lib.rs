//! Expenses Domain - Splitting and validating shared expenses
//!
//! This crate owns everything that happens to an expense before it reaches
//! the balance ledger:
//!
//! - **Allocation**: dividing a total evenly among participants without
//!   losing or gaining a minor unit
//! - **Validation**: turning a submitted `ExpenseDraft` into an `Expense`
//!   whose splits are known to add up to its total
//!
//! # Example
//!
//! ```rust
//! use core_kernel::{MemberId, Money};
//! use domain_expenses::ExpenseDraft;
//!
//! let group: Vec<MemberId> = vec!["alice".into(), "bob".into(), "carol".into()];
//!
//! let expense = ExpenseDraft::split_evenly("Groceries", Money::from_minor(1000), "alice".into(), &group)
//!     .and_then(|draft| draft.validate(&group))
//!     .unwrap();
//!
//! assert_eq!(expense.splits().len(), 3);
//! ```

pub mod allocation;
pub mod expense;
pub mod error;

pub use allocation::allocate;
pub use expense::{Expense, ExpenseDraft, Split};
pub use error::ExpenseError;
