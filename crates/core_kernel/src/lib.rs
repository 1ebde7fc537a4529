//! Core Kernel - Foundational types shared by the expense ledger crates
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money as signed integer minor units
//! - Member, group and expense identifiers

pub mod money;
pub mod identifiers;
pub mod error;

pub use money::{Money, MoneyError};
pub use identifiers::{ExpenseId, GroupId, MemberId};
pub use error::CoreError;
