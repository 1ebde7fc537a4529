//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! shared expense ledger test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for members, amounts and balances
//! - `builders`: Builder patterns for expenses and group ledgers
//! - `assertions`: Custom assertion helpers for splits, balances and plans
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
