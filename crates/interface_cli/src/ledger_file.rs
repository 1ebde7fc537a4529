//! Ledger file input
//!
//! A ledger file is a JSON document holding a group's members and its
//! expense history:
//!
//! ```json
//! {
//!   "groupId": "0191d3a0-7c1e-7b5e-8f1a-2b3c4d5e6f70",
//!   "members": ["alice", "bob"],
//!   "expenses": [
//!     {
//!       "description": "Dinner",
//!       "amount": 200,
//!       "paidBy": "alice",
//!       "splits": [
//!         { "memberId": "alice", "amount": 100 },
//!         { "memberId": "bob", "amount": 100 }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Amounts are integer minor units. `groupId` and each expense's `id` and
//! `createdAt` are optional; expenses without an `id` get a fresh one on
//! every load.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use core_kernel::{ExpenseId, GroupId, MemberId};
use domain_expenses::ExpenseDraft;
use domain_settlement::GroupLedger;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::CliError;

/// Deserialized ledger file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<GroupId>,
    pub members: Vec<MemberId>,
    #[serde(default)]
    pub expenses: Vec<ExpenseRecord>,
}

/// One expense entry in a ledger file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ExpenseId>,
    #[serde(flatten)]
    pub draft: ExpenseDraft,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl LedgerFile {
    /// Reads and parses a ledger file
    pub fn read(path: &Path) -> Result<Self, CliError> {
        let content = fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(json: &str) -> Result<Self, CliError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replays the file into a ledger
    ///
    /// Members are added first, then every expense is validated in file
    /// order. The first rejected expense aborts with its zero-based index.
    /// A missing `groupId` or expense `id` gets a fresh one and a missing
    /// `createdAt` becomes the load time.
    #[instrument(skip_all, fields(members = self.members.len(), expenses = self.expenses.len()))]
    pub fn into_ledger(self) -> Result<GroupLedger, CliError> {
        let group_id = self.group_id.unwrap_or_else(GroupId::new_v7);
        let mut ledger = GroupLedger::with_members(group_id, self.members)?;

        for (index, record) in self.expenses.into_iter().enumerate() {
            let id = record.id.unwrap_or_else(ExpenseId::new_v7);
            let created_at = record.created_at.unwrap_or_else(Utc::now);
            ledger
                .record_as(record.draft, id, created_at)
                .map_err(|source| CliError::InvalidExpense { index, source })?;
        }

        debug!(group_id = %ledger.group_id(), "ledger loaded");
        Ok(ledger)
    }
}
