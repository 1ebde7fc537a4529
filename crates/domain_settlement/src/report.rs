//! Serializable views of balances and settlement plans
//!
//! These are the shapes handed to whoever exposes a group externally:
//! `{ groupId, balances: [{ memberId, balance }] }` and
//! `{ groupId, transfers: [{ fromMemberId, toMemberId, amount }] }`, with
//! amounts as integer minor units. Zero balances are kept. Expense listings
//! are paged as `{ items, page, pageSize, total }`.

use serde::{Deserialize, Serialize};

use core_kernel::GroupId;
use domain_expenses::Expense;

use crate::balance::{Balances, MemberBalance};
use crate::settlement::{SettlementPlan, Transfer};

/// Balances of every member of a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupBalancesReport {
    pub group_id: GroupId,
    pub balances: Vec<MemberBalance>,
}

impl GroupBalancesReport {
    pub fn new(group_id: GroupId, balances: &Balances) -> Self {
        Self {
            group_id,
            balances: balances.as_slice().to_vec(),
        }
    }
}

/// One page of a group's expenses, newest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpensePage {
    pub items: Vec<Expense>,
    /// 1-based page number
    pub page: usize,
    pub page_size: usize,
    /// Number of expenses across all pages
    pub total: usize,
}

/// Transfers that settle a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSettlementReport {
    pub group_id: GroupId,
    pub transfers: Vec<Transfer>,
}

impl GroupSettlementReport {
    pub fn new(group_id: GroupId, plan: SettlementPlan) -> Self {
        Self {
            group_id,
            transfers: plan.into_transfers(),
        }
    }
}
