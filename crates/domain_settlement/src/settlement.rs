//! Settlement planning
//!
//! Turns net balances into point-to-point transfers that would bring every
//! balance to zero. Debtors and creditors are matched greedily in member
//! order with a two-pointer merge; the plan is always correct for conserved
//! balances, though not necessarily the shortest possible.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use core_kernel::{MemberId, Money};

use crate::balance::Balances;

/// A proposed payment from a debtor to a creditor
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transfer {
    /// Member who pays
    #[serde(rename = "fromMemberId")]
    pub from: MemberId,
    /// Member who receives
    #[serde(rename = "toMemberId")]
    pub to: MemberId,
    /// Always strictly positive
    pub amount: Money,
}

impl Transfer {
    pub fn new(from: MemberId, to: MemberId, amount: Money) -> Self {
        Self { from, to, amount }
    }
}

/// Ordered list of transfers that settles a group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettlementPlan {
    transfers: Vec<Transfer>,
}

impl SettlementPlan {
    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }

    pub fn into_transfers(self) -> Vec<Transfer> {
        self.transfers
    }

    pub fn len(&self) -> usize {
        self.transfers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transfers.is_empty()
    }

    /// Total amount moved by the plan
    pub fn total_amount(&self) -> Money {
        self.transfers.iter().map(|t| t.amount).sum()
    }

    /// Returns the balances left after executing every transfer
    ///
    /// Paying raises the payer's balance towards zero and lowers the
    /// recipient's by the same amount. For conserved balances the result is
    /// all zeros.
    pub fn apply(&self, balances: &Balances) -> Balances {
        let mut remaining = balances.clone();
        for transfer in &self.transfers {
            remaining.adjust(&transfer.from, transfer.amount);
            remaining.adjust(&transfer.to, -transfer.amount);
        }
        remaining
    }
}

impl IntoIterator for SettlementPlan {
    type Item = Transfer;
    type IntoIter = std::vec::IntoIter<Transfer>;

    fn into_iter(self) -> Self::IntoIter {
        self.transfers.into_iter()
    }
}

impl<'a> IntoIterator for &'a SettlementPlan {
    type Item = &'a Transfer;
    type IntoIter = std::slice::Iter<'a, Transfer>;

    fn into_iter(self) -> Self::IntoIter {
        self.transfers.iter()
    }
}

impl From<Vec<Transfer>> for SettlementPlan {
    fn from(transfers: Vec<Transfer>) -> Self {
        Self { transfers }
    }
}

/// Plans the transfers that zero out `balances`
///
/// Creditors and debtors keep their order from `balances`. At each step the
/// current debtor pays the current creditor `min(owed, due)`; whichever side
/// reaches zero is advanced, and both advance on an exact match. This emits
/// at most `debtors + creditors - 1` transfers and nothing when either side
/// is empty.
///
/// Balances that do not sum to zero still terminate; the unmatched remainder
/// is simply left out of the plan.
#[instrument(skip_all, fields(members = balances.len()))]
pub fn plan_settlement(balances: &Balances) -> SettlementPlan {
    let mut creditors: Vec<(&MemberId, Money)> = balances
        .creditors()
        .map(|entry| (&entry.member_id, entry.balance))
        .collect();
    // Debts stay negative so a balance of `i64::MIN` is never negated
    let mut debtors: Vec<(&MemberId, Money)> = balances
        .debtors()
        .map(|entry| (&entry.member_id, entry.balance))
        .collect();

    let mut transfers = Vec::with_capacity((creditors.len() + debtors.len()).saturating_sub(1));
    let (mut i, mut j) = (0, 0);

    while i < debtors.len() && j < creditors.len() {
        let (debtor, owing) = debtors[i];
        let (creditor, due) = creditors[j];

        // Opposite signs, so the sum cannot overflow
        let amount = if (owing + due).is_negative() { due } else { -owing };

        transfers.push(Transfer::new(debtor.clone(), creditor.clone(), amount));
        debtors[i].1 += amount;
        creditors[j].1 -= amount;

        if debtors[i].1.is_zero() {
            i += 1;
        }
        if creditors[j].1.is_zero() {
            j += 1;
        }
    }

    debug!(
        creditors = creditors.len(),
        debtors = debtors.len(),
        transfers = transfers.len(),
        "settlement planned"
    );

    SettlementPlan { transfers }
}
