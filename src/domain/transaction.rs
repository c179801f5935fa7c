//! Domain models for ledger entries and their partial value adjustments.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::UserId;
use crate::errors::{EngineError, Result};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionKind {
    Revenue,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Revenue => "Revenue",
            TransactionKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

/// Settlement state of an entry. Partial settlement is expressed through
/// additions and the cumulative paid amount, never through this enum.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentStatus {
    Unpaid,
    Paid,
}

impl PaymentStatus {
    pub fn toggled(self) -> Self {
        match self {
            PaymentStatus::Unpaid => PaymentStatus::Paid,
            PaymentStatus::Paid => PaymentStatus::Unpaid,
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentStatus::Unpaid => "Unpaid",
            PaymentStatus::Paid => "Paid",
        };
        f.write_str(label)
    }
}

/// A partial value adjustment layered onto an entry after creation, e.g. a
/// follow-up charge or a reimbursement (negative amounts are allowed).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Addition {
    #[serde(default)]
    pub id: Uuid,
    pub description: String,
    pub amount: Decimal,
    #[serde(default)]
    pub removed: bool,
}

impl Addition {
    pub fn new(description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount,
            removed: false,
        }
    }

    /// Only entries carrying an identifier are valid; anything else is a
    /// malformed repository payload and gets dropped at the adapter edge.
    pub fn is_valid(&self) -> bool {
        !self.id.is_nil()
    }
}

/// A financial record: one revenue or expense entry in a calendar month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub owner: UserId,
    pub kind: TransactionKind,
    pub name: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    /// A controlled entry binds two parties (owner and counterparty) and is
    /// used for shared debts; a simple entry has a single party.
    #[serde(default)]
    pub controlled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counterparty: Option<UserId>,
    pub status: PaymentStatus,
    /// Links sibling controlled entries created together.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_group: Option<Uuid>,
    /// Set when the entry is visible to the viewer through sharing rather
    /// than ownership; identifies the sharer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_by: Option<UserId>,
    /// Whether shared amounts count into the viewer's own totals.
    #[serde(default)]
    pub aggregate_shared: bool,
    #[serde(default)]
    pub additions: Vec<Addition>,
    #[serde(default)]
    pub paid_amount: Decimal,
}

impl Transaction {
    /// A single-party entry with an explicit kind and settlement status.
    pub fn simple(
        owner: UserId,
        kind: TransactionKind,
        name: impl Into<String>,
        amount: Decimal,
        date: NaiveDate,
        status: PaymentStatus,
    ) -> Result<Self> {
        check_amount(amount)?;
        Ok(Self {
            id: Uuid::new_v4(),
            owner,
            kind,
            name: name.into(),
            amount,
            date,
            controlled: false,
            counterparty: None,
            status,
            control_group: None,
            shared_by: None,
            aggregate_shared: false,
            additions: Vec::new(),
            paid_amount: Decimal::ZERO,
        })
    }

    /// A two-party entry for a shared debt. Starts unpaid.
    pub fn controlled(
        owner: UserId,
        name: impl Into<String>,
        amount: Decimal,
        date: NaiveDate,
        counterparty: UserId,
    ) -> Result<Self> {
        check_amount(amount)?;
        let mut txn = Self::simple(
            owner,
            TransactionKind::Expense,
            name,
            amount,
            date,
            PaymentStatus::Unpaid,
        )?;
        txn.controlled = true;
        txn.counterparty = Some(counterparty);
        Ok(txn)
    }

    /// Whether the viewer owns this entry, as opposed to seeing it shared in.
    pub fn is_own(&self) -> bool {
        self.shared_by.is_none()
    }

    /// Additions that have not been logically removed, in insertion order.
    pub fn active_additions(&self) -> impl Iterator<Item = &Addition> {
        self.additions.iter().filter(|a| !a.removed)
    }

    /// Base amount plus every non-removed addition.
    pub fn effective_amount(&self) -> Decimal {
        self.amount + self.active_additions().map(|a| a.amount).sum::<Decimal>()
    }

    /// What remains to be settled against the effective amount.
    pub fn outstanding(&self) -> Decimal {
        self.effective_amount() - self.paid_amount
    }

    /// Appends a new addition, live by default.
    pub fn append_addition(&mut self, description: impl Into<String>, amount: Decimal) -> &Addition {
        self.additions.push(Addition::new(description, amount));
        &self.additions[self.additions.len() - 1]
    }

    /// Marks the most recent non-removed addition matching `description` as
    /// removed. The record stays in place for audit.
    pub fn remove_addition(&mut self, description: &str) -> Result<()> {
        let addition = self
            .additions
            .iter_mut()
            .rev()
            .find(|a| !a.removed && a.description == description);
        match addition {
            Some(a) => {
                a.removed = true;
                Ok(())
            }
            None => Err(EngineError::NotFound(format!(
                "no addition matching '{description}'"
            ))),
        }
    }
}

fn check_amount(amount: Decimal) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(EngineError::Validation(
            "amount must be positive".into(),
        ));
    }
    Ok(())
}
