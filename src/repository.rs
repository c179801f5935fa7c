//! Boundary to the ledger repository collaborator.
//!
//! The repository is assumed network- or disk-backed, fallible, and without
//! transactional guarantees across calls. None of its operations carry an
//! idempotency key; retrying is the caller's business, the engine never does
//! it on its own.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    Addition, MonthRef, MonthTotals, PaymentStatus, Transaction, TransactionKind, UserId,
};
use crate::errors::{EngineError, Result};

/// One month of ledger data: the viewer's entries plus the repository's
/// summary aggregates for the period.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonthSnapshot {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub summary: MonthTotals,
}

/// Draft for a plain single-party entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleDraft {
    pub owner: UserId,
    pub kind: TransactionKind,
    pub name: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub status: PaymentStatus,
}

/// Draft for a two-party controlled entry. Carries no kind or status: the
/// repository assigns them and controlled entries start unpaid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlledDraft {
    pub owner: UserId,
    pub name: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub counterparty: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_group: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TransactionDraft {
    Simple(SimpleDraft),
    Controlled(ControlledDraft),
}

impl TransactionDraft {
    pub fn owner(&self) -> UserId {
        match self {
            TransactionDraft::Simple(d) => d.owner,
            TransactionDraft::Controlled(d) => d.owner,
        }
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            TransactionDraft::Simple(d) => d.date,
            TransactionDraft::Controlled(d) => d.date,
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        match &mut self {
            TransactionDraft::Simple(d) => d.date = date,
            TransactionDraft::Controlled(d) => d.date = date,
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        let (name, amount) = match self {
            TransactionDraft::Simple(d) => (&d.name, d.amount),
            TransactionDraft::Controlled(d) => {
                if d.counterparty == d.owner {
                    return Err(EngineError::Validation(
                        "counterparty must differ from the owner".into(),
                    ));
                }
                (&d.name, d.amount)
            }
        };
        if name.trim().is_empty() {
            return Err(EngineError::Validation("name must not be empty".into()));
        }
        if amount <= Decimal::ZERO {
            return Err(EngineError::Validation("amount must be positive".into()));
        }
        Ok(())
    }
}

/// Field-wise edit of an existing entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentStatus>,
}

impl TransactionPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.amount.is_none()
            && self.date.is_none()
            && self.status.is_none()
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(amount) = self.amount {
            if amount <= Decimal::ZERO {
                return Err(EngineError::Validation("amount must be positive".into()));
            }
        }
        if matches!(&self.name, Some(name) if name.trim().is_empty()) {
            return Err(EngineError::Validation("name must not be empty".into()));
        }
        Ok(())
    }

    /// Applies the patch to a record. Repository adapters use this so the
    /// canonical record mirrors what the server would return.
    pub fn apply(&self, txn: &mut Transaction) {
        if let Some(name) = &self.name {
            txn.name = name.clone();
        }
        if let Some(amount) = self.amount {
            txn.amount = amount;
        }
        if let Some(date) = self.date {
            txn.date = date;
        }
        if let Some(status) = self.status {
            txn.status = status;
        }
    }
}

/// Logical operations the engine needs from the ledger repository.
///
/// All operations are asynchronous suspension points; the engine issues them
/// from a single-threaded caller and spawns no tasks of its own.
#[async_trait]
pub trait LedgerRepository: Send + Sync {
    /// Fetches one month of entries and summary aggregates for `owner`,
    /// optionally merging in entries shared with them.
    async fn month(
        &self,
        owner: UserId,
        at: MonthRef,
        include_shared: bool,
    ) -> Result<MonthSnapshot>;

    async fn create_simple(&self, draft: &SimpleDraft) -> Result<Transaction>;

    async fn create_controlled(&self, draft: &ControlledDraft) -> Result<Transaction>;

    async fn update(&self, id: Uuid, patch: &TransactionPatch) -> Result<Transaction>;

    async fn delete(&self, id: Uuid, owner: UserId) -> Result<()>;

    async fn set_status(&self, id: Uuid, owner: UserId, status: PaymentStatus) -> Result<()>;

    async fn add_value(
        &self,
        id: Uuid,
        owner: UserId,
        description: &str,
        amount: Decimal,
    ) -> Result<()>;

    async fn remove_value(&self, id: Uuid, owner: UserId, description: &str) -> Result<()>;
}

/// Validation boundary for repository payloads: drops additions without an
/// identifier so core logic can trust its inputs outright.
pub fn sanitize_snapshot(snapshot: &mut MonthSnapshot) {
    for txn in &mut snapshot.transactions {
        txn.additions.retain(Addition::is_valid);
    }
}
