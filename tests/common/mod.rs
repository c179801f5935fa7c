//! Shared in-memory ledger repository for integration tests: scriptable
//! per-month totals, share lists, and failure injection.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use ledger_core::domain::{
    MonthRef, MonthTotals, PaymentStatus, SharedUser, Transaction, UserId,
};
use ledger_core::errors::{EngineError, Result};
use ledger_core::repository::{
    ControlledDraft, LedgerRepository, MonthSnapshot, SimpleDraft, TransactionPatch,
};

#[derive(Default)]
struct State {
    transactions: HashMap<Uuid, Transaction>,
    totals: HashMap<(UserId, MonthRef), MonthTotals>,
    failing_months: Vec<MonthRef>,
    fail_creates_on: Option<NaiveDate>,
    shares: HashMap<UserId, Vec<SharedUser>>,
}

#[derive(Default)]
pub struct InMemoryLedger {
    state: Mutex<State>,
}

#[allow(dead_code)]
impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the summary aggregates returned for one (owner, month).
    pub fn set_totals(&self, owner: UserId, at: MonthRef, totals: MonthTotals) {
        self.state
            .lock()
            .unwrap()
            .totals
            .insert((owner, at), totals);
    }

    /// Makes every fetch of this month fail with a server message.
    pub fn fail_month(&self, at: MonthRef) {
        self.state.lock().unwrap().failing_months.push(at);
    }

    /// Makes creates dated exactly `date` fail with a server message.
    pub fn fail_creates_on(&self, date: NaiveDate) {
        self.state.lock().unwrap().fail_creates_on = Some(date);
    }

    /// Registers `sharer`'s entries as visible to `viewer`.
    pub fn share_with(&self, viewer: UserId, sharer: SharedUser) {
        self.state
            .lock()
            .unwrap()
            .shares
            .entry(viewer)
            .or_default()
            .push(sharer);
    }

    /// Seeds a record directly, bypassing the create path.
    pub fn insert(&self, txn: Transaction) {
        self.state.lock().unwrap().transactions.insert(txn.id, txn);
    }

    pub fn stored(&self, id: Uuid) -> Option<Transaction> {
        self.state.lock().unwrap().transactions.get(&id).cloned()
    }

    pub fn stored_for(&self, owner: UserId) -> Vec<Transaction> {
        let state = self.state.lock().unwrap();
        let mut txns: Vec<_> = state
            .transactions
            .values()
            .filter(|t| t.owner == owner)
            .cloned()
            .collect();
        txns.sort_by_key(|t| t.date);
        txns
    }
}

fn owned_mut(state: &mut State, id: Uuid, owner: UserId) -> Result<&mut Transaction> {
    match state.transactions.get_mut(&id) {
        Some(txn) if txn.owner == owner => Ok(txn),
        _ => Err(EngineError::NotFound(format!("transaction {id}"))),
    }
}

#[async_trait]
impl LedgerRepository for InMemoryLedger {
    async fn month(
        &self,
        owner: UserId,
        at: MonthRef,
        include_shared: bool,
    ) -> Result<MonthSnapshot> {
        let state = self.state.lock().unwrap();
        if state.failing_months.contains(&at) {
            return Err(EngineError::server("scripted outage"));
        }
        let mut transactions: Vec<Transaction> = state
            .transactions
            .values()
            .filter(|t| t.owner == owner && MonthRef::containing(t.date) == at)
            .cloned()
            .collect();
        if include_shared {
            for sharer in state.shares.get(&owner).into_iter().flatten() {
                let shared = state
                    .transactions
                    .values()
                    .filter(|t| t.owner == sharer.user && MonthRef::containing(t.date) == at)
                    .map(|t| {
                        let mut seen = t.clone();
                        seen.shared_by = Some(sharer.user);
                        seen.aggregate_shared = sharer.aggregate;
                        seen
                    });
                transactions.extend(shared);
            }
        }
        transactions.sort_by_key(|t| t.date);
        let summary = state.totals.get(&(owner, at)).cloned().unwrap_or_default();
        Ok(MonthSnapshot {
            transactions,
            summary,
        })
    }

    async fn create_simple(&self, draft: &SimpleDraft) -> Result<Transaction> {
        let mut state = self.state.lock().unwrap();
        if state.fail_creates_on == Some(draft.date) {
            return Err(EngineError::server("insert rejected"));
        }
        let txn = Transaction::simple(
            draft.owner,
            draft.kind,
            draft.name.clone(),
            draft.amount,
            draft.date,
            draft.status,
        )?;
        state.transactions.insert(txn.id, txn.clone());
        Ok(txn)
    }

    async fn create_controlled(&self, draft: &ControlledDraft) -> Result<Transaction> {
        let mut state = self.state.lock().unwrap();
        if state.fail_creates_on == Some(draft.date) {
            return Err(EngineError::server("insert rejected"));
        }
        let mut txn = Transaction::controlled(
            draft.owner,
            draft.name.clone(),
            draft.amount,
            draft.date,
            draft.counterparty,
        )?;
        txn.control_group = Some(draft.control_group.unwrap_or_else(Uuid::new_v4));
        state.transactions.insert(txn.id, txn.clone());
        Ok(txn)
    }

    async fn update(&self, id: Uuid, patch: &TransactionPatch) -> Result<Transaction> {
        let mut state = self.state.lock().unwrap();
        let txn = state
            .transactions
            .get_mut(&id)
            .ok_or_else(|| EngineError::NotFound(format!("transaction {id}")))?;
        patch.apply(txn);
        Ok(txn.clone())
    }

    async fn delete(&self, id: Uuid, owner: UserId) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        owned_mut(&mut state, id, owner)?;
        state.transactions.remove(&id);
        Ok(())
    }

    async fn set_status(&self, id: Uuid, owner: UserId, status: PaymentStatus) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        owned_mut(&mut state, id, owner)?.status = status;
        Ok(())
    }

    async fn add_value(
        &self,
        id: Uuid,
        owner: UserId,
        description: &str,
        amount: Decimal,
    ) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        owned_mut(&mut state, id, owner)?.append_addition(description, amount);
        Ok(())
    }

    async fn remove_value(&self, id: Uuid, owner: UserId, description: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        owned_mut(&mut state, id, owner)?.remove_addition(description)
    }
}
