//! Validated passthroughs for entry mutations.
//!
//! The repository owns consistency between concurrent mutations from other
//! devices; after any of these calls the caller re-fetches the canonical
//! month instead of patching local state.

use uuid::Uuid;

use crate::domain::{PaymentStatus, Transaction, UserId};
use crate::errors::Result;
use crate::repository::{LedgerRepository, TransactionDraft, TransactionPatch};

pub struct TransactionService;

impl TransactionService {
    /// Creates a single entry after local validation.
    pub async fn create<R>(repo: &R, draft: &TransactionDraft) -> Result<Transaction>
    where
        R: LedgerRepository + ?Sized,
    {
        draft.validate()?;
        match draft {
            TransactionDraft::Simple(d) => repo.create_simple(d).await,
            TransactionDraft::Controlled(d) => repo.create_controlled(d).await,
        }
    }

    /// Edits name/amount/date/status of an existing entry.
    pub async fn edit<R>(repo: &R, id: Uuid, patch: &TransactionPatch) -> Result<Transaction>
    where
        R: LedgerRepository + ?Sized,
    {
        patch.validate()?;
        repo.update(id, patch).await
    }

    pub async fn remove<R>(repo: &R, id: Uuid, owner: UserId) -> Result<()>
    where
        R: LedgerRepository + ?Sized,
    {
        repo.delete(id, owner).await
    }

    /// Moves an entry between `Unpaid` and `Paid`.
    pub async fn set_status<R>(
        repo: &R,
        id: Uuid,
        owner: UserId,
        status: PaymentStatus,
    ) -> Result<()>
    where
        R: LedgerRepository + ?Sized,
    {
        repo.set_status(id, owner, status).await
    }
}
