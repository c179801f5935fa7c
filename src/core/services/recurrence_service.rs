//! Expansion of a single entry into a recurring monthly series.

use futures::future;

use crate::domain::{shift_month, Transaction};
use crate::errors::Result;
use crate::repository::{LedgerRepository, TransactionDraft};

pub struct RecurrenceService;

impl RecurrenceService {
    /// Expands a base draft into `repeat + 1` drafts, one per month.
    ///
    /// Draft `i` is dated exactly `i` calendar months after the base date,
    /// always measured from the base, so a month-end date clamps per target
    /// month instead of drifting (Jan 31, Feb 29, Mar 31).
    pub fn expand(draft: &TransactionDraft, repeat: u32) -> Vec<TransactionDraft> {
        let base = draft.date();
        (0..=repeat)
            .map(|i| draft.clone().with_date(shift_month(base, i as i32)))
            .collect()
    }

    /// Creates the whole series against the repository.
    ///
    /// Submissions are issued concurrently and awaited jointly. Any failure
    /// fails the operation as a whole with that error; siblings that were
    /// already persisted stay in place and become visible on the next
    /// canonical month fetch.
    pub async fn create_series<R>(
        repo: &R,
        draft: TransactionDraft,
        repeat: u32,
    ) -> Result<Vec<Transaction>>
    where
        R: LedgerRepository + ?Sized,
    {
        draft.validate()?;
        let drafts = Self::expand(&draft, repeat);
        tracing::debug!(months = drafts.len(), "submitting recurring series");
        future::try_join_all(drafts.iter().map(|d| Self::submit(repo, d))).await
    }

    async fn submit<R>(repo: &R, draft: &TransactionDraft) -> Result<Transaction>
    where
        R: LedgerRepository + ?Sized,
    {
        match draft {
            TransactionDraft::Simple(d) => repo.create_simple(d).await,
            TransactionDraft::Controlled(d) => repo.create_controlled(d).await,
        }
    }
}
