//! Facade that coordinates session, clock, and repository for the
//! user-level ledger operations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::core::services::{
    AdditionService, OverdueEntry, OverdueService, RecurrenceService, SummaryService,
    TransactionService,
};
use crate::domain::{MonthRef, MonthlySummary, PaymentStatus, Transaction};
use crate::errors::{EngineError, Result};
use crate::repository::{self, LedgerRepository, TransactionDraft, TransactionPatch};
use crate::session::Session;
use crate::time::{Clock, SystemClock};

/// Everything the presentation layer needs to render one month.
#[derive(Debug, Clone)]
pub struct MonthView {
    pub month: MonthRef,
    pub transactions: Vec<Transaction>,
    pub summary: MonthlySummary,
}

pub struct LedgerEngine<R> {
    repo: R,
    session: Session,
    clock: Box<dyn Clock>,
}

impl<R: LedgerRepository> LedgerEngine<R> {
    pub fn new(repo: R, session: Session) -> Self {
        Self::with_clock(repo, session, Box::new(SystemClock))
    }

    pub fn with_clock(repo: R, session: Session, clock: Box<dyn Clock>) -> Self {
        Self {
            repo,
            session,
            clock,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Fetches and summarizes one month for the active user.
    ///
    /// The viewed month's own fetch failure propagates (the caller renders
    /// it as an inline error state); only intermediate forecast months
    /// degrade silently.
    pub async fn view_month(&self, viewed: MonthRef, include_shared: bool) -> Result<MonthView> {
        let owner = self.session.user()?;
        let mut snapshot = self.repo.month(owner, viewed, include_shared).await?;
        repository::sanitize_snapshot(&mut snapshot);
        let summary = SummaryService::summarize(
            &self.repo,
            owner,
            include_shared,
            self.today(),
            viewed,
            &snapshot.summary,
        )
        .await?;
        Ok(MonthView {
            month: viewed,
            transactions: snapshot.transactions,
            summary,
        })
    }

    /// Creates a single entry owned by the active user.
    pub async fn add_transaction(&self, draft: TransactionDraft) -> Result<Transaction> {
        self.check_draft_owner(&draft)?;
        TransactionService::create(&self.repo, &draft).await
    }

    /// Creates `repeat + 1` monthly entries from one draft.
    pub async fn add_recurring(
        &self,
        draft: TransactionDraft,
        repeat: u32,
    ) -> Result<Vec<Transaction>> {
        self.check_draft_owner(&draft)?;
        RecurrenceService::create_series(&self.repo, draft, repeat).await
    }

    pub async fn edit(&self, id: Uuid, patch: TransactionPatch) -> Result<Transaction> {
        self.session.user()?;
        TransactionService::edit(&self.repo, id, &patch).await
    }

    pub async fn remove(&self, id: Uuid) -> Result<()> {
        let owner = self.session.user()?;
        TransactionService::remove(&self.repo, id, owner).await
    }

    pub async fn set_status(&self, id: Uuid, status: PaymentStatus) -> Result<()> {
        let owner = self.session.user()?;
        TransactionService::set_status(&self.repo, id, owner, status).await
    }

    pub async fn add_value(&self, id: Uuid, description: &str, amount: Decimal) -> Result<()> {
        let owner = self.session.user()?;
        AdditionService::add_value(&self.repo, id, owner, description, amount).await
    }

    pub async fn remove_value(&self, id: Uuid, description: &str) -> Result<()> {
        let owner = self.session.user()?;
        AdditionService::remove_value(&self.repo, id, owner, description).await
    }

    /// Session-gated overdue notice over already-fetched entries. `None`
    /// when the notice was already shown, nothing is overdue, or nobody is
    /// signed in.
    pub fn overdue_notice<'a>(
        &self,
        transactions: &'a [Transaction],
    ) -> Option<Vec<OverdueEntry<'a>>> {
        if self.session.user().is_err() {
            return None;
        }
        OverdueService::notice(self.session.overdue_notice(), self.today(), transactions)
    }

    fn check_draft_owner(&self, draft: &TransactionDraft) -> Result<()> {
        let user = self.session.user()?;
        if draft.owner() != user {
            return Err(EngineError::Validation(
                "draft owner does not match the active session".into(),
            ));
        }
        Ok(())
    }
}
