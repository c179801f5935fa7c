use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::UserId;
use crate::errors::{EngineError, Result};
use crate::repository::LedgerRepository;

/// Partial value adjustments against an existing entry.
///
/// Ownership checks are the repository's: both operations fail with
/// `NotFound` when the entry does not exist or is not owned by the caller.
pub struct AdditionService;

impl AdditionService {
    /// Appends an adjustment. The description doubles as the removal key, so
    /// it must not be blank; the amount may be negative (a reimbursement).
    pub async fn add_value<R>(
        repo: &R,
        id: Uuid,
        owner: UserId,
        description: &str,
        amount: Decimal,
    ) -> Result<()>
    where
        R: LedgerRepository + ?Sized,
    {
        if description.trim().is_empty() {
            return Err(EngineError::Validation(
                "addition description must not be empty".into(),
            ));
        }
        if amount == Decimal::ZERO {
            return Err(EngineError::Validation(
                "addition amount must not be zero".into(),
            ));
        }
        repo.add_value(id, owner, description, amount).await
    }

    /// Soft-removes the most recent live adjustment with this description.
    pub async fn remove_value<R>(
        repo: &R,
        id: Uuid,
        owner: UserId,
        description: &str,
    ) -> Result<()>
    where
        R: LedgerRepository + ?Sized,
    {
        repo.remove_value(id, owner, description).await
    }
}
