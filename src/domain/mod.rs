pub mod month;
pub mod summary;
pub mod transaction;

pub use month::{shift_month, MonthRef};
pub use summary::{MonthTotals, MonthlySummary, SharedUser};
pub use transaction::{Addition, PaymentStatus, Transaction, TransactionKind};

use uuid::Uuid;

/// Stable identifier for a tracker user.
pub type UserId = Uuid;
