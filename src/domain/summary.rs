use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::UserId;

/// Per-month totals as reported by the ledger repository.
///
/// Past months carry authoritative `monthly_balance`/`accumulated_balance`
/// aggregates; fields the wire payload omits default to zero here rather
/// than inside core logic.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MonthTotals {
    #[serde(default)]
    pub total_revenue: Decimal,
    #[serde(default)]
    pub total_expense: Decimal,
    #[serde(default)]
    pub monthly_balance: Decimal,
    /// Revenue minus expense accumulated across all months up to and
    /// including this one.
    #[serde(default)]
    pub accumulated_balance: Decimal,
}

impl MonthTotals {
    /// The month's literal revenue minus expense.
    pub fn net(&self) -> Decimal {
        self.total_revenue - self.total_expense
    }
}

/// Derived summary for one viewed (owner, month, year) triple. Never
/// persisted by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlySummary {
    pub revenue: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
    pub running_total: Decimal,
}

/// A counterparty the viewer's entries are shared with. `aggregate` controls
/// whether shared amounts are summed into the viewer's own totals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SharedUser {
    pub user: UserId,
    #[serde(default)]
    pub aggregate: bool,
}
