use chrono::NaiveDate;

use crate::core::services::ForecastService;
use crate::core::timeline::MonthClass;
use crate::domain::{MonthRef, MonthTotals, MonthlySummary, UserId};
use crate::errors::Result;
use crate::repository::LedgerRepository;

pub struct SummaryService;

impl SummaryService {
    /// Derives the summary for one viewed month.
    ///
    /// Past months trust the repository's aggregates outright. The current
    /// month and future months recompute the balance from the literal
    /// per-month totals and take the running total from the forecast replay.
    /// Fetching the current month's anchor totals is an initial read, so its
    /// failure propagates instead of degrading.
    pub async fn summarize<R>(
        repo: &R,
        owner: UserId,
        include_shared: bool,
        today: NaiveDate,
        viewed: MonthRef,
        viewed_totals: &MonthTotals,
    ) -> Result<MonthlySummary>
    where
        R: LedgerRepository + ?Sized,
    {
        match MonthClass::classify(today, viewed) {
            MonthClass::Past => Ok(Self::settled(viewed_totals)),
            MonthClass::Forecast => {
                let current = MonthRef::containing(today);
                let current_totals = if viewed == current {
                    viewed_totals.clone()
                } else {
                    repo.month(owner, current, include_shared).await?.summary
                };
                let running_total = ForecastService::running_total(
                    repo,
                    owner,
                    include_shared,
                    today,
                    viewed,
                    viewed_totals,
                    &current_totals,
                )
                .await;
                Ok(MonthlySummary {
                    revenue: viewed_totals.total_revenue,
                    expense: viewed_totals.total_expense,
                    balance: viewed_totals.net(),
                    running_total,
                })
            }
        }
    }

    /// Summary for a settled (past) month: the repository's word is final.
    pub fn settled(totals: &MonthTotals) -> MonthlySummary {
        MonthlySummary {
            revenue: totals.total_revenue,
            expense: totals.total_expense,
            balance: totals.monthly_balance,
            running_total: totals.accumulated_balance,
        }
    }
}
