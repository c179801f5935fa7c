//! Forward projection of the running-total balance.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::{MonthRef, MonthTotals, UserId};
use crate::repository::LedgerRepository;

pub struct ForecastService;

impl ForecastService {
    /// Projects the running total as of `viewed`, a current-or-future month.
    ///
    /// The projection anchors on the authoritative balance strictly before
    /// the current month began (`accumulated - monthly` of the current
    /// month's totals), then replays every calendar month from today's
    /// through the viewed one inclusive, adding each month's literal revenue
    /// minus expense. The viewed and current months reuse the totals already
    /// in hand; every other month is fetched sequentially. A failed
    /// intermediate fetch contributes nothing and does not abort the replay.
    pub async fn running_total<R>(
        repo: &R,
        owner: UserId,
        include_shared: bool,
        today: NaiveDate,
        viewed: MonthRef,
        viewed_totals: &MonthTotals,
        current_totals: &MonthTotals,
    ) -> Decimal
    where
        R: LedgerRepository + ?Sized,
    {
        let current = MonthRef::containing(today);
        let mut total = current_totals.accumulated_balance - current_totals.monthly_balance;

        let mut cursor = current;
        while cursor <= viewed {
            let net = if cursor == viewed {
                viewed_totals.net()
            } else if cursor == current {
                current_totals.net()
            } else {
                match repo.month(owner, cursor, include_shared).await {
                    Ok(snapshot) => snapshot.summary.net(),
                    Err(err) => {
                        tracing::warn!(
                            month = %cursor,
                            error = %err,
                            "month fetch failed, projecting without it"
                        );
                        Decimal::ZERO
                    }
                }
            };
            total += net;
            cursor = cursor.next();
        }
        total
    }
}
