use chrono::NaiveDate;

use crate::domain::{PaymentStatus, Transaction};
use crate::session::NoticeGate;

/// An unpaid entry whose due date has passed, with how late it is.
#[derive(Debug, Clone, PartialEq)]
pub struct OverdueEntry<'a> {
    pub transaction: &'a Transaction,
    pub days_overdue: i64,
}

pub struct OverdueService;

impl OverdueService {
    /// Scans the viewer's own unpaid entries for due dates strictly before
    /// `today`. Pure and safe to re-run at any time; days are counted
    /// between midnights, so an entry due today is not overdue.
    pub fn find_overdue<'a>(
        today: NaiveDate,
        transactions: &'a [Transaction],
    ) -> Vec<OverdueEntry<'a>> {
        transactions
            .iter()
            .filter(|txn| txn.is_own() && txn.status == PaymentStatus::Unpaid)
            .filter_map(|txn| {
                let days_overdue = (today - txn.date).num_days();
                (days_overdue > 0).then_some(OverdueEntry {
                    transaction: txn,
                    days_overdue,
                })
            })
            .collect()
    }

    /// One-shot variant for the session's overdue notice: returns entries
    /// only the first time something is actually overdue. An empty scan
    /// leaves the gate open so a later scan can still notify.
    pub fn notice<'a>(
        gate: &NoticeGate,
        today: NaiveDate,
        transactions: &'a [Transaction],
    ) -> Option<Vec<OverdueEntry<'a>>> {
        if gate.is_claimed() {
            return None;
        }
        let entries = Self::find_overdue(today, transactions);
        if entries.is_empty() {
            return None;
        }
        gate.claim();
        Some(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TransactionKind, UserId};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn unpaid(owner: UserId, due: NaiveDate) -> Transaction {
        Transaction::simple(
            owner,
            TransactionKind::Expense,
            "Bill",
            dec!(10),
            due,
            PaymentStatus::Unpaid,
        )
        .unwrap()
    }

    #[test]
    fn counts_whole_days_and_excludes_same_day() {
        let owner = Uuid::new_v4();
        let today = date(2024, 6, 15);
        let txns = vec![unpaid(owner, date(2024, 6, 10)), unpaid(owner, today)];

        let overdue = OverdueService::find_overdue(today, &txns);
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue[0].days_overdue, 5);
    }

    #[test]
    fn paid_and_shared_entries_are_ignored() {
        let owner = Uuid::new_v4();
        let today = date(2024, 6, 15);
        let mut paid = unpaid(owner, date(2024, 1, 1));
        paid.status = PaymentStatus::Paid;
        let mut shared = unpaid(owner, date(2024, 1, 1));
        shared.shared_by = Some(Uuid::new_v4());

        assert!(OverdueService::find_overdue(today, &[paid, shared]).is_empty());
    }

    #[test]
    fn notice_fires_once_but_only_when_something_is_overdue() {
        let owner = Uuid::new_v4();
        let gate = NoticeGate::new();
        let today = date(2024, 6, 15);

        // Nothing overdue yet: the gate stays open.
        assert!(OverdueService::notice(&gate, today, &[unpaid(owner, today)]).is_none());

        let txns = vec![unpaid(owner, date(2024, 6, 1))];
        let first = OverdueService::notice(&gate, today, &txns);
        assert_eq!(first.map(|entries| entries.len()), Some(1));
        assert!(OverdueService::notice(&gate, today, &txns).is_none());
    }
}
