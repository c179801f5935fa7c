use chrono::NaiveDate;

use crate::domain::MonthRef;

/// How a viewed month relates to the reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthClass {
    /// Strictly before the month containing the reference date. Summaries
    /// trust the repository's authoritative aggregates.
    Past,
    /// The current month or later. The current month deliberately takes the
    /// same projection path as genuinely future months: its repository-side
    /// accumulated balance is not yet consistent across call sites, so the
    /// running total is always replayed from the month before today.
    Forecast,
}

impl MonthClass {
    /// Classifies on the (year, month) pair alone, which sidesteps any
    /// day-of-month or time-of-day skew between the two dates.
    pub fn classify(today: NaiveDate, viewed: MonthRef) -> Self {
        if viewed < MonthRef::containing(today) {
            MonthClass::Past
        } else {
            MonthClass::Forecast
        }
    }

    pub fn is_past(self) -> bool {
        matches!(self, MonthClass::Past)
    }

    pub fn is_future(self) -> bool {
        !self.is_past()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn current_month_classifies_as_forecast() {
        let class = MonthClass::classify(date(2024, 6, 15), MonthRef::new(2024, 6));
        assert_eq!(class, MonthClass::Forecast);
        assert!(class.is_future());
    }

    #[test]
    fn earlier_months_are_past_regardless_of_day() {
        // Viewing May from the 1st of June: same day-of-month distance
        // must not matter.
        assert!(MonthClass::classify(date(2024, 6, 1), MonthRef::new(2024, 5)).is_past());
        assert!(MonthClass::classify(date(2024, 1, 31), MonthRef::new(2023, 12)).is_past());
        assert!(MonthClass::classify(date(2024, 1, 1), MonthRef::new(2024, 12)).is_future());
    }

    #[test]
    fn past_and_future_are_mutually_exclusive() {
        let today = date(2024, 6, 15);
        for year in 2022..=2026 {
            for month in 1..=12 {
                let class = MonthClass::classify(today, MonthRef::new(year, month));
                assert_ne!(class.is_past(), class.is_future());
            }
        }
    }
}
