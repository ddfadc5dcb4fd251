//! Window filtering
//!
//! Narrows a transaction list to a named time window before aggregation.

use chrono::NaiveDate;

use crate::models::{TimeWindow, Transaction};

/// Transactions whose date falls inside `window`, anchored at `reference`
///
/// Input order is preserved; the input is never modified.
pub fn filter_by_window<'a>(
    transactions: &'a [Transaction],
    window: TimeWindow,
    reference: NaiveDate,
) -> Vec<&'a Transaction> {
    transactions
        .iter()
        .filter(|t| window.contains(t.date, reference))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::expense(Money::from_cents(100), "Food", date(2024, 1, 20)),
            Transaction::expense(Money::from_cents(200), "Rent", date(2023, 12, 1)),
            Transaction::income(Money::from_cents(300), "Salary", date(2024, 1, 1)),
            Transaction::expense(Money::from_cents(400), "Food", date(2023, 6, 30)),
        ]
    }

    #[test]
    fn test_this_month_preserves_order() {
        let txns = sample();
        let filtered = filter_by_window(&txns, TimeWindow::ThisMonth, date(2024, 1, 31));
        let amounts: Vec<i64> = filtered.iter().map(|t| t.amount.cents()).collect();
        assert_eq!(amounts, vec![100, 300]);
    }

    #[test]
    fn test_this_year() {
        let txns = sample();
        let filtered = filter_by_window(&txns, TimeWindow::ThisYear, date(2023, 7, 1));
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_last_six_months_lower_bound_is_inclusive() {
        let txns = sample();
        let filtered = filter_by_window(&txns, TimeWindow::LastSixMonths, date(2023, 12, 30));
        // 2023-06-30 is exactly six months before the reference
        assert_eq!(filtered.len(), 4);

        let filtered = filter_by_window(&txns, TimeWindow::LastSixMonths, date(2024, 1, 1));
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_all_and_empty() {
        let txns = sample();
        assert_eq!(
            filter_by_window(&txns, TimeWindow::All, date(2000, 1, 1)).len(),
            txns.len()
        );

        for window in TimeWindow::ALL {
            assert!(filter_by_window(&[], window, date(2024, 1, 1)).is_empty());
        }
    }
}
