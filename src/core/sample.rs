//! Bundled sample snapshot used by the CLI demo and tests.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::Expense;

const SAMPLE: [(u64, &str, i64, &str, u32); 8] = [
    (1, "Grocery Shopping", 1200, "Food", 25),
    (2, "Electricity Bill", 800, "Utilities", 24),
    (3, "Movie Tickets", 600, "Entertainment", 23),
    (4, "Petrol", 1500, "Transportation", 22),
    (5, "Restaurant Dinner", 2500, "Food", 21),
    (6, "Phone Bill", 599, "Utilities", 20),
    (7, "Gym Membership", 1000, "Healthcare", 19),
    (8, "Books", 450, "Education", 18),
];

/// Eight January 2026 expenses spread across six categories.
pub fn sample_expenses() -> Vec<Expense> {
    SAMPLE
        .iter()
        .map(|&(id, title, amount, category, day)| {
            let date = NaiveDate::from_ymd_opt(2026, 1, day).expect("sample days are valid");
            Expense::new(id, title, Decimal::from(amount), category, date)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_is_newest_first() {
        let expenses = sample_expenses();
        assert_eq!(expenses.len(), 8);
        assert!(expenses.windows(2).all(|pair| pair[0].date > pair[1].date));
        assert!(expenses.iter().all(|expense| expense.validate().is_ok()));
    }
}
