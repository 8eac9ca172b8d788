//! Domain types describing individual expense records.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::common::{Amounted, BelongsToCategory, Displayable};
use crate::errors::ExpenseError;

/// Identifier attached to an expense; sources use either numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExpenseId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpenseId::Number(value) => write!(f, "{value}"),
            ExpenseId::Text(value) => f.write_str(value),
        }
    }
}

impl From<u64> for ExpenseId {
    fn from(value: u64) -> Self {
        ExpenseId::Number(value)
    }
}

impl From<&str> for ExpenseId {
    fn from(value: &str) -> Self {
        ExpenseId::Text(value.to_string())
    }
}

impl From<String> for ExpenseId {
    fn from(value: String) -> Self {
        ExpenseId::Text(value)
    }
}

/// A single recorded transaction. Records are read-only once handed to the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: ExpenseId,
    pub title: String,
    /// Exact monetary amount; JSON numbers and numeric strings are accepted.
    pub amount: Decimal,
    pub category: String,
    pub date: NaiveDate,
}

impl Expense {
    pub fn new(
        id: impl Into<ExpenseId>,
        title: impl Into<String>,
        amount: Decimal,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            amount,
            category: category.into(),
            date,
        }
    }

    /// Rejects records the aggregation cannot summarize meaningfully.
    pub fn validate(&self) -> Result<(), ExpenseError> {
        if self.amount < Decimal::ZERO {
            return Err(self.invalid(format!("amount `{}` is negative", self.amount)));
        }
        if self.category.trim().is_empty() {
            return Err(self.invalid("category is empty".to_string()));
        }
        Ok(())
    }

    fn invalid(&self, reason: String) -> ExpenseError {
        ExpenseError::InvalidExpense {
            id: self.id.to_string(),
            reason,
        }
    }
}

impl Amounted for Expense {
    fn amount(&self) -> Decimal {
        self.amount
    }
}

impl BelongsToCategory for Expense {
    fn category(&self) -> &str {
        &self.category
    }
}

impl Displayable for Expense {
    fn display_label(&self) -> String {
        format!("{} ({}, {})", self.title, self.category, self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 25).unwrap()
    }

    #[test]
    fn ids_deserialize_from_numbers_and_strings() {
        let numeric: Expense = serde_json::from_str(
            r#"{"id":7,"title":"Gym","amount":1000,"category":"Healthcare","date":"2026-01-19"}"#,
        )
        .unwrap();
        assert_eq!(numeric.id, ExpenseId::Number(7));

        let text: Expense = serde_json::from_str(
            r#"{"id":"exp-7","title":"Gym","amount":1000.5,"category":"Healthcare","date":"2026-01-19"}"#,
        )
        .unwrap();
        assert_eq!(text.id, ExpenseId::Text("exp-7".into()));
        assert_eq!(text.amount, dec!(1000.5));
    }

    #[test]
    fn validate_rejects_negative_amounts() {
        let negative = Expense::new(1u64, "Refund", dec!(-5), "Food", date());
        let err = negative.validate().expect_err("negative amount rejected");
        assert!(err.to_string().contains("negative"));

        let cent = Expense::new("x", "Refund", dec!(-0.01), "Food", date());
        assert!(cent.validate().is_err());
    }

    #[test]
    fn fractional_amounts_are_read_exactly() {
        let expense: Expense = serde_json::from_str(
            r#"{"id":9,"title":"Coffee","amount":0.1,"category":"Food","date":"2026-01-19"}"#,
        )
        .unwrap();
        assert_eq!(expense.amount, dec!(0.1));
        assert_eq!(expense.amount * dec!(3), dec!(0.3));

        let quoted: Expense = serde_json::from_str(
            r#"{"id":10,"title":"Tea","amount":"12.35","category":"Food","date":"2026-01-19"}"#,
        )
        .unwrap();
        assert_eq!(quoted.amount, dec!(12.35));
    }

    #[test]
    fn validate_rejects_blank_category() {
        let expense = Expense::new(3u64, "Mystery", dec!(10), "   ", date());
        let err = expense.validate().expect_err("blank category rejected");
        assert!(err.to_string().contains("Invalid expense 3"));
    }

    #[test]
    fn zero_amount_is_accepted() {
        let expense = Expense::new(4u64, "Free sample", Decimal::ZERO, "Food", date());
        assert!(expense.validate().is_ok());
        assert_eq!(expense.display_label(), "Free sample (Food, 2026-01-25)");
    }
}
