//! Derived value types produced by the aggregation pipeline.

use std::collections::HashMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::common::to_cents;
use crate::domain::expense::Expense;

/// Summed amount for one category label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
}

/// Per-category totals kept in the order each category was first seen.
///
/// Categories that never appear in the input have no entry; there are no
/// implicit zero buckets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<CategoryTotal>", into = "Vec<CategoryTotal>")]
pub struct CategoryBreakdown {
    entries: Vec<CategoryTotal>,
    index: HashMap<String, usize>,
}

impl CategoryBreakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to the bucket for `category`, creating it at zero on first sight.
    pub fn add(&mut self, category: &str, amount: Decimal) {
        let position = match self.index.get(category) {
            Some(position) => *position,
            None => {
                self.entries.push(CategoryTotal {
                    category: category.to_string(),
                    total: Decimal::ZERO,
                });
                let position = self.entries.len() - 1;
                self.index.insert(category.to_string(), position);
                position
            }
        };
        let entry = &mut self.entries[position];
        entry.total = entry.total.saturating_add(amount);
    }

    pub fn get(&self, category: &str) -> Option<Decimal> {
        self.index
            .get(category)
            .map(|position| self.entries[*position].total)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, CategoryTotal> {
        self.entries.iter()
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.category.as_str())
    }

    /// Exact sum of every bucket.
    pub fn total(&self) -> Decimal {
        self.entries
            .iter()
            .fold(Decimal::ZERO, |sum, entry| sum.saturating_add(entry.total))
    }
}

impl From<Vec<CategoryTotal>> for CategoryBreakdown {
    fn from(entries: Vec<CategoryTotal>) -> Self {
        let mut breakdown = CategoryBreakdown::new();
        for entry in entries {
            breakdown.add(&entry.category, entry.total);
        }
        breakdown
    }
}

impl From<CategoryBreakdown> for Vec<CategoryTotal> {
    fn from(breakdown: CategoryBreakdown) -> Self {
        breakdown.entries
    }
}

impl<'a> IntoIterator for &'a CategoryBreakdown {
    type Item = &'a CategoryTotal;
    type IntoIter = std::slice::Iter<'a, CategoryTotal>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Summary metrics over one expense snapshot.
///
/// The default value is the zero-initialized "no data yet" state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_expenses: Decimal,
    /// Exact total divided by the count, correct to 28 significant digits.
    pub average_expense: Decimal,
    pub highest_expense: Option<Expense>,
    pub lowest_expense: Option<Expense>,
    pub category_breakdown: CategoryBreakdown,
    pub expense_count: usize,
}

impl Statistics {
    /// True for the zero-initialized state that no snapshot has replaced yet.
    pub fn is_empty(&self) -> bool {
        self.expense_count == 0
    }
}

/// A `(category, total)` pair positioned in the descending ranking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedCategory {
    pub category: String,
    pub total: Decimal,
}

impl From<&CategoryTotal> for RankedCategory {
    fn from(entry: &CategoryTotal) -> Self {
        Self {
            category: entry.category.clone(),
            total: entry.total,
        }
    }
}

/// Ranked category enriched with its share of total spending.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub total: Decimal,
    /// Share of the total rounded to one decimal place; `None` when nothing was spent.
    pub percentage: Option<Decimal>,
    /// Unrounded share of the total used for proportional bars.
    pub bar_width: Option<Decimal>,
}

/// Spending classification against the configured budget threshold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BudgetStatus {
    OverBudget,
    WithinBudget,
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetStatus::OverBudget => "Over budget",
            BudgetStatus::WithinBudget => "Within budget",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Insights {
    pub top_category: Option<RankedCategory>,
    pub transaction_count: usize,
    pub daily_average: Decimal,
    pub days_in_period: u32,
    pub budget_status: BudgetStatus,
    pub budget_threshold: Decimal,
}

impl Insights {
    /// Human-readable lines for the four insights, in display order.
    pub fn messages(&self) -> Vec<String> {
        let top = match &self.top_category {
            Some(top) => format!(
                "You spent the most on {} with {:.2}",
                top.category,
                to_cents(top.total)
            ),
            None => "No spending recorded yet".to_string(),
        };
        let budget = match self.budget_status {
            BudgetStatus::OverBudget => format!(
                "You've exceeded your budget of {:.2}",
                to_cents(self.budget_threshold)
            ),
            BudgetStatus::WithinBudget => format!(
                "You're within your budget of {:.2}",
                to_cents(self.budget_threshold)
            ),
        };
        vec![
            top,
            format!(
                "You made {} transactions this period",
                self.transaction_count
            ),
            format!(
                "Your daily average spending over {} days is approximately {:.2}",
                self.days_in_period,
                to_cents(self.daily_average)
            ),
            budget,
        ]
    }
}

/// Everything the presentation layer needs for one snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseReport {
    pub statistics: Statistics,
    pub ranking: Vec<CategoryShare>,
    pub insights: Insights,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn breakdown_keeps_first_seen_order() {
        let mut breakdown = CategoryBreakdown::new();
        breakdown.add("Food", dec!(10));
        breakdown.add("Utilities", dec!(5));
        breakdown.add("Food", dec!(2.5));

        let categories: Vec<&str> = breakdown.categories().collect();
        assert_eq!(categories, vec!["Food", "Utilities"]);
        assert_eq!(breakdown.get("Food"), Some(dec!(12.5)));
        assert_eq!(breakdown.get("Travel"), None);
        assert_eq!(breakdown.total(), dec!(17.5));
    }

    #[test]
    fn breakdown_total_is_exact_for_cent_amounts() {
        let mut breakdown = CategoryBreakdown::new();
        breakdown.add("A", dec!(0.1));
        breakdown.add("B", dec!(0.1));
        breakdown.add("A", dec!(1.1));
        assert_eq!(breakdown.get("A"), Some(dec!(1.2)));
        assert_eq!(breakdown.total(), dec!(1.3));
    }

    #[test]
    fn breakdown_serializes_as_ordered_list() {
        let mut breakdown = CategoryBreakdown::new();
        breakdown.add("Zoo", dec!(1));
        breakdown.add("Art", dec!(2.5));
        let json = serde_json::to_string(&breakdown).unwrap();
        assert_eq!(
            json,
            r#"[{"category":"Zoo","total":1.0},{"category":"Art","total":2.5}]"#
        );
        let restored: CategoryBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, breakdown);
    }

    #[test]
    fn default_statistics_is_empty() {
        let stats = Statistics::default();
        assert!(stats.is_empty());
        assert_eq!(stats.total_expenses, Decimal::ZERO);
        assert!(stats.highest_expense.is_none());
        assert!(stats.category_breakdown.is_empty());
    }

    #[test]
    fn messages_fall_back_without_top_category() {
        let insights = Insights {
            top_category: None,
            transaction_count: 0,
            daily_average: Decimal::ZERO,
            days_in_period: 30,
            budget_status: BudgetStatus::WithinBudget,
            budget_threshold: dec!(5000),
        };
        let messages = insights.messages();
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0], "No spending recorded yet");
        assert_eq!(messages[3], "You're within your budget of 5000.00");
    }
}
