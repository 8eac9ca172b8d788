//! Aggregates expense snapshots into [`Statistics`].

use rust_decimal::Decimal;

use crate::domain::{Amounted, BelongsToCategory, CategoryBreakdown, Expense, Statistics};
use crate::errors::ExpenseError;

use super::ServiceResult;

/// Stateless aggregation over read-only expense snapshots.
pub struct AggregationService;

impl AggregationService {
    /// Computes statistics for the snapshot.
    ///
    /// Returns `Ok(None)` for an empty snapshot so callers can keep whatever
    /// statistics they already hold. Any invalid record rejects the whole
    /// snapshot.
    pub fn compute(expenses: &[Expense]) -> ServiceResult<Option<Statistics>> {
        if expenses.is_empty() {
            tracing::debug!("empty expense snapshot, skipping aggregation");
            return Ok(None);
        }

        for expense in expenses {
            if let Err(err) = expense.validate() {
                tracing::warn!(id = %expense.id, "rejecting expense snapshot: {err}");
                return Err(err);
            }
        }

        let total_expenses = Self::total(expenses)?;
        // Buckets are non-negative and bounded by the checked total.
        let category_breakdown = Self::category_breakdown(expenses);
        tracing::debug!(
            expenses = expenses.len(),
            categories = category_breakdown.len(),
            total = %total_expenses,
            "aggregated expense snapshot"
        );

        Ok(Some(Statistics {
            total_expenses,
            average_expense: total_expenses / Decimal::from(expenses.len()),
            highest_expense: Self::highest(expenses).cloned(),
            lowest_expense: Self::lowest(expenses).cloned(),
            category_breakdown,
            expense_count: expenses.len(),
        }))
    }

    /// Exact sum of every amount; fails instead of wrapping past `Decimal::MAX`.
    pub fn total<T: Amounted>(items: &[T]) -> ServiceResult<Decimal> {
        items.iter().try_fold(Decimal::ZERO, |sum, item| {
            sum.checked_add(item.amount())
                .ok_or_else(|| ExpenseError::AmountOverflow { count: items.len() })
        })
    }

    /// First record holding the maximum amount.
    pub fn highest(expenses: &[Expense]) -> Option<&Expense> {
        let (first, rest) = expenses.split_first()?;
        Some(rest.iter().fold(first, |max, expense| {
            if expense.amount > max.amount {
                expense
            } else {
                max
            }
        }))
    }

    /// First record holding the minimum amount.
    pub fn lowest(expenses: &[Expense]) -> Option<&Expense> {
        let (first, rest) = expenses.split_first()?;
        Some(rest.iter().fold(first, |min, expense| {
            if expense.amount < min.amount {
                expense
            } else {
                min
            }
        }))
    }

    pub fn category_breakdown<T>(items: &[T]) -> CategoryBreakdown
    where
        T: Amounted + BelongsToCategory,
    {
        items
            .iter()
            .fold(CategoryBreakdown::new(), |mut breakdown, item| {
                breakdown.add(item.category(), item.amount());
                breakdown
            })
    }
}

/// Holds the statistics for the most recent non-empty snapshot.
///
/// Starts from the zero-initialized [`Statistics`]. Empty snapshots and
/// rejected snapshots leave the held value untouched.
#[derive(Debug, Clone, Default)]
pub struct StatisticsTracker {
    current: Statistics,
}

impl StatisticsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Statistics {
        &self.current
    }

    /// Recomputes from a fresh snapshot; returns whether the statistics changed hands.
    pub fn refresh(&mut self, expenses: &[Expense]) -> ServiceResult<bool> {
        match AggregationService::compute(expenses)? {
            Some(statistics) => {
                self.current = statistics;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
