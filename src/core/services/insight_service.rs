//! Derives percentages and human-oriented insights from aggregated statistics.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::InsightConfig;
use crate::domain::{BudgetStatus, CategoryShare, Insights, RankedCategory, Statistics};

use super::ServiceResult;

pub struct InsightService;

impl InsightService {
    /// Share of `total` rounded to one decimal place, or `None` when nothing was spent.
    ///
    /// The exact decimal share is rounded with halves going away from zero.
    pub fn percentage(amount: Decimal, total: Decimal) -> Option<Decimal> {
        Self::bar_width(amount, total)
            .map(|share| share.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Unrounded share of `total`, or `None` when nothing was spent.
    ///
    /// Also `None` when the share falls outside the decimal range.
    pub fn bar_width(amount: Decimal, total: Decimal) -> Option<Decimal> {
        if total.is_zero() {
            return None;
        }
        amount.checked_div(total)?.checked_mul(Decimal::ONE_HUNDRED)
    }

    pub fn shares(statistics: &Statistics, ranking: &[RankedCategory]) -> Vec<CategoryShare> {
        let total = statistics.total_expenses;
        ranking
            .iter()
            .map(|entry| CategoryShare {
                category: entry.category.clone(),
                total: entry.total,
                percentage: Self::percentage(entry.total, total),
                bar_width: Self::bar_width(entry.total, total),
            })
            .collect()
    }

    pub fn top_category(ranking: &[RankedCategory]) -> Option<RankedCategory> {
        ranking.first().cloned()
    }

    pub fn daily_average(total: Decimal, days_in_period: u32) -> Decimal {
        if days_in_period == 0 {
            return Decimal::ZERO;
        }
        total / Decimal::from(days_in_period)
    }

    /// Over budget only when the total strictly exceeds the threshold.
    pub fn budget_status(total: Decimal, threshold: Decimal) -> BudgetStatus {
        if total > threshold {
            BudgetStatus::OverBudget
        } else {
            BudgetStatus::WithinBudget
        }
    }

    pub fn derive(
        statistics: &Statistics,
        ranking: &[RankedCategory],
        config: &InsightConfig,
    ) -> ServiceResult<Insights> {
        config.validate()?;
        let total = statistics.total_expenses;
        Ok(Insights {
            top_category: Self::top_category(ranking),
            transaction_count: statistics.expense_count,
            daily_average: Self::daily_average(total, config.days_in_period),
            days_in_period: config.days_in_period,
            budget_status: Self::budget_status(total, config.budget_threshold),
            budget_threshold: config.budget_threshold,
        })
    }
}
