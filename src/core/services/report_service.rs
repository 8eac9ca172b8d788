use crate::config::InsightConfig;
use crate::domain::{Expense, ExpenseReport, Statistics};

use super::{AggregationService, InsightService, RankingService, ServiceResult};

/// Runs aggregation, ranking and insight derivation in one pass.
pub struct ReportService;

impl ReportService {
    /// Builds a report for the snapshot, or `None` when there is nothing to report.
    pub fn build(
        expenses: &[Expense],
        config: &InsightConfig,
    ) -> ServiceResult<Option<ExpenseReport>> {
        config.validate()?;
        match AggregationService::compute(expenses)? {
            Some(statistics) => Self::from_statistics(statistics, config).map(Some),
            None => Ok(None),
        }
    }

    /// Builds a report from statistics computed earlier, e.g. a tracker's current value.
    pub fn from_statistics(
        statistics: Statistics,
        config: &InsightConfig,
    ) -> ServiceResult<ExpenseReport> {
        let ranked = RankingService::rank(&statistics.category_breakdown);
        let insights = InsightService::derive(&statistics, &ranked, config)?;
        let ranking = InsightService::shares(&statistics, &ranked);
        Ok(ExpenseReport {
            statistics,
            ranking,
            insights,
        })
    }
}
