pub mod aggregation_service;
pub mod insight_service;
pub mod ranking_service;
pub mod report_service;

pub use aggregation_service::{AggregationService, StatisticsTracker};
pub use insight_service::InsightService;
pub use ranking_service::RankingService;
pub use report_service::ReportService;

use crate::errors::ExpenseError;

pub type ServiceResult<T> = Result<T, ExpenseError>;
