use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ExpenseError;

pub const DEFAULT_DAYS_IN_PERIOD: u32 = 30;
pub const DEFAULT_BUDGET_THRESHOLD: Decimal = Decimal::from_parts(5000, 0, 0, false, 0);

/// Parameters used when deriving insights from statistics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct InsightConfig {
    /// Divisor used for the daily average.
    #[serde(default = "InsightConfig::default_days_in_period")]
    pub days_in_period: u32,
    /// Totals strictly above this amount are classified as over budget.
    #[serde(default = "InsightConfig::default_budget_threshold")]
    pub budget_threshold: Decimal,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            days_in_period: DEFAULT_DAYS_IN_PERIOD,
            budget_threshold: DEFAULT_BUDGET_THRESHOLD,
        }
    }
}

impl InsightConfig {
    pub fn new(days_in_period: u32, budget_threshold: Decimal) -> Self {
        Self {
            days_in_period,
            budget_threshold,
        }
    }

    pub fn default_days_in_period() -> u32 {
        DEFAULT_DAYS_IN_PERIOD
    }

    pub fn default_budget_threshold() -> Decimal {
        DEFAULT_BUDGET_THRESHOLD
    }

    pub fn validate(&self) -> Result<(), ExpenseError> {
        if self.days_in_period == 0 {
            return Err(ExpenseError::InvalidConfig(
                "days_in_period must be at least 1".into(),
            ));
        }
        if self.budget_threshold < Decimal::ZERO {
            return Err(ExpenseError::InvalidConfig(format!(
                "budget_threshold `{}` must be a non-negative number",
                self.budget_threshold
            )));
        }
        Ok(())
    }
}

/// Stores user-configurable preferences for reports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub insights: InsightConfig,
    /// Symbol prefixed to amounts by the CLI renderer.
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            insights: InsightConfig::default(),
            currency_symbol: Self::default_currency_symbol(),
        }
    }
}

impl Config {
    pub fn default_currency_symbol() -> String {
        "₹".into()
    }
}
