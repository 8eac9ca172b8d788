//! Engine and CLI configuration plus its JSON persistence.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::{Config, InsightConfig, DEFAULT_BUDGET_THRESHOLD, DEFAULT_DAYS_IN_PERIOD};
