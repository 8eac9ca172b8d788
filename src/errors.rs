use thiserror::Error;

use crate::config::ConfigError;

/// Error type that captures expense engine failures.
#[derive(Debug, Error)]
pub enum ExpenseError {
    #[error("Invalid expense {id}: {reason}")]
    InvalidExpense { id: String, reason: String },
    #[error("Total of {count} expenses exceeds the representable amount range")]
    AmountOverflow { count: usize },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExpenseError>;

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] ExpenseError),
    #[error("Invalid input: {0}")]
    Input(String),
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Core(err.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Core(err.into())
    }
}
