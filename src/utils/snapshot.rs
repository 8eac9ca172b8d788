use std::{fs, path::Path};

use crate::{domain::Expense, errors::ExpenseError};

/// Loads a read-only expense snapshot (a JSON array of expenses) from disk.
pub fn load_expenses_from_path(path: &Path) -> Result<Vec<Expense>, ExpenseError> {
    let data = fs::read_to_string(path)?;
    let expenses: Vec<Expense> = serde_json::from_str(&data)?;
    tracing::debug!(
        path = %path.display(),
        count = expenses.len(),
        "loaded expense snapshot"
    );
    Ok(expenses)
}
