pub mod common;
pub mod expense;
pub mod statistics;

pub use common::{to_cents, Amounted, BelongsToCategory, Displayable};
pub use expense::{Expense, ExpenseId};
pub use statistics::{
    BudgetStatus, CategoryBreakdown, CategoryShare, CategoryTotal, ExpenseReport, Insights,
    RankedCategory, Statistics,
};
