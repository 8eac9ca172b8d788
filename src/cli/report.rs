//! Text rendering of an [`ExpenseReport`] for the terminal.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::cli::output::{self, MessageKind};
use crate::domain::{to_cents, BudgetStatus, Expense, ExpenseReport};

const BAR_WIDTH: usize = 30;

/// One rendered line with the message kind used to style it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub kind: MessageKind,
    pub text: String,
}

impl ReportLine {
    fn new(kind: MessageKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

fn money(symbol: &str, amount: Decimal) -> String {
    format!("{symbol}{:.2}", to_cents(amount))
}

fn extreme(label: &str, expense: Option<&Expense>, symbol: &str) -> String {
    match expense {
        Some(expense) => format!(
            "{label}: {} ({})",
            money(symbol, expense.amount),
            expense.title
        ),
        None => format!("{label}: -"),
    }
}

fn bar(width: Option<Decimal>) -> String {
    let filled = width
        .and_then(|percent| percent.checked_mul(Decimal::from(BAR_WIDTH)))
        .and_then(|cells| (cells / Decimal::ONE_HUNDRED).round().to_usize())
        .unwrap_or(0)
        .min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), " ".repeat(BAR_WIDTH - filled))
}

/// Lays out summary, category breakdown and insights sections.
pub fn render_lines(report: &ExpenseReport, symbol: &str) -> Vec<ReportLine> {
    let stats = &report.statistics;
    let mut lines = vec![
        ReportLine::new(MessageKind::Section, "Expense Statistics"),
        ReportLine::new(
            MessageKind::Info,
            format!("Total Spent: {}", money(symbol, stats.total_expenses)),
        ),
        ReportLine::new(
            MessageKind::Info,
            format!("Average Expense: {}", money(symbol, stats.average_expense)),
        ),
        ReportLine::new(
            MessageKind::Info,
            extreme("Highest Expense", stats.highest_expense.as_ref(), symbol),
        ),
        ReportLine::new(
            MessageKind::Info,
            extreme("Lowest Expense", stats.lowest_expense.as_ref(), symbol),
        ),
        ReportLine::new(MessageKind::Section, "Spending by Category"),
    ];

    let name_width = report
        .ranking
        .iter()
        .map(|share| share.category.chars().count())
        .max()
        .unwrap_or(0);
    for share in &report.ranking {
        let percent = share
            .percentage
            .map(|value| format!("{value:.1}%"))
            .unwrap_or_else(|| "n/a".into());
        lines.push(ReportLine::new(
            MessageKind::Info,
            format!(
                "{:<name_width$}  {} {} ({})",
                share.category,
                bar(share.bar_width),
                money(symbol, share.total),
                percent
            ),
        ));
    }

    lines.push(ReportLine::new(MessageKind::Section, "Spending Insights"));
    let status_kind = match report.insights.budget_status {
        BudgetStatus::OverBudget => MessageKind::Warning,
        BudgetStatus::WithinBudget => MessageKind::Success,
    };
    let messages = report.insights.messages();
    let last = messages.len().saturating_sub(1);
    for (idx, message) in messages.into_iter().enumerate() {
        let kind = if idx == last {
            status_kind
        } else {
            MessageKind::Info
        };
        lines.push(ReportLine::new(kind, message));
    }
    lines
}

pub fn print_report(report: &ExpenseReport, symbol: &str) {
    for line in render_lines(report, symbol) {
        output::print(line.kind, line.text);
    }
}
