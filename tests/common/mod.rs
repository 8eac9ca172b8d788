#![allow(dead_code)]

use std::path::PathBuf;

use chrono::NaiveDate;
use expense_core::domain::Expense;
use rust_decimal::Decimal;
use tempfile::TempDir;

pub fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, day).expect("valid february day")
}

pub fn expense(id: u64, amount: Decimal, category: &str) -> Expense {
    Expense::new(id, format!("Expense {id}"), amount, category, date(1 + (id % 28) as u32))
}

/// Deterministic pseudo-random snapshot with amounts in whole cents up to 1999.99.
pub fn generated_expenses(seed: u64, count: usize) -> Vec<Expense> {
    const CATEGORIES: [&str; 5] = ["Food", "Rent", "Travel", "Books", "Health"];
    let mut state = seed;
    (0..count)
        .map(|idx| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let cents = ((state >> 33) % 200_000) as i64;
            let amount = Decimal::new(cents, 2);
            let category = CATEGORIES[((state >> 17) % CATEGORIES.len() as u64) as usize];
            expense(idx as u64 + 1, amount, category)
        })
        .collect()
}

/// Writes expenses as a JSON snapshot inside a fresh temp dir.
pub fn write_snapshot(expenses: &[Expense]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("expenses.json");
    let json = serde_json::to_string_pretty(expenses).expect("serialize expenses");
    std::fs::write(&path, json).expect("write snapshot");
    (dir, path)
}
