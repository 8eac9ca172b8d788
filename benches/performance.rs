use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use expense_core::{
    config::InsightConfig,
    core::services::{AggregationService, RankingService, ReportService},
    domain::Expense,
};
use rust_decimal::Decimal;

fn build_sample_expenses(count: usize) -> Vec<Expense> {
    let categories = [
        "Food",
        "Utilities",
        "Entertainment",
        "Transportation",
        "Healthcare",
        "Education",
    ];
    let start_date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

    (0..count)
        .map(|idx| {
            Expense::new(
                idx as u64,
                format!("Expense {idx}"),
                Decimal::new(5_000 + (idx % 10_000) as i64, 2),
                categories[idx % categories.len()],
                start_date + Duration::days((idx % 365) as i64),
            )
        })
        .collect()
}

fn bench_aggregation(c: &mut Criterion) {
    let expenses = build_sample_expenses(black_box(10_000));

    c.bench_function("aggregate_10k", |b| {
        b.iter(|| {
            let stats = AggregationService::compute(&expenses).expect("valid expenses");
            black_box(stats);
        })
    });

    let stats = AggregationService::compute(&expenses)
        .expect("valid expenses")
        .expect("non-empty");
    c.bench_function("rank_categories", |b| {
        b.iter(|| black_box(RankingService::rank(&stats.category_breakdown)))
    });
}

fn bench_report(c: &mut Criterion) {
    let expenses = build_sample_expenses(black_box(10_000));
    let config = InsightConfig::default();

    c.bench_function("report_10k", |b| {
        b.iter(|| {
            let report = ReportService::build(&expenses, &config).expect("report");
            black_box(report);
        })
    });
}

criterion_group!(benches, bench_aggregation, bench_report);
criterion_main!(benches);
