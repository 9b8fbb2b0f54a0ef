//! Benchmarks for shopdash-core statistics aggregation

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use shopdash_core::{
    Amount, DashboardRecords, Order, OrderStatus, Product, User, compute_stats, count_by_status,
};
use std::hint::black_box;

const STATUSES: [OrderStatus; 7] = [
    OrderStatus::Pending,
    OrderStatus::Processing,
    OrderStatus::Shipped,
    OrderStatus::Completed,
    OrderStatus::Cancelled,
    OrderStatus::Refunded,
    OrderStatus::Other,
];

/// Deterministic order mix with text, numeric, missing and junk totals
fn generate_orders(count: usize) -> Vec<Order> {
    (0..count)
        .map(|i| {
            let total_amount = match i % 5 {
                0 => None,
                1 => Some(Amount::Number(f64::from(u32::try_from(i % 10_000).unwrap_or(0)) / 100.0)),
                2 => Some(Amount::Text("n/a".to_string())),
                _ => Some(Amount::Text(format!("{}.{:02}", i % 500, i % 100))),
            };
            Order {
                id: i64::try_from(i).unwrap_or(i64::MAX),
                status: STATUSES[i % STATUSES.len()],
                total_amount,
            }
        })
        .collect()
}

fn generate_products(count: usize) -> Vec<Product> {
    (0..count)
        .map(|i| Product {
            id: i64::try_from(i).unwrap_or(i64::MAX),
        })
        .collect()
}

fn generate_users(count: usize) -> Vec<User> {
    (0..count)
        .map(|i| User {
            id: format!("00000000-0000-4000-8000-{i:012}"),
        })
        .collect()
}

/// Benchmark the summary over growing order volumes
fn bench_compute_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_stats");

    let products = generate_products(500);
    let users = generate_users(2_000);

    for size in [100_usize, 1_000, 10_000, 100_000] {
        let orders = generate_orders(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &orders, |b, orders| {
            b.iter(|| compute_stats(black_box(orders), black_box(&products), black_box(&users)));
        });
    }

    group.finish();
}

/// Benchmark decimal coercion of raw totals
fn bench_amount_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("amount_parsing");

    let amounts = [
        ("text", Amount::Text("19.99".to_string())),
        ("padded_text", Amount::Text("  1049.50 ".to_string())),
        ("scientific", Amount::Text("1.5e3".to_string())),
        ("junk", Amount::Text("not a number".to_string())),
        ("number", Amount::Number(10.01)),
    ];

    for (name, amount) in &amounts {
        group.bench_with_input(BenchmarkId::new("to_decimal", name), amount, |b, amount| {
            b.iter(|| black_box(amount).to_decimal());
        });
    }

    group.finish();
}

/// Benchmark a full dashboard view: summary plus status breakdown
fn bench_dashboard_view(c: &mut Criterion) {
    let records = DashboardRecords {
        orders: Some(generate_orders(10_000)),
        products: Some(generate_products(500)),
        users: None,
    };

    c.bench_function("dashboard_view_10k", |b| {
        b.iter(|| {
            let summary = black_box(&records).summarize();
            let breakdown = records.status_breakdown();
            (summary, breakdown)
        });
    });

    let orders = generate_orders(10_000);
    c.bench_function("count_by_status_10k", |b| {
        b.iter(|| count_by_status(black_box(&orders)));
    });
}

criterion_group!(
    benches,
    bench_compute_stats,
    bench_amount_parsing,
    bench_dashboard_view
);

criterion_main!(benches);
