//! Criterion benchmarks for the stats engine

use chrono::{Duration, NaiveDate};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use teatrack::services::Aggregator;
use teatrack::types::{IceLevel, SugarLevel, TeaRecord};

const BRANDS: [&str; 6] = ["喜茶", "奈雪的茶", "茶百道", "古茗", "一点点", "霸王茶姬"];

/// Deterministic journal spanning roughly two years
fn synthetic_records(n: usize) -> Vec<TeaRecord> {
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    (0..n)
        .map(|i| TeaRecord {
            id: format!("{:032x}", i),
            brand: BRANDS[i % BRANDS.len()].to_string(),
            name: format!("饮品{}", i % 17),
            price: 8.0 + (i % 23) as f64,
            date: start + Duration::days((i * 7 % 730) as i64),
            sugar: SugarLevel::ALL[i % SugarLevel::ALL.len()],
            ice: IceLevel::ALL[i % IceLevel::ALL.len()],
            rating: (i % 5) as u8 + 1,
            note: None,
            created_at: i as i64,
        })
        .collect()
}

fn bench_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregator");

    for size in [100usize, 1_000, 10_000] {
        let records = synthetic_records(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("report", size), &records, |b, records| {
            b.iter(|| Aggregator::report(black_box(records), 5));
        });

        group.bench_with_input(
            BenchmarkId::new("weekly_spend", size),
            &records,
            |b, records| {
                b.iter(|| Aggregator::weekly_spend(black_box(records)));
            },
        );
    }

    group.finish();
}

fn bench_search_and_sort(c: &mut Criterion) {
    let records = synthetic_records(10_000);
    let mut group = c.benchmark_group("aggregator");

    group.bench_function("search", |b| {
        b.iter(|| Aggregator::search(black_box(&records), black_box("饮品3")));
    });

    group.bench_function("sort_for_display", |b| {
        b.iter(|| {
            let mut copy = records.clone();
            Aggregator::sort_for_display(black_box(&mut copy));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_report, bench_search_and_sort);
criterion_main!(benches);
