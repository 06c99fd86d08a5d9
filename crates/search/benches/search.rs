//! Benchmarks for the search engine hot paths.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use wasel_search::{
    Collections, OrderCustomer, OrderRecord, SearchEngine, phone, score_text,
};

fn synthetic_orders(count: usize) -> Vec<OrderRecord> {
    (0..count)
        .map(|i| OrderRecord {
            id: 1000 + i as u64,
            reference: Some(format!("REF-{:05X}", i)),
            customer: OrderCustomer {
                name: format!("Customer {}", i),
                phone: format!("03{:06}", i),
                secondary_phone: None,
                address: Some(format!("Street {}", i % 40)),
                city: Some("Beirut".to_string()),
                governorate: Some("Beirut".to_string()),
            },
            status: "in_transit".to_string(),
            order_type: "standard".to_string(),
            note: None,
            package_description: Some("Electronics".to_string()),
            amount_usd: 25.0,
            amount_lbp: 2_250_000.0,
            created_at: None,
        })
        .collect()
}

fn bench_score_text(c: &mut Criterion) {
    c.bench_function("score_text_exact", |b| {
        b.iter(|| score_text(black_box("Beirut"), black_box("beirut")))
    });
    c.bench_function("score_text_fuzzy", |b| {
        b.iter(|| score_text(black_box("Hamra Street, Beirut"), black_box("hmrt")))
    });
}

fn bench_phone_match(c: &mut Criterion) {
    c.bench_function("phone_matches", |b| {
        b.iter(|| phone::matches(black_box("71123456"), black_box("961 71 123 456")))
    });
}

fn bench_full_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [100, 1000, 5000] {
        let orders = synthetic_orders(size);
        let engine = SearchEngine::in_memory();
        let collections = Collections {
            orders: &orders,
            ..Collections::default()
        };

        group.bench_with_input(BenchmarkId::new("orders", size), &size, |b, _| {
            b.iter(|| engine.search(black_box("beirut"), black_box(&collections)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_score_text,
    bench_phone_match,
    bench_full_search
);
criterion_main!(benches);
