use criterion::{Criterion, black_box, criterion_group, criterion_main};

use rust_query_drills::records::{Trader, Transaction};
use rust_query_drills::types::{Dir, Sequence};

fn synthetic_trades(n: usize) -> Sequence<Transaction> {
    let cities = ["Cambridge", "Milan", "Oslo", "Lima"];
    (0..n)
        .map(|i| {
            let trader = Trader::new(format!("trader-{}", i % 97), cities[i % cities.len()]);
            Transaction::new(trader, 2010 + (i % 4) as u32, ((i * 7919) % 10_000) as u32)
        })
        .collect()
}

fn bench_pipelines(c: &mut Criterion) {
    let trades = synthetic_trades(10_000);

    c.bench_function("filter_sort_10k", |b| {
        b.iter(|| {
            black_box(&trades)
                .filter(|t| t.year == 2011)
                .sorted_by(|t| t.value, Dir::Asc)
        })
    });

    c.bench_function("distinct_names_join_10k", |b| {
        b.iter(|| {
            black_box(&trades)
                .map(|t| t.trader.name.clone())
                .distinct()
                .sorted(Dir::Asc)
                .join("")
        })
    });

    c.bench_function("reduce_max_10k", |b| {
        b.iter(|| black_box(&trades).reduce_max(|t| t.value).is_present())
    });
}

criterion_group!(benches, bench_pipelines);
criterion_main!(benches);
