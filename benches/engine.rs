//! 計算エンジンのベンチマーク
//!
//! 一括計算はUI入力のたびに呼ばれるため、代表的な価格帯での
//! 実行時間を計測しておく。

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tedori::application::aggregator::{calculate_all_platforms, calculate_for_price};
use tedori::application::ranking::rank_by_net_amount;

fn bench_calculate_all_platforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_all_platforms");

    for price in [1u64, 4000, 123_456, 100_000_000] {
        group.bench_function(format!("price_{}", price), |b| {
            b.iter(|| calculate_for_price(black_box(price)))
        });
    }

    group.finish();
}

fn bench_parse_and_calculate(c: &mut Criterion) {
    c.bench_function("parse_and_calculate_4000", |b| {
        b.iter(|| calculate_all_platforms(black_box("4000")))
    });
}

fn bench_ranking(c: &mut Criterion) {
    let result = calculate_for_price(4000).expect("計算に成功するはず");

    c.bench_function("rank_by_net_amount", |b| {
        b.iter(|| rank_by_net_amount(black_box(&result)))
    });
}

criterion_group!(
    benches,
    bench_calculate_all_platforms,
    bench_parse_and_calculate,
    bench_ranking
);
criterion_main!(benches);
