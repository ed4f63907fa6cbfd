// Ranking and end-to-end recommendation benchmarks
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use shoprank_core::{rank, Catalog, Item, ProductId, RankQuery, ScoredItem};

const CATEGORIES: [&str; 8] = ["Áo", "Quần", "Giày", "Túi", "Mũ", "Đồng hồ", "Kính", "Ví"];

fn generate_catalog(size: usize) -> Catalog {
    let mut rng = rand::rng();
    let items = (0..size as u64)
        .map(|id| {
            let mut item = Item::new(id, format!("product {}", id))
                .with_sub_category(CATEGORIES[rng.random_range(0..CATEGORIES.len())]);
            if rng.random_bool(0.8) {
                item = item.with_rating(rng.random_range(1.0f32..5.0f32));
            }
            item
        })
        .collect();
    Catalog::new(items).unwrap()
}

fn generate_scores(size: usize) -> Vec<ScoredItem> {
    let mut rng = rand::rng();
    (0..size as u64)
        // coarse scores so tie-breaks actually run
        .map(|id| ScoredItem::new(id, (rng.random_range(0..100) as f32) / 100.0))
        .collect()
}

fn benchmark_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");

    for size in [1_000, 10_000, 100_000].iter() {
        let catalog = generate_catalog(*size);
        let scores = generate_scores(*size);

        group.bench_with_input(BenchmarkId::new("item", size), size, |b, _| {
            let query = RankQuery::item(ProductId(0), Some("Áo"), 10);
            b.iter(|| rank(black_box(scores.clone()), &query, &catalog));
        });

        group.bench_with_input(BenchmarkId::new("user", size), size, |b, _| {
            let query = RankQuery::user(10);
            b.iter(|| rank(black_box(scores.clone()), &query, &catalog));
        });
    }

    group.finish();
}

fn benchmark_nums(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_nums");
    let catalog = generate_catalog(10_000);
    let scores = generate_scores(10_000);

    for nums in [4, 20, 100].iter() {
        group.bench_with_input(BenchmarkId::new("text", nums), nums, |b, &nums| {
            let query = RankQuery::text(nums);
            b.iter(|| rank(black_box(scores.clone()), &query, &catalog));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_rank, benchmark_nums);
criterion_main!(benches);
