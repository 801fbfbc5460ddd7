// Criterion benchmarks for Recipe Algo

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use recipe_algo::core::{dedupe_top_n, scale_ingredients, suggest, Recommender};
use recipe_algo::models::{FilterSpec, Pantry, Recipe};
use std::collections::{BTreeMap, BTreeSet};

fn base_catalog() -> Vec<Recipe> {
    serde_json::from_str(include_str!("../data/recipes.json")).expect("sample catalog parses")
}

fn create_catalog(size: usize) -> Vec<Recipe> {
    let base = base_catalog();
    (0..size)
        .map(|i| {
            let mut recipe = base[i % base.len()].clone();
            recipe.id = i as u32;
            recipe.time = 10 + (i % 50) as u32;
            recipe
        })
        .collect()
}

fn bench_scale_ingredients(c: &mut Criterion) {
    let lines = base_catalog()[0].ingredients.clone();
    c.bench_function("scale_ingredients", |b| {
        b.iter(|| scale_ingredients(black_box(&lines), black_box(1.5)));
    });
}

fn bench_dedupe_labels(c: &mut Criterion) {
    let labels = [
        "Granny Smith",
        "orange",
        "lemon",
        "bell pepper",
        "cucumber, cuke",
        "banana",
    ];
    c.bench_function("dedupe_top_n", |b| {
        b.iter(|| dedupe_top_n(black_box(labels), 3));
    });
}

fn bench_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");
    let recommender = Recommender::with_defaults();
    let pantry: Pantry = ["tomato", "onion", "garlic", "rice"].into_iter().collect();
    let filters = FilterSpec {
        servings: 4,
        ..FilterSpec::default()
    };

    for size in [100usize, 1000, 5000] {
        let catalog = create_catalog(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| recommender.recommend(black_box(catalog), black_box(&pantry), &filters));
        });
    }

    group.finish();
}

fn bench_suggest(c: &mut Criterion) {
    let catalog = create_catalog(1000);
    let ratings: BTreeMap<u32, u8> = (0..200).map(|i| (i * 5, (i % 5 + 1) as u8)).collect();
    let favorites: BTreeSet<u32> = (0..50).collect();

    c.bench_function("suggest", |b| {
        b.iter(|| suggest(black_box(&catalog), black_box(&ratings), &favorites, 6));
    });
}

criterion_group!(
    benches,
    bench_scale_ingredients,
    bench_dedupe_labels,
    bench_recommend,
    bench_suggest
);
criterion_main!(benches);
