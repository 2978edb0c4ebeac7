//! Benchmarks for filtering and aggregation
//!
//! Run with: cargo bench --package pipeline
//!
//! Uses a synthetic catalog of 100 recipes, the size of one full fetch.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pipeline::{CUISINE_PRESETS, DIET_PRESETS, FilterPipeline, FilterSpec, aggregate};
use recipe_data::Recipe;

fn synthetic_recipes(count: u64) -> Vec<Recipe> {
    (0..count)
        .map(|i| Recipe {
            id: i,
            title: format!("Recipe number {i}"),
            image: String::new(),
            ready_in_minutes: ((i * 7) % 120) as u32,
            diets: vec![DIET_PRESETS[i as usize % DIET_PRESETS.len()].to_string()],
            cuisines: vec![CUISINE_PRESETS[(i / 4) as usize % CUISINE_PRESETS.len()].to_string()],
            calories: ((i * 37) % 1100) as f64,
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let recipes = synthetic_recipes(100);
    let pipeline = FilterPipeline::standard();
    let spec = FilterSpec::new()
        .with_search("number 1")
        .with_diet("vegan")
        .with_calorie_range(100.0, 800.0)
        .with_cooking_time("16-30");

    c.bench_function("filter_standard_pipeline", |b| {
        b.iter(|| {
            let filtered = pipeline.apply(black_box(recipes.clone()), black_box(&spec));
            black_box(filtered)
        })
    });
}

fn bench_aggregate(c: &mut Criterion) {
    let recipes = synthetic_recipes(100);

    c.bench_function("aggregate_100", |b| {
        b.iter(|| black_box(aggregate(black_box(&recipes))))
    });
}

criterion_group!(benches, bench_filter, bench_aggregate);
criterion_main!(benches);
