// ABOUTME: Criterion benchmarks for the filter engine and stock index
// ABOUTME: Measures full-pipeline filtering and index builds across catalog sizes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

//! Criterion benchmarks for catalog filtering.
//!
//! Catalogs are synthetic: every recipe draws ingredients, tags and themes
//! from small fixed pools so every facet has hits.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use barkeep::engine::{FilterEngine, FilterState, StockIndex};
use barkeep::models::{AvailabilityRow, Difficulty, Glass, IngredientUse, Recipe, VenueId};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const INGREDIENTS: [&str; 12] = [
    "rum", "gin", "whiskey", "tequila", "lime", "lemon", "mint", "sugar_syrup", "soda", "campari",
    "vermouth", "orgeat",
];
const TAGS: [&str; 5] = ["shaken", "stirred", "highball", "tiki", "refreshing"];
const THEMES: [&str; 4] = ["classics", "summer", "tiki", "winter"];
const VENUES: [&str; 3] = ["harbour", "garden", "cellar"];

/// Catalog sizes for benchmarking
#[derive(Debug, Clone, Copy)]
enum CatalogSize {
    Small,
    Medium,
    Large,
}

impl CatalogSize {
    const fn recipes(self) -> usize {
        match self {
            Self::Small => 50,
            Self::Medium => 500,
            Self::Large => 5_000,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Small => "50",
            Self::Medium => "500",
            Self::Large => "5000",
        }
    }
}

fn generate_recipes(count: usize) -> Vec<Recipe> {
    (0..count)
        .map(|i| {
            let mut recipe = Recipe::new(format!("recipe_{i}"), format!("Recipe {i}"))
                .with_category(INGREDIENTS[i % 4])
                .with_tags([TAGS[i % TAGS.len()], TAGS[(i / 3) % TAGS.len()]])
                .with_thematic([THEMES[i % THEMES.len()]])
                .with_flavors(["sour", "sweet"])
                .with_glass(Glass::One("Coupe".into()))
                .with_difficulty(Difficulty::ALL[i % 3]);
            for offset in 0..4 {
                let id = INGREDIENTS[(i + offset * 5) % INGREDIENTS.len()];
                recipe = recipe.with_ingredient(if offset == 3 {
                    IngredientUse::optional(id, id)
                } else {
                    IngredientUse::essential(id, id)
                });
            }
            recipe
        })
        .collect()
}

fn generate_rows() -> Vec<AvailabilityRow> {
    INGREDIENTS
        .iter()
        .enumerate()
        .map(|(i, id)| {
            AvailabilityRow::new(
                *id,
                VENUES
                    .iter()
                    .enumerate()
                    .map(move |(v, venue)| (*venue, (i + v) % 3 != 0)),
            )
        })
        .collect()
}

fn bench_filter_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_pipeline");
    let index = StockIndex::build(&generate_rows());
    let harbour = index.stock_for(&VenueId::from("harbour"));

    let states = [
        ("empty", FilterState::new()),
        (
            "facets",
            FilterState::new()
                .with_category("rum")
                .with_include_ingredients(["lime"])
                .with_tags(["shaken"])
                .with_thematic(["classics", "tiki"]),
        ),
        ("search", FilterState::new().with_search("mint")),
    ];

    for size in [CatalogSize::Small, CatalogSize::Medium, CatalogSize::Large] {
        let recipes = generate_recipes(size.recipes());
        group.throughput(Throughput::Elements(size.recipes() as u64));

        for (label, state) in &states {
            group.bench_with_input(
                BenchmarkId::new(*label, size.name()),
                &recipes,
                |b, recipes| {
                    b.iter(|| {
                        black_box(FilterEngine::unrestricted().apply(black_box(recipes), state))
                    });
                },
            );
        }

        group.bench_with_input(BenchmarkId::new("venue", size.name()), &recipes, |b, recipes| {
            b.iter(|| {
                black_box(FilterEngine::for_venue(harbour).apply(black_box(recipes), &FilterState::new()))
            });
        });
    }

    group.finish();
}

fn bench_stock_index_build(c: &mut Criterion) {
    let rows: Vec<AvailabilityRow> = (0..20)
        .flat_map(|_| generate_rows())
        .collect();

    c.bench_function("stock_index_build", |b| {
        b.iter(|| black_box(StockIndex::build(black_box(&rows))));
    });
}

criterion_group!(benches, bench_filter_pipeline, bench_stock_index_build);
criterion_main!(benches);
