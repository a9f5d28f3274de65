// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging, sample catalog data, and cache/source builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors
#![allow(
    dead_code,
    missing_docs,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `barkeep`

use anyhow::Result;
use barkeep::cache::factory::Cache;
use barkeep::cache::CacheConfig;
use barkeep::catalog::StaticCatalogSource;
use barkeep::models::{
    AvailabilityRow, Category, CuratedList, Difficulty, Glass, IngredientUse, Recipe, VenueId,
};
use std::sync::Once;
use std::time::Duration;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };
        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Rum + mint, both essential
pub fn mojito() -> Recipe {
    Recipe::new("mojito", "Mojito")
        .with_category("rum")
        .with_ingredient(IngredientUse::essential("rum", "White rum").with_amount("50 ml"))
        .with_ingredient(IngredientUse::essential("mint", "Mint leaves"))
        .with_ingredient(IngredientUse::optional("soda", "Soda water"))
        .with_flavors(["fresh", "sweet"])
        .with_tags(["refreshing", "highball"])
        .with_thematic(["classics", "summer"])
        .with_glass(Glass::One("Highball".into()))
        .with_difficulty(Difficulty::Easy)
}

/// Rum only
pub fn daiquiri() -> Recipe {
    Recipe::new("daiquiri", "Daiquiri")
        .with_category("rum")
        .with_ingredient(IngredientUse::essential("rum", "White rum").with_amount("60 ml"))
        .with_flavors(["sour"])
        .with_tags(["shaken"])
        .with_thematic(["classics"])
        .with_glass(Glass::Many(vec!["Coupe".into(), "Cocktail glass".into()]))
        .with_difficulty(Difficulty::Easy)
}

/// Gin, campari, vermouth
pub fn negroni() -> Recipe {
    Recipe::new("negroni", "Negroni")
        .with_category("gin")
        .with_ingredient(IngredientUse::essential("gin", "Gin"))
        .with_ingredient(IngredientUse::essential("campari", "Campari"))
        .with_ingredient(IngredientUse::essential("vermouth", "Sweet vermouth"))
        .with_ingredient(IngredientUse::optional("orange", "Orange peel"))
        .with_flavors(["bitter", "herbal"])
        .with_tags(["stirred", "aperitivo"])
        .with_thematic(["classics"])
        .with_glass(Glass::One("Rocks".into()))
        .with_difficulty(Difficulty::Medium)
}

/// Tiki drink with a free-text essential line that can never be stocked
pub fn zombie() -> Recipe {
    let mut recipe = Recipe::new("zombie", "Zombie")
        .with_category("rum")
        .with_ingredient(IngredientUse::essential("rum", "Aged rum"))
        .with_ingredient(IngredientUse::essential("lime", "Lime juice"))
        .with_tags(["shaken", "tiki"])
        .with_thematic(["tiki"])
        .with_glass(Glass::One("Zombie glass".into()))
        .with_difficulty(Difficulty::Hard);
    recipe.ingredients.push(IngredientUse {
        ingredient_id: None,
        name: "Donn's mix".into(),
        amount: Some("20 ml".into()),
        notes: None,
        is_essential: true,
    });
    recipe
}

pub fn sample_recipes() -> Vec<Recipe> {
    vec![mojito(), daiquiri(), negroni(), zombie()]
}

pub fn sample_categories() -> Vec<Category> {
    vec![
        Category::spirit("rum", "Rum"),
        Category::spirit("gin", "Gin"),
        Category::theme("classics", "Classics"),
        Category::theme("summer", "Summer"),
        Category::theme("tiki", "Tiki"),
    ]
}

/// `harbour` stocks rum, gin, campari, vermouth, lime; `garden` stocks rum and mint
pub fn sample_availability() -> Vec<AvailabilityRow> {
    vec![
        AvailabilityRow::new("rum", [("harbour", true), ("garden", true)]),
        AvailabilityRow::new("mint", [("harbour", false), ("garden", true)]),
        AvailabilityRow::new("gin", [("harbour", true), ("garden", false)]),
        AvailabilityRow::new("campari", [("harbour", true), ("garden", false)]),
        AvailabilityRow::new("vermouth", [("harbour", true), ("garden", false)]),
        AvailabilityRow::new("lime", [("harbour", true), ("garden", false)]),
    ]
}

pub fn sample_curated() -> Vec<CuratedList> {
    vec![
        CuratedList {
            venue: VenueId::from("harbour"),
            recipe_ids: vec!["negroni".into(), "mojito".into(), "daiquiri".into()],
        },
        CuratedList {
            venue: VenueId::from("garden"),
            recipe_ids: vec!["mojito".into(), "missing_recipe".into()],
        },
    ]
}

pub fn sample_source() -> StaticCatalogSource {
    StaticCatalogSource::new()
        .with_recipes(sample_recipes())
        .with_categories(sample_categories())
        .with_availability(sample_availability())
        .with_curated(sample_curated())
}

/// In-memory cache without the background cleanup task
pub async fn test_cache(max_entries: usize) -> Result<Cache> {
    let config = CacheConfig {
        max_entries,
        cleanup_interval: Duration::from_secs(300),
        enable_background_cleanup: false,
        ..Default::default()
    };
    Ok(Cache::new(config).await?)
}

/// Ids of the given recipes, in order
pub fn ids(recipes: &[&Recipe]) -> Vec<String> {
    recipes.iter().map(|recipe| recipe.id.clone()).collect()
}
