// ABOUTME: Integration tests for the tri-state availability predicate
// ABOUTME: Covers essential vs optional lines, no venue, empty recipes and missing-essential listing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use barkeep::engine::{availability, is_makeable, missing_essentials, Availability, VenueStockSet};
use barkeep::models::{IngredientUse, Recipe};
use common::{mojito, negroni, zombie};

fn stock(ids: &[&str]) -> VenueStockSet {
    ids.iter().copied().collect()
}

#[test]
fn test_no_venue_is_unknown() {
    assert_eq!(availability(&mojito(), None), Availability::Unknown);
    assert_eq!(Availability::Unknown.known(), None);
    assert_eq!(Availability::Unknown.badge(), "-");
}

#[test]
fn test_available_iff_every_essential_in_stock() {
    let recipe = mojito();
    assert_eq!(
        availability(&recipe, Some(&stock(&["rum", "mint"]))),
        Availability::Available
    );
    assert_eq!(
        availability(&recipe, Some(&stock(&["rum"]))),
        Availability::Unavailable
    );
}

#[test]
fn test_optional_lines_never_matter() {
    // orange peel is optional and absent from stock
    let in_stock = stock(&["gin", "campari", "vermouth"]);
    assert!(is_makeable(&negroni().ingredients, &in_stock));

    let with_orange = stock(&["gin", "campari", "vermouth", "orange"]);
    assert!(is_makeable(&negroni().ingredients, &with_orange));
}

#[test]
fn test_recipe_without_ingredients_is_available() {
    let recipe = Recipe::new("water", "Water");
    assert_eq!(availability(&recipe, Some(&stock(&[]))), Availability::Available);
}

#[test]
fn test_essential_line_without_id_blocks_availability() {
    let everything = stock(&["rum", "lime", "mint", "gin"]);
    assert_eq!(availability(&zombie(), Some(&everything)), Availability::Unavailable);

    let missing = missing_essentials(&zombie(), &everything)
        .into_iter()
        .map(|ingredient| ingredient.name.clone())
        .collect::<Vec<_>>();
    assert_eq!(missing, vec!["Donn's mix".to_owned()]);
}

#[test]
fn test_missing_essentials_in_recipe_order() {
    let recipe = Recipe::new("sour", "Whiskey Sour")
        .with_ingredient(IngredientUse::essential("bourbon", "Bourbon"))
        .with_ingredient(IngredientUse::essential("lemon", "Lemon juice"))
        .with_ingredient(IngredientUse::optional("egg_white", "Egg white"))
        .with_ingredient(IngredientUse::essential("sugar_syrup", "Sugar syrup"));

    let names: Vec<&str> = missing_essentials(&recipe, &stock(&["lemon"]))
        .into_iter()
        .map(|ingredient| ingredient.name.as_str())
        .collect();
    assert_eq!(names, vec!["Bourbon", "Sugar syrup"]);
}

#[test]
fn test_availability_serializes_snake_case() -> anyhow::Result<()> {
    assert_eq!(serde_json::to_string(&Availability::Unavailable)?, "\"unavailable\"");
    assert_eq!(Availability::from(true), Availability::Available);
    assert_eq!(Availability::Available.known(), Some(true));
    Ok(())
}
