// ABOUTME: Integration tests for the multi-facet filter engine
// ABOUTME: Covers identity, idempotence, order preservation, ALL/ANY facet semantics and venue stock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use barkeep::engine::{FilterEngine, FilterState, StockIndex, VenueStockSet};
use barkeep::models::{AvailabilityRow, Difficulty, IngredientUse, Recipe, VenueId};
use common::{daiquiri, ids, mojito, negroni, sample_recipes, zombie};

fn minimal(id: &str, ingredients: &[&str]) -> Recipe {
    ingredients
        .iter()
        .fold(Recipe::new(id, id).with_category("rum"), |recipe, name| {
            recipe.with_ingredient(IngredientUse::essential(*name, *name))
        })
}

#[test]
fn test_empty_state_returns_input_unchanged() {
    common::init_test_logging();
    let recipes = sample_recipes();
    let visible = FilterEngine::unrestricted().apply(&recipes, &FilterState::new());
    assert_eq!(ids(&visible), vec!["mojito", "daiquiri", "negroni", "zombie"]);
}

#[test]
fn test_filtering_is_idempotent_and_order_preserving() {
    let recipes = sample_recipes();
    let state = FilterState::new().with_thematic(["classics"]);
    let engine = FilterEngine::unrestricted();

    let once = engine.apply(&recipes, &state);
    let twice = engine.apply_refs(once.clone(), &state);

    assert_eq!(ids(&once), vec!["mojito", "daiquiri", "negroni"]);
    assert_eq!(ids(&once), ids(&twice));
}

#[test]
fn test_rum_only_stock_keeps_only_daiquiri() {
    let recipes = vec![minimal("mojito", &["rum", "mint"]), minimal("daiquiri", &["rum"])];
    let stock: VenueStockSet = ["rum"].into_iter().collect();

    let visible = FilterEngine::for_venue(&stock).apply(&recipes, &FilterState::new());
    assert_eq!(ids(&visible), vec!["daiquiri"]);
}

#[test]
fn test_include_requires_every_ingredient() {
    let recipes = vec![minimal("mojito", &["rum", "mint"]), minimal("daiquiri", &["rum"])];
    let state = FilterState::new().with_include_ingredients(["rum", "lime"]);

    assert!(FilterEngine::unrestricted().apply(&recipes, &state).is_empty());

    let state = FilterState::new().with_include_ingredients(["rum", "mint"]);
    assert_eq!(ids(&FilterEngine::unrestricted().apply(&recipes, &state)), vec!["mojito"]);
}

#[test]
fn test_empty_recipe_list_yields_empty_output() {
    let state = FilterState::new()
        .with_category("rum")
        .with_tags(["tiki"])
        .with_search("zombie");
    let stock = VenueStockSet::default();
    assert!(FilterEngine::for_venue(&stock).apply(&[], &state).is_empty());
}

#[test]
fn test_tags_need_all_but_thematic_needs_any() {
    let recipes = sample_recipes();
    let engine = FilterEngine::unrestricted();

    // mojito has "refreshing" but not "shaken"
    let both_tags = FilterState::new().with_tags(["refreshing", "shaken"]);
    assert!(engine.apply(&recipes, &both_tags).is_empty());

    // mojito is in "summer", zombie in "tiki"
    let either_theme = FilterState::new().with_thematic(["summer", "tiki"]);
    assert_eq!(ids(&engine.apply(&recipes, &either_theme)), vec!["mojito", "zombie"]);
}

#[test]
fn test_exclude_removes_any_match() {
    let recipes = sample_recipes();
    let state = FilterState::new().with_exclude_ingredients(["mint", "CAMPARI"]);
    let visible = FilterEngine::unrestricted().apply(&recipes, &state);
    assert_eq!(ids(&visible), vec!["daiquiri", "zombie"]);
}

#[test]
fn test_category_is_exact_and_difficulty_case_insensitive() {
    let recipes = sample_recipes();
    let engine = FilterEngine::unrestricted();

    let rum = FilterState::new().with_category("rum");
    assert_eq!(ids(&engine.apply(&recipes, &rum)), vec!["mojito", "daiquiri", "zombie"]);

    let partial = FilterState::new().with_category("ru");
    assert!(engine.apply(&recipes, &partial).is_empty());

    let medium = FilterState::new().with_difficulty(Difficulty::Medium);
    assert_eq!(ids(&engine.apply(&recipes, &medium)), vec!["negroni"]);
}

#[test]
fn test_glass_matches_any_listed_glass() {
    let recipes = vec![mojito(), daiquiri(), negroni()];
    let state = FilterState::new().with_glass("coupe");
    assert_eq!(ids(&FilterEngine::unrestricted().apply(&recipes, &state)), vec!["daiquiri"]);
}

#[test]
fn test_search_covers_name_ingredients_and_tags() {
    let recipes = sample_recipes();
    let engine = FilterEngine::unrestricted();

    let by_name = FilterState::new().with_search("negr");
    assert_eq!(ids(&engine.apply(&recipes, &by_name)), vec!["negroni"]);

    let by_ingredient = FilterState::new().with_search("mint");
    assert_eq!(ids(&engine.apply(&recipes, &by_ingredient)), vec!["mojito"]);

    let by_tag = FilterState::new().with_search("TIKI");
    assert_eq!(ids(&engine.apply(&recipes, &by_tag)), vec!["zombie"]);
}

#[test]
fn test_flavors_need_all_selected() {
    let recipes = sample_recipes();
    let state = FilterState::new().with_flavors(["bitter", "herbal"]);
    assert_eq!(ids(&FilterEngine::unrestricted().apply(&recipes, &state)), vec!["negroni"]);

    let state = FilterState::new().with_flavors(["bitter", "sour"]);
    assert!(FilterEngine::unrestricted().apply(&recipes, &state).is_empty());
}

#[test]
fn test_venue_stage_uses_essential_lines_only() {
    let index = StockIndex::build(&[
        AvailabilityRow::new("rum", [("harbour", true)]),
        AvailabilityRow::new("lime", [("harbour", true)]),
        AvailabilityRow::new("gin", [("harbour", true)]),
        AvailabilityRow::new("campari", [("harbour", true)]),
        AvailabilityRow::new("vermouth", [("harbour", true)]),
    ]);
    let stock = index.stock_for(&VenueId::from("harbour"));

    // negroni's orange peel is optional; zombie has an essential line without id
    let recipes = sample_recipes();
    let visible = FilterEngine::for_venue(stock).apply(&recipes, &FilterState::new());
    assert_eq!(ids(&visible), vec!["daiquiri", "negroni"]);
}

#[test]
fn test_unknown_venue_keeps_only_recipes_without_essentials() {
    let index = StockIndex::build(&[]);
    let stock = index.stock_for(&VenueId::from("nowhere"));
    let recipes = vec![Recipe::new("water", "Water"), daiquiri()];
    let visible = FilterEngine::for_venue(stock).apply(&recipes, &FilterState::new());
    assert_eq!(ids(&visible), vec!["water"]);
}

#[test]
fn test_facets_combine_with_and() {
    let recipes = vec![mojito(), daiquiri(), negroni(), zombie()];
    let state = FilterState::new()
        .with_category("rum")
        .with_thematic(["classics"])
        .with_tags(["shaken"]);
    assert_eq!(ids(&FilterEngine::unrestricted().apply(&recipes, &state)), vec!["daiquiri"]);
}

#[test]
fn test_matches_agrees_with_apply() {
    let recipes = sample_recipes();
    let state = FilterState::new().with_search("rum");
    let engine = FilterEngine::unrestricted();
    let expected: Vec<&str> = recipes
        .iter()
        .filter(|recipe| engine.matches(recipe, &state))
        .map(|recipe| recipe.id.as_str())
        .collect();
    let visible = engine.apply(&recipes, &state);
    assert_eq!(ids(&visible), expected);
}

#[test]
fn test_blank_setters_clear_facets() {
    let mut state = FilterState::new().with_category("rum").with_search("mint");
    assert_eq!(state.active_facets(), 2);

    state.set_category("   ");
    state.set_search("");
    assert!(state.is_empty());

    assert!(state.add_include_ingredient("lime"));
    assert!(!state.add_include_ingredient(" lime "));
    assert!(state.remove_include_ingredient("lime"));
    assert!(!state.remove_include_ingredient("lime"));

    state.toggle_tag("tiki");
    assert_eq!(state.tags(), ["tiki".to_owned()]);
    state.toggle_tag("tiki");
    assert!(state.tags().is_empty());
}

#[test]
fn test_short_form_records_load_and_filter() -> anyhow::Result<()> {
    let json = r#"[
        {"id": "mojito", "category": "rum", "ingredients": [
            {"id": "rum", "isEssential": true},
            {"id": "mint", "isEssential": true}
        ]},
        {"id": "daiquiri", "category": "rum", "ingredients": [
            {"id": "rum", "isEssential": true}
        ]}
    ]"#;
    let recipes: Vec<Recipe> = serde_json::from_str(json)?;
    assert_eq!(recipes[0].category_id, "rum");
    assert_eq!(recipes[0].ingredients[1].ingredient_id.as_deref(), Some("mint"));

    let stock: VenueStockSet = ["rum"].into_iter().collect();
    let visible = FilterEngine::for_venue(&stock).apply(&recipes, &FilterState::new());
    assert_eq!(ids(&visible), vec!["daiquiri"]);

    let rum = FilterState::new().with_category("rum");
    assert_eq!(ids(&FilterEngine::unrestricted().apply(&recipes, &rum)), vec!["mojito", "daiquiri"]);
    Ok(())
}

#[test]
fn test_deserialized_state_is_normalized() -> anyhow::Result<()> {
    let json = r#"{
        "category": "",
        "difficulty": null,
        "glass": "   ",
        "includeIngredients": [" rum ", "rum", ""],
        "exclude_ingredients": null,
        "flavors": [],
        "tags": ["tiki", " tiki"],
        "thematic": null,
        "search": " "
    }"#;
    let state: FilterState = serde_json::from_str(json)?;

    assert_eq!(state.category(), None);
    assert_eq!(state.glass(), None);
    assert_eq!(state.search(), None);
    assert_eq!(state.include_ingredients(), ["rum".to_owned()]);
    assert_eq!(state.tags(), ["tiki".to_owned()]);
    assert_eq!(state.active_facets(), 2);

    let blank: FilterState = serde_json::from_str(r#"{"category": "", "glass": ""}"#)?;
    assert!(blank.is_empty());
    let water = vec![Recipe::new("water", "Water").with_category("rum")];
    assert_eq!(ids(&FilterEngine::unrestricted().apply(&water, &blank)), vec!["water"]);

    let round_trip: FilterState = serde_json::from_str(&serde_json::to_string(&state)?)?;
    assert_eq!(round_trip, state);
    Ok(())
}
