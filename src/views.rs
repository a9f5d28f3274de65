// ABOUTME: List and detail view models derived from a catalog snapshot
// ABOUTME: Applies browse scope, runs the filter engine, and attaches availability badges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

//! # Views
//!
//! Pure derivations: given the same snapshot, filter state, venue context and
//! favorites, the output is always the same.

use crate::catalog::CatalogSnapshot;
use crate::engine::{availability, missing_essentials, Availability, FilterEngine, FilterState};
use crate::errors::{AppError, AppResult};
use crate::favorites::{Favorites, KeyValueStorage};
use crate::models::{Difficulty, Glass, IngredientUse, Recipe};
use crate::venue::{BrowseScope, VenueContext};
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// One entry of a recipe list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeCard {
    /// Recipe id
    pub id: String,
    /// Display name
    pub name: String,
    /// Spirit category name, or its id when the category is unknown
    pub category: Option<String>,
    /// Badge for the applicable venue
    pub availability: Availability,
    /// Whether the recipe is a favorite
    pub is_favorite: bool,
}

/// Full recipe page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeDetail {
    /// Recipe id
    pub id: String,
    /// Display name
    pub name: String,
    /// Spirit category name, or its id when the category is unknown
    pub category: Option<String>,
    /// Ingredient lines in recipe order
    pub ingredients: Vec<IngredientUse>,
    /// Serving glass
    pub glass: Option<Glass>,
    /// Preparation difficulty
    pub difficulty: Option<Difficulty>,
    /// Thematic category names
    pub thematic: Vec<String>,
    /// Flavor labels
    pub flavors: Vec<String>,
    /// Tags
    pub tags: Vec<String>,
    /// Method
    pub instructions: Option<String>,
    /// Background story
    pub history: Option<String>,
    /// Badge for the selected venue
    pub availability: Availability,
    /// Essential lines the selected venue lacks; empty without a venue
    pub missing: Vec<IngredientUse>,
    /// Whether the recipe is a favorite
    pub is_favorite: bool,
}

/// Recipes visible in `scope` after filtering, as list cards
///
/// The curated scope keeps the venue's editorial order, listing a repeated id
/// once at its first position; the other scopes keep catalog order.
pub fn browse<S: KeyValueStorage>(
    snapshot: &CatalogSnapshot,
    state: &FilterState,
    context: &VenueContext,
    scope: &BrowseScope,
    favorites: &Favorites<S>,
) -> Vec<RecipeCard> {
    let candidates = scoped(snapshot, scope, favorites);
    let stock = context.stock_for_scope(scope);
    let visible = FilterEngine::new(stock).apply_refs(candidates, state);

    debug!(
        scope = ?scope,
        venue = %context.selection(),
        visible = visible.len(),
        "Browse view computed"
    );

    visible
        .into_iter()
        .map(|recipe| RecipeCard {
            id: recipe.id.clone(),
            name: recipe.name.clone(),
            category: category_name(snapshot, recipe),
            availability: availability(recipe, stock),
            is_favorite: favorites.contains(&recipe.id),
        })
        .collect()
}

/// Detail page for one recipe at the selected venue
///
/// # Errors
///
/// Returns `ResourceNotFound` when the snapshot has no recipe with `recipe_id`
pub fn detail<S: KeyValueStorage>(
    snapshot: &CatalogSnapshot,
    recipe_id: &str,
    context: &VenueContext,
    favorites: &Favorites<S>,
) -> AppResult<RecipeDetail> {
    let recipe = snapshot
        .recipe(recipe_id)
        .ok_or_else(|| AppError::not_found(format!("Recipe {recipe_id}")).with_resource_id(recipe_id))?;

    let stock = context.stock();
    let missing = stock
        .map(|stock| missing_essentials(recipe, stock).into_iter().cloned().collect())
        .unwrap_or_default();

    Ok(RecipeDetail {
        id: recipe.id.clone(),
        name: recipe.name.clone(),
        category: category_name(snapshot, recipe),
        ingredients: recipe.ingredients.clone(),
        glass: recipe.glass.clone(),
        difficulty: recipe.difficulty,
        thematic: recipe
            .thematic_categories
            .iter()
            .map(|id| {
                snapshot
                    .category(id)
                    .map_or_else(|| id.clone(), |category| category.name.clone())
            })
            .collect(),
        flavors: recipe.flavors.clone(),
        tags: recipe.tags.clone(),
        instructions: recipe.instructions.clone(),
        history: recipe.history.clone(),
        availability: availability(recipe, stock),
        missing,
        is_favorite: favorites.contains(&recipe.id),
    })
}

fn scoped<'a, S: KeyValueStorage>(
    snapshot: &'a CatalogSnapshot,
    scope: &BrowseScope,
    favorites: &Favorites<S>,
) -> Vec<&'a Recipe> {
    match scope {
        BrowseScope::Catalog => snapshot.recipes().iter().collect(),
        BrowseScope::Favorites => snapshot
            .recipes()
            .iter()
            .filter(|recipe| favorites.contains(&recipe.id))
            .collect(),
        BrowseScope::Curated(venue) => snapshot.curated(venue).map_or_else(Vec::new, |list| {
            let mut seen = HashSet::new();
            list.recipe_ids
                .iter()
                .filter(|id| seen.insert(id.as_str()))
                .filter_map(|id| {
                    let recipe = snapshot.recipe(id);
                    if recipe.is_none() {
                        debug!(%venue, recipe_id = %id, "Curated id not in catalog");
                    }
                    recipe
                })
                .collect()
        }),
    }
}

fn category_name(snapshot: &CatalogSnapshot, recipe: &Recipe) -> Option<String> {
    if recipe.category_id.is_empty() {
        return None;
    }
    Some(
        snapshot
            .category(&recipe.category_id)
            .map_or_else(|| recipe.category_id.clone(), |category| category.name.clone()),
    )
}
