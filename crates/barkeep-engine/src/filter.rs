// ABOUTME: Filter state and the sequential multi-facet filter engine for recipe lists
// ABOUTME: Stable narrowing: output is always an ordered subsequence of the input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

//! # Filter Engine
//!
//! Facets combine with AND. Inside the multi-value facets (included
//! ingredients, flavors, tags) every selected value must match; thematic
//! categories are the exception and match when ANY selected id is present.
//! Text comparisons are case-insensitive substring matches, except the spirit
//! category which is an exact id comparison.

use crate::availability::is_makeable;
use crate::stock::VenueStockSet;
use barkeep_core::models::{Difficulty, Recipe};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Current value of every filter facet
///
/// Fields change only through setters, which normalize input: blank strings
/// mean "unset", list entries are trimmed and de-duplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawFilterState")]
pub struct FilterState {
    category: Option<String>,
    difficulty: Option<Difficulty>,
    glass: Option<String>,
    include_ingredients: Vec<String>,
    exclude_ingredients: Vec<String>,
    flavors: Vec<String>,
    tags: Vec<String>,
    thematic: Vec<String>,
    search: Option<String>,
}

/// Wire form of [`FilterState`]; converted through the normalizing setters
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawFilterState {
    category: Option<String>,
    difficulty: Option<Difficulty>,
    glass: Option<String>,
    #[serde(alias = "includeIngredients")]
    include_ingredients: Option<Vec<String>>,
    #[serde(alias = "excludeIngredients")]
    exclude_ingredients: Option<Vec<String>>,
    flavors: Option<Vec<String>>,
    tags: Option<Vec<String>>,
    #[serde(alias = "thematicCategories")]
    thematic: Option<Vec<String>>,
    #[serde(alias = "searchTerm")]
    search: Option<String>,
}

impl From<RawFilterState> for FilterState {
    fn from(raw: RawFilterState) -> Self {
        let mut state = Self::new();
        state.set_category(raw.category.unwrap_or_default());
        state.set_difficulty(raw.difficulty);
        state.set_glass(raw.glass.unwrap_or_default());
        state.set_include_ingredients(raw.include_ingredients.unwrap_or_default());
        state.set_exclude_ingredients(raw.exclude_ingredients.unwrap_or_default());
        state.set_flavors(raw.flavors.unwrap_or_default());
        state.set_tags(raw.tags.unwrap_or_default());
        state.set_thematic(raw.thematic.unwrap_or_default());
        state.set_search(raw.search.unwrap_or_default());
        state
    }
}

fn normalize_text(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

fn normalize_list<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut normalized: Vec<String> = Vec::new();
    for value in values.into_iter().filter_map(normalize_text) {
        if !normalized.contains(&value) {
            normalized.push(value);
        }
    }
    normalized
}

fn add_unique(list: &mut Vec<String>, value: &str) -> bool {
    match normalize_text(value) {
        Some(value) if !list.contains(&value) => {
            list.push(value);
            true
        }
        _ => false,
    }
}

fn remove_value(list: &mut Vec<String>, value: &str) -> bool {
    let before = list.len();
    list.retain(|existing| existing != value.trim());
    list.len() != before
}

fn toggle_value(list: &mut Vec<String>, value: &str) {
    if !remove_value(list, value) {
        add_unique(list, value);
    }
}

impl FilterState {
    /// State with every facet unset
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected spirit category id
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Select a spirit category; a blank id clears the facet
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = normalize_text(category);
    }

    /// Selected difficulty
    #[must_use]
    pub const fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// Select or clear the difficulty
    pub fn set_difficulty(&mut self, difficulty: Option<Difficulty>) {
        self.difficulty = difficulty;
    }

    /// Selected glass text
    #[must_use]
    pub fn glass(&self) -> Option<&str> {
        self.glass.as_deref()
    }

    /// Select a glass; a blank value clears the facet
    pub fn set_glass(&mut self, glass: impl Into<String>) {
        self.glass = normalize_text(glass);
    }

    /// Ingredient names that must all appear
    #[must_use]
    pub fn include_ingredients(&self) -> &[String] {
        &self.include_ingredients
    }

    /// Replace the included ingredient names
    pub fn set_include_ingredients<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_ingredients = normalize_list(names);
    }

    /// Add one included ingredient name; returns false when already present
    pub fn add_include_ingredient(&mut self, name: &str) -> bool {
        add_unique(&mut self.include_ingredients, name)
    }

    /// Remove one included ingredient name; returns false when absent
    pub fn remove_include_ingredient(&mut self, name: &str) -> bool {
        remove_value(&mut self.include_ingredients, name)
    }

    /// Ingredient names that must not appear
    #[must_use]
    pub fn exclude_ingredients(&self) -> &[String] {
        &self.exclude_ingredients
    }

    /// Replace the excluded ingredient names
    pub fn set_exclude_ingredients<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_ingredients = normalize_list(names);
    }

    /// Add one excluded ingredient name; returns false when already present
    pub fn add_exclude_ingredient(&mut self, name: &str) -> bool {
        add_unique(&mut self.exclude_ingredients, name)
    }

    /// Remove one excluded ingredient name; returns false when absent
    pub fn remove_exclude_ingredient(&mut self, name: &str) -> bool {
        remove_value(&mut self.exclude_ingredients, name)
    }

    /// Selected flavors (all must match)
    #[must_use]
    pub fn flavors(&self) -> &[String] {
        &self.flavors
    }

    /// Replace the selected flavors
    pub fn set_flavors<I, S>(&mut self, flavors: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flavors = normalize_list(flavors);
    }

    /// Select or deselect a flavor
    pub fn toggle_flavor(&mut self, flavor: &str) {
        toggle_value(&mut self.flavors, flavor);
    }

    /// Selected tags (all must match)
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Replace the selected tags
    pub fn set_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = normalize_list(tags);
    }

    /// Select or deselect a tag
    pub fn toggle_tag(&mut self, tag: &str) {
        toggle_value(&mut self.tags, tag);
    }

    /// Selected thematic category ids (any may match)
    #[must_use]
    pub fn thematic(&self) -> &[String] {
        &self.thematic
    }

    /// Replace the selected thematic category ids
    pub fn set_thematic<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.thematic = normalize_list(ids);
    }

    /// Select or deselect a thematic category
    pub fn toggle_thematic(&mut self, id: &str) {
        toggle_value(&mut self.thematic, id);
    }

    /// Free-text search term
    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Set the search term; a blank term clears it
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = normalize_text(term);
    }

    /// Reset every facet
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Number of facets currently constraining the list
    #[must_use]
    pub fn active_facets(&self) -> usize {
        [
            self.category.is_some(),
            self.difficulty.is_some(),
            self.glass.is_some(),
            !self.include_ingredients.is_empty(),
            !self.exclude_ingredients.is_empty(),
            !self.flavors.is_empty(),
            !self.tags.is_empty(),
            !self.thematic.is_empty(),
            self.search.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    /// Whether no facet is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active_facets() == 0
    }

    /// Builder form of [`Self::set_category`]
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.set_category(category);
        self
    }

    /// Builder form of [`Self::set_difficulty`]
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.set_difficulty(Some(difficulty));
        self
    }

    /// Builder form of [`Self::set_glass`]
    #[must_use]
    pub fn with_glass(mut self, glass: impl Into<String>) -> Self {
        self.set_glass(glass);
        self
    }

    /// Builder form of [`Self::set_include_ingredients`]
    #[must_use]
    pub fn with_include_ingredients<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_include_ingredients(names);
        self
    }

    /// Builder form of [`Self::set_exclude_ingredients`]
    #[must_use]
    pub fn with_exclude_ingredients<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_exclude_ingredients(names);
        self
    }

    /// Builder form of [`Self::set_flavors`]
    #[must_use]
    pub fn with_flavors<I, S>(mut self, flavors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_flavors(flavors);
        self
    }

    /// Builder form of [`Self::set_tags`]
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_tags(tags);
        self
    }

    /// Builder form of [`Self::set_thematic`]
    #[must_use]
    pub fn with_thematic<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_thematic(ids);
        self
    }

    /// Builder form of [`Self::set_search`]
    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.set_search(term);
        self
    }
}

/// Pipeline stages in application order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterStage {
    /// Exact spirit category id
    Category,
    /// Case-insensitive difficulty equality
    Difficulty,
    /// Glass substring
    Glass,
    /// Every included ingredient name present
    IncludeIngredients,
    /// No excluded ingredient name present
    ExcludeIngredients,
    /// Every selected flavor present
    Flavors,
    /// Every selected tag present
    Tags,
    /// Any selected thematic id present
    Thematic,
    /// Makeable from the venue stock
    VenueAvailability,
    /// Search term in name, ingredient names or tags
    Search,
}

impl FilterStage {
    /// Stages in the order the engine applies them
    pub const PIPELINE: [Self; 10] = [
        Self::Category,
        Self::Difficulty,
        Self::Glass,
        Self::IncludeIngredients,
        Self::ExcludeIngredients,
        Self::Flavors,
        Self::Tags,
        Self::Thematic,
        Self::VenueAvailability,
        Self::Search,
    ];
}

/// Filter state with text facets lowercased once per run
struct PreparedState<'a> {
    category: Option<&'a str>,
    difficulty: Option<Difficulty>,
    glass: Option<String>,
    include: Vec<String>,
    exclude: Vec<String>,
    flavors: Vec<String>,
    tags: Vec<String>,
    thematic: &'a [String],
    search: Option<String>,
}

fn lowercase_all(values: &[String]) -> Vec<String> {
    values.iter().map(|value| value.to_lowercase()).collect()
}

impl<'a> PreparedState<'a> {
    fn new(state: &'a FilterState) -> Self {
        Self {
            category: state.category(),
            difficulty: state.difficulty(),
            glass: state.glass().map(str::to_lowercase),
            include: lowercase_all(state.include_ingredients()),
            exclude: lowercase_all(state.exclude_ingredients()),
            flavors: lowercase_all(state.flavors()),
            tags: lowercase_all(state.tags()),
            thematic: state.thematic(),
            search: state.search().map(str::to_lowercase),
        }
    }
}

/// `needle` must already be lowercase
fn any_contains<'v, I>(values: I, needle: &str) -> bool
where
    I: IntoIterator<Item = &'v String>,
{
    values
        .into_iter()
        .any(|value| value.to_lowercase().contains(needle))
}

fn ingredient_names(recipe: &Recipe) -> impl Iterator<Item = &String> {
    recipe.ingredients.iter().map(|ingredient| &ingredient.name)
}

/// Multi-facet recipe filter
///
/// Holds the stock set of the venue whose availability constrains the list,
/// or nothing when every venue is shown.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterEngine<'s> {
    stock: Option<&'s VenueStockSet>,
}

impl<'s> FilterEngine<'s> {
    /// Engine constrained by an optional venue stock set
    #[must_use]
    pub const fn new(stock: Option<&'s VenueStockSet>) -> Self {
        Self { stock }
    }

    /// Engine without a venue constraint
    #[must_use]
    pub const fn unrestricted() -> Self {
        Self { stock: None }
    }

    /// Engine keeping only recipes makeable from `stock`
    #[must_use]
    pub const fn for_venue(stock: &'s VenueStockSet) -> Self {
        Self { stock: Some(stock) }
    }

    /// Filter a recipe slice, preserving input order
    #[must_use]
    pub fn apply<'r>(&self, recipes: &'r [Recipe], state: &FilterState) -> Vec<&'r Recipe> {
        self.apply_refs(recipes.iter().collect(), state)
    }

    /// Filter an already narrowed list of recipe references
    #[must_use]
    pub fn apply_refs<'r>(&self, mut recipes: Vec<&'r Recipe>, state: &FilterState) -> Vec<&'r Recipe> {
        let prepared = PreparedState::new(state);
        for stage in FilterStage::PIPELINE {
            if recipes.is_empty() {
                break;
            }
            recipes.retain(|recipe| self.keeps(stage, recipe, &prepared));
            trace!(?stage, remaining = recipes.len(), "Filter stage applied");
        }
        recipes
    }

    /// Whether a single recipe passes every stage
    #[must_use]
    pub fn matches(&self, recipe: &Recipe, state: &FilterState) -> bool {
        let prepared = PreparedState::new(state);
        FilterStage::PIPELINE
            .into_iter()
            .all(|stage| self.keeps(stage, recipe, &prepared))
    }

    fn keeps(&self, stage: FilterStage, recipe: &Recipe, state: &PreparedState<'_>) -> bool {
        match stage {
            FilterStage::Category => state
                .category
                .is_none_or(|category| recipe.category_id == category),
            FilterStage::Difficulty => state
                .difficulty
                .is_none_or(|difficulty| recipe.difficulty == Some(difficulty)),
            FilterStage::Glass => state
                .glass
                .as_deref()
                .is_none_or(|glass| any_contains(recipe.glass_values(), glass)),
            FilterStage::IncludeIngredients => state
                .include
                .iter()
                .all(|name| any_contains(ingredient_names(recipe), name)),
            FilterStage::ExcludeIngredients => !state
                .exclude
                .iter()
                .any(|name| any_contains(ingredient_names(recipe), name)),
            FilterStage::Flavors => state
                .flavors
                .iter()
                .all(|flavor| any_contains(&recipe.flavors, flavor)),
            FilterStage::Tags => state
                .tags
                .iter()
                .all(|tag| any_contains(&recipe.tags, tag)),
            FilterStage::Thematic => {
                state.thematic.is_empty()
                    || recipe
                        .thematic_categories
                        .iter()
                        .any(|id| state.thematic.contains(id))
            }
            FilterStage::VenueAvailability => self
                .stock
                .is_none_or(|stock| is_makeable(&recipe.ingredients, stock)),
            FilterStage::Search => state.search.as_deref().is_none_or(|term| {
                recipe.name.to_lowercase().contains(term)
                    || any_contains(ingredient_names(recipe), term)
                    || any_contains(&recipe.tags, term)
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setters_normalize_blank_and_duplicates() {
        let mut state = FilterState::new();
        state.set_category("   ");
        state.set_tags(["sour", " sour ", "", "tiki"]);
        assert_eq!(state.category(), None);
        assert_eq!(state.tags(), ["sour".to_owned(), "tiki".to_owned()]);
        assert_eq!(state.active_facets(), 1);
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut state = FilterState::new();
        state.toggle_thematic("tiki");
        assert_eq!(state.thematic(), ["tiki".to_owned()]);
        state.toggle_thematic("tiki");
        assert!(state.is_empty());
    }

    #[test]
    fn test_add_include_ingredient_is_idempotent() {
        let mut state = FilterState::new();
        assert!(state.add_include_ingredient("lime"));
        assert!(!state.add_include_ingredient("lime"));
        assert!(state.remove_include_ingredient("lime"));
        assert!(!state.remove_include_ingredient("lime"));
    }
}
