// ABOUTME: Tri-state "can this recipe be made here" predicate used for per-item badges
// ABOUTME: Only essential ingredient lines are checked against the venue stock set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

use crate::stock::VenueStockSet;
use barkeep_core::models::{IngredientUse, Recipe};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a recipe can be made at the selected venue
///
/// `Unknown` means no venue is selected. It is rendered as a neutral
/// indicator and must not be treated as either pass or fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    /// Every essential ingredient is in stock
    Available,
    /// At least one essential ingredient is missing
    Unavailable,
    /// No venue selected
    Unknown,
}

impl Availability {
    /// Collapse to a boolean when a venue is known
    #[must_use]
    pub const fn known(self) -> Option<bool> {
        match self {
            Self::Available => Some(true),
            Self::Unavailable => Some(false),
            Self::Unknown => None,
        }
    }

    /// Short label for list badges
    #[must_use]
    pub const fn badge(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Unavailable => "unavailable",
            Self::Unknown => "-",
        }
    }
}

impl From<bool> for Availability {
    fn from(makeable: bool) -> Self {
        if makeable {
            Self::Available
        } else {
            Self::Unavailable
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.badge())
    }
}

/// Whether an essential line is satisfied by the stock set
///
/// An essential line without an ingredient id can never be satisfied.
fn is_satisfied(ingredient: &IngredientUse, stock: &VenueStockSet) -> bool {
    !ingredient.is_essential
        || ingredient
            .ingredient_id
            .as_deref()
            .is_some_and(|id| stock.contains(id))
}

/// True iff every essential ingredient line is in stock
///
/// An empty ingredient list is always makeable.
#[must_use]
pub fn is_makeable(ingredients: &[IngredientUse], stock: &VenueStockSet) -> bool {
    ingredients
        .iter()
        .all(|ingredient| is_satisfied(ingredient, stock))
}

/// Tri-state availability of a recipe at the selected venue, if any
#[must_use]
pub fn availability(recipe: &Recipe, stock: Option<&VenueStockSet>) -> Availability {
    stock.map_or(Availability::Unknown, |stock| {
        Availability::from(is_makeable(&recipe.ingredients, stock))
    })
}

/// Essential ingredient lines the venue is missing, in recipe order
#[must_use]
pub fn missing_essentials<'r>(recipe: &'r Recipe, stock: &VenueStockSet) -> Vec<&'r IngredientUse> {
    recipe
        .ingredients
        .iter()
        .filter(|ingredient| !is_satisfied(ingredient, stock))
        .collect()
}
