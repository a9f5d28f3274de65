// ABOUTME: Favorites commands for barkeep-cli
// ABOUTME: Adds, removes, toggles and lists favorite recipes in the state directory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

use barkeep::errors::{AppError, AppResult};
use tracing::warn;

use crate::helpers::session::Session;

/// Mark a recipe as favorite
pub fn add(session: &mut Session, recipe_id: &str) -> AppResult<()> {
    ensure_known(session, recipe_id)?;
    if session.favorites.add(recipe_id)? {
        println!("Added {recipe_id} to favorites");
    } else {
        println!("{recipe_id} is already a favorite");
    }
    Ok(())
}

/// Unmark a recipe
pub fn remove(session: &mut Session, recipe_id: &str) -> AppResult<()> {
    if session.favorites.remove(recipe_id)? {
        println!("Removed {recipe_id} from favorites");
    } else {
        println!("{recipe_id} was not a favorite");
    }
    Ok(())
}

/// Flip a recipe's favorite status
pub fn toggle(session: &mut Session, recipe_id: &str) -> AppResult<()> {
    if !session.favorites.contains(recipe_id) {
        ensure_known(session, recipe_id)?;
    }
    if session.favorites.toggle(recipe_id)? {
        println!("Added {recipe_id} to favorites");
    } else {
        println!("Removed {recipe_id} from favorites");
    }
    Ok(())
}

/// Print favorite ids with their names when the catalog has them
pub fn list(session: &Session) {
    if session.favorites.is_empty() {
        println!("No favorites yet.");
        return;
    }
    for id in session.favorites.ids() {
        let name = session
            .snapshot
            .recipe(id)
            .map_or("(not in catalog)", |recipe| recipe.name.as_str());
        println!("* {id:<20} {name}");
    }
}

/// Reject unknown ids unless the recipe list itself failed to load
fn ensure_known(session: &Session, recipe_id: &str) -> AppResult<()> {
    if session.snapshot.recipe(recipe_id.trim()).is_some() {
        return Ok(());
    }
    if session.snapshot.recipes().is_empty() && !session.snapshot.is_complete() {
        warn!(%recipe_id, "Recipe list unavailable, storing favorite unchecked");
        return Ok(());
    }
    Err(AppError::not_found(format!("Recipe {recipe_id}")).with_resource_id(recipe_id))
}
