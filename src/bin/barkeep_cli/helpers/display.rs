// ABOUTME: Output formatting helpers for barkeep-cli
// ABOUTME: Renders recipe lists, detail pages, venue and category tables, and load warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

use barkeep::catalog::LoadDiagnostic;
use barkeep::models::Category;
use barkeep::venue::VenueSelection;
use barkeep::views::{RecipeCard, RecipeDetail};

/// Print a recipe list with availability badges
pub fn display_cards(cards: &[RecipeCard], selection: &VenueSelection) {
    if cards.is_empty() {
        println!("No recipes match the current filters.");
        return;
    }

    println!("{} recipe(s), venue: {selection}", cards.len());
    println!("{}", "=".repeat(60));
    for card in cards {
        println!(
            "{star} {name:<28} {category:<14} [{badge}]  ({id})",
            star = if card.is_favorite { "*" } else { " " },
            name = card.name,
            category = card.category.as_deref().unwrap_or("-"),
            badge = card.availability.badge(),
            id = card.id,
        );
    }
}

/// Print a full recipe page
pub fn display_detail(detail: &RecipeDetail, selection: &VenueSelection) {
    let star = if detail.is_favorite { " *" } else { "" };
    println!("\n{}{star}", detail.name);
    println!("{}", "=".repeat(60));
    println!("   Id: {}", detail.id);
    println!("   Category: {}", detail.category.as_deref().unwrap_or("-"));
    if let Some(glass) = &detail.glass {
        println!("   Glass: {glass}");
    }
    if let Some(difficulty) = detail.difficulty {
        println!("   Difficulty: {difficulty}");
    }
    if !detail.thematic.is_empty() {
        println!("   Themes: {}", detail.thematic.join(", "));
    }
    if !detail.flavors.is_empty() {
        println!("   Flavors: {}", detail.flavors.join(", "));
    }
    if !detail.tags.is_empty() {
        println!("   Tags: {}", detail.tags.join(", "));
    }
    println!("   Availability ({selection}): {}", detail.availability.badge());

    println!("\nIngredients:");
    for ingredient in &detail.ingredients {
        let amount = ingredient.amount.as_deref().unwrap_or("");
        let optional = if ingredient.is_essential { "" } else { " (optional)" };
        println!("   - {amount:>8} {}{optional}", ingredient.name);
    }

    if !detail.missing.is_empty() {
        println!("\nMissing at this venue:");
        for ingredient in &detail.missing {
            println!("   - {}", ingredient.name);
        }
    }

    if let Some(instructions) = &detail.instructions {
        println!("\nMethod:\n{instructions}");
    }
    if let Some(history) = &detail.history {
        println!("\nHistory:\n{history}");
    }
}

/// Print a titled category list
pub fn display_categories<'a>(title: &str, categories: impl Iterator<Item = &'a Category>) {
    println!("\n{title}:");
    let mut any = false;
    for category in categories {
        any = true;
        println!("   {:<16} {}", category.id, category.name);
    }
    if !any {
        println!("   (none)");
    }
}

/// Warn on stderr about collections that failed to load
pub fn print_diagnostics(diagnostics: &[LoadDiagnostic]) {
    for diagnostic in diagnostics {
        eprintln!("Warning: {diagnostic}");
    }
}
