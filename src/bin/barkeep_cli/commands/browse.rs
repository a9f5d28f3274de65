// ABOUTME: Browsing commands for barkeep-cli
// ABOUTME: Builds filter state from flags, runs list and detail views, and prints the results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

use barkeep::config::environment::ServerConfig;
use barkeep::engine::FilterState;
use barkeep::errors::{AppError, AppResult};
use barkeep::venue::{BrowseScope, VenueContext, VenueSelection};
use barkeep::views;
use tracing::info;

use crate::helpers::display::{display_cards, display_detail};
use crate::helpers::session::Session;
use crate::{ListArgs, ScopeArg};

/// Print recipes matching `args`
pub fn list(session: &Session, config: &ServerConfig, args: ListArgs) -> AppResult<()> {
    let selection = resolve_selection(config, args.venue.as_deref());
    let scope = match args.scope {
        ScopeArg::Catalog => BrowseScope::Catalog,
        ScopeArg::Favorites => BrowseScope::Favorites,
        ScopeArg::Curated => {
            let venue = selection.venue().cloned().ok_or_else(|| {
                AppError::invalid_input("--scope curated needs --venue or BARKEEP_VENUE")
            })?;
            BrowseScope::Curated(venue)
        }
    };

    let mut state = FilterState::new()
        .with_include_ingredients(args.include)
        .with_exclude_ingredients(args.exclude)
        .with_flavors(args.flavors)
        .with_tags(args.tags)
        .with_thematic(args.themes);
    if let Some(category) = args.category {
        state.set_category(category);
    }
    state.set_difficulty(args.difficulty);
    if let Some(glass) = args.glass {
        state.set_glass(glass);
    }
    if let Some(search) = args.search {
        state.set_search(search);
    }

    info!(facets = state.active_facets(), scope = ?scope, venue = %selection, "Listing recipes");

    let context = VenueContext::new(selection, session.snapshot.stock());
    let cards = views::browse(&session.snapshot, &state, &context, &scope, &session.favorites);
    display_cards(&cards, context.selection());
    Ok(())
}

/// Print one recipe in full
pub fn show(
    session: &Session,
    config: &ServerConfig,
    recipe_id: &str,
    venue: Option<&str>,
) -> AppResult<()> {
    let selection = resolve_selection(config, venue);
    let context = VenueContext::new(selection, session.snapshot.stock());
    let detail = views::detail(&session.snapshot, recipe_id, &context, &session.favorites)?;
    display_detail(&detail, context.selection());
    Ok(())
}

/// Explicit flag first, then the configured default venue
fn resolve_selection(config: &ServerConfig, venue: Option<&str>) -> VenueSelection {
    match venue {
        Some(venue) => VenueSelection::parse(Some(venue)),
        None => config
            .default_venue
            .clone()
            .map_or(VenueSelection::All, VenueSelection::Venue),
    }
}
