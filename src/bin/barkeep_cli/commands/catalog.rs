// ABOUTME: Catalog listing commands for barkeep-cli
// ABOUTME: Prints known venues with stock sizes and the spirit/theme category lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

use crate::helpers::display::display_categories;
use crate::helpers::session::Session;

/// List venues from availability rows and curated lists
pub fn venues(session: &Session) {
    let snapshot = &session.snapshot;
    let venues = snapshot.venues();
    if venues.is_empty() {
        println!("No venues in the catalog.");
        return;
    }

    println!("{:<20} {:>8} {:>8}", "VENUE", "STOCKED", "CURATED");
    for venue in venues {
        let stocked = snapshot.stock_index().stock_for(venue).len();
        let curated = snapshot
            .curated(venue)
            .map_or(0, |list| list.recipe_ids.len());
        println!("{venue:<20} {stocked:>8} {curated:>8}");
    }

    let skipped = snapshot.stock_index().skipped_rows();
    if skipped > 0 {
        eprintln!("Warning: {skipped} availability row(s) without ingredient id were ignored");
    }
}

/// List spirit and thematic categories
pub fn categories(session: &Session) {
    display_categories("Spirits", session.snapshot.spirits());
    display_categories("Themes", session.snapshot.themes());
}
