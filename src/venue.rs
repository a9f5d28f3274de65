// ABOUTME: Explicit venue selection and browse scope passed to list and detail views
// ABOUTME: Resolves which venue stock set, if any, constrains availability
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

use crate::engine::{StockIndex, VenueStockSet};
use crate::models::VenueId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Keyword that selects every venue
const ALL_VENUES: &str = "all";

/// Which venue the user is browsing for
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VenueSelection {
    /// No venue constraint; availability is unknown
    #[default]
    All,
    /// One venue's stock applies
    Venue(VenueId),
}

impl VenueSelection {
    /// Parse a user-supplied venue; blank or `all` means no constraint
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => Self::All,
            Some(value) if value.eq_ignore_ascii_case(ALL_VENUES) => Self::All,
            Some(value) => Self::Venue(VenueId::new(value)),
        }
    }

    /// Selected venue, if any
    #[must_use]
    pub const fn venue(&self) -> Option<&VenueId> {
        match self {
            Self::All => None,
            Self::Venue(venue) => Some(venue),
        }
    }
}

impl fmt::Display for VenueSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_VENUES),
            Self::Venue(venue) => write!(f, "{venue}"),
        }
    }
}

/// Subset of the catalog being browsed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BrowseScope {
    /// Every recipe
    #[default]
    Catalog,
    /// Only favorited recipes
    Favorites,
    /// A venue's curated list, filtered by that venue's stock
    Curated(VenueId),
}

/// Venue selection bound to the stock index it reads from
#[derive(Debug, Clone)]
pub struct VenueContext {
    selection: VenueSelection,
    stock: Arc<StockIndex>,
}

impl VenueContext {
    /// Context for an explicit selection
    #[must_use]
    pub const fn new(selection: VenueSelection, stock: Arc<StockIndex>) -> Self {
        Self { selection, stock }
    }

    /// Context with no venue constraint
    #[must_use]
    pub const fn all(stock: Arc<StockIndex>) -> Self {
        Self::new(VenueSelection::All, stock)
    }

    /// Context constrained to one venue
    #[must_use]
    pub fn venue(venue: impl Into<VenueId>, stock: Arc<StockIndex>) -> Self {
        Self::new(VenueSelection::Venue(venue.into()), stock)
    }

    /// Current selection
    #[must_use]
    pub const fn selection(&self) -> &VenueSelection {
        &self.selection
    }

    /// Change the selection, keeping the stock index
    pub fn select(&mut self, selection: VenueSelection) {
        self.selection = selection;
    }

    /// Stock index shared with the snapshot
    #[must_use]
    pub fn index(&self) -> &StockIndex {
        &self.stock
    }

    /// Selected venue's stock, `None` when every venue is selected
    ///
    /// An unknown venue yields an empty set, so nothing with an essential
    /// ingredient is makeable there.
    #[must_use]
    pub fn stock(&self) -> Option<&VenueStockSet> {
        self.selection
            .venue()
            .map(|venue| self.stock.stock_for(venue))
    }

    /// Stock that applies while browsing `scope`
    ///
    /// A curated scope always uses its own venue's stock.
    #[must_use]
    pub fn stock_for_scope(&self, scope: &BrowseScope) -> Option<&VenueStockSet> {
        match scope {
            BrowseScope::Curated(venue) => Some(self.stock.stock_for(venue)),
            BrowseScope::Catalog | BrowseScope::Favorites => self.stock(),
        }
    }
}
