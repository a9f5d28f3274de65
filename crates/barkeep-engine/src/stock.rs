// ABOUTME: Builds per-venue sets of in-stock ingredient ids from availability rows
// ABOUTME: Skips malformed rows instead of failing the whole index
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

use barkeep_core::models::{AvailabilityRow, VenueId};
use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;
use tracing::debug;

static EMPTY_STOCK: LazyLock<VenueStockSet> = LazyLock::new(VenueStockSet::default);

/// Ingredient ids considered in stock at one venue
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VenueStockSet {
    ingredients: HashSet<String>,
}

impl VenueStockSet {
    /// Whether an ingredient is in stock
    #[must_use]
    pub fn contains(&self, ingredient_id: &str) -> bool {
        self.ingredients.contains(ingredient_id)
    }

    /// Number of in-stock ingredients
    #[must_use]
    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    /// Whether nothing is in stock
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// Iterate the in-stock ids (unordered)
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for VenueStockSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ingredients: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Per-venue stock sets for one availability snapshot
///
/// Rebuilt wholesale whenever the availability table is reloaded; never
/// mutated after [`StockIndex::build`].
#[derive(Debug, Clone, Default)]
pub struct StockIndex {
    by_venue: BTreeMap<VenueId, VenueStockSet>,
    skipped_rows: usize,
}

impl StockIndex {
    /// Build the index from a flat list of availability rows
    ///
    /// Every venue named by any row gets a set, even when nothing is stocked
    /// there. Rows without an ingredient id are skipped and counted.
    #[must_use]
    pub fn build(rows: &[AvailabilityRow]) -> Self {
        let mut by_venue: BTreeMap<VenueId, VenueStockSet> = BTreeMap::new();
        let mut skipped_rows = 0;

        for row in rows {
            let Some(ingredient_id) = row.ingredient_id.as_deref() else {
                skipped_rows += 1;
                continue;
            };
            for (venue, in_stock) in &row.venues {
                let stock = by_venue.entry(venue.clone()).or_default();
                if *in_stock {
                    stock.ingredients.insert(ingredient_id.to_owned());
                }
            }
        }

        if skipped_rows > 0 {
            debug!(skipped_rows, "Skipped availability rows without ingredient id");
        }
        debug!(
            venues = by_venue.len(),
            rows = rows.len(),
            "Built venue stock index"
        );

        Self {
            by_venue,
            skipped_rows,
        }
    }

    /// Stock set for a venue; unknown venues have nothing in stock
    #[must_use]
    pub fn stock_for(&self, venue: &VenueId) -> &VenueStockSet {
        self.by_venue.get(venue).unwrap_or(&EMPTY_STOCK)
    }

    /// Whether any row mentioned the venue
    #[must_use]
    pub fn knows_venue(&self, venue: &VenueId) -> bool {
        self.by_venue.contains_key(venue)
    }

    /// Known venues in sorted order
    pub fn venues(&self) -> impl Iterator<Item = &VenueId> {
        self.by_venue.keys()
    }

    /// Number of malformed rows ignored during the build
    #[must_use]
    pub const fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    /// Stock sets of two venues, in argument order
    #[must_use]
    pub fn venue_pair(&self, a: &VenueId, b: &VenueId) -> (&VenueStockSet, &VenueStockSet) {
        (self.stock_for(a), self.stock_for(b))
    }
}
