// ABOUTME: Immutable catalog snapshot assembled from one round of loads
// ABOUTME: Holds recipes, categories, the venue stock index, curated lists and load diagnostics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

use crate::cache::CacheResource;
use crate::engine::StockIndex;
use crate::errors::ErrorCode;
use crate::models::{AvailabilityRow, Category, CategoryKind, CuratedList, Recipe, VenueId};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// A catalog load that failed and was replaced by an empty collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadDiagnostic {
    /// Collection that failed
    pub resource: CacheResource,
    /// Error category reported by the source
    pub code: ErrorCode,
    /// Source error message
    pub message: String,
}

impl fmt::Display for LoadDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed to load: {}", self.resource, self.message)
    }
}

/// Everything the views need, derived from one load round
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    locale: String,
    recipes: Vec<Recipe>,
    categories: Vec<Category>,
    stock: Arc<StockIndex>,
    curated: Vec<CuratedList>,
    diagnostics: Vec<LoadDiagnostic>,
}

impl CatalogSnapshot {
    /// Assemble a snapshot, building the stock index from `availability`
    #[must_use]
    pub fn new(
        locale: impl Into<String>,
        recipes: Vec<Recipe>,
        categories: Vec<Category>,
        availability: &[AvailabilityRow],
        curated: Vec<CuratedList>,
    ) -> Self {
        Self {
            locale: locale.into(),
            recipes,
            categories,
            stock: Arc::new(StockIndex::build(availability)),
            curated,
            diagnostics: Vec::new(),
        }
    }

    /// Attach load failures
    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Vec<LoadDiagnostic>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Locale the localized collections were loaded in
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// All recipes in catalog order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// All categories
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Shared handle to the stock index
    #[must_use]
    pub fn stock(&self) -> Arc<StockIndex> {
        Arc::clone(&self.stock)
    }

    /// Borrow the stock index
    #[must_use]
    pub fn stock_index(&self) -> &StockIndex {
        &self.stock
    }

    /// All curated lists
    #[must_use]
    pub fn curated_lists(&self) -> &[CuratedList] {
        &self.curated
    }

    /// Curated list of one venue
    #[must_use]
    pub fn curated(&self, venue: &VenueId) -> Option<&CuratedList> {
        self.curated.iter().find(|list| &list.venue == venue)
    }

    /// Failed loads, empty when everything loaded
    #[must_use]
    pub fn diagnostics(&self) -> &[LoadDiagnostic] {
        &self.diagnostics
    }

    /// Whether every collection loaded
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Recipe by id
    #[must_use]
    pub fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    /// Category by id
    #[must_use]
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Spirit categories
    pub fn spirits(&self) -> impl Iterator<Item = &Category> {
        self.categories_of(CategoryKind::Spirit)
    }

    /// Thematic categories
    pub fn themes(&self) -> impl Iterator<Item = &Category> {
        self.categories_of(CategoryKind::Theme)
    }

    fn categories_of(&self, kind: CategoryKind) -> impl Iterator<Item = &Category> {
        self.categories
            .iter()
            .filter(move |category| category.kind == kind)
    }

    /// Venues known from availability rows or curated lists, sorted
    #[must_use]
    pub fn venues(&self) -> BTreeSet<&VenueId> {
        self.stock
            .venues()
            .chain(self.curated.iter().map(|list| &list.venue))
            .collect()
    }
}
