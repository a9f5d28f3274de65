// ABOUTME: Catalog data models shared by the engine and application crates
// ABOUTME: Re-exports Recipe, IngredientUse, Category, AvailabilityRow and venue types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

//! # Data Models
//!
//! Records as loaded from the catalog store. Optional collections are
//! defaulted to empty during deserialization so downstream code never has to
//! distinguish "absent" from "empty".

mod category;
mod recipe;
mod venue;

pub use category::{Category, CategoryKind};
pub use recipe::{Difficulty, Glass, IngredientUse, ParseDifficultyError, Recipe};
pub use venue::{AvailabilityRow, CuratedList, VenueId};
